use crate::{field::ScalarField, Particle};

/// Field intensities under the left, front and right sensors of a particle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SensorReading {
    pub left: f32,
    pub front: f32,
    pub right: f32,
}

impl SensorReading {
    pub fn new(left: f32, front: f32, right: f32) -> Self {
        Self { left, front, right }
    }

    pub fn strongest(&self) -> f32 {
        self.left.max(self.front).max(self.right)
    }
}

/// Sample the field `sensor_distance` units ahead of `particle`, rotated
/// `angle_offset` radians from its heading. Probes that land outside the
/// field read 0.
pub fn sense(
    particle: &Particle,
    angle_offset: f32,
    sensor_distance: f32,
    field: &ScalarField,
) -> f32 {
    let probe = particle
        .location()
        .offset_along(particle.heading() + angle_offset, sensor_distance);

    field.sample_at(probe)
}

/// The three-probe sensor arrangement shared by every particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sensor {
    // Side sensors sit this many radians either side of the heading
    pub angle: f32,
    pub distance: f32,
}

impl Sensor {
    pub fn new(angle: f32, distance: f32) -> Self {
        Self { angle, distance }
    }

    pub fn read(&self, particle: &Particle, field: &ScalarField) -> SensorReading {
        SensorReading {
            left: sense(particle, -self.angle, self.distance, field),
            front: sense(particle, 0.0, self.distance, field),
            right: sense(particle, self.angle, self.distance, field),
        }
    }
}
