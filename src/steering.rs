use crate::{
    sensor::SensorReading,
    settings::{AttractorSettings, Settings},
    util::map_range_clamped,
    Particle, Point2,
};
use log::trace;
use rand::Rng;

/// How strongly a roaming attractor herds particles that stray from it.
#[derive(Clone, Debug, PartialEq)]
pub struct AttractorBias {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub snap_probability: f64,
    pub snap_noise: f32,
    pub snap_speed_boost: f32,
    pub outer_speed_boost: f32,
}

impl From<&AttractorSettings> for AttractorBias {
    fn from(settings: &AttractorSettings) -> Self {
        Self {
            inner_radius: settings.inner_radius,
            outer_radius: settings.outer_radius,
            snap_probability: settings.snap_probability,
            snap_noise: settings.snap_noise,
            snap_speed_boost: settings.snap_speed_boost,
            outer_speed_boost: settings.outer_speed_boost,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SteeringPolicy {
    pub max_turn: f32,
    pub wander_jitter: f32,
    pub idle_jitter: f32,
    pub base_speed: f32,
    pub signal_speed_boost: f32,
    pub intensity_ceiling: f32,
    pub attractor: AttractorBias,
}

impl From<&Settings> for SteeringPolicy {
    fn from(settings: &Settings) -> Self {
        Self {
            max_turn: settings.max_turn,
            wander_jitter: settings.wander_jitter,
            idle_jitter: settings.idle_jitter,
            base_speed: settings.base_speed,
            signal_speed_boost: settings.signal_speed_boost,
            intensity_ceiling: settings.intensity_ceiling,
            attractor: AttractorBias::from(&settings.attractor),
        }
    }
}

impl SteeringPolicy {
    /// Turn and re-speed `particle` from its sensor reading, then, when an
    /// attractor center is given, nudge it toward that center.
    pub fn steer<R: Rng>(
        &self,
        particle: &mut Particle,
        reading: SensorReading,
        attractor_center: Option<Point2>,
        rng: &mut R,
    ) {
        let rotation = self.judge_sensory_input(reading, rng);
        particle.rotate(rotation);
        particle.set_speed(self.speed_for_signal(reading.strongest()));

        if let Some(center) = attractor_center {
            self.apply_attractor_bias(particle, center, rng);
        }
    }

    /// Rotation in radians for a sensor reading. The comparisons run in a
    /// fixed order: front wins only when strictly greatest, then left beats
    /// right, then right beats left, and ties fall through to a wide wander.
    pub fn judge_sensory_input<R: Rng>(&self, reading: SensorReading, rng: &mut R) -> f32 {
        let SensorReading { left, front, right } = reading;

        if front > left && front > right {
            trace!("Particle's front value is greatest, wandering");
            (rng.gen::<f32>() - 0.5) * self.wander_jitter
        } else if left > right {
            trace!("Particle is turning left");
            -rng.gen::<f32>() * self.max_turn
        } else if right > left {
            trace!("Particle is turning right");
            rng.gen::<f32>() * self.max_turn
        } else {
            trace!("Particle sensed no gradient, wandering widely");
            (rng.gen::<f32>() - 0.5) * self.idle_jitter
        }
    }

    /// Base speed plus a boost proportional to `signal`, saturating at the
    /// intensity ceiling.
    pub fn speed_for_signal(&self, signal: f32) -> f32 {
        map_range_clamped(
            signal,
            0.0,
            self.intensity_ceiling,
            self.base_speed,
            self.base_speed + self.signal_speed_boost,
        )
    }

    fn apply_attractor_bias<R: Rng>(&self, particle: &mut Particle, center: Point2, rng: &mut R) {
        let bias = &self.attractor;
        let distance = particle.location().distance_to(&center);

        if distance > bias.inner_radius && rng.gen_bool(bias.snap_probability) {
            let noise = (rng.gen::<f32>() - 0.5) * bias.snap_noise;
            particle.set_heading(particle.location().angle_to(&center) + noise);
            particle.boost_speed(bias.snap_speed_boost);
            trace!("Particle snapped toward attractor at {}", center);
        }

        if distance > bias.outer_radius {
            particle.boost_speed(bias.outer_speed_boost);
        }
    }
}
