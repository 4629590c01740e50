use crate::Point2;
use log::trace;
use std::f32::consts::TAU;
use typed_builder::TypedBuilder;

#[derive(TypedBuilder, Clone, Debug, PartialEq)]
pub struct Particle {
    location: Point2,
    // The heading a particle is facing. (In radians, 0 points along +x)
    #[builder(default)]
    heading: f32,
    // Distance covered per tick
    #[builder(default = 2.0f32)]
    speed: f32,
}

impl Particle {
    pub fn location(&self) -> Point2 {
        self.location
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn rotate(&mut self, rotation_in_radians: f32) {
        self.heading = rotate_by_radians(self.heading, rotation_in_radians);
        trace!("new heading is {}", self.heading);
    }

    pub fn set_heading(&mut self, heading: f32) {
        self.heading = normalize_heading(heading);
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn boost_speed(&mut self, boost: f32) {
        self.speed += boost;
    }

    /// Step `speed` units along the current heading, wrapping around a
    /// `width` x `height` torus.
    pub fn move_in_direction_of_heading(&mut self, width: f32, height: f32) {
        self.location = self
            .location
            .offset_along(self.heading, self.speed)
            .wrapped(width, height);
    }
}

fn rotate_by_radians(heading: f32, rotation_in_radians: f32) -> f32 {
    normalize_heading(heading + rotation_in_radians)
}

/// Map any finite angle into `[0, 2π)`.
pub fn normalize_heading(heading: f32) -> f32 {
    let normalized = heading.rem_euclid(TAU);

    if normalized >= TAU || !normalized.is_finite() {
        0.0
    } else {
        normalized
    }
}
