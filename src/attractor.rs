use crate::{settings::AttractorSettings, Point2};

/// Drives a target point along a slow Lissajous-like path around a fixed
/// origin. Deterministic: the center depends only on the accumulated time.
#[derive(Clone, Debug, PartialEq)]
pub struct AttractorDriver {
    enabled: bool,
    origin: Point2,
    time: f32,
    time_step: f32,
    amplitude: Point2,
    frequency_x: f32,
    frequency_y: f32,
    center: Point2,
}

impl AttractorDriver {
    /// Build a driver wandering around the middle of a `width` x `height`
    /// field.
    pub fn new(settings: &AttractorSettings, width: f32, height: f32) -> Self {
        let origin = Point2::new(width / 2.0, height / 2.0);

        Self {
            enabled: settings.enabled,
            origin,
            time: 0.0,
            time_step: settings.time_step,
            amplitude: Point2::new(settings.amplitude_x * width, settings.amplitude_y * height),
            frequency_x: settings.frequency_x,
            frequency_y: settings.frequency_y,
            center: origin,
        }
    }

    pub fn disabled(width: f32, height: f32) -> Self {
        let settings = AttractorSettings {
            enabled: false,
            ..AttractorSettings::default()
        };
        Self::new(&settings, width, height)
    }

    /// Step the time accumulator once and return the new center. A disabled
    /// driver stays parked on its origin.
    pub fn advance(&mut self) -> Point2 {
        if !self.enabled {
            return self.center;
        }

        self.time += self.time_step;
        self.center = Point2::new(
            self.origin.x + (self.time * self.frequency_x).sin() * self.amplitude.x,
            self.origin.y + (self.time * self.frequency_y).cos() * self.amplitude.y,
        );

        self.center
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn center(&self) -> Point2 {
        self.center
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }
}
