use crate::errors::SlimeError;
use log::info;
use serde::Deserialize;
use std::f32::consts::FRAC_PI_4;

// General settings
pub const DISPLAY_WIDTH: u32 = 1600;
pub const DISPLAY_HEIGHT: u32 = 900;
pub const RESOLUTION: u32 = 1;
pub const TINT: [u8; 3] = [255, 255, 255];

// Particle settings
pub const PARTICLE_COUNT: usize = 5000;
pub const PARTICLE_COUNT_MAXIMUM: usize = 100_000;
pub const SENSOR_ANGLE: f32 = FRAC_PI_4;
pub const SENSOR_DISTANCE: f32 = 15.0;
pub const BASE_SPEED: f32 = 2.0;
pub const SIGNAL_SPEED_BOOST: f32 = 2.0;
pub const INITIAL_SPEED_MIN: f32 = 2.0;
pub const INITIAL_SPEED_MAX: f32 = 4.0;
pub const MAX_TURN: f32 = 0.8;
pub const WANDER_JITTER: f32 = 0.2;
pub const IDLE_JITTER: f32 = 0.4;

// Field settings
pub const DEPOSIT_AMOUNT: f32 = 30.0;
/// Fraction of every cell's signal that disappears each tick
pub const EVAPORATION_RATE: f32 = 0.003;
pub const DIFFUSION_RATE: f32 = 0.1;
/// The intensity at which a trail counts as saturated when modulating speed
pub const INTENSITY_CEILING: f32 = 255.0;

// Attractor settings
pub const ATTRACTOR_TIME_STEP: f32 = 0.01;
pub const ATTRACTOR_INNER_RADIUS: f32 = 100.0;
pub const ATTRACTOR_OUTER_RADIUS: f32 = 300.0;
pub const ATTRACTOR_SNAP_PROBABILITY: f64 = 0.05;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub display_width: u32,
    pub display_height: u32,
    /// Field cells are `resolution` x `resolution` display pixels
    pub resolution: u32,
    pub particle_count: usize,
    pub particle_count_maximum: usize,
    /// Offset of the side sensors from the heading, in radians
    pub sensor_angle: f32,
    /// How far out a sensor is from the particle, in field cells
    pub sensor_distance: f32,
    pub deposit_amount: f32,
    pub evaporation_rate: f32,
    pub diffusion_enabled: bool,
    pub diffusion_rate: f32,
    pub base_speed: f32,
    pub signal_speed_boost: f32,
    pub intensity_ceiling: f32,
    pub initial_speed_min: f32,
    pub initial_speed_max: f32,
    pub max_turn: f32,
    pub wander_jitter: f32,
    pub idle_jitter: f32,
    /// Particles start inside a disc of this radius around the field center,
    /// or anywhere in the field when unset
    pub seed_radius: Option<f32>,
    pub seed: Option<u64>,
    pub tint: [u8; 3],
    pub attractor: AttractorSettings,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct AttractorSettings {
    pub enabled: bool,
    pub time_step: f32,
    /// Horizontal wander amplitude as a fraction of the field width
    pub amplitude_x: f32,
    /// Vertical wander amplitude as a fraction of the field height
    pub amplitude_y: f32,
    pub frequency_x: f32,
    pub frequency_y: f32,
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub snap_probability: f64,
    pub snap_noise: f32,
    pub snap_speed_boost: f32,
    pub outer_speed_boost: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display_width: DISPLAY_WIDTH,
            display_height: DISPLAY_HEIGHT,
            resolution: RESOLUTION,
            particle_count: PARTICLE_COUNT,
            particle_count_maximum: PARTICLE_COUNT_MAXIMUM,
            sensor_angle: SENSOR_ANGLE,
            sensor_distance: SENSOR_DISTANCE,
            deposit_amount: DEPOSIT_AMOUNT,
            evaporation_rate: EVAPORATION_RATE,
            diffusion_enabled: false,
            diffusion_rate: DIFFUSION_RATE,
            base_speed: BASE_SPEED,
            signal_speed_boost: SIGNAL_SPEED_BOOST,
            intensity_ceiling: INTENSITY_CEILING,
            initial_speed_min: INITIAL_SPEED_MIN,
            initial_speed_max: INITIAL_SPEED_MAX,
            max_turn: MAX_TURN,
            wander_jitter: WANDER_JITTER,
            idle_jitter: IDLE_JITTER,
            seed_radius: None,
            seed: None,
            tint: TINT,
            attractor: AttractorSettings::default(),
        }
    }
}

impl Default for AttractorSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            time_step: ATTRACTOR_TIME_STEP,
            amplitude_x: 0.3,
            amplitude_y: 0.3,
            frequency_x: 1.0,
            frequency_y: 0.5,
            inner_radius: ATTRACTOR_INNER_RADIUS,
            outer_radius: ATTRACTOR_OUTER_RADIUS,
            snap_probability: ATTRACTOR_SNAP_PROBABILITY,
            snap_noise: 0.5,
            snap_speed_boost: 1.0,
            outer_speed_boost: 0.5,
        }
    }
}

impl Settings {
    pub fn load_from_file(settings_file_name: &str) -> Result<Self, SlimeError> {
        let mut settings = config::Config::default();
        settings.merge(config::File::with_name(settings_file_name))?;
        let settings: Settings = settings.try_into()?;
        settings.validate()?;

        info!(
            "successfully loaded settings from '{}'",
            &settings_file_name
        );

        Ok(settings)
    }

    pub fn load_from_str(toml: &str) -> Result<Self, SlimeError> {
        let mut settings = config::Config::default();
        settings.merge(config::File::from_str(toml, config::FileFormat::Toml))?;
        let settings: Settings = settings.try_into()?;
        settings.validate()?;

        Ok(settings)
    }

    /// Width of the simulation field in cells
    pub fn field_width(&self) -> usize {
        (self.display_width / self.resolution.max(1)) as usize
    }

    /// Height of the simulation field in cells
    pub fn field_height(&self) -> usize {
        (self.display_height / self.resolution.max(1)) as usize
    }

    pub fn validate(&self) -> Result<(), SlimeError> {
        if self.resolution == 0 {
            return Err(SlimeError::invalid_setting("resolution", "must be at least 1"));
        }
        if self.field_width() == 0 || self.field_height() == 0 {
            return Err(SlimeError::invalid_setting(
                "display_width/display_height",
                format!(
                    "{}x{} at resolution {} leaves an empty field",
                    self.display_width, self.display_height, self.resolution
                ),
            ));
        }
        if self.particle_count == 0 {
            return Err(SlimeError::invalid_setting("particle_count", "must be positive"));
        }
        if self.particle_count > self.particle_count_maximum {
            return Err(SlimeError::invalid_setting(
                "particle_count",
                format!(
                    "{} exceeds the maximum of {}",
                    self.particle_count, self.particle_count_maximum
                ),
            ));
        }

        check_non_negative("sensor_angle", self.sensor_angle)?;
        check_non_negative("sensor_distance", self.sensor_distance)?;
        check_non_negative("deposit_amount", self.deposit_amount)?;
        check_non_negative("base_speed", self.base_speed)?;
        check_non_negative("signal_speed_boost", self.signal_speed_boost)?;
        check_non_negative("initial_speed_min", self.initial_speed_min)?;
        check_non_negative("initial_speed_max", self.initial_speed_max)?;
        check_non_negative("max_turn", self.max_turn)?;
        check_non_negative("wander_jitter", self.wander_jitter)?;
        check_non_negative("idle_jitter", self.idle_jitter)?;

        if !(self.evaporation_rate >= 0.0 && self.evaporation_rate < 1.0) {
            return Err(SlimeError::invalid_setting(
                "evaporation_rate",
                format!("{} is outside [0, 1)", self.evaporation_rate),
            ));
        }
        if !(self.diffusion_rate >= 0.0 && self.diffusion_rate <= 1.0) {
            return Err(SlimeError::invalid_setting(
                "diffusion_rate",
                format!("{} is outside [0, 1]", self.diffusion_rate),
            ));
        }
        if !(self.intensity_ceiling.is_finite() && self.intensity_ceiling > 0.0) {
            return Err(SlimeError::invalid_setting("intensity_ceiling", "must be positive"));
        }
        if self.initial_speed_min > self.initial_speed_max {
            return Err(SlimeError::invalid_setting(
                "initial_speed_min",
                format!(
                    "{} is greater than initial_speed_max {}",
                    self.initial_speed_min, self.initial_speed_max
                ),
            ));
        }
        if let Some(radius) = self.seed_radius {
            if !(radius.is_finite() && radius > 0.0) {
                return Err(SlimeError::invalid_setting("seed_radius", "must be positive"));
            }
            let limit = self.field_width().min(self.field_height()) as f32 / 2.0;
            if radius >= limit {
                return Err(SlimeError::invalid_setting(
                    "seed_radius",
                    format!("{} must be less than half the field's shorter side ({})", radius, limit),
                ));
            }
        }

        self.attractor.validate()
    }
}

impl AttractorSettings {
    pub fn validate(&self) -> Result<(), SlimeError> {
        check_non_negative("attractor.time_step", self.time_step)?;
        check_non_negative("attractor.frequency_x", self.frequency_x)?;
        check_non_negative("attractor.frequency_y", self.frequency_y)?;
        check_non_negative("attractor.inner_radius", self.inner_radius)?;
        check_non_negative("attractor.outer_radius", self.outer_radius)?;
        check_non_negative("attractor.snap_noise", self.snap_noise)?;
        check_non_negative("attractor.snap_speed_boost", self.snap_speed_boost)?;
        check_non_negative("attractor.outer_speed_boost", self.outer_speed_boost)?;

        for &(name, amplitude) in [
            ("attractor.amplitude_x", self.amplitude_x),
            ("attractor.amplitude_y", self.amplitude_y),
        ]
        .iter()
        {
            if !(amplitude >= 0.0 && amplitude <= 0.5) {
                return Err(SlimeError::invalid_setting(
                    name,
                    format!("{} is outside [0, 0.5]", amplitude),
                ));
            }
        }
        if self.inner_radius > self.outer_radius {
            return Err(SlimeError::invalid_setting(
                "attractor.inner_radius",
                format!(
                    "{} is greater than outer_radius {}",
                    self.inner_radius, self.outer_radius
                ),
            ));
        }
        if !(self.snap_probability >= 0.0 && self.snap_probability <= 1.0) {
            return Err(SlimeError::invalid_setting(
                "attractor.snap_probability",
                format!("{} is outside [0, 1]", self.snap_probability),
            ));
        }

        Ok(())
    }
}

fn check_non_negative(name: &'static str, value: f32) -> Result<(), SlimeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SlimeError::invalid_setting(
            name,
            format!("{} must be finite and non-negative", value),
        ))
    }
}
