//! Named parameter sets for the simulation

use crate::settings::{AttractorSettings, Settings};

pub struct Preset {
    pub name: String,
    pub settings: Settings,
}

impl Preset {
    pub fn new(name: impl Into<String>, settings: Settings) -> Self {
        Self {
            name: name.into(),
            settings,
        }
    }
}

pub struct PresetManager {
    presets: Vec<Preset>,
}

impl PresetManager {
    pub fn new() -> Self {
        Self { presets: vec![] }
    }

    pub fn add_preset(&mut self, preset: Preset) {
        self.presets.push(preset);
    }

    pub fn get_preset(&self, name: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.name == name)
    }

    pub fn get_preset_names(&self) -> Vec<&str> {
        self.presets.iter().map(|p| p.name.as_str()).collect()
    }

    /// A copy of the named preset's settings, ready to hand to
    /// `Simulation::reconfigure`.
    pub fn settings_for(&self, name: &str) -> Option<Settings> {
        self.get_preset(name).map(|p| p.settings.clone())
    }
}

impl Default for PresetManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_preset_manager() -> PresetManager {
    let mut preset_manager = PresetManager::new();
    preset_manager.add_preset(Preset::new("Default", Settings::default()));
    preset_manager.add_preset(Preset::new(
        "Dense Web",
        Settings {
            particle_count: 10000,
            sensor_angle: 0.6,
            sensor_distance: 9.0,
            deposit_amount: 20.0,
            evaporation_rate: 0.01,
            max_turn: 0.6,
            ..Settings::default()
        },
    ));
    preset_manager.add_preset(Preset::new(
        "Long Reach",
        Settings {
            particle_count: 3000,
            sensor_angle: 0.3,
            sensor_distance: 30.0,
            deposit_amount: 60.0,
            evaporation_rate: 0.002,
            wander_jitter: 0.05,
            ..Settings::default()
        },
    ));
    preset_manager.add_preset(Preset::new(
        "Roaming Herd",
        Settings {
            particle_count: 6000,
            seed_radius: Some(50.0),
            deposit_amount: 40.0,
            attractor: AttractorSettings {
                enabled: true,
                ..AttractorSettings::default()
            },
            ..Settings::default()
        },
    ));
    preset_manager.add_preset(Preset::new(
        "Smoke",
        Settings {
            particle_count: 4000,
            resolution: 2,
            deposit_amount: 100.0,
            evaporation_rate: 0.008,
            diffusion_enabled: true,
            diffusion_rate: 0.3,
            idle_jitter: 1.0,
            tint: [180, 200, 255],
            ..Settings::default()
        },
    ));
    preset_manager
}
