use crate::{
    attractor::AttractorDriver,
    errors::SlimeError,
    field::ScalarField,
    population::{ParticlePopulation, SeedRegion},
    rect::Rect,
    sensor::Sensor,
    settings::Settings,
    steering::SteeringPolicy,
    Point2,
};
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineState {
    /// No field or population exists; the last configuration was rejected.
    Uninitialized,
    Ready,
}

/// Everything that lives for exactly one configuration.
struct Run {
    field: ScalarField,
    population: ParticlePopulation,
    attractor: AttractorDriver,
    sensor: Sensor,
    steering: SteeringPolicy,
    ticks: u64,
}

impl Run {
    fn new(settings: &Settings, population: ParticlePopulation) -> Self {
        let (width, height) = (settings.field_width(), settings.field_height());

        Self {
            field: ScalarField::new(width, height),
            population,
            attractor: AttractorDriver::new(&settings.attractor, width as f32, height as f32),
            sensor: Sensor::new(settings.sensor_angle, settings.sensor_distance),
            steering: SteeringPolicy::from(settings),
            ticks: 0,
        }
    }

    fn tick<R: Rng>(&mut self, settings: &Settings, rng: &mut R) {
        self.ticks += 1;

        let center = self.attractor.advance();
        let attractor_center = if self.attractor.is_enabled() {
            Some(center)
        } else {
            None
        };

        let field = &mut self.field;
        let sensor = &self.sensor;
        let steering = &self.steering;
        let (width, height) = (field.width() as f32, field.height() as f32);
        let deposit_amount = settings.deposit_amount;

        self.population
            .for_each_in_random_order(rng, |particle, rng| {
                let reading = sensor.read(particle, field);
                steering.steer(particle, reading, attractor_center, rng);
                particle.move_in_direction_of_heading(width, height);
                field.deposit_at(particle.location(), deposit_amount);
            });

        field.decay(settings.evaporation_rate);
        if settings.diffusion_enabled {
            field.diffuse(settings.diffusion_rate);
        }
    }
}

/// The simulation engine. Owns the trail field and the particle population
/// for the current configuration and advances both one discrete step per
/// `tick`.
pub struct Simulation<R: Rng = SmallRng> {
    settings: Settings,
    rng: R,
    run: Option<Run>,
}

impl Simulation<SmallRng> {
    /// Start a run seeded from `settings.seed`, or from OS entropy when no
    /// seed is set.
    pub fn new(settings: Settings) -> Result<Self, SlimeError> {
        let rng = match settings.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Self::with_rng(settings, rng)
    }
}

impl<R: Rng> Simulation<R> {
    pub fn with_rng(settings: Settings, rng: R) -> Result<Self, SlimeError> {
        let mut simulation = Self {
            settings,
            rng,
            run: None,
        };
        simulation.initialize()?;

        Ok(simulation)
    }

    /// Start a run from hand-placed particles instead of a seeded population.
    /// `settings.particle_count` is ignored in favour of the population's size.
    pub fn with_population(
        settings: Settings,
        population: ParticlePopulation,
        rng: R,
    ) -> Result<Self, SlimeError> {
        settings.validate()?;
        if population.is_empty() {
            return Err(SlimeError::invalid_setting(
                "particle_count",
                "the supplied population is empty",
            ));
        }

        log_settings(&settings, population.len());
        let run = Run::new(&settings, population);

        Ok(Self {
            settings,
            rng,
            run: Some(run),
        })
    }

    /// Replace the configuration. Any change throws away the field and the
    /// population and builds new ones; if `settings` is invalid the engine is
    /// left uninitialized until a valid configuration arrives.
    pub fn reconfigure(&mut self, settings: Settings) -> Result<(), SlimeError> {
        if self.run.is_some() && settings == self.settings {
            debug!("settings are unchanged, keeping the current run");
            return Ok(());
        }

        info!("settings have changed, reinitializing the simulation");
        self.run = None;
        self.settings = settings;

        self.initialize()
    }

    fn initialize(&mut self) -> Result<(), SlimeError> {
        self.settings.validate()?;

        let settings = &self.settings;
        let (width, height) = (settings.field_width() as f32, settings.field_height() as f32);
        let seed_region = match settings.seed_radius {
            Some(radius) => SeedRegion::Disc {
                center: Point2::new(width / 2.0, height / 2.0),
                radius,
            },
            None => SeedRegion::Rect(Rect::new(0.0, 0.0, width, height)),
        };

        log_settings(settings, settings.particle_count);
        let population = ParticlePopulation::initialize(
            settings.particle_count,
            seed_region,
            settings.initial_speed_min..settings.initial_speed_max,
            &mut self.rng,
        );
        self.run = Some(Run::new(settings, population));

        Ok(())
    }

    /// Advance the attractor, move every particle once in a fresh random
    /// order, then evaporate (and optionally diffuse) the field. Returns the
    /// field for rendering.
    pub fn tick(&mut self) -> Result<&ScalarField, SlimeError> {
        let run = match self.run.as_mut() {
            Some(run) => run,
            None => {
                warn!("tick requested while the simulation is uninitialized");
                return Err(SlimeError::NotInitialized);
            }
        };

        run.tick(&self.settings, &mut self.rng);

        Ok(&run.field)
    }

    pub fn state(&self) -> EngineState {
        match self.run {
            Some(_) => EngineState::Ready,
            None => EngineState::Uninitialized,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn field(&self) -> Option<&ScalarField> {
        self.run.as_ref().map(|run| &run.field)
    }

    pub fn population(&self) -> Option<&ParticlePopulation> {
        self.run.as_ref().map(|run| &run.population)
    }

    /// Current attractor center, if the attractor is enabled for this run.
    pub fn attractor_center(&self) -> Option<Point2> {
        self.run
            .as_ref()
            .filter(|run| run.attractor.is_enabled())
            .map(|run| run.attractor.center())
    }

    pub fn tick_count(&self) -> u64 {
        self.run.as_ref().map_or(0, |run| run.ticks)
    }

    /// RGB tint the renderer should multiply intensities by.
    pub fn tint(&self) -> [u8; 3] {
        self.settings.tint
    }
}

fn log_settings(settings: &Settings, particle_count: usize) {
    info!(
        "initializing {} particles on a {}x{} field",
        particle_count,
        settings.field_width(),
        settings.field_height()
    );
    info!(
        r#"
SENSOR_ANGLE	{:?}
SENSOR_DISTANCE	{:?}
DEPOSIT_AMOUNT	{:?}
EVAPORATION	{:?}
DIFFUSION	{:?} (enabled: {:?})
BASE_SPEED	{:?}
MAX_TURN	{:?}
ATTRACTOR	{:?}
"#,
        settings.sensor_angle,
        settings.sensor_distance,
        settings.deposit_amount,
        settings.evaporation_rate,
        settings.diffusion_rate,
        settings.diffusion_enabled,
        settings.base_speed,
        settings.max_turn,
        settings.attractor.enabled,
    );
}
