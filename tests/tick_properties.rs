use rand::rngs::mock::StepRng;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use slime_trails::{
    AttractorSettings, Particle, ParticlePopulation, Point2, ScalarField, Sensor, Settings,
    Simulation,
};
use std::f32::consts::FRAC_PI_4;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn square_settings(size: u32) -> Settings {
    Settings {
        display_width: size,
        display_height: size,
        particle_count: 300,
        seed: Some(1234),
        ..Settings::default()
    }
}

fn single_particle(x: f32, y: f32, heading: f32) -> ParticlePopulation {
    ParticlePopulation::from_particles(vec![Particle::builder()
        .location(Point2::new(x, y))
        .heading(heading)
        .build()])
}

#[test]
fn particles_stay_inside_the_field_and_cells_stay_non_negative() {
    init_logger();
    let mut settings = square_settings(64);
    settings.diffusion_enabled = true;
    settings.diffusion_rate = 0.5;
    settings.sensor_distance = 40.0;
    settings.attractor = AttractorSettings {
        enabled: true,
        inner_radius: 5.0,
        outer_radius: 10.0,
        snap_probability: 0.5,
        ..AttractorSettings::default()
    };
    let mut simulation = Simulation::new(settings).expect("valid settings");

    for _ in 0..150 {
        let field = simulation.tick().expect("ready");
        assert!(field.iter().all(|value| *value >= 0.0 && value.is_finite()));

        let population = simulation.population().expect("population exists");
        for particle in population.iter() {
            let location = particle.location();
            assert!(location.x >= 0.0 && location.x < 64.0, "x out of bounds: {}", location);
            assert!(location.y >= 0.0 && location.y < 64.0, "y out of bounds: {}", location);
        }
    }
}

#[test]
fn decay_shrinks_cells_geometrically_toward_zero() {
    let rate = 0.25;
    let mut field = ScalarField::filled(4, 4, 100.0);
    let mut previous = field.sample(1.0, 1.0);

    for _ in 0..200 {
        field.decay(rate);
        let current = field.sample(1.0, 1.0);

        assert_eq!(current, previous * (1.0 - rate));
        if previous > 0.0 {
            assert!(current < previous);
        }
        previous = current;
    }

    assert!(previous < 1e-20);
}

#[test]
fn repeated_deposits_without_decay_accumulate() {
    let mut field = ScalarField::new(10, 10);

    for _ in 0..12 {
        field.deposit(3.2, 7.9, 40.0);
    }

    assert_eq!(field.sample(3.0, 7.0), 12.0 * 40.0);
    assert_eq!(field.total(), 12.0 * 40.0);
}

#[test]
fn single_hot_cell_ahead_is_seen_only_by_the_front_sensor() {
    let mut field = ScalarField::new(100, 100);
    field.deposit(65.0, 50.0, 10.0);
    let particle = Particle::builder()
        .location(Point2::new(50.0, 50.0))
        .heading(0.0)
        .build();
    let sensor = Sensor::new(FRAC_PI_4, 15.0);

    let reading = sensor.read(&particle, &field);

    assert!(reading.front > reading.left);
    assert!(reading.front > reading.right);
    assert_eq!(reading.left, reading.right);
}

#[test]
fn identical_seeds_produce_identical_runs() {
    let mut settings = square_settings(80);
    settings.attractor.enabled = true;
    settings.diffusion_enabled = true;

    let mut a = Simulation::new(settings.clone()).expect("valid settings");
    let mut b = Simulation::new(settings).expect("valid settings");

    for _ in 0..60 {
        let field_a: Vec<f32> = a.tick().expect("ready").iter().copied().collect();
        let field_b: Vec<f32> = b.tick().expect("ready").iter().copied().collect();
        assert_eq!(field_a, field_b);
    }

    let particles_a: Vec<_> = a.population().expect("population").iter().cloned().collect();
    let particles_b: Vec<_> = b.population().expect("population").iter().cloned().collect();
    assert_eq!(particles_a, particles_b);
}

#[test]
fn different_seeds_diverge() {
    let mut a = Simulation::new(square_settings(80)).expect("valid settings");
    let mut b = Simulation::new(Settings {
        seed: Some(4321),
        ..square_settings(80)
    })
    .expect("valid settings");

    a.tick().expect("ready");
    b.tick().expect("ready");

    let particles_a: Vec<_> = a.population().expect("population").iter().cloned().collect();
    let particles_b: Vec<_> = b.population().expect("population").iter().cloned().collect();
    assert_ne!(particles_a, particles_b);
}

#[test]
fn lone_particle_on_a_fresh_field_wanders_forward_and_deposits_once() {
    init_logger();
    let settings = Settings {
        sensor_distance: 15.0,
        sensor_angle: FRAC_PI_4,
        deposit_amount: 40.0,
        evaporation_rate: 0.0,
        ..square_settings(100)
    };
    let mut simulation = Simulation::with_population(
        settings,
        single_particle(50.0, 50.0, 0.0),
        SmallRng::seed_from_u64(99),
    )
    .expect("valid settings");

    simulation.tick().expect("ready");

    let particle = simulation
        .population()
        .and_then(|population| population.get(0))
        .cloned()
        .expect("one particle");
    let field = simulation.field().expect("field exists");
    let location = particle.location();

    // no signal anywhere, so speed is the base speed and the heading only
    // picked up idle jitter
    assert_eq!(particle.speed(), 2.0);
    let jitter = if particle.heading() > std::f32::consts::PI {
        particle.heading() - std::f32::consts::TAU
    } else {
        particle.heading()
    };
    assert!(jitter.abs() <= 0.2 + 1e-6);
    assert!((location.distance_to(&Point2::new(50.0, 50.0)) - 2.0).abs() < 1e-4);
    assert!(location.x > 51.9);

    assert_eq!(field.sample_at(location), 40.0);
    assert_eq!(field.iter().filter(|value| **value != 0.0).count(), 1);
    assert_eq!(field.total(), 40.0);
}

#[test]
fn evaporation_runs_after_the_particles_deposit() {
    let settings = Settings {
        evaporation_rate: 0.25,
        deposit_amount: 40.0,
        ..square_settings(100)
    };
    let mut simulation = Simulation::with_population(
        settings,
        single_particle(50.0, 50.0, 0.0),
        SmallRng::seed_from_u64(11),
    )
    .expect("valid settings");

    simulation.tick().expect("ready");
    let location = simulation
        .population()
        .and_then(|population| population.get(0))
        .map(|particle| particle.location())
        .expect("one particle");
    let field = simulation.field().expect("field exists");

    assert_eq!(field.sample_at(location), 40.0 * 0.75);
    assert_eq!(field.total(), 40.0 * 0.75);
}

#[test]
fn particle_leaving_the_right_edge_reappears_on_the_left() {
    let settings = Settings {
        evaporation_rate: 0.0,
        ..square_settings(100)
    };
    // a zero random stream makes the idle wander turn by exactly -0.2
    let mut simulation = Simulation::with_population(
        settings,
        single_particle(100.0 - 0.5, 50.0, 0.0),
        StepRng::new(0, 0),
    )
    .expect("valid settings");

    simulation.tick().expect("ready");

    let particle = simulation
        .population()
        .and_then(|population| population.get(0))
        .cloned()
        .expect("one particle");
    let location = particle.location();

    assert!(location.x >= 0.0);
    assert!(location.x < particle.speed() - 0.5);
    assert!((location.y - 50.0).abs() < 0.5);
}

#[test]
fn uninitialized_engine_refuses_to_tick_until_reconfigured() {
    let mut simulation = Simulation::new(square_settings(32)).expect("valid settings");

    assert!(simulation
        .reconfigure(Settings {
            display_width: 0,
            ..square_settings(32)
        })
        .is_err());
    assert!(simulation.tick().is_err());

    simulation
        .reconfigure(square_settings(32))
        .expect("valid settings");
    assert!(simulation.tick().is_ok());
}
