//! A Physarum-style trail simulation: particles sense a shared scalar field,
//! steer toward stronger signal, deposit onto the field as they move across a
//! toroidal world, and the field evaporates every tick.
//!
//! Rendering and frame scheduling are left to the caller: drive
//! [`Simulation::tick`] from your own loop and read the returned
//! [`ScalarField`].

pub mod attractor;
pub mod errors;
pub mod field;
pub mod particle;
pub mod point2;
pub mod population;
pub mod presets;
pub mod rect;
pub mod sensor;
pub mod settings;
pub mod simulation;
pub mod steering;
pub mod swapper;
pub mod util;

pub use attractor::AttractorDriver;
pub use errors::SlimeError;
pub use field::ScalarField;
pub use particle::Particle;
pub use point2::Point2;
pub use population::{ParticlePopulation, SeedRegion};
pub use sensor::{sense, Sensor, SensorReading};
pub use settings::{AttractorSettings, Settings};
pub use simulation::{EngineState, Simulation};
pub use steering::SteeringPolicy;
pub use swapper::Swapper;
