use crate::{rect::Rect, Particle, Point2};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::Range;

/// Where freshly initialized particles are placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeedRegion {
    Disc { center: Point2, radius: f32 },
    Rect(Rect<f32>),
}

impl SeedRegion {
    fn sample<R: Rng>(&self, rng: &mut R) -> Point2 {
        match *self {
            SeedRegion::Disc { center, radius } => {
                // sqrt keeps the density uniform over the disc's area
                let distance = radius * rng.gen::<f32>().sqrt();
                let angle = rng.gen::<f32>() * TAU;
                center.offset_along(angle, distance)
            }
            SeedRegion::Rect(rect) => Point2::new(
                rect.x + rng.gen::<f32>() * rect.width,
                rect.y + rng.gen::<f32>() * rect.height,
            ),
        }
    }
}

/// The particles of one run. The population size is fixed once initialized.
pub struct ParticlePopulation {
    particles: Vec<Particle>,
    // reused every tick so shuffling never allocates
    order: Vec<usize>,
}

impl ParticlePopulation {
    pub fn initialize<R: Rng>(
        count: usize,
        seed_region: SeedRegion,
        speed_range: Range<f32>,
        rng: &mut R,
    ) -> Self {
        let particles: Vec<_> = (0..count)
            .map(|_| {
                let speed = if speed_range.start < speed_range.end {
                    rng.gen_range(speed_range.clone())
                } else {
                    speed_range.start
                };

                Particle::builder()
                    .location(seed_region.sample(rng))
                    .heading(rng.gen::<f32>() * TAU % TAU)
                    .speed(speed)
                    .build()
            })
            .collect();

        debug!("seeded {} particles in {:?}", particles.len(), seed_region);

        Self::from_particles(particles)
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        let order = (0..particles.len()).collect();
        Self { particles, order }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Visit every particle exactly once, in a freshly shuffled order. The
    /// random source is handed on to `visitor` so per-particle decisions draw
    /// from the same stream.
    pub fn for_each_in_random_order<R, F>(&mut self, rng: &mut R, mut visitor: F)
    where
        R: Rng,
        F: FnMut(&mut Particle, &mut R),
    {
        self.order.shuffle(rng);

        let particles = &mut self.particles;
        for &index in self.order.iter() {
            visitor(&mut particles[index], &mut *rng);
        }
    }

    #[cfg(test)]
    pub(crate) fn order(&self) -> &[usize] {
        &self.order
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn initialize_places_particles_inside_a_disc() {
        let center = Point2::new(50.0, 40.0);
        let population = ParticlePopulation::initialize(
            500,
            SeedRegion::Disc {
                center,
                radius: 10.0,
            },
            2.0..4.0,
            &mut rng(),
        );

        assert_eq!(population.len(), 500);
        population.iter().for_each(|particle| {
            assert!(particle.location().distance_to(&center) <= 10.0 + 1e-4);
            assert!(particle.heading() >= 0.0 && particle.heading() < TAU);
            assert!(particle.speed() >= 2.0 && particle.speed() < 4.0);
        });
    }

    #[test]
    fn initialize_places_particles_inside_a_rect() {
        let rect = Rect::new(10.0, 20.0, 30.0, 5.0);
        let population =
            ParticlePopulation::initialize(500, SeedRegion::Rect(rect), 3.0..3.0, &mut rng());

        population.iter().for_each(|particle| {
            assert!(rect.contains(&particle.location()));
            assert_eq!(particle.speed(), 3.0);
        });
    }

    #[test]
    fn every_particle_is_visited_exactly_once() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut population =
            ParticlePopulation::initialize(64, SeedRegion::Rect(rect), 1.0..2.0, &mut rng());
        let mut rng = rng();
        let mut visits = 0;

        population.for_each_in_random_order(&mut rng, |particle, _| {
            particle.set_speed(-1.0);
            visits += 1;
        });

        assert_eq!(visits, 64);
        population
            .iter()
            .for_each(|particle| assert_eq!(particle.speed(), -1.0));
    }

    #[test]
    fn visiting_order_changes_between_ticks() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut population =
            ParticlePopulation::initialize(64, SeedRegion::Rect(rect), 1.0..2.0, &mut rng());
        let mut rng = rng();

        population.for_each_in_random_order(&mut rng, |_, _| {});
        let first_order = population.order().to_vec();
        population.for_each_in_random_order(&mut rng, |_, _| {});
        let second_order = population.order().to_vec();

        assert_ne!(first_order, second_order);

        let mut sorted = second_order;
        sorted.sort_unstable();
        assert_eq!(sorted, (0..64).collect::<Vec<_>>());
    }
}
