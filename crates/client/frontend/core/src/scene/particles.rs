//! Short-lived decorative particles.
use std::collections::VecDeque;

use rand::Rng;

use super::color::Rgb;
use super::geometry::Point;
use crate::config::ParticleConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Point,
    /// World units per frame.
    pub velocity: Point,
    /// Frames left; the particle is removed when this reaches zero.
    pub life: u32,
    pub initial_life: u32,
    pub color: Rgb,
    pub size: f64,
}

impl Particle {
    /// Opacity in `[0, 1]`: 1 at spawn, 0 at expiry.
    pub fn alpha(&self) -> f64 {
        if self.initial_life == 0 {
            return 0.0;
        }
        self.life as f64 / self.initial_life as f64
    }
}

/// Live particles in spawn order.
///
/// The collection is capped; spawning into a full system evicts the oldest
/// particle first.
#[derive(Clone, Debug)]
pub struct ParticleSystem {
    particles: VecDeque<Particle>,
    config: ParticleConfig,
}

impl ParticleSystem {
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            particles: VecDeque::new(),
            config,
        }
    }

    /// Appends one particle at `at` with a random velocity and size.
    pub fn spawn(&mut self, at: Point, color: Rgb, rng: &mut impl Rng) -> &Particle {
        let speed = self.config.speed.abs().max(f64::EPSILON);
        let (min_size, max_size) = ordered(self.config.min_size, self.config.max_size);
        let size = if max_size > min_size {
            rng.random_range(min_size..max_size)
        } else {
            min_size
        };

        let particle = Particle {
            position: at,
            velocity: Point::new(
                rng.random_range(-speed..speed),
                rng.random_range(-speed..speed),
            ),
            life: self.config.life,
            initial_life: self.config.life,
            color,
            size,
        };

        while self.particles.len() >= self.config.max_particles.max(1) {
            self.particles.pop_front();
        }
        self.particles.push_back(particle);
        &self.particles[self.particles.len() - 1]
    }

    /// Moves every particle one frame and drops the expired ones.
    pub fn advance(&mut self) {
        self.particles.retain_mut(|particle| {
            particle.position = particle
                .position
                .offset(particle.velocity.x, particle.velocity.y);
            particle.life = particle.life.saturating_sub(1);
            particle.life > 0
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new(ParticleConfig::default())
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}
