//! Frontend configuration structures and loaders.
//!
//! This module contains presentation settings shared across frontend
//! implementations: animation behavior, particle effects, and message log
//! sizing. None of it affects game state.

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub behavior: BehaviorConfig,
    pub particles: ParticleConfig,
    pub messages: MessageConfig,
}

impl FrontendConfig {
    pub const fn new(
        behavior: BehaviorConfig,
        particles: ParticleConfig,
        messages: MessageConfig,
    ) -> Self {
        Self {
            behavior,
            particles,
            messages,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `WARBAND_WANDER_CHANCE` - Per-frame idle retarget chance (default: 0.01)
    /// - `WARBAND_ATTACK_REDIRECT_CHANCE` - Combat approach chance (default: 0.10)
    /// - `WARBAND_ATTACK_PARTICLE_CHANCE` - Particle chance on attack approach (default: 0.05)
    /// - `WARBAND_ENEMY_HIT_PARTICLE_CHANCE` - Combat hit particle chance (default: 0.20)
    /// - `WARBAND_APPROACH_RATE` - Fraction of remaining distance covered per frame (default: 0.05)
    /// - `WARBAND_PARTICLE_LIFE` - Particle lifetime in frames (default: 30)
    /// - `WARBAND_MAX_PARTICLES` - Live particle cap (default: 512)
    /// - `WARBAND_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Behavior probabilities
        if let Some(chance) = read_probability("WARBAND_WANDER_CHANCE") {
            config.behavior.wander_chance = chance;
        }
        if let Some(chance) = read_probability("WARBAND_ATTACK_REDIRECT_CHANCE") {
            config.behavior.attack_redirect_chance = chance;
        }
        if let Some(chance) = read_probability("WARBAND_ATTACK_PARTICLE_CHANCE") {
            config.behavior.attack_particle_chance = chance;
        }
        if let Some(chance) = read_probability("WARBAND_ENEMY_HIT_PARTICLE_CHANCE") {
            config.behavior.enemy_hit_particle_chance = chance;
        }
        if let Some(rate) = read_probability("WARBAND_APPROACH_RATE") {
            config.behavior.approach_rate = rate;
        }

        // Particle effects
        if let Some(life) = read_env::<u32>("WARBAND_PARTICLE_LIFE") {
            config.particles.life = life.max(1);
        }
        if let Some(cap) = read_env::<usize>("WARBAND_MAX_PARTICLES") {
            config.particles.max_particles = cap.max(1);
        }

        // Message configuration
        if let Some(capacity) = read_env::<usize>("WARBAND_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }

        config
    }
}

/// Per-frame Bernoulli chances and movement damping for scene actors.
///
/// All chances are independent draws each frame, which keeps motion sparse
/// and unsynchronized across warriors.
#[derive(Clone, Debug, PartialEq)]
pub struct BehaviorConfig {
    /// Chance a warrior picks a new idle target.
    pub wander_chance: f64,
    /// Chance, while in combat, a warrior heads for the enemy.
    pub attack_redirect_chance: f64,
    /// Chance an attack approach also spawns a particle.
    pub attack_particle_chance: f64,
    /// Chance, while in combat, the enemy shows a hit particle.
    pub enemy_hit_particle_chance: f64,
    /// Fraction of the remaining distance to target covered per frame.
    pub approach_rate: f64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            wander_chance: 0.01,
            attack_redirect_chance: 0.10,
            attack_particle_chance: 0.05,
            enemy_hit_particle_chance: 0.20,
            approach_rate: 0.05,
        }
    }
}

impl BehaviorConfig {
    /// Disables every random behavior. Warriors still approach their targets.
    pub fn still() -> Self {
        Self {
            wander_chance: 0.0,
            attack_redirect_chance: 0.0,
            attack_particle_chance: 0.0,
            enemy_hit_particle_chance: 0.0,
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    /// Lifetime in frames; also the alpha denominator.
    pub life: u32,
    /// Largest velocity component magnitude, in world units per frame.
    pub speed: f64,
    pub min_size: f64,
    pub max_size: f64,
    /// Live particle cap; the oldest particle is evicted when full.
    pub max_particles: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            life: 30,
            speed: 2.0,
            min_size: 3.0,
            max_size: 6.0,
            max_particles: 512,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_probability(key: &str) -> Option<f64> {
    read_env::<f64>(key)
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        let behavior = BehaviorConfig::default();
        assert_eq!(behavior.wander_chance, 0.01);
        assert_eq!(behavior.attack_redirect_chance, 0.10);
        assert_eq!(behavior.attack_particle_chance, 0.05);
        assert_eq!(behavior.enemy_hit_particle_chance, 0.20);
        assert_eq!(ParticleConfig::default().life, 30);
    }

    #[test]
    fn still_behavior_keeps_movement() {
        let still = BehaviorConfig::still();
        assert_eq!(still.wander_chance, 0.0);
        assert_eq!(still.approach_rate, BehaviorConfig::default().approach_rate);
    }
}
