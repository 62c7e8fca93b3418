//! Animated stand-ins for server-side units.
use std::ops::Range;

use game_core::Battle;
use rand::Rng;

use super::color::{self, Rgb};
use super::geometry::{ENEMY_SIZE, ENEMY_SPAWN, IDLE_AREA, Point};

const WARRIOR_SIZE: Range<f64> = 15.0..20.0;

/// One on-screen warrior.
///
/// Warriors are fungible: they carry no server identity, only the visual
/// traits rolled at spawn, which stay fixed for the actor's lifetime.
#[derive(Clone, Debug, PartialEq)]
pub struct Warrior {
    pub position: Point,
    pub target: Point,
    pub color: Rgb,
    pub size: f64,
}

impl Warrior {
    /// Spawns a warrior with position, target, color and size drawn from `rng`.
    pub fn spawn(rng: &mut impl Rng) -> Self {
        Self {
            position: IDLE_AREA.sample(rng),
            target: IDLE_AREA.sample(rng),
            color: color::warrior_color(rng),
            size: rng.random_range(WARRIOR_SIZE),
        }
    }

    /// Moves toward the target by `rate` of the remaining distance.
    pub fn step(&mut self, rate: f64) {
        self.position = self.position.approach(self.target, rate);
    }
}

/// The single enemy sprite.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub position: Point,
    pub size: f64,
    pub color: Rgb,
    pub health: f64,
    pub max_health: f64,
}

impl Enemy {
    /// A freshly spawned enemy at its default spot with the battle's health.
    pub fn fresh(battle: &Battle) -> Self {
        Self {
            position: ENEMY_SPAWN,
            size: ENEMY_SIZE,
            color: color::ENEMY,
            health: battle.enemy_health,
            max_health: battle.enemy_max_health,
        }
    }

    pub fn sync_health(&mut self, battle: &Battle) {
        self.health = battle.enemy_health;
        self.max_health = battle.enemy_max_health;
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Health as a fraction in `[0, 1]`.
    pub fn health_fraction(&self) -> f64 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }

    pub fn health_bar_color(&self) -> Rgb {
        color::health_bar_color(self.health_fraction())
    }
}
