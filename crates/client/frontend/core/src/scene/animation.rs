//! Per-frame actor behavior.
//!
//! The helpers here are pure functions of their inputs and the random source,
//! so callers decide determinism by choosing the `Rng`.
use rand::Rng;

use super::Scene;
use super::actors::{Enemy, Warrior};
use super::color::HIT_PARTICLE;
use super::geometry::{ATTACK_AREA, HIT_OFFSET, IDLE_AREA, Point};
use crate::config::BehaviorConfig;

/// What a warrior did this frame beyond moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarriorCue {
    Idle,
    /// Retargeted toward the enemy; `particle` if the attack effect fired.
    Attack { particle: bool },
}

/// Summary of one animation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub frame: u64,
    pub animated: bool,
    pub attack_redirects: usize,
    pub particles_spawned: usize,
    pub particles_live: usize,
}

/// Moves the warrior one frame, then rolls its wander and attack behaviors.
pub fn step_warrior(
    warrior: &mut Warrior,
    behavior: &BehaviorConfig,
    in_combat: bool,
    rng: &mut impl Rng,
) -> WarriorCue {
    warrior.step(behavior.approach_rate);

    if roll(rng, behavior.wander_chance) {
        warrior.target = IDLE_AREA.sample(rng);
    }

    if in_combat && roll(rng, behavior.attack_redirect_chance) {
        warrior.target = ATTACK_AREA.sample(rng);
        return WarriorCue::Attack {
            particle: roll(rng, behavior.attack_particle_chance),
        };
    }

    WarriorCue::Idle
}

/// Where a hit particle should appear on the enemy this frame, if anywhere.
///
/// Only a living enemy in an active battle gets hit effects.
pub fn enemy_hit(
    enemy: &Enemy,
    behavior: &BehaviorConfig,
    in_combat: bool,
    rng: &mut impl Rng,
) -> Option<Point> {
    if !enemy.is_alive() || !in_combat {
        return None;
    }
    if !roll(rng, behavior.enemy_hit_particle_chance) {
        return None;
    }
    Some(enemy.position.offset(
        rng.random_range(HIT_OFFSET),
        rng.random_range(HIT_OFFSET),
    ))
}

/// Bernoulli draw that tolerates chances outside `[0, 1]`.
fn roll(rng: &mut impl Rng, chance: f64) -> bool {
    if chance >= 1.0 {
        true
    } else if chance > 0.0 {
        rng.random_bool(chance)
    } else {
        false
    }
}

impl Scene {
    /// Advances actors and particles by one frame.
    ///
    /// Does nothing until the first snapshot arrives.
    pub fn advance_frame(&mut self) -> FrameReport {
        let Some(snapshot) = self.store.current() else {
            return FrameReport {
                frame: self.frame,
                ..FrameReport::default()
            };
        };
        let in_combat = snapshot.battle.in_combat;

        self.frame += 1;
        let mut report = FrameReport {
            frame: self.frame,
            animated: true,
            ..FrameReport::default()
        };

        for warrior in self.actors.warriors_mut() {
            if let WarriorCue::Attack { particle } =
                step_warrior(warrior, &self.behavior, in_combat, &mut self.rng)
            {
                report.attack_redirects += 1;
                if particle {
                    self.particles
                        .spawn(warrior.position, warrior.color, &mut self.rng);
                    report.particles_spawned += 1;
                }
            }
        }

        let hit = self
            .actors
            .enemy()
            .and_then(|enemy| enemy_hit(enemy, &self.behavior, in_combat, &mut self.rng));
        if let Some(at) = hit {
            self.particles.spawn(at, HIT_PARTICLE, &mut self.rng);
            report.particles_spawned += 1;
        }

        self.particles.advance();
        report.particles_live = self.particles.len();
        report
    }
}
