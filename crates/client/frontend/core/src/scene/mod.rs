//! The animated battlefield.
//!
//! [`Scene`] is the single owned context the render loop and the sync event
//! consumer share. A snapshot enters through [`Scene::apply_snapshot`], which
//! stores it and reconciles the actors in one call, so a frame can never see
//! a new snapshot paired with stale actors.
mod actors;
mod animation;
pub mod color;
pub mod geometry;
mod particles;
mod reconciler;

pub use actors::{Enemy, Warrior};
pub use animation::{FrameReport, WarriorCue, enemy_hit, step_warrior};
pub use particles::{Particle, ParticleSystem};
pub use reconciler::{ActorReconciler, ReconcileScope};

use game_core::Snapshot;
use rand::{SeedableRng, rngs::StdRng};

use crate::config::{BehaviorConfig, FrontendConfig};
use crate::store::StateStore;

pub struct Scene {
    store: StateStore,
    actors: ActorReconciler,
    particles: ParticleSystem,
    behavior: BehaviorConfig,
    rng: StdRng,
    frame: u64,
}

impl Scene {
    /// Empty scene seeded from the operating system.
    pub fn new(config: &FrontendConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Empty scene driven by the given random source.
    pub fn with_rng(config: &FrontendConfig, rng: StdRng) -> Self {
        Self {
            store: StateStore::new(),
            actors: ActorReconciler::new(),
            particles: ParticleSystem::new(config.particles.clone()),
            behavior: config.behavior.clone(),
            rng,
            frame: 0,
        }
    }

    /// Replaces the held snapshot and reconciles actors against it.
    pub fn apply_snapshot(&mut self, snapshot: Snapshot) -> ReconcileScope {
        let scope = self.actors.reconcile(&snapshot, &mut self.rng);
        self.store.replace(snapshot);
        scope
    }

    /// Latest snapshot, `None` while still connecting.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.store.current()
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn warriors(&self) -> &[Warrior] {
        self.actors.warriors()
    }

    pub fn enemy(&self) -> Option<&Enemy> {
        self.actors.enemy()
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn behavior(&self) -> &BehaviorConfig {
        &self.behavior
    }

    /// Frames animated since the first snapshot.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use game_core::Resources;

    use super::*;

    fn seeded() -> Scene {
        Scene::with_rng(&FrontendConfig::default(), StdRng::seed_from_u64(42))
    }

    #[test]
    fn starts_connecting() {
        let scene = seeded();
        assert!(scene.snapshot().is_none());
        assert!(scene.warriors().is_empty());
        assert!(scene.enemy().is_none());
    }

    #[test]
    fn apply_stores_and_reconciles_together() {
        let mut scene = seeded();
        let snapshot = Snapshot {
            resources: Resources {
                gold: 12.0,
                warriors: 4.6,
            },
            ..Snapshot::default()
        };

        scene.apply_snapshot(snapshot.clone());

        assert_eq!(scene.snapshot(), Some(&snapshot));
        assert_eq!(scene.warriors().len(), 4);
        assert!(scene.enemy().is_some());
        assert_eq!(scene.store().revision(), 1);
    }
}
