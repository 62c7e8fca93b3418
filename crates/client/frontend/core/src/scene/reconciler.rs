//! Keeps the animated actors in step with the latest snapshot.
use bitflags::bitflags;
use game_core::Snapshot;
use rand::Rng;

use super::actors::{Enemy, Warrior};

bitflags! {
    /// What a reconciliation pass changed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ReconcileScope: u8 {
        const WARRIORS_SPAWNED = 1 << 0;
        const WARRIORS_REMOVED = 1 << 1;
        const ENEMY_RESPAWNED = 1 << 2;
        const ENEMY_UPDATED = 1 << 3;
    }
}

/// Owner of the warrior list and the enemy.
///
/// Runs once per incoming snapshot, never per frame. Warriors are matched by
/// count only: new ones are appended, surplus ones are dropped from the end,
/// and survivors keep their animation state untouched.
#[derive(Clone, Debug, Default)]
pub struct ActorReconciler {
    warriors: Vec<Warrior>,
    enemy: Option<Enemy>,
}

impl ActorReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reconcile(&mut self, snapshot: &Snapshot, rng: &mut impl Rng) -> ReconcileScope {
        let mut scope = ReconcileScope::empty();

        let target = snapshot.resources.warrior_count();
        if self.warriors.len() < target {
            self.warriors
                .extend((self.warriors.len()..target).map(|_| Warrior::spawn(rng)));
            scope |= ReconcileScope::WARRIORS_SPAWNED;
        } else if self.warriors.len() > target {
            self.warriors.truncate(target);
            scope |= ReconcileScope::WARRIORS_REMOVED;
        }

        let battle = &snapshot.battle;
        match self.enemy.as_mut() {
            Some(enemy) if battle.in_combat => {
                enemy.sync_health(battle);
                scope |= ReconcileScope::ENEMY_UPDATED;
            }
            // Outside combat the enemy always shows fresh at its spawn point.
            _ => {
                self.enemy = Some(Enemy::fresh(battle));
                scope |= ReconcileScope::ENEMY_RESPAWNED;
            }
        }

        scope
    }

    pub fn warriors(&self) -> &[Warrior] {
        &self.warriors
    }

    pub(crate) fn warriors_mut(&mut self) -> &mut [Warrior] {
        &mut self.warriors
    }

    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }
}
