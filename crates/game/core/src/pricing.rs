//! Presentational pricing and action affordability.
//!
//! The server's pricing is authoritative; these formulas only decide what the
//! UI shows and which actions it offers until the next snapshot arrives.
//!
//! Formulas:
//! - gold upgrade = floor(100 × 1.5^gold_per_second)
//! - strength upgrade = floor(200 × 1.5^warrior_strength)
use crate::command::Command;
use crate::snapshot::Snapshot;

const GOLD_UPGRADE_BASE: f64 = 100.0;
const STRENGTH_UPGRADE_BASE: f64 = 200.0;
const UPGRADE_GROWTH: f64 = 1.5;

/// Next gold-rate upgrade price for the given gold-per-second level.
pub fn gold_upgrade_cost(gold_per_second: f64) -> u64 {
    scaled_cost(GOLD_UPGRADE_BASE, gold_per_second)
}

/// Next strength upgrade price for the given strength level.
pub fn strength_upgrade_cost(warrior_strength: f64) -> u64 {
    scaled_cost(STRENGTH_UPGRADE_BASE, warrior_strength)
}

fn scaled_cost(base: f64, level: f64) -> u64 {
    let cost = (base * UPGRADE_GROWTH.powf(level)).floor();
    if cost.is_finite() && cost > 0.0 {
        cost as u64
    } else {
        0
    }
}

/// Which player commands are currently worth offering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Affordability {
    pub buy_warrior: bool,
    pub upgrade_gold: bool,
    pub upgrade_strength: bool,
    pub start_battle: bool,
}

impl Affordability {
    /// Computes the enable flags from a snapshot.
    ///
    /// Each purchase requires enough gold for its price; starting a battle
    /// requires at least one warrior and no battle in progress.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let gold = snapshot.resources.gold;
        let upgrades = &snapshot.upgrades;

        Self {
            buy_warrior: gold >= upgrades.warrior_cost,
            upgrade_gold: gold >= gold_upgrade_cost(upgrades.gold_per_second) as f64,
            upgrade_strength: gold >= strength_upgrade_cost(upgrades.warrior_strength) as f64,
            start_battle: snapshot.resources.warriors >= 1.0 && !snapshot.battle.in_combat,
        }
    }

    pub fn allows(&self, command: Command) -> bool {
        match command {
            Command::BuyWarrior => self.buy_warrior,
            Command::UpgradeGold => self.upgrade_gold,
            Command::UpgradeStrength => self.upgrade_strength,
            Command::StartBattle => self.start_battle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{Battle, Resources, Upgrades};

    #[test]
    fn upgrade_costs_follow_exponential_formula() {
        assert_eq!(gold_upgrade_cost(1.0), 150);
        assert_eq!(gold_upgrade_cost(1.5), 183);
        assert_eq!(gold_upgrade_cost(0.0), 100);
        assert_eq!(strength_upgrade_cost(1.0), 300);
        assert_eq!(strength_upgrade_cost(2.0), 450);
    }

    fn snapshot(gold: f64, warriors: f64, in_combat: bool) -> Snapshot {
        Snapshot {
            resources: Resources { gold, warriors },
            upgrades: Upgrades::default(),
            battle: Battle {
                in_combat,
                ..Battle::default()
            },
        }
    }

    #[test]
    fn poor_player_can_only_fight() {
        let flags = Affordability::from_snapshot(&snapshot(5.0, 2.0, false));
        assert!(!flags.buy_warrior);
        assert!(!flags.upgrade_gold);
        assert!(!flags.upgrade_strength);
        assert!(flags.start_battle);
    }

    #[test]
    fn purchases_unlock_at_exact_price() {
        let flags = Affordability::from_snapshot(&snapshot(300.0, 0.0, false));
        assert!(flags.buy_warrior);
        assert!(flags.upgrade_gold);
        assert!(flags.upgrade_strength);
        assert!(!flags.start_battle);
    }

    #[test]
    fn battle_cannot_start_twice() {
        let flags = Affordability::from_snapshot(&snapshot(0.0, 10.0, true));
        assert!(!flags.allows(Command::StartBattle));
    }

    #[test]
    fn fractional_single_warrior_is_not_enough() {
        let flags = Affordability::from_snapshot(&snapshot(0.0, 0.9, false));
        assert!(!flags.start_battle);
    }
}
