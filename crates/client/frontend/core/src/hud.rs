//! View-model for the stats panel and action buttons.
use game_core::{
    Affordability, Command, Snapshot, floor_count, gold_upgrade_cost, strength_upgrade_cost,
};

/// One action trigger and whether it can fire right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionButton {
    pub command: Command,
    pub enabled: bool,
    /// Gold cost shown on the button; `None` for start battle.
    pub cost: Option<u64>,
}

impl ActionButton {
    pub fn label(&self) -> &'static str {
        self.command.label()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BattleStatus {
    Fighting { health: u64, max_health: u64, percent: u64 },
    Ready,
}

impl BattleStatus {
    pub fn text(&self) -> String {
        match self {
            BattleStatus::Fighting {
                health,
                max_health,
                percent,
            } => format!("Fighting! Enemy: {health}/{max_health} ({percent}%)"),
            BattleStatus::Ready => "Ready for battle".to_string(),
        }
    }
}

/// Display values derived from a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct HudView {
    pub gold: u64,
    pub warriors: usize,
    pub gold_per_second: String,
    pub warrior_strength: String,
    pub warrior_cost: u64,
    pub wave: u32,
    pub gold_upgrade_cost: u64,
    pub strength_upgrade_cost: u64,
    pub status: BattleStatus,
    pub buttons: [ActionButton; 4],
}

impl HudView {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let resources = &snapshot.resources;
        let upgrades = &snapshot.upgrades;
        let battle = &snapshot.battle;

        let gold_cost = gold_upgrade_cost(upgrades.gold_per_second);
        let strength_cost = strength_upgrade_cost(upgrades.warrior_strength);
        let warrior_cost = floor_count(upgrades.warrior_cost);
        let affordability = Affordability::from_snapshot(snapshot);

        let status = if battle.in_combat {
            BattleStatus::Fighting {
                health: floor_count(battle.enemy_health),
                max_health: floor_count(battle.enemy_max_health),
                percent: (battle.health_fraction() * 100.0).round() as u64,
            }
        } else {
            BattleStatus::Ready
        };

        let button = |command: Command, cost: Option<u64>| ActionButton {
            command,
            enabled: affordability.allows(command),
            cost,
        };

        Self {
            gold: resources.gold_display(),
            warriors: resources.warrior_count(),
            gold_per_second: format!("{:.1}", upgrades.gold_per_second),
            warrior_strength: format!("{:.1}", upgrades.warrior_strength),
            warrior_cost,
            wave: battle.wave,
            gold_upgrade_cost: gold_cost,
            strength_upgrade_cost: strength_cost,
            status,
            buttons: [
                button(Command::BuyWarrior, Some(warrior_cost)),
                button(Command::UpgradeGold, Some(gold_cost)),
                button(Command::UpgradeStrength, Some(strength_cost)),
                button(Command::StartBattle, None),
            ],
        }
    }

    pub fn button(&self, command: Command) -> Option<&ActionButton> {
        self.buttons.iter().find(|button| button.command == command)
    }
}
