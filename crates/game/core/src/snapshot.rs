//! Authoritative game-state snapshot pushed or returned by the server.
//!
//! A snapshot is replaced wholesale on every update and never partially
//! mutated by the client. Counts are real-valued on the wire (the server
//! accrues fractional losses during combat) and floored for display.

/// Canonical snapshot of the server's game state.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Snapshot {
    pub resources: Resources,
    pub upgrades: Upgrades,
    pub battle: Battle,
}

impl Snapshot {
    /// Returns true when the snapshot satisfies the server's invariants:
    /// non-negative counts and enemy health not above its maximum.
    pub fn is_consistent(&self) -> bool {
        self.resources.gold >= 0.0
            && self.resources.warriors >= 0.0
            && self.battle.enemy_health <= self.battle.enemy_max_health
    }
}

/// Spendable resources.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Resources {
    pub gold: f64,
    pub warriors: f64,
}

impl Resources {
    /// Gold as shown to the player.
    pub fn gold_display(&self) -> u64 {
        floor_count(self.gold)
    }

    /// Number of whole warriors, which is also the number of animated actors.
    pub fn warrior_count(&self) -> usize {
        floor_count(self.warriors) as usize
    }
}

/// Upgrade levels and the current unit price.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Upgrades {
    pub gold_per_second: f64,
    pub warrior_cost: f64,
    pub warrior_strength: f64,
}

impl Default for Upgrades {
    fn default() -> Self {
        Self {
            gold_per_second: 1.0,
            warrior_cost: 10.0,
            warrior_strength: 1.0,
        }
    }
}

/// Battle status for the current wave.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Battle {
    pub wave: u32,
    pub in_combat: bool,
    pub enemy_health: f64,
    pub enemy_max_health: f64,
}

impl Default for Battle {
    fn default() -> Self {
        Self {
            wave: 1,
            in_combat: false,
            enemy_health: 100.0,
            enemy_max_health: 100.0,
        }
    }
}

impl Battle {
    /// Fraction of enemy health remaining, clamped to `[0, 1]`.
    ///
    /// Returns 0 for a non-positive maximum so callers never divide by zero.
    pub fn health_fraction(&self) -> f64 {
        if self.enemy_max_health <= 0.0 {
            return 0.0;
        }
        (self.enemy_health / self.enemy_max_health).clamp(0.0, 1.0)
    }
}

/// Floors a wire value for display. Negative and non-finite values show as 0.
pub fn floor_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.floor() as u64
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warrior_count_floors_fractional_units() {
        let resources = Resources {
            gold: 12.9,
            warriors: 3.7,
        };
        assert_eq!(resources.warrior_count(), 3);
        assert_eq!(resources.gold_display(), 12);
    }

    #[test]
    fn negative_or_nan_counts_display_as_zero() {
        let resources = Resources {
            gold: f64::NAN,
            warriors: -0.5,
        };
        assert_eq!(resources.warrior_count(), 0);
        assert_eq!(resources.gold_display(), 0);
    }

    #[test]
    fn floor_count_clamps_invalid_values() {
        assert_eq!(floor_count(149.99), 149);
        assert_eq!(floor_count(0.0), 0);
        assert_eq!(floor_count(f64::INFINITY), 0);
    }

    #[test]
    fn health_fraction_handles_zero_max() {
        let battle = Battle {
            enemy_health: 10.0,
            enemy_max_health: 0.0,
            ..Battle::default()
        };
        assert_eq!(battle.health_fraction(), 0.0);
    }

    #[test]
    fn health_fraction_is_clamped() {
        let battle = Battle {
            enemy_health: -20.0,
            enemy_max_health: 100.0,
            ..Battle::default()
        };
        assert_eq!(battle.health_fraction(), 0.0);

        let battle = Battle {
            enemy_health: 60.0,
            enemy_max_health: 120.0,
            ..Battle::default()
        };
        assert!((battle.health_fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn consistency_rejects_overfull_enemy() {
        let mut snapshot = Snapshot::default();
        assert!(snapshot.is_consistent());

        snapshot.battle.enemy_health = snapshot.battle.enemy_max_health + 1.0;
        assert!(!snapshot.is_consistent());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn decodes_server_payload_with_extra_fields() {
        let json = r#"{
            "resources": {"gold": 104.5, "warriors": 5},
            "upgrades": {
                "warrior_cost": 10,
                "gold_per_second": 1.0,
                "warriors_per_second": 0.1,
                "warrior_strength": 1.0
            },
            "battle": {
                "enemy_health": 100,
                "enemy_max_health": 100,
                "enemy_strength": 5,
                "wave": 1,
                "in_combat": false
            },
            "last_update": 1700000000.25
        }"#;

        let snapshot: Snapshot = serde_json::from_str(json).expect("payload should decode");
        assert_eq!(snapshot.resources.warrior_count(), 5);
        assert_eq!(snapshot.upgrades.warrior_cost, 10.0);
        assert_eq!(snapshot.battle.wave, 1);
        assert!(!snapshot.battle.in_combat);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"resources": {"warriors": 3}}"#).expect("partial payload");
        assert_eq!(snapshot.resources.warrior_count(), 3);
        assert_eq!(snapshot.battle, Battle::default());
    }
}
