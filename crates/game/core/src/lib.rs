//! Server-authoritative data model shared across client layers.
//!
//! `game-core` defines what the game server reports ([`Snapshot`]), what the
//! client may ask it to do ([`Command`]), and the presentational pricing
//! formulas the UI uses to enable or disable actions between snapshots.
//! Nothing here simulates the economy or combat: the server owns those rules
//! and every value in this crate is either copied from it or derived for
//! display.
pub mod command;
pub mod pricing;
pub mod snapshot;

pub use command::{Command, CommandOutcome, CommandResponse};
pub use pricing::{Affordability, gold_upgrade_cost, strength_upgrade_cost};
pub use snapshot::{Battle, Resources, Snapshot, Upgrades, floor_count};
