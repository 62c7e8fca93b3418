//! Player commands relayed to the server and their responses.
use strum::IntoStaticStr;

use crate::snapshot::Snapshot;

/// Named player action understood by the server.
///
/// Commands carry no payload; the server resolves costs and effects against
/// its own state and answers with a fresh [`Snapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Command {
    BuyWarrior,
    UpgradeGold,
    UpgradeStrength,
    StartBattle,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::BuyWarrior,
        Command::UpgradeGold,
        Command::UpgradeStrength,
        Command::StartBattle,
    ];

    /// Wire name used as the request path segment (`/api/<name>`).
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Human-readable label for UI affordances.
    pub fn label(self) -> &'static str {
        match self {
            Command::BuyWarrior => "Buy Warrior",
            Command::UpgradeGold => "Upgrade Gold/s",
            Command::UpgradeStrength => "Upgrade Strength",
            Command::StartBattle => "Start Battle",
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Response body returned for every command request.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandResponse {
    pub success: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub state: Option<Snapshot>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub error: Option<String>,
}

/// Application-level result of a command.
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    /// The server applied the command and returned its new state.
    Applied(Snapshot),
    /// The server refused the command; no state change is implied.
    Rejected(String),
}

impl CommandResponse {
    pub fn into_outcome(self) -> CommandOutcome {
        match (self.success, self.state) {
            (true, Some(state)) => CommandOutcome::Applied(state),
            (true, None) => CommandOutcome::Rejected("response missing state".to_string()),
            (false, _) => CommandOutcome::Rejected(
                self.error
                    .unwrap_or_else(|| "command rejected by server".to_string()),
            ),
        }
    }
}
