//! Events published by the sync runtime.
use std::fmt;

use game_core::{Command, Snapshot};

/// Where a snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOrigin {
    /// Pushed by the server over the persistent channel.
    Push,
    /// Full state fetched after (re)connecting.
    Fetch,
    /// Returned by a successful command.
    Command(Command),
}

/// Request that failed at the network or decoding level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    FetchState,
    Command(Command),
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::FetchState => write!(f, "state fetch"),
            RequestKind::Command(command) => write!(f, "command {}", command),
        }
    }
}

/// Everything the sync runtime reports to presentation layers.
///
/// Only [`SyncEvent::Snapshot`] carries state; every other variant is
/// diagnostic and must not change what is displayed beyond a log line.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncEvent {
    Connected,
    Disconnected,
    Snapshot {
        snapshot: Snapshot,
        origin: SnapshotOrigin,
    },
    /// The server refused a command (`success: false`).
    CommandRejected { command: Command, reason: String },
    /// A request never produced a usable response.
    RequestFailed { request: RequestKind, error: String },
}

impl SyncEvent {
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            SyncEvent::Snapshot { snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }
}
