//! Holder for the latest authoritative snapshot.
use game_core::Snapshot;

/// Latest snapshot received from the server.
///
/// Pure data: `replace` swaps the whole snapshot, nothing is merged or
/// validated. Absence before the first update is a valid display state.
#[derive(Clone, Debug, Default)]
pub struct StateStore {
    current: Option<Snapshot>,
    revision: u64,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a new snapshot.
    pub fn replace(&mut self, snapshot: Snapshot) {
        self.current = Some(snapshot);
        self.revision += 1;
    }

    /// The latest snapshot, or `None` before the first update.
    pub fn current(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    /// Number of replacements so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
