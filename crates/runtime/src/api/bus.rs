//! Broadcast event bus shared by the push worker and command handles.

use tokio::sync::broadcast;

use super::events::SyncEvent;

/// Fan-out channel for [`SyncEvent`]s.
///
/// Snapshots replace state wholesale, so a slow subscriber that lags only
/// loses stale events.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<SyncEvent>,
}

impl EventBus {
    /// Creates a bus with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    /// Creates a bus with the given capacity (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an event to every current subscriber.
    pub fn publish(&self, event: SyncEvent) {
        if self.tx.send(event).is_err() {
            // No subscribers yet - this is normal during startup
            tracing::trace!("No subscribers for sync event");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SyncEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
