//! Utilities for reacting to sync events inside UI layers.
use sync_runtime::{SnapshotOrigin, SyncEvent};

use crate::message::{MessageLevel, MessageLog};
use crate::scene::{ReconcileScope, Scene};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventImpact {
    pub requires_redraw: bool,
    pub reconciled: ReconcileScope,
}

impl EventImpact {
    pub const fn none() -> Self {
        Self {
            requires_redraw: false,
            reconciled: ReconcileScope::empty(),
        }
    }

    pub const fn redraw() -> Self {
        Self {
            requires_redraw: true,
            reconciled: ReconcileScope::empty(),
        }
    }

    pub const fn reconciled(scope: ReconcileScope) -> Self {
        Self {
            requires_redraw: true,
            reconciled: scope,
        }
    }

    pub fn combine(self, other: Self) -> Self {
        Self {
            requires_redraw: self.requires_redraw || other.requires_redraw,
            reconciled: self.reconciled | other.reconciled,
        }
    }
}

pub trait EventConsumer {
    fn on_event(&mut self, scene: &mut Scene, event: &SyncEvent) -> EventImpact;
    fn message_log(&self) -> &MessageLog;
    fn message_log_mut(&mut self) -> &mut MessageLog;
}

/// Applies snapshots to the scene and reports everything else to the log.
///
/// Failures never touch the scene: the last good snapshot stays on screen.
pub struct SceneEventConsumer {
    log: MessageLog,
}

impl SceneEventConsumer {
    pub fn new(log: MessageLog) -> Self {
        Self { log }
    }

    fn record(&mut self, scene: &Scene, level: MessageLevel, message: impl Into<String>) {
        self.log.push_at(scene.frame(), level, message);
    }
}

impl EventConsumer for SceneEventConsumer {
    fn on_event(&mut self, scene: &mut Scene, event: &SyncEvent) -> EventImpact {
        match event {
            SyncEvent::Connected => {
                tracing::info!("Connected to server");
                self.record(scene, MessageLevel::Info, "Connected to server");
                EventImpact::redraw()
            }
            SyncEvent::Disconnected => {
                tracing::info!("Disconnected from server");
                self.record(scene, MessageLevel::Warning, "Disconnected from server");
                EventImpact::redraw()
            }
            SyncEvent::Snapshot { snapshot, origin } => {
                if !snapshot.is_consistent() {
                    tracing::warn!(?origin, "Applying snapshot that breaks server invariants");
                }
                let scope = scene.apply_snapshot(snapshot.clone());
                tracing::trace!(?origin, ?scope, "Snapshot applied");
                if let SnapshotOrigin::Command(command) = origin {
                    self.record(
                        scene,
                        MessageLevel::Info,
                        format!("{} done", command.label()),
                    );
                }
                EventImpact::reconciled(scope)
            }
            SyncEvent::CommandRejected { command, reason } => {
                tracing::warn!(%command, "Command rejected: {}", reason);
                self.record(
                    scene,
                    MessageLevel::Warning,
                    format!("{} failed: {}", command.label(), reason),
                );
                EventImpact::redraw()
            }
            SyncEvent::RequestFailed { request, error } => {
                tracing::error!(%request, "Request failed: {}", error);
                self.record(
                    scene,
                    MessageLevel::Error,
                    format!("{request} failed: {error}"),
                );
                EventImpact::redraw()
            }
        }
    }

    fn message_log(&self) -> &MessageLog {
        &self.log
    }

    fn message_log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }
}
