//! Command dispatch.

use client_frontend_core::{EventConsumer, message::MessageLevel};
use game_core::{Affordability, Command};

use super::super::EventLoop;

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Send a command if the current snapshot allows it.
    ///
    /// The request runs in the background; its outcome comes back as a sync
    /// event. Disabled actions only leave a hint in the message log.
    pub(in crate::event) fn dispatch_command(&mut self, command: Command) {
        let Some(snapshot) = self.scene.snapshot() else {
            self.consumer
                .message_log_mut()
                .push_warning(format!("{}: not connected yet", command.label()));
            return;
        };

        if !Affordability::from_snapshot(snapshot).allows(command) {
            tracing::debug!(%command, "Ignoring unavailable command");
            self.consumer.message_log_mut().push_at(
                self.scene.frame(),
                MessageLevel::Warning,
                format!("{} is not available right now", command.label()),
            );
            return;
        }

        tracing::info!(%command, "Sending command");
        self.handle.send_command(command);
    }
}
