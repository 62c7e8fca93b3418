//! Keyboard input handling.

use anyhow::Result;
use client_frontend_core::EventConsumer;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use crate::input::KeyAction;

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Drain pending terminal input. Returns whether the user quit.
    pub(in crate::event) fn poll_input(&mut self) -> Result<bool> {
        while term_event::poll(Duration::ZERO)? {
            if let TermEvent::Key(key) = term_event::read()? {
                if key.kind == KeyEventKind::Press && self.handle_key_press(key) {
                    return Ok(true);
                }
            }
            // Resize needs no handling: the next frame redraws at the new size.
        }
        Ok(false)
    }

    /// Dispatch one key press. Returns whether the user quit.
    pub(in crate::event) fn handle_key_press(&mut self, key: KeyEvent) -> bool {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                self.consumer.message_log_mut().push_text("Quitting...");
                true
            }
            KeyAction::Command(command) => {
                self.dispatch_command(command);
                false
            }
            KeyAction::None => false,
        }
    }
}
