//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::Command;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Ask the server to perform a command.
    Command(Command),
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into client commands.
#[derive(Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char(ch) => self.handle_char(ch),
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'b' => KeyAction::Command(Command::BuyWarrior),
            'g' => KeyAction::Command(Command::UpgradeGold),
            's' => KeyAction::Command(Command::UpgradeStrength),
            'f' => KeyAction::Command(Command::StartBattle),
            _ => KeyAction::None,
        }
    }

    /// Key hint shown next to a command's button.
    pub fn key_for(command: Command) -> char {
        match command {
            Command::BuyWarrior => 'b',
            Command::UpgradeGold => 'g',
            Command::UpgradeStrength => 's',
            Command::StartBattle => 'f',
        }
    }
}
