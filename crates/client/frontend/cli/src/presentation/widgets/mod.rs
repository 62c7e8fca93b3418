//! Widgets composing the terminal UI.
pub mod battlefield;
pub mod footer;
pub mod hud;
pub mod messages;
