//! Event handler implementations for EventLoop.
//!
//! This module contains handler methods organized by responsibility:
//! - `input`: Keyboard input polling and key dispatch
//! - `commands`: Command gating and dispatch to the server
//! - `rendering`: Frame advance and terminal rendering
//!
//! All handlers are implemented as `impl EventLoop` blocks in separate files,
//! and are automatically available to the EventLoop through Rust's module system.

mod commands;
mod input;
mod rendering;
