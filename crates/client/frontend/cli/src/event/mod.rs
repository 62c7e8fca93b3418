//! Event handling for CLI client.
//!
//! This module contains the event loop that interleaves sync events,
//! keyboard input and frame rendering.

mod handlers;
mod r#loop;

pub use r#loop::EventLoop;
