//! Terminal UI frontend for the warband client.
//!
//! This crate draws the battlefield and stats panel in the terminal and maps
//! keys to server commands. It implements the
//! `client_frontend_core::Frontend` trait.
//!
//! # Architecture
//!
//! CliFrontend is a pure UI layer that:
//! - Receives a SyncHandle for communication
//! - Does NOT own the sync runtime
//! - Applies sync events to its scene between frames and sends commands

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;

pub use app::CliFrontend;
pub use config::{CliConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
