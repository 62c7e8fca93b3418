//! Ratatui styling for the terminal UI.

use client_frontend_core::{message::MessageLevel, scene::color::Rgb};
use ratatui::style::{Color, Modifier, Style};

/// Consistent color schemes and styling rules for the CLI.
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn color(rgb: Rgb) -> Color {
        Color::Rgb(rgb.r, rgb.g, rgb.b)
    }

    pub fn message(level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::Gray),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn label() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn value() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn gold() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button(enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        }
    }

    pub fn fighting() -> Style {
        Style::default()
            .fg(Color::LightRed)
            .add_modifier(Modifier::BOLD)
    }

    pub fn ready() -> Style {
        Style::default().fg(Color::LightGreen)
    }
}
