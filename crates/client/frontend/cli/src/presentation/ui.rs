//! Main render entry point composing all widgets.
//!
//! Layout: battlefield on the left, stats panel on the right, message log and
//! key hints along the bottom.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::presentation::{terminal::Tui, widgets};
use client_frontend_core::{Scene, message::MessageLog};

/// Everything a frame needs to draw.
pub struct RenderContext<'a> {
    pub scene: &'a Scene,
    pub messages: &'a MessageLog,
    pub hud_width: u16,
    pub message_panel_height: u16,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),
                Constraint::Length(ctx.message_panel_height),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(30), Constraint::Length(ctx.hud_width)])
            .split(rows[0]);

        widgets::battlefield::render(frame, columns[0], ctx.scene);
        widgets::hud::render(frame, columns[1], ctx.scene.snapshot());
        widgets::messages::render(frame, rows[1], ctx.messages);
        widgets::footer::render(frame, rows[2]);
    })?;

    Ok(())
}
