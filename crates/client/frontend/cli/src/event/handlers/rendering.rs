//! Frame tick and rendering handlers.

use anyhow::Result;
use client_frontend_core::EventConsumer;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// One display frame: input, animation, draw. Returns whether to stop.
    pub(in crate::event) fn handle_frame_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if self.poll_input()? {
            self.render(terminal)?;
            return Ok(true);
        }

        let report = self.scene.advance_frame();
        tracing::trace!(?report, "Frame advanced");
        self.render(terminal)?;
        Ok(false)
    }

    /// Render the current scene.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            scene: &self.scene,
            messages: self.consumer.message_log(),
            hud_width: self.cli_config.ui.hud_width,
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        ui::render(terminal, &ctx)
    }
}
