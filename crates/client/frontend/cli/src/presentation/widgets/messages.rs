//! Message log panel.

use client_frontend_core::message::{MessageEntry, MessageLog};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render the newest messages that fit, oldest at the top.
pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog) {
    let visible = usize::from(area.height.saturating_sub(2));
    let mut lines: Vec<Line> = messages
        .recent(visible)
        .map(|entry| {
            Line::from(Span::styled(
                format_message(entry),
                RatatuiTheme::message(entry.level),
            ))
        })
        .collect();
    lines.reverse();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));

    frame.render_widget(paragraph, area);
}

/// Prefix stamped entries with their scene frame.
fn format_message(entry: &MessageEntry) -> String {
    match entry.frame {
        Some(frame) => format!("[{frame}] {}", entry.text),
        None => entry.text.clone(),
    }
}
