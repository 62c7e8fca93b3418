//! Key hint line.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme::RatatuiTheme;

const HINTS: &[(&str, &str)] = &[
    ("b", "buy warrior"),
    ("g", "upgrade gold"),
    ("s", "upgrade strength"),
    ("f", "fight"),
    ("q", "quit"),
];

pub fn render(frame: &mut Frame, area: Rect) {
    let spans: Vec<Span> = HINTS
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {key} "), RatatuiTheme::value()),
                Span::styled(format!("{action}  "), RatatuiTheme::label()),
            ]
        })
        .collect();

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
