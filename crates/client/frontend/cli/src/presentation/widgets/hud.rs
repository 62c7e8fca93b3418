//! Stats panel: resources, upgrades, battle status and action buttons.

use client_frontend_core::{ActionButton, BattleStatus, HudView};
use game_core::Snapshot;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{input::InputHandler, presentation::theme::RatatuiTheme};

pub fn render(frame: &mut Frame, area: Rect, snapshot: Option<&Snapshot>) {
    let lines = match snapshot {
        Some(snapshot) => hud_lines(&HudView::from_snapshot(snapshot)),
        None => vec![Line::from(Span::styled(
            "Waiting for server...",
            RatatuiTheme::label(),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Warband"));

    frame.render_widget(paragraph, area);
}

fn hud_lines(hud: &HudView) -> Vec<Line<'static>> {
    let mut lines = vec![
        stat("Gold", hud.gold.to_string(), RatatuiTheme::gold()),
        stat("Warriors", hud.warriors.to_string(), RatatuiTheme::value()),
        stat("Gold/s", hud.gold_per_second.clone(), RatatuiTheme::value()),
        stat("Strength", hud.warrior_strength.clone(), RatatuiTheme::value()),
        stat("Warrior cost", hud.warrior_cost.to_string(), RatatuiTheme::value()),
        stat("Wave", hud.wave.to_string(), RatatuiTheme::value()),
        Line::default(),
    ];

    let status_style = match hud.status {
        BattleStatus::Fighting { .. } => RatatuiTheme::fighting(),
        BattleStatus::Ready => RatatuiTheme::ready(),
    };
    lines.push(Line::from(Span::styled(hud.status.text(), status_style)));
    lines.push(Line::default());

    lines.extend(hud.buttons.iter().map(button_line));
    lines
}

fn stat(label: &'static str, value: String, style: ratatui::style::Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), RatatuiTheme::label()),
        Span::styled(value, style),
    ])
}

fn button_line(button: &ActionButton) -> Line<'static> {
    let key = InputHandler::key_for(button.command);
    let text = match button.cost {
        Some(cost) => format!("[{key}] {} ({cost}g)", button.label()),
        None => format!("[{key}] {}", button.label()),
    };
    Line::from(Span::styled(text, RatatuiTheme::button(button.enabled)))
}
