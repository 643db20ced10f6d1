//! Overlay rendering.

use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::state::{AppState, Modal};
use crate::theme::theme;

mod common;
mod details;

use common::{centered_rect, render_boxed_lines};

/// What: Draw the active modal and, above everything, the loader.
pub fn render_modals(f: &mut Frame, app: &AppState, area: Rect) {
    match &app.modal {
        Modal::None => {}
        Modal::Alert { title, message } => render_alert(f, area, title, message),
        Modal::Help => render_help(f, area),
        Modal::Details { item, scroll } => details::render_details(f, area, item, *scroll),
    }
    if app.is_loading() {
        render_loader(f, area);
    }
}

/// Error alert with a headline and detail text.
fn render_alert(f: &mut Frame, area: Rect, title: &str, message: &str) {
    let th = theme();
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(message.to_string(), Style::default().fg(th.text))),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter or Esc to close, r to retry",
            Style::default().fg(th.overlay1),
        )),
    ];
    let rect = centered_rect(area, 60, 9);
    render_boxed_lines(f, rect, "Error", th.red, lines, 0);
}

/// Key binding overview.
fn render_help(f: &mut Frame, area: Rect) {
    let th = theme();
    let rows: [(&str, &str); 13] = [
        ("←/→, Tab", "Previous / next category"),
        ("1-9", "Jump to category"),
        ("↑/↓, j/k", "Move selection"),
        ("PgUp/PgDn", "Move by a page"),
        ("Home/End, g/G", "First / last item"),
        ("Enter", "Open article details"),
        ("a", "Show all items"),
        ("p", "Show today's picks"),
        ("t", "Show trending items"),
        ("d / h / l", "Default / highest / lowest views first"),
        ("s, Shift+Tab", "Cycle sort order"),
        ("r, F5", "Reload"),
        ("q, Ctrl+C", "Quit"),
    ];
    let lines: Vec<Line<'static>> = rows
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{key:<16}"),
                    Style::default().fg(th.lavender).add_modifier(Modifier::BOLD),
                ),
                Span::styled((*action).to_string(), Style::default().fg(th.text)),
            ])
        })
        .collect();
    let rect = centered_rect(area, 64, 17);
    render_boxed_lines(f, rect, "Help", th.mauve, lines, 0);
}

/// Small "Loading..." box.
fn render_loader(f: &mut Frame, area: Rect) {
    let th = theme();
    let rect = centered_rect(area, 24, 3);
    let lines = vec![Line::from(Span::styled(
        "Loading...",
        Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
    ))];
    render_boxed_lines(f, rect, "", th.yellow, lines, 0);
}
