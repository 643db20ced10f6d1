//! TUI rendering for headliner.
//!
//! The screen is split top to bottom into category tabs, the filter/sort bar
//! with the count line, the news list and a key hint footer. Overlays are drawn
//! last.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

/// Footer with key hints.
mod footer;
/// Category tabs.
mod header;
/// Overlays (loader, alert, help, details).
mod modals;
/// Filter/sort bar, count line and news list.
mod results;

/// What: Draw one frame.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (mutable for the list widget state)
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_tabs(f, app, chunks[0]);
    results::render_controls(f, app, chunks[1]);
    results::render_list(f, app, chunks[2]);
    footer::render_footer(f, chunks[3]);

    modals::render_modals(f, app, area);
}
