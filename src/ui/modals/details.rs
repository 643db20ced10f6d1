use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::state::NewsItem;
use crate::theme::theme;
use crate::util::{author_label, published_label, rating_stars, views_label};

use super::common::render_boxed_lines;

/// What: Render the full article overlay.
///
/// Inputs:
/// - `item`: Article with full details
/// - `scroll`: Body scroll offset
///
/// Details:
/// - Covers most of the screen; the body wraps and scrolls with the arrow keys.
pub fn render_details(f: &mut Frame, area: Rect, item: &NewsItem, scroll: u16) {
    let th = theme();
    let rect = Rect {
        x: area.x + area.width / 10,
        y: area.y + 1,
        width: area.width - area.width / 5,
        height: area.height.saturating_sub(2),
    }
    .intersection(area);

    let label = |s: &'static str| Span::styled(s, Style::default().fg(th.overlay1));
    let mut lines = vec![
        Line::from(Span::styled(
            item.title.clone(),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            label("Author: "),
            Span::styled(author_label(item), Style::default().fg(th.sapphire)),
        ]),
        Line::from(vec![
            label("Published: "),
            Span::styled(published_label(item), Style::default().fg(th.text)),
        ]),
        Line::from(vec![
            label("Views: "),
            Span::styled(views_label(item), Style::default().fg(th.lavender)),
        ]),
        Line::from(vec![
            label("Rating: "),
            Span::styled(
                rating_stars(item.rating.as_ref()),
                Style::default().fg(th.yellow),
            ),
            Span::styled(
                item.rating
                    .as_ref()
                    .map(|r| format!("  {} {}", r.number, r.badge))
                    .unwrap_or_default(),
                Style::default().fg(th.subtext0),
            ),
        ]),
    ];
    if let Some(url) = item.image_url.as_deref() {
        lines.push(Line::from(vec![
            label("Image: "),
            Span::styled(url.to_string(), Style::default().fg(th.overlay2)),
        ]));
    }
    lines.push(Line::default());
    lines.extend(
        item.details
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(th.text)))),
    );
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "↑/↓ scroll · Esc/Enter/q close",
        Style::default().fg(th.overlay1),
    )));

    render_boxed_lines(f, rect, "News details", th.mauve, lines, scroll);
}
