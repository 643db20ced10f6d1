use ratatui::{
    Frame,
    prelude::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::theme::theme;

/// Key hints shown on the last row.
const HINTS: [(&str, &str); 7] = [
    ("←/→", "category"),
    ("↑/↓", "move"),
    ("Enter", "details"),
    ("a/p/t", "filter"),
    ("d/h/l", "sort"),
    ("r", "reload"),
    ("?", "help"),
];

/// Render the key hint footer.
pub fn render_footer(f: &mut Frame, area: Rect) {
    let th = theme();
    let mut spans = Vec::with_capacity(HINTS.len() * 3);
    for (key, action) in HINTS {
        spans.push(Span::styled(format!(" {key} "), Style::default().fg(th.lavender)));
        spans.push(Span::styled(action, Style::default().fg(th.overlay1)));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(" q ", Style::default().fg(th.lavender)));
    spans.push(Span::styled("quit", Style::default().fg(th.overlay1)));
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.base)),
        area,
    );
}
