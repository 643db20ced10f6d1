use ratatui::{
    Frame,
    prelude::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::theme::theme;

/// What: Center a box of at most `width` x `height` inside `area`.
///
/// Details:
/// - The box is clamped to leave a 2-cell margin where the area allows it.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(4)).max(area.width.min(10));
    let h = height.min(area.height.saturating_sub(2)).max(area.height.min(3));
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

/// What: Clear `rect` and draw `lines` in a double-bordered box.
///
/// Inputs:
/// - `box_title`: Border title; empty for none
/// - `accent`: Border and title color
/// - `scroll`: Vertical scroll offset of the content
pub fn render_boxed_lines(
    f: &mut Frame,
    rect: Rect,
    box_title: &str,
    accent: Color,
    lines: Vec<Line<'static>>,
    scroll: u16,
) {
    let th = theme();
    f.render_widget(Clear, rect);
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(th.crust));
    if !box_title.is_empty() {
        block = block.title(Span::styled(
            format!(" {box_title} "),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));
    }
    let body = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.crust))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(block);
    f.render_widget(body, rect);
}
