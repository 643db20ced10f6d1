use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Tabs},
};

use crate::state::AppState;
use crate::theme::theme;

/// What: Render the category tabs.
///
/// Details:
/// - Shows a placeholder while the category list has not arrived.
pub fn render_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(
            " Headliner ",
            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));

    let titles: Vec<Line> = app
        .categories
        .iter()
        .map(|c| Line::from(c.category_name.clone()))
        .collect();
    if titles.is_empty() {
        let placeholder = ratatui::widgets::Paragraph::new(Span::styled(
            "Loading categories...",
            Style::default().fg(th.overlay1),
        ))
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let tabs = Tabs::new(titles)
        .block(block)
        .style(Style::default().fg(th.subtext0).bg(th.base))
        .highlight_style(
            Style::default()
                .fg(th.sapphire)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .select(app.active_category)
        .divider(Span::styled("|", Style::default().fg(th.surface2)));
    f.render_widget(tabs, area);
}
