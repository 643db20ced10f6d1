use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::state::{AppState, NewsItem, SortOrder, StatusFilter};
use crate::theme::{Theme, theme};
use crate::util::{
    author_label, excerpt, published_label, rating_stars, truncate_to_width, views_label,
};

/// What: Render the filter buttons, the sort selector and the count line.
///
/// Details:
/// - The active filter is drawn as a filled button; the count line is right aligned.
pub fn render_controls(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(44)])
        .split(inner);

    let mut spans = filter_spans(&th, app.news.status_filter());
    spans.push(Span::raw("   "));
    spans.extend(sort_spans(&th, app.news.sort_order()));
    f.render_widget(Paragraph::new(Line::from(spans)), cols[0]);

    let count = Paragraph::new(Span::styled(
        app.count_line(),
        Style::default().fg(th.green).add_modifier(Modifier::BOLD),
    ))
    .alignment(ratatui::layout::Alignment::Right);
    f.render_widget(count, cols[1]);
}

/// Filter buttons with the active one highlighted.
fn filter_spans(th: &Theme, active: StatusFilter) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(StatusFilter::ALL.len() * 2);
    for filter in StatusFilter::ALL {
        let style = if filter == active {
            Style::default()
                .fg(th.crust)
                .bg(th.sapphire)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext0)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }
    spans
}

/// Sort selector label.
fn sort_spans(th: &Theme, order: SortOrder) -> [Span<'static>; 2] {
    [
        Span::styled("Sort: ", Style::default().fg(th.overlay1)),
        Span::styled(
            order.label(),
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
        ),
    ]
}

/// What: Render the displayed news as a selectable list.
///
/// Details:
/// - Each entry spans three rows: title, excerpt and a meta line.
/// - An empty displayed set shows the count text instead of a list.
pub fn render_list(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let block = Block::default()
        .title(Span::styled(
            app.active_category()
                .map_or_else(|| " News ".to_string(), |c| format!(" {} ", c.category_name)),
            Style::default().fg(th.overlay1),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.surface2));

    if app.displayed.is_empty() {
        let text = if app.loaded_category_id.is_some() {
            app.displayed.count_text()
        } else {
            String::new()
        };
        let empty = Paragraph::new(Span::styled(text, Style::default().fg(th.overlay2)))
            .alignment(ratatui::layout::Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Borders plus the highlight symbol
    let width = usize::from(area.width.saturating_sub(4));
    let items: Vec<ListItem> = app
        .displayed
        .items()
        .iter()
        .map(|item| news_list_item(&th, item, width))
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().bg(th.surface2))
        .highlight_symbol("▌ ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// What: Build the three-row list entry of one article.
fn news_list_item(th: &Theme, item: &NewsItem, width: usize) -> ListItem<'static> {
    let mut title = vec![Span::styled(
        truncate_to_width(&item.title, width.saturating_sub(24)),
        Style::default().fg(th.text).add_modifier(Modifier::BOLD),
    )];
    if item.is_todays_pick() {
        title.push(Span::styled("  today's pick", Style::default().fg(th.green)));
    }
    if item.is_trending() {
        title.push(Span::styled("  trending", Style::default().fg(th.red)));
    }

    let body = Line::from(Span::styled(
        truncate_to_width(&excerpt(&item.details), width),
        Style::default().fg(th.subtext0),
    ));

    let meta = Line::from(vec![
        Span::styled(author_label(item), Style::default().fg(th.sapphire)),
        Span::styled("  ·  ", Style::default().fg(th.surface2)),
        Span::styled(published_label(item), Style::default().fg(th.overlay2)),
        Span::styled("  ·  ", Style::default().fg(th.surface2)),
        Span::styled(views_label(item), Style::default().fg(th.lavender)),
        Span::styled("  ·  ", Style::default().fg(th.surface2)),
        Span::styled(
            rating_stars(item.rating.as_ref()),
            Style::default().fg(th.yellow),
        ),
    ]);

    ListItem::new(vec![Line::from(title), body, meta])
}
