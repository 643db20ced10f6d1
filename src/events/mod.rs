//! Input layer: maps terminal events to [`Command`]s.
//!
//! Handlers only read [`AppState`] to pick the right binding; every state change
//! happens in [`crate::app::apply_command`].

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::Command;
use crate::state::{AppState, SortOrder, StatusFilter};

mod modals;

/// Rows skipped by `PageUp`/`PageDown`.
const PAGE_ROWS: isize = 10;

/// What: Translate one terminal event into a command.
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: Current state (decides between modal and list bindings)
///
/// Output:
/// - `Some(Command)` for a bound key; `None` for everything else.
///
/// Details:
/// - Only key presses are considered; releases, repeats, mouse and resize events yield `None`.
/// - `Ctrl+C` quits regardless of the open overlay.
#[must_use]
pub fn handle_event(ev: &CEvent, app: &AppState) -> Option<Command> {
    let CEvent::Key(ke) = ev else {
        return None;
    };
    if ke.kind != KeyEventKind::Press {
        return None;
    }
    if ke.modifiers.contains(KeyModifiers::CONTROL) && ke.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    if app.modal.is_open() {
        return modals::handle_modal_key(ke, &app.modal);
    }
    handle_list_key(ke)
}

/// Bindings active while no overlay is open.
fn handle_list_key(ke: &KeyEvent) -> Option<Command> {
    let cmd = match ke.code {
        KeyCode::Char('q') => Command::Quit,
        KeyCode::Char('?') | KeyCode::F(1) => Command::ShowHelp,
        KeyCode::Char('r') | KeyCode::F(5) => Command::Reload,
        KeyCode::Char('a') => Command::SetStatusFilter(StatusFilter::None),
        KeyCode::Char('p') => Command::SetStatusFilter(StatusFilter::TodaysPick),
        KeyCode::Char('t') => Command::SetStatusFilter(StatusFilter::Trending),
        KeyCode::Char('d') => Command::SetSortOrder(SortOrder::Default),
        KeyCode::Char('h') => Command::SetSortOrder(SortOrder::HighestFirst),
        KeyCode::Char('l') => Command::SetSortOrder(SortOrder::LowestFirst),
        KeyCode::Char('s') | KeyCode::BackTab => Command::CycleSortOrder,
        KeyCode::Right | KeyCode::Tab => Command::NextCategory,
        KeyCode::Left => Command::PrevCategory,
        KeyCode::Down | KeyCode::Char('j') => Command::MoveSelection(1),
        KeyCode::Up | KeyCode::Char('k') => Command::MoveSelection(-1),
        KeyCode::PageDown => Command::MoveSelection(PAGE_ROWS),
        KeyCode::PageUp => Command::MoveSelection(-PAGE_ROWS),
        KeyCode::Home | KeyCode::Char('g') => Command::MoveSelection(isize::MIN),
        KeyCode::End | KeyCode::Char('G') => Command::MoveSelection(isize::MAX),
        KeyCode::Enter => Command::OpenDetails,
        // 1-9 pick a category tab directly
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Command::SelectCategory(index)
        }
        _ => return None,
    };
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Modal;
    use crate::test_utils::{new_app, news};
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    /// What: Filter and sort keys map to one-axis commands
    ///
    /// - Input: a/p/t, d/h/l, s and Shift+Tab with no overlay
    /// - Output: Matching `SetStatusFilter`, `SetSortOrder` and `CycleSortOrder`
    fn events_filter_and_sort_keys() {
        let app = new_app();
        let cases = [
            ('a', Command::SetStatusFilter(StatusFilter::None)),
            ('p', Command::SetStatusFilter(StatusFilter::TodaysPick)),
            ('t', Command::SetStatusFilter(StatusFilter::Trending)),
            ('d', Command::SetSortOrder(SortOrder::Default)),
            ('h', Command::SetSortOrder(SortOrder::HighestFirst)),
            ('l', Command::SetSortOrder(SortOrder::LowestFirst)),
            ('s', Command::CycleSortOrder),
        ];
        for (c, expected) in cases {
            assert_eq!(handle_event(&key(KeyCode::Char(c)), &app), Some(expected), "key {c}");
        }
        assert_eq!(
            handle_event(&key(KeyCode::BackTab), &app),
            Some(Command::CycleSortOrder)
        );
    }

    #[test]
    /// What: Navigation keys map to category and selection commands
    ///
    /// - Input: arrows, Tab, j/k, digits, Enter
    /// - Output: Category switches, selection moves, details request
    fn events_navigation_keys() {
        let app = new_app();
        assert_eq!(handle_event(&key(KeyCode::Right), &app), Some(Command::NextCategory));
        assert_eq!(handle_event(&key(KeyCode::Tab), &app), Some(Command::NextCategory));
        assert_eq!(handle_event(&key(KeyCode::Left), &app), Some(Command::PrevCategory));
        assert_eq!(handle_event(&key(KeyCode::Char('j')), &app), Some(Command::MoveSelection(1)));
        assert_eq!(handle_event(&key(KeyCode::Up), &app), Some(Command::MoveSelection(-1)));
        assert_eq!(
            handle_event(&key(KeyCode::Char('3')), &app),
            Some(Command::SelectCategory(2))
        );
        assert_eq!(handle_event(&key(KeyCode::Enter), &app), Some(Command::OpenDetails));
        assert_eq!(handle_event(&key(KeyCode::Char('z')), &app), None);
    }

    #[test]
    /// What: Overlays capture keys; list bindings are inactive
    ///
    /// - Input: Help modal open; 't' and Esc
    /// - Output: 't' ignored; Esc closes
    fn events_modal_captures_keys() {
        let mut app = new_app();
        app.modal = Modal::Help;
        assert_eq!(handle_event(&key(KeyCode::Char('t')), &app), None);
        assert_eq!(handle_event(&key(KeyCode::Esc), &app), Some(Command::CloseModal));

        app.modal = Modal::Details {
            item: Box::new(news("x", None, false, false)),
            scroll: 0,
        };
        assert_eq!(handle_event(&key(KeyCode::Char('q')), &app), Some(Command::CloseModal));
        assert_eq!(
            handle_event(&key(KeyCode::Down), &app),
            Some(Command::ScrollDetails(1))
        );
    }

    #[test]
    /// What: The retry key advertised by the alert re-issues the request
    ///
    /// - Input: Alert open; 'r', F5, 't'
    /// - Output: `Reload` for 'r' and F5; list bindings like 't' stay inactive
    fn events_alert_retry_key() {
        let mut app = new_app();
        app.modal = Modal::Alert {
            title: "News could not be found!".into(),
            message: "HTTP 500".into(),
        };
        assert_eq!(handle_event(&key(KeyCode::Char('r')), &app), Some(Command::Reload));
        assert_eq!(handle_event(&key(KeyCode::F(5)), &app), Some(Command::Reload));
        assert_eq!(handle_event(&key(KeyCode::Char('t')), &app), None);
        assert_eq!(handle_event(&key(KeyCode::Esc), &app), Some(Command::CloseModal));
    }

    #[test]
    /// What: Ctrl+C quits even with an overlay open; non-press events are ignored
    ///
    /// - Input: Ctrl+C under an alert; key release; mouse move
    /// - Output: `Quit`; `None`; `None`
    fn events_ctrl_c_and_ignored_events() {
        let mut app = new_app();
        app.modal = Modal::Alert {
            title: "t".into(),
            message: "m".into(),
        };
        let ctrl_c = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&ctrl_c, &app), Some(Command::Quit));

        let release = CEvent::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(handle_event(&release, &new_app()), None);

        let mouse = CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(handle_event(&mouse, &new_app()), None);
    }
}
