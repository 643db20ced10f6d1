use crossterm::event::{KeyCode, KeyEvent};

use crate::app::Command;
use crate::state::Modal;

/// Lines scrolled by `PageUp`/`PageDown` in the detail overlay.
const DETAILS_PAGE: i16 = 10;

/// What: Bindings active while an overlay is open.
///
/// Inputs:
/// - `ke`: Key press
/// - `modal`: Open overlay
///
/// Output:
/// - Close, retry or scroll commands; `None` for unbound keys.
pub(super) fn handle_modal_key(ke: &KeyEvent, modal: &Modal) -> Option<Command> {
    match modal {
        Modal::None => None,
        Modal::Alert { .. } => match ke.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Command::CloseModal),
            KeyCode::Char('r') | KeyCode::F(5) => Some(Command::Reload),
            _ => None,
        },
        Modal::Help => match ke.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q' | '?') => Some(Command::CloseModal),
            _ => None,
        },
        Modal::Details { .. } => match ke.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => Some(Command::CloseModal),
            KeyCode::Down | KeyCode::Char('j') => Some(Command::ScrollDetails(1)),
            KeyCode::Up | KeyCode::Char('k') => Some(Command::ScrollDetails(-1)),
            KeyCode::PageDown => Some(Command::ScrollDetails(DETAILS_PAGE)),
            KeyCode::PageUp => Some(Command::ScrollDetails(-DETAILS_PAGE)),
            _ => None,
        },
    }
}
