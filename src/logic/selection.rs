use crate::state::AppState;

/// What: Restore the list selection after the displayed set was recomputed.
///
/// Inputs:
/// - `app`: Mutable application state (displayed, selected, `list_state`)
/// - `prev_id`: Id of the item highlighted before the recomputation, if any
///
/// Output:
/// - Selects the same item by id when it is still displayed; otherwise clamps the index, or
///   clears the selection when nothing is displayed.
pub fn restore_selection(app: &mut AppState, prev_id: Option<&str>) {
    let items = app.displayed.items();
    if items.is_empty() {
        app.selected = 0;
        app.list_state.select(None);
        return;
    }
    if let Some(id) = prev_id
        && let Some(pos) = items.iter().position(|it| it.id == id)
    {
        app.selected = pos;
    } else {
        app.selected = app.selected.min(items.len() - 1);
    }
    app.list_state.select(Some(app.selected));
}

/// What: Move the highlighted row by `delta`, clamped to the displayed range.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `delta`: Signed row offset (negative moves up)
pub fn move_selection(app: &mut AppState, delta: isize) {
    let len = app.displayed.len();
    if len == 0 {
        app.list_state.select(None);
        return;
    }
    let next = app.selected.saturating_add_signed(delta).min(len - 1);
    app.selected = next;
    app.list_state.select(Some(next));
}
