// Keyboard input handling.
//
// Translates crossterm key events into ViewState mutations: view switching,
// row cursor movement, expansion toggling, and the digit keys that stand in
// for header clicks on the sortable columns.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::sort::SortField;

use super::{widgets, ViewId, ViewState};

/// Handle a keyboard event by mutating `ViewState`.
///
/// Quit keys (q, Ctrl+C) are handled by the event loop before this is
/// called; everything here is a local state change.
pub fn handle_key(key_event: KeyEvent, state: &mut ViewState) {
    // On Windows, crossterm emits both Press and Release events for each
    // physical keypress; ignoring non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        // View switching
        KeyCode::Tab => {
            let next = match state.active_view {
                ViewId::Prospects => ViewId::Grades,
                ViewId::Grades => ViewId::Prospects,
            };
            state.switch_view(next);
        }
        KeyCode::Char('p') => state.switch_view(ViewId::Prospects),
        KeyCode::Char('g') => state.switch_view(ViewId::Grades),

        // Row cursor
        KeyCode::Up | KeyCode::Char('k') => {
            let rows = state.displayed().len();
            state.active_table_mut().move_cursor(-1, rows);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let rows = state.displayed().len();
            state.active_table_mut().move_cursor(1, rows);
        }
        KeyCode::Home => {
            state.active_table_mut().cursor = 0;
        }
        KeyCode::End => {
            let rows = state.displayed().len();
            state.active_table_mut().cursor = rows.saturating_sub(1);
        }

        // Expansion toggle on the row under the cursor
        KeyCode::Enter | KeyCode::Char(' ') => {
            toggle_expansion_at_cursor(state);
        }
        KeyCode::Esc => {
            state.active_table_mut().expanded = None;
        }

        // Header clicks: digit N toggles sort on the view's Nth column
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            if let Some(field) = column_field(state.active_view, index) {
                toggle_sort(state, field);
            }
        }

        _ => {}
    }
}

/// The sortable field behind column `index` of the given view.
fn column_field(view: ViewId, index: usize) -> Option<SortField> {
    let columns = match view {
        ViewId::Prospects => widgets::prospects::COLUMNS,
        ViewId::Grades => widgets::grades::COLUMNS,
    };
    columns.get(index).map(|(_, field)| *field)
}

fn toggle_sort(state: &mut ViewState, field: SortField) {
    state.active_table_mut().toggle_sort(field);
    // The cursor tracks a position, not a record; re-clamp in case the
    // displayed count changed (it does not today, but this keeps the
    // invariant local).
    let rows = state.displayed().len();
    state.active_table_mut().clamp_cursor(rows);
}

fn toggle_expansion_at_cursor(state: &mut ViewState) {
    let name = {
        let displayed = state.displayed();
        let cursor = state.active_table().cursor;
        displayed.get(cursor).map(|record| record.name.clone())
    };
    if let Some(name) = name {
        state.active_table_mut().toggle_expanded(&name);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
