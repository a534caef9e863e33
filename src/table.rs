// Per-table view state: sort toggle, accordion expansion, row cursor.
//
// Each table view owns one of these; the pure sort/classify functions take
// the sort spec as a parameter, so nothing here is ambient or shared. The
// state machine mirrors header-click semantics: selecting a new column
// starts ascending, re-selecting the active column flips direction, and
// there is no reachable "unsorted" state once a column has been chosen.

use crate::sort::{SortField, SortSpec};

#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Active sort, if any. Views set a documented per-view default at
    /// startup; a `None` here means identity (load) order.
    pub sort: Option<SortSpec>,
    /// Name of the expanded row, if any. Identity-based, so the expanded
    /// row stays expanded when a re-sort moves it.
    pub expanded: Option<String>,
    /// Cursor into the displayed (sorted) row order.
    pub cursor: usize,
}

impl TableState {
    pub fn with_default_sort(sort: Option<SortSpec>) -> TableState {
        TableState {
            sort,
            ..TableState::default()
        }
    }

    /// Header-click transition for `field`.
    ///
    /// Different column (or no active sort) -> ascending on that column;
    /// same column -> flip direction. Toggling twice restores the original
    /// direction, which together with the stable sort makes repeated
    /// toggling idempotent on the displayed order.
    pub fn toggle_sort(&mut self, field: SortField) {
        self.sort = Some(match self.sort {
            Some(spec) if spec.field == field => SortSpec {
                field,
                direction: spec.direction.toggled(),
            },
            _ => SortSpec::ascending(field),
        });
    }

    /// Accordion toggle for the row identified by `name`.
    ///
    /// Clicking the expanded row collapses it; clicking any other row
    /// moves the single expansion there. At most one row is expanded.
    pub fn toggle_expanded(&mut self, name: &str) {
        if self.expanded.as_deref() == Some(name) {
            self.expanded = None;
        } else {
            self.expanded = Some(name.to_string());
        }
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded.as_deref() == Some(name)
    }

    /// Move the cursor, clamped to `row_count` displayed rows.
    pub fn move_cursor(&mut self, delta: isize, row_count: usize) {
        if row_count == 0 {
            self.cursor = 0;
            return;
        }
        let max = row_count - 1;
        self.cursor = self
            .cursor
            .saturating_add_signed(delta)
            .min(max);
    }

    /// Re-clamp the cursor after the row count changes.
    pub fn clamp_cursor(&mut self, row_count: usize) {
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
