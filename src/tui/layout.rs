// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the prospect board:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                               |
// +--------------------------------------------------+
// | Banner (1 row): view title or grade-scale legend |
// +--------------------------------------------------+
// | Table Panel (fill)                               |
// |                                                  |
// +--------------------------------------------------+
// | Help Bar (1 row)                                 |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: view name, record count, active sort.
    pub status_bar: Rect,
    /// Second row: view title (prospects) or grade-scale legend (grades).
    pub banner: Rect,
    /// The sortable table for the active view.
    pub table_panel: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the board layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Length(1), // banner
            Constraint::Min(6),    // table panel
            Constraint::Length(1), // help bar
        ])
        .split(area);

    AppLayout {
        status_bar: vertical[0],
        banner: vertical[1],
        table_panel: vertical[2],
        help_bar: vertical[3],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
