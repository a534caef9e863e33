// Prospects view: sortable table of draft-eligible quarterbacks.
//
// Columns mirror the original prospects page: Name, School, Rank, Comp/Att,
// Yards, TD/INT, Grade (offense grade, tier-colored). Expanding a row
// reveals its historical-comparison sub-rows inline, mapped onto the same
// columns.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::data::{ComparisonRecord, ProspectRecord};
use crate::grade::{self, Tier};
use crate::sort::SortField;
use crate::table::TableState;
use crate::tui::ViewState;

use super::{cursor_style, tier_style};

/// Column order for this view; the digit keys index into this.
pub const COLUMNS: &[(&str, SortField)] = &[
    ("Name", SortField::Name),
    ("School", SortField::School),
    ("Rank", SortField::Rank),
    ("Comp/Att", SortField::Completions),
    ("Yards", SortField::Yards),
    ("TD/INT", SortField::Touchdowns),
    ("Grade", SortField::GradesOffense),
];

/// Render the prospects table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let displayed = state.displayed();
    let table_state = &state.prospects_table;

    let mut rows: Vec<Row> = Vec::with_capacity(displayed.len());
    for (i, prospect) in displayed.iter().enumerate() {
        rows.push(prospect_row(prospect, i == table_state.cursor));
        if table_state.is_expanded(&prospect.name) {
            rows.extend(comparison_rows(prospect));
        }
    }

    let widths = [
        Constraint::Min(20),
        Constraint::Min(12),
        Constraint::Length(6),
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(7),
    ];

    let table = Table::new(rows, widths)
        .header(header_row(table_state))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Prospects ({})", displayed.len())),
        );

    frame.render_widget(table, area);
}

/// Header row with an arrow on the active sort column.
fn header_row(table_state: &TableState) -> Row<'static> {
    let cells: Vec<Cell> = COLUMNS
        .iter()
        .map(|(label, field)| {
            let text = match table_state.sort {
                Some(spec) if spec.field == *field => {
                    format!("{label} {}", spec.direction.arrow())
                }
                _ => (*label).to_string(),
            };
            Cell::from(text)
        })
        .collect();
    Row::new(cells).style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
}

fn prospect_row<'a>(prospect: &'a ProspectRecord, under_cursor: bool) -> Row<'a> {
    let stats = &prospect.stats;
    let grade_tier = Tier::for_grade(stats.grades_offense);

    let row = Row::new(vec![
        Cell::from(prospect.name.as_str()),
        Cell::from(prospect.school.as_str()),
        Cell::from(grade::format_rank(stats.rank)),
        Cell::from(grade::format_pair(stats.completions, stats.attempts)),
        Cell::from(grade::format_count(stats.yards)),
        Cell::from(grade::format_pair(stats.touchdowns, stats.interceptions)),
        Cell::from(grade::format_grade(stats.grades_offense)).style(tier_style(grade_tier)),
    ]);

    if under_cursor {
        row.style(cursor_style())
    } else {
        row
    }
}

/// Inline sub-rows for an expanded prospect's historical comparisons.
///
/// Comparisons reuse the main columns: name/year under Name, similarity
/// under School, NFL success score under Rank, then the shared stat
/// columns. An empty comparison list still gets one placeholder row so the
/// expansion is visible.
fn comparison_rows(prospect: &ProspectRecord) -> Vec<Row<'_>> {
    if prospect.comparisons.is_empty() {
        return vec![Row::new(vec![Cell::from("  (no historical comparisons)")])
            .style(Style::default().add_modifier(Modifier::DIM))];
    }
    prospect.comparisons.iter().map(comparison_row).collect()
}

fn comparison_row(comparison: &ComparisonRecord) -> Row<'_> {
    let stats = &comparison.stats;
    let grade_tier = Tier::for_grade(stats.grades_offense);

    Row::new(vec![
        Cell::from(format!(
            "  \u{2514} {} ({})",
            comparison.name, comparison.year
        )),
        Cell::from(grade::format_probability(Some(comparison.similarity))),
        Cell::from(grade::format_grade(comparison.nfl_success_score)),
        Cell::from(grade::format_pair(stats.completions, stats.attempts)),
        Cell::from(grade::format_count(stats.yards)),
        Cell::from(grade::format_pair(stats.touchdowns, stats.interceptions)),
        Cell::from(grade::format_grade(stats.grades_offense)).style(tier_style(grade_tier)),
    ])
    .style(Style::default().add_modifier(Modifier::DIM))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
