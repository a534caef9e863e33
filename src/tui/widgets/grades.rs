// Grades view: sortable table of draft-grade predictions.
//
// Columns mirror the original grades page: Name, School, Big Board (rank),
// Grade (aggregate, tier-colored), Success (probability), Games. Expanding
// a row reveals the detail panel: Comp/Att, pass and offense grades, and
// per-game averages.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::data::ProspectRecord;
use crate::grade::{self, Tier};
use crate::sort::SortField;
use crate::table::TableState;
use crate::tui::ViewState;

use super::{cursor_style, tier_style};

/// Column order for this view; the digit keys index into this.
pub const COLUMNS: &[(&str, SortField)] = &[
    ("Name", SortField::Name),
    ("School", SortField::School),
    ("Big Board", SortField::Rank),
    ("Grade", SortField::Grade),
    ("Success", SortField::SuccessProbability),
    ("Games", SortField::GamesPlayed),
];

/// Render the grades table into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let displayed = state.displayed();
    let table_state = &state.grades_table;

    let mut rows: Vec<Row> = Vec::with_capacity(displayed.len());
    for (i, prediction) in displayed.iter().enumerate() {
        rows.push(prediction_row(prediction, i == table_state.cursor));
        if table_state.is_expanded(&prediction.name) {
            rows.push(detail_row(prediction));
        }
    }

    let widths = [
        Constraint::Min(20),
        Constraint::Min(12),
        Constraint::Length(10),
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header_row(table_state))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Draft Grades ({})", displayed.len())),
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

fn prediction_row<'a>(prediction: &'a ProspectRecord, under_cursor: bool) -> Row<'a> {
    let stats = &prediction.stats;
    let grade_tier = Tier::for_grade(stats.grade);

    let row = Row::new(vec![
        Cell::from(prediction.name.as_str()),
        Cell::from(prediction.school.as_str()),
        Cell::from(grade::format_rank(stats.rank)),
        Cell::from(grade::format_grade(stats.grade)).style(tier_style(grade_tier)),
        Cell::from(grade::format_probability(stats.success_probability)),
        Cell::from(grade::format_count(stats.games_played)),
    ]);

    if under_cursor {
        row.style(cursor_style())
    } else {
        row
    }
}

/// Expanded detail panel rendered as one multi-line sub-row.
fn detail_row(prediction: &ProspectRecord) -> Row<'_> {
    let stats = &prediction.stats;

    let per_game = match &stats.per_game {
        Some(pg) => format!(
            "  Per game: {} yds, {} TD, {}/{} comp/att, {} BTT",
            grade::format_rate(pg.yards),
            grade::format_rate(pg.touchdowns),
            grade::format_rate(pg.completions),
            grade::format_rate(pg.attempts),
            grade::format_rate(pg.big_time_throws),
        ),
        None => format!("  Per game: {}", grade::NOT_AVAILABLE),
    };

    let lines = vec![
        Line::from(format!(
            "  Comp/Att: {}",
            grade::format_pair(stats.completions, stats.attempts)
        )),
        Line::from(format!(
            "  Pass grade: {}   Offense grade: {}",
            grade::format_grade(stats.grades_pass),
            grade::format_grade(stats.grades_offense),
        )),
        Line::from(per_game),
    ];

    Row::new(vec![Cell::from(Text::from(lines))])
        .height(3)
        .style(Style::default().add_modifier(Modifier::DIM))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::{PerGameStats, StatBlock};
    use crate::tui::{DataSet, ViewId};

    fn prediction(name: &str, grade: Option<f64>) -> ProspectRecord {
        ProspectRecord {
            name: name.to_string(),
            school: "Miami".to_string(),
            stats: StatBlock {
                rank: Some(1),
                completions: Some(305),
                attempts: Some(454),
                yards: Some(4313),
                touchdowns: Some(39),
                interceptions: Some(7),
                grades_offense: Some(92.5),
                grades_pass: Some(91.7),
                grade,
                success_probability: Some(0.61),
                games_played: Some(13),
                per_game: Some(PerGameStats {
                    yards: Some(331.8),
                    touchdowns: Some(3.0),
                    attempts: Some(34.9),
                    completions: Some(23.5),
                    big_time_throws: Some(2.4),
                }),
                ..StatBlock::default()
            },
            comparisons: Vec::new(),
        }
    }

    fn state_with(records: Vec<ProspectRecord>) -> ViewState {
        let mut state = ViewState::new(
            &Config::default(),
            DataSet::Loaded(Vec::new()),
            DataSet::Loaded(records),
        );
        state.switch_view(ViewId::Grades);
        state
    }

    #[test]
    fn columns_cover_the_original_grade_headers() {
        assert_eq!(COLUMNS.len(), 6);
        assert_eq!(COLUMNS[3].1, SortField::Grade);
        assert_eq!(COLUMNS[4].1, SortField::SuccessProbability);
    }

    #[test]
    fn render_does_not_panic_with_empty_state() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = state_with(Vec::new());
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_expanded_row() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = state_with(vec![
            prediction("Cam Ward", Some(88.2)),
            prediction("Shedeur Sanders", None),
        ]);
        state.grades_table.toggle_expanded("Cam Ward");
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_without_per_game_stats() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut record = prediction("Cam Ward", Some(88.2));
        record.stats.per_game = None;
        let mut state = state_with(vec![record]);
        state.grades_table.toggle_expanded("Cam Ward");
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
