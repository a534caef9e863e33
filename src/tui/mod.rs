// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` built once at startup from the loaded data
// snapshots. All reordering is derived fresh from the immutable records and
// the current sort spec on every render; the loop re-draws at ~30 fps and
// applies keyboard events between ticks.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyModifiers};
use futures_util::StreamExt;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::config::Config;
use crate::data::{DataError, ProspectRecord};
use crate::grade::Tier;
use crate::sort;
use crate::table::TableState;

use layout::build_layout;
use widgets::tier_color;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Which table view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Prospects,
    Grades,
}

impl ViewId {
    pub fn title(self) -> &'static str {
        match self {
            ViewId::Prospects => "2025 QB Prospects Analysis",
            ViewId::Grades => "2025 QB Draft Grades",
        }
    }
}

/// One view's data snapshot: either the decoded records or the load error.
///
/// A failed load renders as an error banner over an empty table; the sort
/// and expansion logic simply operate on the empty record set.
#[derive(Debug)]
pub enum DataSet {
    Loaded(Vec<ProspectRecord>),
    Failed(String),
}

impl DataSet {
    pub fn from_result(result: Result<Vec<ProspectRecord>, DataError>) -> DataSet {
        match result {
            Ok(records) => DataSet::Loaded(records),
            Err(e) => DataSet::Failed(e.to_string()),
        }
    }

    pub fn records(&self) -> &[ProspectRecord] {
        match self {
            DataSet::Loaded(records) => records,
            DataSet::Failed(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DataSet::Loaded(_) => None,
            DataSet::Failed(message) => Some(message),
        }
    }
}

/// All TUI state: the two immutable data snapshots plus the per-view table
/// state (sort spec, expanded row, cursor) and the active view selector.
pub struct ViewState {
    pub active_view: ViewId,
    pub prospects: DataSet,
    pub predictions: DataSet,
    pub prospects_table: TableState,
    pub grades_table: TableState,
}

impl ViewState {
    pub fn new(config: &Config, prospects: DataSet, predictions: DataSet) -> ViewState {
        ViewState {
            active_view: ViewId::Prospects,
            prospects,
            predictions,
            prospects_table: TableState::with_default_sort(config.prospects_sort),
            grades_table: TableState::with_default_sort(config.grades_sort),
        }
    }

    pub fn active_dataset(&self) -> &DataSet {
        match self.active_view {
            ViewId::Prospects => &self.prospects,
            ViewId::Grades => &self.predictions,
        }
    }

    pub fn active_table(&self) -> &TableState {
        match self.active_view {
            ViewId::Prospects => &self.prospects_table,
            ViewId::Grades => &self.grades_table,
        }
    }

    pub fn active_table_mut(&mut self) -> &mut TableState {
        match self.active_view {
            ViewId::Prospects => &mut self.prospects_table,
            ViewId::Grades => &mut self.grades_table,
        }
    }

    /// The active view's records in display order.
    pub fn displayed(&self) -> Vec<&ProspectRecord> {
        sort::sorted(self.active_dataset().records(), self.active_table().sort)
    }

    pub fn switch_view(&mut self, view: ViewId) {
        self.active_view = view;
    }
}

// ---------------------------------------------------------------------------
// Frame rendering
// ---------------------------------------------------------------------------

/// Render the complete frame for the current view.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    render_status_bar(frame, layout.status_bar, state);
    render_banner(frame, layout.banner, state);

    if let Some(message) = state.active_dataset().error() {
        render_error(frame, layout.table_panel, message);
    } else {
        match state.active_view {
            ViewId::Prospects => widgets::prospects::render(frame, layout.table_panel, state),
            ViewId::Grades => widgets::grades::render(frame, layout.table_panel, state),
        }
    }

    render_help_bar(frame, layout.help_bar);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &ViewState) {
    let view_name = match state.active_view {
        ViewId::Prospects => "Prospects",
        ViewId::Grades => "Grades",
    };
    let sort_desc = match state.active_table().sort {
        Some(spec) => format!("{} {}", spec.field.path(), spec.direction.arrow()),
        None => "none".to_string(),
    };
    let text = format!(
        " {} | {} records | sort: {}",
        view_name,
        state.active_dataset().records().len(),
        sort_desc
    );
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::White),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Prospects: page title. Grades: the grade-scale legend.
fn render_banner(frame: &mut Frame, area: Rect, state: &ViewState) {
    let line = match state.active_view {
        ViewId::Prospects => Line::from(Span::styled(
            format!(" {}", state.active_view.title()),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        ViewId::Grades => legend_line(),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// One-line grade scale: colored tier labels with their ranges.
fn legend_line() -> Line<'static> {
    let entries = [
        (Tier::Elite, "90+ Elite"),
        (Tier::Good, "80-89 Good"),
        (Tier::Average, "70-79 Average"),
        (Tier::BelowAverage, "60-69 Below Avg"),
        (Tier::Poor, "<60 Poor"),
    ];
    let mut spans = vec![Span::raw(" ")];
    for (i, (tier, label)) in entries.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  |  "));
        }
        spans.push(Span::styled(
            *label,
            Style::default()
                .fg(tier_color(*tier))
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!("Error loading data: {message}"),
        Style::default().fg(Color::Red),
    )))
    .block(Block::default().borders(Borders::ALL).title("Error"));
    frame.render_widget(paragraph, area);
}

fn render_help_bar(frame: &mut Frame, area: Rect) {
    let text = " q:Quit | Tab/p/g:View | j/k:Row | Enter:Expand | 1-7:Sort column";
    let paragraph = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop until the user quits.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop over keyboard input and render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(mut view_state: ViewState) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    // Restore the terminal even if rendering panics; chain the original
    // hook so the panic message still prints.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if key_event.code == KeyCode::Char('c')
                            && key_event.modifiers.contains(KeyModifiers::CONTROL)
                        {
                            break;
                        }
                        if key_event.code == KeyCode::Char('q') {
                            break;
                        }
                        input::handle_key(key_event, &mut view_state);
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events: the next tick redraws.
                    }
                    Some(Err(_)) | None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
