//! Explorer state management
//!
//! Holds the loaded table, the current view selection, and the key handling
//! that drives the sidebar.

use crate::dataset::{ClinicalTable, Column};
use crate::environment::Environment;
use crate::stats::{
    BoxGroup, ColumnSummary, CorrelationMatrix, OutcomeCounts, box_groups, correlation_matrix,
    describe, outcome_counts,
};
use crossterm::event::KeyCode;
use strum::IntoEnumIterator;

/// Top-level display modes listed in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumIter)]
pub enum Mode {
    Overview,
    Visualization,
    About,
}

/// Chart types available under the Visualization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum ChartKind {
    Count,
    Correlation,
    Scatter,
    Pairwise,
    Box,
}

impl ChartKind {
    /// Sidebar entry name.
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Count => "Count Plot",
            ChartKind::Correlation => "Correlation Heatmap",
            ChartKind::Scatter => "Scatter: Age vs Creatinine",
            ChartKind::Pairwise => "Pair Plot",
            ChartKind::Box => "Box Plot",
        }
    }

    /// One-line description shown above the chart.
    pub fn description(self) -> &'static str {
        match self {
            ChartKind::Count => "Count of death events over the follow-up period.",
            ChartKind::Correlation => "Pairwise correlation between features, annotated to two decimals.",
            ChartKind::Scatter => "Age against serum creatinine, colored by outcome.",
            ChartKind::Pairwise => "Pairwise relationships for a reduced feature set, histograms on the diagonal.",
            ChartKind::Box => "Distribution of the selected columns, split by outcome.",
        }
    }
}

/// The fully-resolved view to render. Each view's options travel with its
/// variant, so a chart can only be dispatched with the inputs it needs.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Overview,
    Visualization(Chart),
    About,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Count,
    Correlation,
    Scatter,
    Pairwise,
    /// Grouped box plots over the user's column multi-selection. An empty
    /// selection is legal and draws nothing.
    Box { columns: Vec<Column> },
}

/// Which sidebar list currently receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Modes,
    Charts,
    Columns,
}

/// State behind the explorer screen. The table is immutable; everything else
/// is cursor positions and caches derived from the selection.
#[derive(Debug)]
pub struct ExplorerState {
    /// The loaded clinical records table, read-only for the whole session.
    table: ClinicalTable,
    /// The environment the table was loaded from.
    pub environment: Environment,
    /// Whether to enable background colors.
    pub with_background_color: bool,

    mode: Mode,
    chart: ChartKind,
    focus: Focus,
    /// Cursor into [`Column::NUMERIC`] for the box-plot multi-select.
    column_cursor: usize,
    /// Toggle state per numeric column, aligned with [`Column::NUMERIC`].
    column_selected: [bool; Column::NUMERIC.len()],

    // Derived once from the immutable table.
    summaries: Vec<ColumnSummary>,
    counts: OutcomeCounts,
    correlation: CorrelationMatrix,
    // Recomputed when the box-plot selection changes.
    box_groups: Vec<BoxGroup>,
}

impl ExplorerState {
    /// Creates the explorer state and precomputes the view inputs that only
    /// depend on the table.
    pub fn new(table: ClinicalTable, environment: Environment, with_background_color: bool) -> Self {
        let summaries = describe(&table);
        let counts = outcome_counts(&table);
        let correlation = correlation_matrix(&table);

        Self {
            table,
            environment,
            with_background_color,
            mode: Mode::Overview,
            chart: ChartKind::Count,
            focus: Focus::Modes,
            column_cursor: 0,
            column_selected: [false; Column::NUMERIC.len()],
            summaries,
            counts,
            correlation,
            box_groups: Vec::new(),
        }
    }

    pub fn table(&self) -> &ClinicalTable {
        &self.table
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn chart(&self) -> ChartKind {
        self.chart
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn column_cursor(&self) -> usize {
        self.column_cursor
    }

    pub fn summaries(&self) -> &[ColumnSummary] {
        &self.summaries
    }

    pub fn counts(&self) -> OutcomeCounts {
        self.counts
    }

    pub fn correlation(&self) -> &CorrelationMatrix {
        &self.correlation
    }

    pub fn box_groups(&self) -> &[BoxGroup] {
        &self.box_groups
    }

    pub fn is_column_selected(&self, index: usize) -> bool {
        self.column_selected.get(index).copied().unwrap_or(false)
    }

    /// The columns currently toggled on for the box plot, in schema order.
    pub fn selected_columns(&self) -> Vec<Column> {
        Column::NUMERIC
            .iter()
            .enumerate()
            .filter(|(i, _)| self.column_selected[*i])
            .map(|(_, &c)| c)
            .collect()
    }

    /// Resolves the current sidebar selection into the tagged view to render.
    pub fn active_view(&self) -> View {
        match self.mode {
            Mode::Overview => View::Overview,
            Mode::About => View::About,
            Mode::Visualization => View::Visualization(match self.chart {
                ChartKind::Count => Chart::Count,
                ChartKind::Correlation => Chart::Correlation,
                ChartKind::Scatter => Chart::Scatter,
                ChartKind::Pairwise => Chart::Pairwise,
                ChartKind::Box => Chart::Box {
                    columns: self.selected_columns(),
                },
            }),
        }
    }

    /// Handles one key press. Quit keys are consumed by the app loop before
    /// this is reached.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Tab => self.cycle_focus(),
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if self.focus == Focus::Columns {
                    self.toggle_column();
                }
            }
            _ => {}
        }
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Modes if self.mode == Mode::Visualization => Focus::Charts,
            Focus::Charts if self.chart == ChartKind::Box => Focus::Columns,
            _ => Focus::Modes,
        };
    }

    fn move_cursor(&mut self, delta: isize) {
        match self.focus {
            Focus::Modes => {
                self.mode = cycled(Mode::iter().collect(), self.mode, delta);
                // Leaving Visualization invalidates a chart/column focus.
                if self.mode != Mode::Visualization {
                    self.focus = Focus::Modes;
                }
            }
            Focus::Charts => {
                self.chart = cycled(ChartKind::iter().collect(), self.chart, delta);
            }
            Focus::Columns => {
                let len = Column::NUMERIC.len() as isize;
                self.column_cursor =
                    (self.column_cursor as isize + delta).rem_euclid(len) as usize;
            }
        }
    }

    fn toggle_column(&mut self) {
        self.column_selected[self.column_cursor] = !self.column_selected[self.column_cursor];
        self.box_groups = box_groups(&self.table, &self.selected_columns());
    }
}

/// Steps `current` through `items` by `delta`, wrapping at both ends.
fn cycled<T: Copy + PartialEq>(items: Vec<T>, current: T, delta: isize) -> T {
    let len = items.len() as isize;
    let position = items
        .iter()
        .position(|&i| i == current)
        .unwrap_or(0) as isize;
    items[((position + delta).rem_euclid(len)) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ClinicalRecord;

    fn record(age: f64, death_event: u8) -> ClinicalRecord {
        ClinicalRecord {
            age,
            creatinine_phosphokinase: 120.0,
            ejection_fraction: 38.0,
            platelets: 260_000.0,
            serum_creatinine: 1.2,
            serum_sodium: 136.0,
            time: 80.0,
            death_event,
        }
    }

    fn state() -> ExplorerState {
        let table = ClinicalTable::new(
            vec![record(45.0, 0), record(60.0, 1), record(70.0, 0)],
            "test://fixture",
            0,
        );
        ExplorerState::new(table, Environment::Production, false)
    }

    #[test]
    fn starts_on_the_overview() {
        let state = state();
        assert_eq!(state.mode(), Mode::Overview);
        assert_eq!(state.active_view(), View::Overview);
    }

    #[test]
    fn down_key_cycles_modes_and_wraps() {
        let mut state = state();
        state.handle_key(KeyCode::Down);
        assert_eq!(state.mode(), Mode::Visualization);
        state.handle_key(KeyCode::Down);
        assert_eq!(state.mode(), Mode::About);
        state.handle_key(KeyCode::Down);
        assert_eq!(state.mode(), Mode::Overview);
        state.handle_key(KeyCode::Up);
        assert_eq!(state.mode(), Mode::About);
    }

    #[test]
    fn visualization_mode_dispatches_the_selected_chart() {
        let mut state = state();
        state.handle_key(KeyCode::Down); // -> Visualization
        assert_eq!(state.active_view(), View::Visualization(Chart::Count));

        state.handle_key(KeyCode::Tab); // focus chart list
        assert_eq!(state.focus(), Focus::Charts);
        state.handle_key(KeyCode::Down);
        assert_eq!(state.active_view(), View::Visualization(Chart::Correlation));
    }

    #[test]
    fn tab_only_reaches_columns_in_box_mode() {
        let mut state = state();
        state.handle_key(KeyCode::Down); // -> Visualization
        state.handle_key(KeyCode::Tab); // -> Charts
        state.handle_key(KeyCode::Tab); // not box yet, wraps to Modes
        assert_eq!(state.focus(), Focus::Modes);

        state.handle_key(KeyCode::Tab); // -> Charts
        state.handle_key(KeyCode::Up); // Count -> Box (wrap)
        assert_eq!(state.chart(), ChartKind::Box);
        state.handle_key(KeyCode::Tab); // -> Columns
        assert_eq!(state.focus(), Focus::Columns);
    }

    #[test]
    fn box_view_with_no_selection_has_no_groups() {
        let mut state = state();
        state.handle_key(KeyCode::Down); // -> Visualization
        state.handle_key(KeyCode::Tab);
        state.handle_key(KeyCode::Up); // -> Box
        assert_eq!(
            state.active_view(),
            View::Visualization(Chart::Box { columns: vec![] })
        );
        assert!(state.box_groups().is_empty());
    }

    #[test]
    fn toggling_columns_builds_box_groups() {
        let mut state = state();
        state.handle_key(KeyCode::Down); // -> Visualization
        state.handle_key(KeyCode::Tab); // -> Charts
        state.handle_key(KeyCode::Up); // -> Box
        state.handle_key(KeyCode::Tab); // -> Columns

        state.handle_key(KeyCode::Char(' ')); // toggle Age
        state.handle_key(KeyCode::Down);
        state.handle_key(KeyCode::Enter); // toggle CreatininePhosphokinase

        assert_eq!(
            state.selected_columns(),
            vec![Column::Age, Column::CreatininePhosphokinase]
        );
        assert_eq!(state.box_groups().len(), 2);
        for group in state.box_groups() {
            assert_eq!(group.entries.len(), 2);
        }

        // Toggling off again empties the selection.
        state.handle_key(KeyCode::Char(' '));
        state.handle_key(KeyCode::Up);
        state.handle_key(KeyCode::Char(' '));
        assert!(state.selected_columns().is_empty());
        assert!(state.box_groups().is_empty());
    }

    #[test]
    fn derived_statistics_are_precomputed() {
        let state = state();
        assert_eq!(state.summaries().len(), Column::ALL.len());
        assert_eq!(state.counts().total(), state.table().len());
        assert_eq!(state.correlation().size(), Column::ALL.len());
    }
}
