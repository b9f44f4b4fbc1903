//! Explorer sidebar component
//!
//! Renders the mode selector, the chart-type selector, and the box-plot
//! column multi-select

use super::super::state::{ChartKind, ExplorerState, Focus, Mode};
use crate::dataset::Column;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use strum::IntoEnumIterator;

pub fn render_sidebar(f: &mut Frame, area: Rect, state: &ExplorerState) {
    let show_charts = state.mode() == Mode::Visualization;
    let show_columns = show_charts && state.chart() == ChartKind::Box;

    let mut constraints = vec![Constraint::Length(Mode::iter().count() as u16 + 2)];
    if show_charts {
        constraints.push(Constraint::Length(ChartKind::iter().count() as u16 + 2));
    }
    if show_columns {
        constraints.push(Constraint::Length(Column::NUMERIC.len() as u16 + 2));
    }
    constraints.push(Constraint::Fill(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_mode_list(f, chunks[0], state);
    if show_charts {
        render_chart_list(f, chunks[1], state);
    }
    if show_columns {
        render_column_list(f, chunks[2], state);
    }
}

fn render_mode_list(f: &mut Frame, area: Rect, state: &ExplorerState) {
    let lines: Vec<Line> = Mode::iter()
        .map(|mode| selector_line(mode.to_string(), mode == state.mode(), None))
        .collect();

    let block = bordered(" Display ", state.focus() == Focus::Modes);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_chart_list(f: &mut Frame, area: Rect, state: &ExplorerState) {
    let lines: Vec<Line> = ChartKind::iter()
        .map(|chart| selector_line(chart.name().to_string(), chart == state.chart(), None))
        .collect();

    let block = bordered(" Plot Type ", state.focus() == Focus::Charts);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_column_list(f: &mut Frame, area: Rect, state: &ExplorerState) {
    let lines: Vec<Line> = Column::NUMERIC
        .iter()
        .enumerate()
        .map(|(i, column)| {
            let checked = state.is_column_selected(i);
            let cursor = state.focus() == Focus::Columns && i == state.column_cursor();
            selector_line(
                format!("[{}] {}", if checked { "x" } else { " " }, column.label()),
                cursor,
                Some(checked),
            )
        })
        .collect();

    let block = bordered(" Columns ", state.focus() == Focus::Columns);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// One selector row. `active` marks the cursor/current entry; `checked`
/// (column list only) brightens toggled-on entries.
fn selector_line(text: String, active: bool, checked: Option<bool>) -> Line<'static> {
    let marker = if active { "\u{25b8} " } else { "  " };
    let style = match (active, checked) {
        (true, _) => Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
        (false, Some(true)) => Style::default().fg(Color::LightGreen),
        _ => Style::default().fg(Color::Gray),
    };
    Line::from(vec![Span::styled(format!("{}{}", marker, text), style)])
}

fn bordered(title: &'static str, focused: bool) -> Block<'static> {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .padding(Padding::ZERO)
}
