//! Dataset overview component
//!
//! Renders summary statistics and a sample of rows

use super::super::state::ExplorerState;
use super::super::utils::{format_number, outcome_color};
use crate::consts::cli_consts::SAMPLE_ROW_COUNT;
use crate::dataset::{Column, Outcome};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

pub fn render_overview(f: &mut Frame, area: Rect, state: &ExplorerState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(SAMPLE_ROW_COUNT as u16 + 4),
        ])
        .split(area);

    render_counts_line(f, chunks[0], state);
    render_summary_table(f, chunks[1], state);
    render_sample_table(f, chunks[2], state);
}

fn render_counts_line(f: &mut Frame, area: Rect, state: &ExplorerState) {
    let counts = state.counts();
    let line = Line::from(vec![
        Span::styled(
            format!("{} complete records", counts.total()),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Survived: {}", counts.get(Outcome::Survived)),
            Style::default().fg(outcome_color(Outcome::Survived)),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Died: {}", counts.get(Outcome::Died)),
            Style::default().fg(outcome_color(Outcome::Died)),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_summary_table(f: &mut Frame, area: Rect, state: &ExplorerState) {
    let header = Row::new(
        ["column", "count", "mean", "std", "min", "25%", "50%", "75%", "max"]
            .into_iter()
            .map(|h| Cell::from(h).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))),
    );

    let rows: Vec<Row> = state
        .summaries()
        .iter()
        .map(|s| {
            Row::new(vec![
                Cell::from(s.column.header_name()),
                Cell::from(s.count.to_string()),
                Cell::from(format_number(s.mean)),
                Cell::from(format_number(s.std)),
                Cell::from(format_number(s.min)),
                Cell::from(format_number(s.q1)),
                Cell::from(format_number(s.median)),
                Cell::from(format_number(s.q3)),
                Cell::from(format_number(s.max)),
            ])
        })
        .collect();

    let mut widths = vec![Constraint::Length(26), Constraint::Length(6)];
    widths.extend(std::iter::repeat_n(Constraint::Length(9), 7));

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Summary Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(table, area);
}

fn render_sample_table(f: &mut Frame, area: Rect, state: &ExplorerState) {
    let header = Row::new(Column::ALL.into_iter().map(|c| {
        Cell::from(c.short_label())
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    }));

    let rows: Vec<Row> = state
        .table()
        .head(SAMPLE_ROW_COUNT)
        .iter()
        .map(|record| {
            let outcome = record.outcome();
            Row::new(Column::ALL.into_iter().map(|column| {
                if column == Column::DeathEvent {
                    // Show the raw 0/1 flag, tinted by outcome group.
                    Cell::from(format!("{:.0}", record.value(column)))
                        .style(Style::default().fg(outcome_color(outcome)))
                } else {
                    Cell::from(format_number(record.value(column)))
                }
            }))
        })
        .collect();

    let widths = vec![Constraint::Fill(1); Column::ALL.len()];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Sample Data ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(table, area);
}
