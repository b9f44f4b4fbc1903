//! Pair plot: scatter/histogram grid over the reduced feature set

use super::super::super::state::ExplorerState;
use super::super::super::utils::outcome_color;
use crate::consts::cli_consts::HISTOGRAM_BINS;
use crate::dataset::{ClinicalTable, Column, Outcome};
use crate::stats::histogram;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders};

/// Render the 4x4 grid: per-feature histograms on the diagonal, mini
/// scatter plots elsewhere. The outcome acts as the hue, not as an axis.
pub fn render_pair_grid(f: &mut Frame, area: Rect, state: &ExplorerState) {
    let features = Column::PAIRWISE;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, features.len() as u32); 4])
        .split(area);

    for (i, &y_col) in features.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, features.len() as u32); 4])
            .split(rows[i]);

        for (j, &x_col) in features.iter().enumerate() {
            if i == j {
                render_histogram_cell(f, cells[j], state.table(), x_col);
            } else {
                render_scatter_cell(f, cells[j], state.table(), x_col, y_col);
            }
        }
    }
}

/// Diagonal cell: overlaid per-outcome histograms of one feature.
fn render_histogram_cell(f: &mut Frame, area: Rect, table: &ClinicalTable, column: Column) {
    let values = table.column_values(column);
    let (min, max) = value_range(&values);

    // Bin each outcome group over the shared feature range so the bars
    // line up.
    let groups: Vec<(Outcome, Vec<crate::stats::HistogramBin>)> = Outcome::ALL
        .iter()
        .map(|&outcome| {
            (
                outcome,
                histogram(&table.column_values_for(column, outcome), HISTOGRAM_BINS),
            )
        })
        .collect();

    let max_count = groups
        .iter()
        .flat_map(|(_, bins)| bins.iter().map(|b| b.count))
        .max()
        .unwrap_or(1)
        .max(1) as f64;

    let canvas = Canvas::default()
        .block(cell_block(column.short_label().to_string(), true))
        .x_bounds([min, max])
        .y_bounds([0.0, max_count * 1.1])
        .paint(move |ctx| {
            for (outcome, bins) in &groups {
                let color = outcome_color(*outcome);
                // Offset the two groups inside each bin so both stay visible.
                let nudge = match outcome {
                    Outcome::Survived => 0.3,
                    Outcome::Died => 0.7,
                };
                for bin in bins {
                    if bin.count == 0 {
                        continue;
                    }
                    let x = bin.lower + (bin.upper - bin.lower) * nudge;
                    ctx.draw(&CanvasLine {
                        x1: x,
                        y1: 0.0,
                        x2: x,
                        y2: bin.count as f64,
                        color,
                    });
                }
            }
        });
    f.render_widget(canvas, area);
}

/// Off-diagonal cell: mini scatter of two features, colored by outcome.
fn render_scatter_cell(
    f: &mut Frame,
    area: Rect,
    table: &ClinicalTable,
    x_col: Column,
    y_col: Column,
) {
    let (x_min, x_max) = value_range(&table.column_values(x_col));
    let (y_min, y_max) = value_range(&table.column_values(y_col));

    let point_groups: Vec<(Outcome, Vec<(f64, f64)>)> = Outcome::ALL
        .iter()
        .map(|&outcome| (outcome, table.points_for(x_col, y_col, outcome)))
        .collect();

    let title = format!("{}/{}", y_col.short_label(), x_col.short_label());
    let canvas = Canvas::default()
        .block(cell_block(title, false))
        .x_bounds([x_min, x_max])
        .y_bounds([y_min, y_max])
        .paint(move |ctx| {
            for (outcome, points) in &point_groups {
                ctx.draw(&Points {
                    coords: points,
                    color: outcome_color(*outcome),
                });
            }
        });
    f.render_widget(canvas, area);
}

fn cell_block(title: String, diagonal: bool) -> Block<'static> {
    let title_color = if diagonal {
        Color::LightYellow
    } else {
        Color::DarkGray
    };
    Block::default()
        .title(title)
        .title_style(Style::default().fg(title_color))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn value_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        // Degenerate constant feature; widen so the canvas bounds stay valid.
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    }
}
