//! Scatter plot: age against serum creatinine, colored by outcome

use super::super::super::state::ExplorerState;
use super::super::super::utils::outcome_color;
use crate::consts::cli_consts::AXIS_PADDING_RATIO;
use crate::dataset::{Column, Outcome};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType};

pub fn render_scatter_plot(f: &mut Frame, area: Rect, state: &ExplorerState) {
    let table = state.table();
    let survived = table.points_for(Column::Age, Column::SerumCreatinine, Outcome::Survived);
    let died = table.points_for(Column::Age, Column::SerumCreatinine, Outcome::Died);

    let (x_bounds, x_labels) = axis_bounds(&table.column_values(Column::Age));
    let (y_bounds, y_labels) = axis_bounds(&table.column_values(Column::SerumCreatinine));

    let datasets = vec![
        Dataset::default()
            .name(Outcome::Survived.label())
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(outcome_color(Outcome::Survived)))
            .data(&survived),
        Dataset::default()
            .name(Outcome::Died.label())
            .marker(Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(outcome_color(Outcome::Died)))
            .data(&died),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Scatter Plot: Age vs Serum Creatinine ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .title(Column::Age.label())
                .style(Style::default().fg(Color::DarkGray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Column::SerumCreatinine.label())
                .style(Style::default().fg(Color::DarkGray))
                .bounds(y_bounds)
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

/// Padded bounds plus min/mid/max tick labels for one axis.
fn axis_bounds(values: &[f64]) -> ([f64; 2], Vec<String>) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((max - min) * AXIS_PADDING_RATIO).max(f64::EPSILON);
    let bounds = [min - pad, max + pad];
    let labels = vec![
        format!("{:.1}", bounds[0]),
        format!("{:.1}", (bounds[0] + bounds[1]) / 2.0),
        format!("{:.1}", bounds[1]),
    ];
    (bounds, labels)
}
