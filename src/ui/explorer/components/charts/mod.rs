//! Chart components for the Visualization mode
//!
//! One module per chart type, dispatched from the resolved [`Chart`] variant

pub mod boxplot;
pub mod count;
pub mod heatmap;
pub mod pairwise;
pub mod scatter;

use super::super::state::{Chart, ExplorerState};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Paragraph;

/// Render the selected chart into the view pane.
pub fn render_chart(f: &mut Frame, area: Rect, state: &ExplorerState, chart: &Chart) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Fill(1)])
        .split(area);

    render_description(f, chunks[0], state);

    match chart {
        Chart::Count => count::render_count_plot(f, chunks[1], state),
        Chart::Correlation => heatmap::render_correlation_heatmap(f, chunks[1], state),
        Chart::Scatter => scatter::render_scatter_plot(f, chunks[1], state),
        Chart::Pairwise => pairwise::render_pair_grid(f, chunks[1], state),
        Chart::Box { columns } => boxplot::render_box_plot(f, chunks[1], state, columns),
    }
}

fn render_description(f: &mut Frame, area: Rect, state: &ExplorerState) {
    let description = Paragraph::new(state.chart().description())
        .style(Style::default().fg(Color::Gray));
    f.render_widget(description, area);
}
