//! Box plot: grouped per-column distributions, split by outcome

use super::super::super::state::ExplorerState;
use super::super::super::utils::{format_number, outcome_color};
use crate::dataset::Column;
use crate::stats::{BoxGroup, BoxSummary};

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points, Rectangle};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Horizontal span reserved for one column group on the canvas.
const GROUP_WIDTH: f64 = 3.0;
/// Half-width of a single box.
const BOX_HALF_WIDTH: f64 = 0.42;

/// Render grouped box plots for the selected columns. With nothing selected
/// this draws an empty pane: not an error, just no chart.
pub fn render_box_plot(f: &mut Frame, area: Rect, state: &ExplorerState, columns: &[Column]) {
    if columns.is_empty() {
        let placeholder = Paragraph::new(vec![
            Line::from(""),
            Line::from("No columns selected."),
            Line::from("Focus the column list with Tab and toggle entries with Space."),
        ])
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(boxed_block());
        f.render_widget(placeholder, area);
        return;
    }

    let groups: Vec<BoxGroup> = state.box_groups().to_vec();
    let group_count = groups.len().max(1) as f64;

    let canvas = Canvas::default()
        .block(boxed_block())
        .x_bounds([0.0, group_count * GROUP_WIDTH])
        .y_bounds([-0.25, 1.1])
        .paint(move |ctx| {
            for (index, group) in groups.iter().enumerate() {
                draw_group(ctx, index, group);
            }
        });
    f.render_widget(canvas, area);
}

fn boxed_block() -> Block<'static> {
    Block::default()
        .title(" Box Plot for Selected Features ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray))
        .padding(Padding::ZERO)
}

/// Draws one column group: a per-outcome box pair above the group label.
fn draw_group(ctx: &mut ratatui::widgets::canvas::Context<'_>, index: usize, group: &BoxGroup) {
    let base = index as f64 * GROUP_WIDTH;

    for (slot, (outcome, summary)) in group.entries.iter().enumerate() {
        // Two slots per group, one per outcome.
        let center = base + 1.0 + slot as f64;
        let color = outcome_color(*outcome);
        draw_box(ctx, center, summary, group, color);
    }

    // Group label and the value range the boxes are normalized over.
    ctx.print(
        base + GROUP_WIDTH / 2.0 - 0.5,
        -0.12,
        Line::styled(
            group.column.short_label().to_string(),
            Style::default().fg(Color::LightYellow),
        ),
    );
    ctx.print(
        base + GROUP_WIDTH / 2.0 - 0.7,
        -0.22,
        Line::styled(
            format!(
                "{}..{}",
                format_number(group.min),
                format_number(group.max)
            ),
            Style::default().fg(Color::DarkGray),
        ),
    );
}

/// Draws a single box with whiskers and outlier dots, in the group's
/// normalized [0, 1] vertical space.
fn draw_box(
    ctx: &mut ratatui::widgets::canvas::Context<'_>,
    center: f64,
    summary: &BoxSummary,
    group: &BoxGroup,
    color: Color,
) {
    let scale = |v: f64| normalize(v, group.min, group.max);

    let q1 = scale(summary.q1);
    let q3 = scale(summary.q3);
    let median = scale(summary.median);
    let lower = scale(summary.lower_whisker);
    let upper = scale(summary.upper_whisker);

    // Box body
    ctx.draw(&Rectangle {
        x: center - BOX_HALF_WIDTH,
        y: q1,
        width: BOX_HALF_WIDTH * 2.0,
        height: (q3 - q1).max(0.005),
        color,
    });
    // Median line
    ctx.draw(&CanvasLine {
        x1: center - BOX_HALF_WIDTH,
        y1: median,
        x2: center + BOX_HALF_WIDTH,
        y2: median,
        color,
    });
    // Whisker stems
    ctx.draw(&CanvasLine {
        x1: center,
        y1: lower,
        x2: center,
        y2: q1,
        color,
    });
    ctx.draw(&CanvasLine {
        x1: center,
        y1: q3,
        x2: center,
        y2: upper,
        color,
    });
    // Whisker caps
    for y in [lower, upper] {
        ctx.draw(&CanvasLine {
            x1: center - BOX_HALF_WIDTH / 2.0,
            y1: y,
            x2: center + BOX_HALF_WIDTH / 2.0,
            y2: y,
            color,
        });
    }
    // Outliers
    let outliers: Vec<(f64, f64)> = summary
        .outliers
        .iter()
        .map(|&v| (center, scale(v)))
        .collect();
    if !outliers.is_empty() {
        ctx.draw(&Points {
            coords: &outliers,
            color,
        });
    }
}

/// Min-max normalization so columns of very different scale share one axis.
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        0.5
    }
}
