//! Correlation heatmap: annotated coefficient grid with a diverging ramp

use super::super::super::state::ExplorerState;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Character width of one heatmap cell, wide enough for "-0.00".
const CELL_WIDTH: usize = 7;
/// Width of the row-label gutter.
const LABEL_WIDTH: usize = 6;

pub fn render_correlation_heatmap(f: &mut Frame, area: Rect, state: &ExplorerState) {
    let matrix = state.correlation();
    let label_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::with_capacity(matrix.size() + 1);

    // Column label row
    let mut head = vec![Span::raw(" ".repeat(LABEL_WIDTH))];
    for column in matrix.columns() {
        head.push(Span::styled(
            format!("{:^width$}", column.short_label(), width = CELL_WIDTH),
            label_style,
        ));
    }
    lines.push(Line::from(head));

    // One row per column, annotated to two decimal places
    for (row, column) in matrix.columns().iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("{:<width$}", column.short_label(), width = LABEL_WIDTH),
            label_style,
        )];
        for col in 0..matrix.size() {
            let r = matrix.get(row, col);
            let text = if r.is_nan() {
                format!("{:^width$}", "--", width = CELL_WIDTH)
            } else {
                format!("{:^width$}", format!("{:.2}", r), width = CELL_WIDTH)
            };
            spans.push(Span::styled(
                text,
                Style::default().fg(Color::Black).bg(heat_color(r)),
            ));
        }
        lines.push(Line::from(spans));
    }

    let heatmap = Paragraph::new(lines).block(
        Block::default()
            .title(" Correlation Matrix ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::new(1, 1, 1, 1)),
    );
    f.render_widget(heatmap, area);
}

/// Diverging cold/warm ramp over [-1, 1]: blue for negative, red for
/// positive, near-white around zero. NaN cells get a neutral gray.
fn heat_color(r: f64) -> Color {
    if r.is_nan() {
        return Color::DarkGray;
    }
    let t = r.clamp(-1.0, 1.0);
    let (from, to, frac) = if t < 0.0 {
        ((59u8, 76u8, 192u8), (221u8, 221u8, 221u8), t + 1.0)
    } else {
        ((221u8, 221u8, 221u8), (180u8, 4u8, 38u8), t)
    };
    Color::Rgb(
        lerp(from.0, to.0, frac),
        lerp(from.1, to.1, frac),
        lerp(from.2, to.2, frac),
    )
}

fn lerp(from: u8, to: u8, frac: f64) -> u8 {
    (from as f64 + (to as f64 - from as f64) * frac).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_endpoints_and_midpoint() {
        assert_eq!(heat_color(-1.0), Color::Rgb(59, 76, 192));
        assert_eq!(heat_color(1.0), Color::Rgb(180, 4, 38));
        assert_eq!(heat_color(0.0), Color::Rgb(221, 221, 221));
    }

    #[test]
    fn nan_gets_the_neutral_color() {
        assert_eq!(heat_color(f64::NAN), Color::DarkGray);
    }

    #[test]
    fn out_of_range_values_clamp() {
        assert_eq!(heat_color(7.0), heat_color(1.0));
        assert_eq!(heat_color(-7.0), heat_color(-1.0));
    }
}
