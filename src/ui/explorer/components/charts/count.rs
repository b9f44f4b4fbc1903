//! Count plot: tally of death events as a categorical bar chart

use super::super::super::state::ExplorerState;
use super::super::super::utils::outcome_color;
use crate::dataset::Outcome;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders};

pub fn render_count_plot(f: &mut Frame, area: Rect, state: &ExplorerState) {
    let counts = state.counts();

    let bars: Vec<Bar> = Outcome::ALL
        .iter()
        .map(|&outcome| {
            Bar::default()
                .value(counts.get(outcome) as u64)
                .label(outcome.label().into())
                .style(Style::default().fg(outcome_color(outcome)))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(outcome_color(outcome))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    // Bars scale with the pane so the two groups stay side by side.
    let bar_width = (area.width.saturating_sub(10) / 2).clamp(8, 24);

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(4)
        .block(
            Block::default()
                .title(" Count of Death Events ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(chart, area);
}
