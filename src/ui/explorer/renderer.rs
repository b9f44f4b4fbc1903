//! Explorer main renderer

use super::components::{about, charts, footer, header, overview, sidebar};
use super::state::{ExplorerState, View};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_explorer(f: &mut Frame, state: &ExplorerState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(28), Constraint::Percentage(72)])
        .split(main_chunks[1]);

    sidebar::render_sidebar(f, content_chunks[0], state);

    match state.active_view() {
        View::Overview => overview::render_overview(f, content_chunks[1], state),
        View::Visualization(chart) => charts::render_chart(f, content_chunks[1], state, &chart),
        View::About => about::render_about(f, content_chunks[1]),
    }

    footer::render_footer(f, main_chunks[2], state);
}
