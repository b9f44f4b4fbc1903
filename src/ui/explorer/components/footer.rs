//! Explorer footer component
//!
//! Renders footer with key hints

use super::super::state::{ChartKind, ExplorerState, Mode};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the footer key hints for the current selection.
pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &ExplorerState) {
    let mut footer_text = String::from("[Q] Quit | [\u{2191}/\u{2193}] Select");
    if state.mode() == Mode::Visualization {
        footer_text.push_str(" | [Tab] Switch Panel");
        if state.chart() == ChartKind::Box {
            footer_text.push_str(" | [Space] Toggle Column");
        }
    }

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
