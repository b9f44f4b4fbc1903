//! Explorer header component
//!
//! Renders the title and the dataset source line

use super::super::state::ExplorerState;
use super::super::utils::format_fetch_timestamp;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render the header with title and dataset provenance.
pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &ExplorerState) {
    let header_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    // Title section
    let version = env!("CARGO_PKG_VERSION");
    let title_text = format!("CARDIOSCOPE v{} - HEART FAILURE CLINICAL RECORDS", version);

    let title = Paragraph::new(title_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, header_chunks[0]);

    // Dataset provenance line
    let table = state.table();
    let mut spans = vec![
        Span::styled(
            format!("{} records", table.len()),
            Style::default().fg(Color::LightGreen),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Env: {}", state.environment),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("  |  "),
        Span::styled(
            format!("Fetched: {}", format_fetch_timestamp(table.fetched_at())),
            Style::default().fg(Color::Cyan),
        ),
    ];
    if table.dropped_rows() > 0 {
        spans.push(Span::raw("  |  "));
        spans.push(Span::styled(
            format!("{} incomplete rows dropped", table.dropped_rows()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let source_line = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(source_line, header_chunks[1]);
}
