//! About page component
//!
//! Static provenance and purpose text; no computation

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_about(f: &mut Frame, area: Rect) {
    let heading = Style::default()
        .fg(Color::LightRed)
        .add_modifier(Modifier::BOLD);
    let body = Style::default().fg(Color::Gray);
    let emphasis = Style::default().fg(Color::White);

    let lines = vec![
        Line::from(Span::styled("About Heart Failure Clinical Records Analysis", heading)),
        Line::from(""),
        Line::from(Span::styled(
            "This explorer works with the Heart Failure Clinical Records Dataset, collected \
from patients during their follow-up period. The dataset includes clinical features \
and outcomes such as age, blood-related parameters, and survival.",
            body,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Dataset Source: ", emphasis),
            Span::styled(
                "UCI Machine Learning Repository, Heart failure clinical records",
                body,
            ),
        ]),
        Line::from(Span::styled(
            "https://archive.ics.uci.edu/ml/datasets/Heart+failure+clinical+records",
            Style::default().fg(Color::LightBlue),
        )),
        Line::from(""),
        Line::from(Span::styled("Purpose", heading)),
        Line::from(Span::styled(
            "Analyze and visualize the dataset to understand the relationships between \
clinical features and the occurrence of death events during follow-up. The sidebar \
switches between the dataset overview, the visualizations, and this page.",
            body,
        )),
        Line::from(""),
        Line::from(Span::styled("Column Glossary", heading)),
        Line::from(vec![
            Span::styled("ejection_fraction", emphasis),
            Span::styled(
                " - percentage of blood leaving the heart per contraction",
                body,
            ),
        ]),
        Line::from(vec![
            Span::styled("serum_creatinine / serum_sodium", emphasis),
            Span::styled(
                " - blood chemistry markers of kidney function and electrolyte balance",
                body,
            ),
        ]),
        Line::from(vec![
            Span::styled("creatinine_phosphokinase", emphasis),
            Span::styled(" - level of the CPK enzyme in the blood", body),
        ]),
        Line::from(vec![
            Span::styled("time", emphasis),
            Span::styled(" - follow-up period in days", body),
        ]),
        Line::from(vec![
            Span::styled("DEATH_EVENT", emphasis),
            Span::styled(" - whether the patient died during the follow-up period", body),
        ]),
    ];

    let about = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" About ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .padding(Padding::new(2, 2, 1, 1)),
        );
    f.render_widget(about, area);
}
