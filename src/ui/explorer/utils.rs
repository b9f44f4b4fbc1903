//! Explorer utility functions
//!
//! Contains helper functions used across explorer components

use crate::dataset::Outcome;
use chrono::{DateTime, Local};
use ratatui::prelude::Color;

/// Get a ratatui color for an outcome group
pub fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Survived => Color::Cyan,
        Outcome::Died => Color::LightRed,
    }
}

/// Format a fetch timestamp compactly for the header line
pub fn format_fetch_timestamp(timestamp: DateTime<Local>) -> String {
    timestamp.format("%m-%d %H:%M").to_string()
}

/// Format a numeric cell for the overview and sample tables. Large values
/// (platelet counts) drop the fraction; small ones keep two decimals.
pub fn format_number(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_colors_differ() {
        assert_ne!(
            outcome_color(Outcome::Survived),
            outcome_color(Outcome::Died)
        );
    }

    #[test]
    fn large_values_lose_their_fraction() {
        assert_eq!(format_number(263358.03), "263358");
        assert_eq!(format_number(1.9), "1.90");
        assert_eq!(format_number(-0.5), "-0.50");
    }
}
