//! Fixed column schema for the heart-failure clinical records dataset.

use crate::dataset::error::DatasetError;

/// The eight columns the explorer works with.
///
/// The upstream CSV carries additional columns (anaemia, diabetes, sex, ...)
/// which are ignored by the projection; this enum is the exact retained set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Column {
    Age,
    CreatininePhosphokinase,
    EjectionFraction,
    Platelets,
    SerumCreatinine,
    SerumSodium,
    Time,
    DeathEvent,
}

impl Column {
    /// Every retained column, in display order.
    pub const ALL: [Column; 8] = [
        Column::Age,
        Column::CreatininePhosphokinase,
        Column::EjectionFraction,
        Column::Platelets,
        Column::SerumCreatinine,
        Column::SerumSodium,
        Column::Time,
        Column::DeathEvent,
    ];

    /// The numeric feature columns, i.e. everything but the outcome.
    pub const NUMERIC: [Column; 7] = [
        Column::Age,
        Column::CreatininePhosphokinase,
        Column::EjectionFraction,
        Column::Platelets,
        Column::SerumCreatinine,
        Column::SerumSodium,
        Column::Time,
    ];

    /// The reduced feature set drawn by the pairwise grid. The outcome acts
    /// as the hue there, not as an axis.
    pub const PAIRWISE: [Column; 4] = [
        Column::Age,
        Column::EjectionFraction,
        Column::SerumCreatinine,
        Column::SerumSodium,
    ];

    /// Exact header name in the source CSV.
    pub fn header_name(self) -> &'static str {
        match self {
            Column::Age => "age",
            Column::CreatininePhosphokinase => "creatinine_phosphokinase",
            Column::EjectionFraction => "ejection_fraction",
            Column::Platelets => "platelets",
            Column::SerumCreatinine => "serum_creatinine",
            Column::SerumSodium => "serum_sodium",
            Column::Time => "time",
            Column::DeathEvent => "DEATH_EVENT",
        }
    }

    /// Human-readable label for panel titles and axes.
    pub fn label(self) -> &'static str {
        match self {
            Column::Age => "Age",
            Column::CreatininePhosphokinase => "Creatinine Phosphokinase",
            Column::EjectionFraction => "Ejection Fraction",
            Column::Platelets => "Platelets",
            Column::SerumCreatinine => "Serum Creatinine",
            Column::SerumSodium => "Serum Sodium",
            Column::Time => "Follow-up Time",
            Column::DeathEvent => "Death Event",
        }
    }

    /// Compact label for tight spots (heatmap axes, pairwise cells).
    pub fn short_label(self) -> &'static str {
        match self {
            Column::Age => "age",
            Column::CreatininePhosphokinase => "cpk",
            Column::EjectionFraction => "ef",
            Column::Platelets => "plt",
            Column::SerumCreatinine => "scr",
            Column::SerumSodium => "na",
            Column::Time => "time",
            Column::DeathEvent => "death",
        }
    }
}

/// Checks that every required column is present in the CSV header.
///
/// Extra columns are allowed (and later ignored); a missing one fails the
/// whole load.
pub fn validate_header(headers: &csv::StringRecord) -> Result<(), DatasetError> {
    for column in Column::ALL {
        let name = column.header_name();
        if !headers.iter().any(|h| h.trim() == name) {
            return Err(DatasetError::MissingColumn(name.to_string()));
        }
    }
    Ok(())
}
