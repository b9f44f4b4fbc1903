//! The in-memory clinical records table.

use crate::dataset::record::{ClinicalRecord, Outcome};
use crate::dataset::schema::Column;
use chrono::{DateTime, Local};

/// Immutable row-oriented table of clinical records plus load metadata.
///
/// Built exactly once at startup; every view renders from the same instance.
#[derive(Debug, Clone)]
pub struct ClinicalTable {
    records: Vec<ClinicalRecord>,
    source: String,
    fetched_at: DateTime<Local>,
    dropped_rows: usize,
}

impl ClinicalTable {
    pub fn new(records: Vec<ClinicalRecord>, source: impl Into<String>, dropped_rows: usize) -> Self {
        Self {
            records,
            source: source.into(),
            fetched_at: Local::now(),
            dropped_rows,
        }
    }

    pub fn records(&self) -> &[ClinicalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The first `n` records, for the overview sample table.
    pub fn head(&self, n: usize) -> &[ClinicalRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// URL the table was loaded from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn fetched_at(&self) -> DateTime<Local> {
        self.fetched_at
    }

    /// Rows excluded at load time because of missing values.
    pub fn dropped_rows(&self) -> usize {
        self.dropped_rows
    }

    /// All values of one column, in row order.
    pub fn column_values(&self, column: Column) -> Vec<f64> {
        self.records.iter().map(|r| r.value(column)).collect()
    }

    /// Values of one column restricted to one outcome group.
    pub fn column_values_for(&self, column: Column, outcome: Outcome) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.outcome() == outcome)
            .map(|r| r.value(column))
            .collect()
    }

    /// (x, y) point pairs for one outcome group, for scatter views.
    pub fn points_for(&self, x: Column, y: Column, outcome: Outcome) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .filter(|r| r.outcome() == outcome)
            .map(|r| (r.value(x), r.value(y)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(age: f64, death_event: u8) -> ClinicalRecord {
        ClinicalRecord {
            age,
            creatinine_phosphokinase: 100.0,
            ejection_fraction: 40.0,
            platelets: 250_000.0,
            serum_creatinine: 1.0,
            serum_sodium: 135.0,
            time: 50.0,
            death_event,
        }
    }

    fn table() -> ClinicalTable {
        ClinicalTable::new(
            vec![record(40.0, 0), record(55.0, 1), record(70.0, 0)],
            "test://fixture",
            1,
        )
    }

    #[test]
    fn head_is_clamped_to_row_count() {
        let table = table();
        assert_eq!(table.head(2).len(), 2);
        assert_eq!(table.head(10).len(), 3);
    }

    #[test]
    fn column_values_preserve_row_order() {
        assert_eq!(table().column_values(Column::Age), vec![40.0, 55.0, 70.0]);
    }

    #[test]
    fn outcome_filter_partitions_rows() {
        let table = table();
        assert_eq!(
            table.column_values_for(Column::Age, Outcome::Survived),
            vec![40.0, 70.0]
        );
        assert_eq!(
            table.column_values_for(Column::Age, Outcome::Died),
            vec![55.0]
        );
    }

    #[test]
    fn points_pair_x_and_y_per_record() {
        let points = table().points_for(Column::Age, Column::SerumCreatinine, Outcome::Survived);
        assert_eq!(points, vec![(40.0, 1.0), (70.0, 1.0)]);
    }
}
