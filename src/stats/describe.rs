//! Descriptive statistics for the overview panel.

use crate::dataset::{ClinicalTable, Column, Outcome};

/// Summary statistics for one column: the count/mean/std/min/quartiles/max
/// row of the overview table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub column: Column,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Tallies of the outcome values over the cleaned table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutcomeCounts {
    pub survived: usize,
    pub died: usize,
}

impl OutcomeCounts {
    pub fn total(&self) -> usize {
        self.survived + self.died
    }

    pub fn get(&self, outcome: Outcome) -> usize {
        match outcome {
            Outcome::Survived => self.survived,
            Outcome::Died => self.died,
        }
    }
}

/// Summary statistics per column, over all eight columns (the 0/1 outcome
/// participates as numeric, so its mean reads as the death rate).
pub fn describe(table: &ClinicalTable) -> Vec<ColumnSummary> {
    Column::ALL
        .iter()
        .map(|&column| summarize(column, &table.column_values(column)))
        .collect()
}

pub fn outcome_counts(table: &ClinicalTable) -> OutcomeCounts {
    let mut counts = OutcomeCounts::default();
    for record in table.records() {
        match record.outcome() {
            Outcome::Survived => counts.survived += 1,
            Outcome::Died => counts.died += 1,
        }
    }
    counts
}

fn summarize(column: Column, values: &[f64]) -> ColumnSummary {
    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    // Sample standard deviation (n - 1), the convention describe() output
    // is usually compared against.
    let std = if count > 1 {
        let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        (sum_sq / (count - 1) as f64).sqrt()
    } else {
        0.0
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    ColumnSummary {
        column,
        count,
        mean,
        std,
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    }
}

/// Quantile with linear interpolation between order statistics.
/// `sorted` must be non-empty and ascending.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> f64 {
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    sorted[lower] + (position - lower as f64) * (sorted[upper] - sorted[lower])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ClinicalRecord;

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

    fn table(ages: &[(f64, u8)]) -> ClinicalTable {
        ClinicalTable::new(
            ages.iter().map(|&(a, d)| record(a, d)).collect(),
            "test://fixture",
            0,
        )
    }

    #[test]
    fn mean_min_max_match_direct_computation() {
        let table = table(&[(40.0, 0), (50.0, 0), (60.0, 1), (70.0, 1)]);
        let summaries = describe(&table);
        let age = summaries
            .iter()
            .find(|s| s.column == Column::Age)
            .unwrap();
        assert_eq!(age.count, 4);
        assert!((age.mean - 55.0).abs() < 1e-12);
        assert_eq!(age.min, 40.0);
        assert_eq!(age.max, 70.0);
    }

    #[test]
    fn describe_covers_all_eight_columns() {
        let table = table(&[(40.0, 0), (60.0, 1)]);
        let summaries = describe(&table);
        assert_eq!(summaries.len(), Column::ALL.len());
    }

    #[test]
    fn sample_std_of_known_vector() {
        // std of [2, 4, 4, 4, 5, 5, 7, 9] with n-1 is ~2.138
        let ages = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let pairs: Vec<(f64, u8)> = ages.iter().map(|&a| (a, 0)).collect();
        let table = table(&pairs);
        let summaries = describe(&table);
        let age = &summaries[0];
        assert!((age.std - 2.13809).abs() < 1e-4);
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!((quantile(&sorted, 0.25) - 1.75).abs() < 1e-12);
        assert!((quantile(&sorted, 0.5) - 2.5).abs() < 1e-12);
        assert!((quantile(&sorted, 0.75) - 3.25).abs() < 1e-12);
        assert_eq!(quantile(&sorted, 0.0), 1.0);
        assert_eq!(quantile(&sorted, 1.0), 4.0);
    }

    #[test]
    fn quantile_of_single_value_is_that_value() {
        assert_eq!(quantile(&[42.0], 0.5), 42.0);
    }

    #[test]
    fn outcome_counts_sum_to_row_count() {
        let table = table(&[(40.0, 0), (50.0, 1), (60.0, 1), (70.0, 0), (80.0, 0)]);
        let counts = outcome_counts(&table);
        assert_eq!(counts.survived, 3);
        assert_eq!(counts.died, 2);
        assert_eq!(counts.total(), table.len());
    }

    #[test]
    fn outcome_mean_reads_as_death_rate() {
        let table = table(&[(40.0, 0), (50.0, 1), (60.0, 1), (70.0, 1)]);
        let summaries = describe(&table);
        let outcome = summaries
            .iter()
            .find(|s| s.column == Column::DeathEvent)
            .unwrap();
        assert!((outcome.mean - 0.75).abs() < 1e-12);
    }
}
