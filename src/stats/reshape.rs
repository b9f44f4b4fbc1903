//! Wide-to-long reshaping, histogram binning, and box summaries.

use crate::consts::cli_consts::WHISKER_IQR_MULTIPLIER;
use crate::dataset::{ClinicalTable, Column, Outcome};
use crate::stats::describe::quantile;

/// One cell of the long-form table: a single (record, column) observation
/// tagged with the record's outcome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LongRecord {
    pub outcome: Outcome,
    pub column: Column,
    pub value: f64,
}

/// Reshapes the table from wide to long form over the selected columns,
/// one `LongRecord` per (record, column) pair. Selecting nothing yields
/// nothing.
pub fn melt(table: &ClinicalTable, columns: &[Column]) -> Vec<LongRecord> {
    let mut long = Vec::with_capacity(table.len() * columns.len());
    for record in table.records() {
        for &column in columns {
            long.push(LongRecord {
                outcome: record.outcome(),
                column,
                value: record.value(column),
            });
        }
    }
    long
}

/// One bar of a histogram: [lower, upper) with the last bin closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Equal-width histogram over `values`. Degenerate inputs (empty slice or a
/// single distinct value) collapse to a single bin.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min == max {
        return vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + i as f64 * width,
            upper: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

/// Five-number summary with 1.5*IQR whiskers clamped to observed values,
/// plus the points beyond the whiskers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxSummary {
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub upper_whisker: f64,
    pub outliers: Vec<f64>,
}

/// Computes the box-plot summary of one value group. `None` for an empty
/// group, which the box view renders as a missing box rather than an error.
pub fn box_summary(values: &[f64]) -> Option<BoxSummary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let reach = WHISKER_IQR_MULTIPLIER * (q3 - q1);

    // Whiskers sit on the most extreme observations inside the reach.
    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|v| *v >= q1 - reach)
        .unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|v| *v <= q3 + reach)
        .unwrap_or(q3);

    let outliers = sorted
        .iter()
        .copied()
        .filter(|v| *v < lower_whisker || *v > upper_whisker)
        .collect();

    Some(BoxSummary {
        lower_whisker,
        q1,
        median,
        q3,
        upper_whisker,
        outliers,
    })
}

/// All boxes of one grouped box-plot column: the feature, its observed value
/// range, and one summary per non-empty outcome group.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGroup {
    pub column: Column,
    pub min: f64,
    pub max: f64,
    pub entries: Vec<(Outcome, BoxSummary)>,
}

/// Grouped box summaries for the box view, built from the long-form table:
/// one group per selected column, split by outcome. An empty selection
/// yields no groups (the view then draws nothing).
pub fn box_groups(table: &ClinicalTable, columns: &[Column]) -> Vec<BoxGroup> {
    let long = melt(table, columns);

    columns
        .iter()
        .filter_map(|&column| {
            let observed: Vec<f64> = long
                .iter()
                .filter(|l| l.column == column)
                .map(|l| l.value)
                .collect();
            if observed.is_empty() {
                return None;
            }
            let min = observed.iter().copied().fold(f64::INFINITY, f64::min);
            let max = observed.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            let entries = Outcome::ALL
                .iter()
                .filter_map(|&outcome| {
                    let group: Vec<f64> = long
                        .iter()
                        .filter(|l| l.column == column && l.outcome == outcome)
                        .map(|l| l.value)
                        .collect();
                    box_summary(&group).map(|summary| (outcome, summary))
                })
                .collect();

            Some(BoxGroup {
                column,
                min,
                max,
                entries,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ClinicalRecord;

    fn record(age: f64, ef: f64, death_event: u8) -> ClinicalRecord {
        ClinicalRecord {
            age,
            creatinine_phosphokinase: 100.0,
            ejection_fraction: ef,
            platelets: 250_000.0,
            serum_creatinine: 1.0,
            serum_sodium: 135.0,
            time: 50.0,
            death_event,
        }
    }

    fn table() -> ClinicalTable {
        ClinicalTable::new(
            vec![
                record(40.0, 60.0, 0),
                record(50.0, 45.0, 0),
                record(60.0, 38.0, 1),
                record(70.0, 25.0, 1),
            ],
            "test://fixture",
            0,
        )
    }

    #[test]
    fn melt_emits_one_row_per_record_column_pair() {
        let table = table();
        let long = melt(&table, &[Column::Age, Column::EjectionFraction]);
        assert_eq!(long.len(), table.len() * 2);
        assert_eq!(
            long[0],
            LongRecord {
                outcome: Outcome::Survived,
                column: Column::Age,
                value: 40.0
            }
        );
        assert_eq!(long[1].column, Column::EjectionFraction);
    }

    #[test]
    fn melt_of_empty_selection_is_empty() {
        assert!(melt(&table(), &[]).is_empty());
    }

    #[test]
    fn histogram_counts_cover_every_value() {
        let values = [1.0, 2.0, 2.5, 3.0, 9.0, 10.0];
        let bins = histogram(&values, 3);
        assert_eq!(bins.len(), 3);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
        // max lands in the last bin despite the half-open intervals
        assert_eq!(bins[2].count, 2);
    }

    #[test]
    fn histogram_of_constant_values_is_one_bin() {
        let bins = histogram(&[5.0, 5.0, 5.0], 4);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
    }

    #[test]
    fn box_summary_of_empty_group_is_none() {
        assert_eq!(box_summary(&[]), None);
    }

    #[test]
    fn box_summary_quartiles_and_whiskers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let summary = box_summary(&values).unwrap();
        assert_eq!(summary.median, 4.0);
        assert_eq!(summary.q1, 2.5);
        assert_eq!(summary.q3, 5.5);
        // no value is outside 1.5*IQR, so whiskers clamp to the extremes
        assert_eq!(summary.lower_whisker, 1.0);
        assert_eq!(summary.upper_whisker, 7.0);
        assert!(summary.outliers.is_empty());
    }

    #[test]
    fn extreme_values_become_outliers() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let summary = box_summary(&values).unwrap();
        assert_eq!(summary.outliers, vec![100.0]);
        assert!(summary.upper_whisker < 100.0);
    }

    #[test]
    fn empty_selection_yields_no_groups() {
        assert!(box_groups(&table(), &[]).is_empty());
    }

    #[test]
    fn one_group_per_selected_column_split_by_outcome() {
        let groups = box_groups(&table(), &[Column::Age, Column::EjectionFraction]);
        assert_eq!(groups.len(), 2);
        for group in &groups {
            assert_eq!(group.entries.len(), 2);
            assert_eq!(group.entries[0].0, Outcome::Survived);
            assert_eq!(group.entries[1].0, Outcome::Died);
        }
        assert_eq!(groups[0].min, 40.0);
        assert_eq!(groups[0].max, 70.0);
    }
}
