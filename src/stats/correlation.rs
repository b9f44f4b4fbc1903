//! Pairwise Pearson correlation over the table's columns.

use crate::dataset::{ClinicalTable, Column};

/// Square, symmetric correlation matrix over all eight columns.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    columns: Vec<Column>,
    // Row-major, columns.len() x columns.len()
    values: Vec<f64>,
}

impl CorrelationMatrix {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Coefficient at (row, col). NaN marks a zero-variance column pair.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.columns.len() + col]
    }
}

/// Computes the correlation matrix the correlation heatmap renders.
///
/// The 0/1 outcome column participates as numeric, so outcome/feature
/// correlations appear alongside feature/feature ones.
pub fn correlation_matrix(table: &ClinicalTable) -> CorrelationMatrix {
    let columns: Vec<Column> = Column::ALL.to_vec();
    let series: Vec<Vec<f64>> = columns
        .iter()
        .map(|&c| table.column_values(c))
        .collect();

    let n = columns.len();
    let mut values = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..=i {
            let r = if i == j {
                1.0
            } else {
                pearson(&series[i], &series[j])
            };
            values[i * n + j] = r;
            values[j * n + i] = r;
        }
    }

    CorrelationMatrix { columns, values }
}

/// Pearson correlation coefficient; NaN when either side has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    cov / (var_x.sqrt() * var_y.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ClinicalRecord;

    fn table() -> ClinicalTable {
        let rows = [
            (45.0, 1.0, 0u8),
            (50.0, 1.2, 0),
            (60.0, 1.5, 1),
            (65.0, 1.9, 1),
            (80.0, 2.4, 1),
        ];
        let records = rows
            .iter()
            .map(|&(age, scr, death_event)| ClinicalRecord {
                age,
                creatinine_phosphokinase: 200.0 + age,
                ejection_fraction: 100.0 - age,
                platelets: 250_000.0,
                serum_creatinine: scr,
                serum_sodium: 130.0 + (age / 10.0),
                time: age * 2.0,
                death_event,
            })
            .collect();
        ClinicalTable::new(records, "test://fixture", 0)
    }

    #[test]
    fn matrix_is_square_over_all_columns() {
        let matrix = correlation_matrix(&table());
        assert_eq!(matrix.size(), Column::ALL.len());
        assert_eq!(matrix.columns(), &Column::ALL);
    }

    #[test]
    fn diagonal_is_one_and_matrix_is_symmetric() {
        let matrix = correlation_matrix(&table());
        for i in 0..matrix.size() {
            assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..matrix.size() {
                let a = matrix.get(i, j);
                let b = matrix.get(j, i);
                if a.is_nan() {
                    assert!(b.is_nan());
                } else {
                    assert!((a - b).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn perfectly_linear_columns_correlate_to_one() {
        // time is exactly 2 * age in the fixture
        let matrix = correlation_matrix(&table());
        let age = Column::ALL.iter().position(|&c| c == Column::Age).unwrap();
        let time = Column::ALL.iter().position(|&c| c == Column::Time).unwrap();
        assert!((matrix.get(age, time) - 1.0).abs() < 1e-12);

        // ejection_fraction is 100 - age, perfectly anti-correlated
        let ef = Column::ALL
            .iter()
            .position(|&c| c == Column::EjectionFraction)
            .unwrap();
        assert!((matrix.get(age, ef) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_variance_column_yields_nan() {
        // platelets is constant in the fixture
        let matrix = correlation_matrix(&table());
        let plt = Column::ALL
            .iter()
            .position(|&c| c == Column::Platelets)
            .unwrap();
        let age = Column::ALL.iter().position(|&c| c == Column::Age).unwrap();
        assert!(matrix.get(plt, age).is_nan());
        // but its diagonal is still pinned to 1.0
        assert_eq!(matrix.get(plt, plt), 1.0);
    }

    #[test]
    fn pearson_of_known_vectors() {
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        let ys = [2.0, 4.0, 5.0, 4.0, 5.0];
        assert!((pearson(&xs, &ys) - 0.7745967).abs() < 1e-6);
    }
}
