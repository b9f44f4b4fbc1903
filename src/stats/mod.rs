//! Pure statistics consumed by the explorer views.

mod correlation;
mod describe;
mod reshape;

pub use correlation::{CorrelationMatrix, correlation_matrix};
pub use describe::{ColumnSummary, OutcomeCounts, describe, outcome_counts};
pub use reshape::{
    BoxGroup, BoxSummary, HistogramBin, LongRecord, box_groups, box_summary, histogram, melt,
};
