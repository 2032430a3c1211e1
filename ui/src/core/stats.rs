//! KPI figures recomputed from the filtered table on every interaction.

use crate::core::filter::{DISTRICT_COLUMN, SCHOOL_COLUMN};
use crate::core::table::RecordTable;

pub const PREVIOUS_CLASS_COLUMN: &str = "% of Previous Class";

/// The four headline figures shown above the charts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KpiSummary {
    pub total_students: usize,
    pub total_schools: usize,
    pub total_districts: usize,
    /// Mean of `% of Previous Class` rounded to 2 decimal places; NaN when
    /// the filtered table is empty or no cell of the column coerces.
    pub avg_previous_class: f64,
}

impl KpiSummary {
    pub fn compute(table: &RecordTable) -> Self {
        Self {
            total_students: table.len(),
            total_schools: table.distinct_non_missing(SCHOOL_COLUMN).len(),
            total_districts: table.distinct_non_missing(DISTRICT_COLUMN).len(),
            avg_previous_class: round2(table.numeric_mean(PREVIOUS_CLASS_COLUMN)),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
