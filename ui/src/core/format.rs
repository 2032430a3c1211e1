//! Formatting helpers for presenting KPI figures and chart legends.

/// Fixed-decimal rendering; an undefined (NaN) figure renders as `NaN`.
pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Percentage share of `count` out of `total`, one decimal place.
pub fn format_share(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 * 100.0 / total as f64)
}
