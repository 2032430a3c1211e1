mod filters;
pub use filters::FilterBar;

mod kpis;
pub use kpis::KpiStrip;

mod charts;
pub use charts::{BarChart, PieChart};

mod export;
pub use export::ExportPanel;

mod table_view;
pub use table_view::DataTablePanel;

use crate::core::filter::{CLASS_COLUMN, DISTRICT_COLUMN, SCHOOL_COLUMN};
use crate::core::table::RecordTable;

/// Options for the three selection controls, computed once per load from the
/// *unfiltered* snapshot. Combinations made stale by other active filters
/// stay selectable and may yield zero rows; every widget tolerates that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub districts: Vec<String>,
    pub schools: Vec<String>,
    pub classes: Vec<String>,
}

impl FilterOptions {
    pub fn from_table(table: &RecordTable) -> Self {
        Self {
            districts: table.distinct_non_missing(DISTRICT_COLUMN),
            schools: table.distinct_non_missing(SCHOOL_COLUMN),
            classes: table.distinct_non_missing(CLASS_COLUMN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_come_from_their_columns() {
        let table = RecordTable::new(
            vec!["District".into(), "School Name".into(), "Class".into()],
            vec![
                vec!["B".into(), "Y".into(), "10".into()],
                vec!["A".into(), "X".into(), "9".into()],
                vec!["A".into(), "".into(), "9".into()],
            ],
        );
        let options = FilterOptions::from_table(&table);
        assert_eq!(options.districts, ["A", "B"]);
        assert_eq!(options.schools, ["X", "Y"]);
        assert_eq!(options.classes, ["10", "9"]);
    }

    #[test]
    fn absent_columns_leave_empty_option_lists() {
        let table = RecordTable::new(vec!["District".into()], vec![vec!["A".into()]]);
        let options = FilterOptions::from_table(&table);
        assert_eq!(options.districts, ["A"]);
        assert!(options.schools.is_empty());
        assert!(options.classes.is_empty());
    }
}
