//! Equality filters over the three categorical dimensions.

use crate::core::table::RecordTable;

/// Wildcard option rendered first in every filter control. A category value
/// literally named "All" would be unreachable as a filter target; accepted as
/// part of the UI contract.
pub const ALL: &str = "All";

pub const DISTRICT_COLUMN: &str = "District";
pub const SCHOOL_COLUMN: &str = "School Name";
pub const CLASS_COLUMN: &str = "Class";

/// Current picks of the three selection controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub district: String,
    pub school: String,
    pub class_name: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            district: ALL.into(),
            school: ALL.into(),
            class_name: ALL.into(),
        }
    }
}

impl FilterSelection {
    fn constraints(&self) -> [(&'static str, &str); 3] {
        [
            (DISTRICT_COLUMN, self.district.as_str()),
            (SCHOOL_COLUMN, self.school.as_str()),
            (CLASS_COLUMN, self.class_name.as_str()),
        ]
    }
}

/// Keep the rows matching every non-"All" constraint, composed conjunctively
/// with case-sensitive string equality. A constrained dimension whose column
/// is absent matches no row. Returns a new table; an empty result is a valid,
/// silent outcome.
pub fn apply(table: &RecordTable, selection: &FilterSelection) -> RecordTable {
    let active: Vec<(&str, &str)> = selection
        .constraints()
        .into_iter()
        .filter(|(_, value)| *value != ALL)
        .collect();

    if active.is_empty() {
        return table.clone();
    }

    table.retain_rows(|row| {
        active
            .iter()
            .all(|(column, value)| table.cell(row, column) == Some(*value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordTable {
        RecordTable::new(
            vec!["District".into(), "School Name".into(), "Class".into()],
            vec![
                vec!["A".into(), "X".into(), "9".into()],
                vec!["B".into(), "Y".into(), "9".into()],
                vec!["A".into(), "X".into(), "10".into()],
            ],
        )
    }

    fn selection(district: &str, school: &str, class_name: &str) -> FilterSelection {
        FilterSelection {
            district: district.into(),
            school: school.into(),
            class_name: class_name.into(),
        }
    }

    #[test]
    fn all_wildcards_return_the_input_unchanged() {
        let table = sample();
        assert_eq!(apply(&table, &FilterSelection::default()), table);
    }

    #[test]
    fn district_constraint_is_sound_and_complete() {
        let table = sample();
        let filtered = apply(&table, &selection("A", ALL, ALL));
        assert_eq!(filtered.len(), 2);
        for row in 0..filtered.len() {
            assert_eq!(filtered.cell(row, "District"), Some("A"));
            assert_eq!(filtered.cell(row, "School Name"), Some("X"));
        }
    }

    #[test]
    fn constraints_compose_conjunctively() {
        let table = sample();
        let filtered = apply(&table, &selection("A", "X", "10"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.cell(0, "Class"), Some("10"));
    }

    #[test]
    fn unmatched_combination_yields_empty_table() {
        let table = sample();
        let filtered = apply(&table, &selection("B", "X", ALL));
        assert!(filtered.is_empty());
        assert_eq!(filtered.columns(), table.columns());
    }

    #[test]
    fn constrained_absent_column_matches_nothing() {
        let table = RecordTable::new(
            vec!["School Name".into()],
            vec![vec!["X".into()], vec!["Y".into()]],
        );
        let filtered = apply(&table, &selection("A", ALL, ALL));
        assert!(filtered.is_empty());
    }

    #[test]
    fn every_offered_option_matches_its_rows() {
        let table = RecordTable::new(
            vec!["District".into()],
            vec![vec!["A ".into()], vec!["A".into()]],
        );
        // Padded and unpadded cells produce separate options, and each option
        // selects exactly its own rows.
        for option in table.distinct_non_missing("District") {
            let filtered = apply(&table, &selection(&option, ALL, ALL));
            assert_eq!(filtered.len(), 1);
            assert_eq!(filtered.cell(0, "District"), Some(option.as_str()));
        }
    }

    #[test]
    fn equality_is_case_sensitive() {
        let table = sample();
        let filtered = apply(&table, &selection("a", ALL, ALL));
        assert!(filtered.is_empty());
    }
}
