//! Pooled value counting across families of same-purpose columns.
//!
//! Repeated-measure columns (three test attempts, five career picks) are
//! treated as one combined distribution: every present candidate column is
//! flattened in column order then row order, blank cells are dropped, and the
//! remaining values counted per distinct string.

use std::collections::HashMap;

use crate::core::table::RecordTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

/// A group of columns sharing one semantic purpose, charted together.
#[derive(Debug, Clone, Copy)]
pub struct ColumnFamily {
    pub key: &'static str,
    pub title: &'static str,
    pub value_label: &'static str,
    pub count_label: &'static str,
    pub chart: ChartKind,
    pub columns: &'static [&'static str],
}

/// The four column families of the student snapshot, in render order. Any
/// subset of the candidate columns may be absent from a given snapshot.
pub const FAMILIES: &[ColumnFamily] = &[
    ColumnFamily {
        key: "tammana",
        title: "Tammana Test Analysis",
        value_label: "Tammana Test",
        count_label: "Count",
        chart: ChartKind::Bar,
        columns: &["Tammana Test", "Tammana Test-1", "Tammana Test-2"],
    },
    ColumnFamily {
        key: "sten",
        title: "Tammana Sten Score Analysis",
        value_label: "Sten Score",
        count_label: "Count",
        chart: ChartKind::Bar,
        columns: &[
            "Tammana Sten Score",
            "Tammana Sten Score1",
            "Tammana Sten Score2",
            "Tammana Sten Score3",
            "Tammana Sten Score4",
        ],
    },
    ColumnFamily {
        key: "cii",
        title: "CII Result Analysis",
        value_label: "CII Result",
        count_label: "Count",
        chart: ChartKind::Bar,
        columns: &["Cii Result", "Cii Result1", "Cii Result2"],
    },
    ColumnFamily {
        key: "career",
        title: "Career Path Distribution",
        value_label: "Career Path",
        count_label: "Students",
        chart: ChartKind::Pie,
        columns: &["Career-1", "Career-2", "Career-3", "Career-4", "Career-5"],
    },
];

/// Distinct pooled value → occurrence count, sorted by descending count with
/// first-seen pool order breaking ties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// True when no candidate column existed or every pooled value was blank.
    /// An empty table suppresses its chart entirely.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts; equals the number of pooled non-blank values.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

/// Pool every non-blank cell of the present candidate columns and count
/// occurrences per distinct value. Absent columns are skipped; values are
/// trimmed only for the blank check, counted verbatim otherwise.
pub fn aggregate(table: &RecordTable, columns: &[&str]) -> FrequencyTable {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for column in columns {
        let Some(index) = table.column_index(column) else {
            continue;
        };
        for row in table.rows() {
            let value = row[index].as_str();
            if value.trim().is_empty() {
                continue;
            }
            match counts.get_mut(value) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(value.to_string(), 1);
                    order.push(value.to_string());
                }
            }
        }
    }

    let mut entries: Vec<(String, usize)> = order
        .into_iter()
        .map(|value| {
            let count = counts[&value];
            (value, count)
        })
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    FrequencyTable { entries }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn careers() -> RecordTable {
        RecordTable::new(
            vec!["Career-1".into(), "Career-2".into()],
            vec![
                vec!["Doctor".into(), "Doctor".into()],
                vec!["Engineer".into(), "".into()],
            ],
        )
    }

    #[test]
    fn pools_candidate_columns_into_one_distribution() {
        let freq = aggregate(&careers(), &["Career-1", "Career-2"]);
        assert_eq!(
            freq.entries(),
            [("Doctor".to_string(), 2), ("Engineer".to_string(), 1)]
        );
    }

    #[test]
    fn counts_sum_to_pooled_value_count() {
        let freq = aggregate(&careers(), &["Career-1", "Career-2"]);
        // Four cells, one blank.
        assert_eq!(freq.total(), 3);
    }

    #[test]
    fn absent_candidates_are_skipped() {
        let freq = aggregate(&careers(), &["Career-1", "Career-3", "Career-4"]);
        assert_eq!(freq.total(), 2);
    }

    #[test]
    fn no_present_column_means_empty_output() {
        let freq = aggregate(&careers(), &["Tammana Test", "Tammana Test-1"]);
        assert!(freq.is_empty());
        assert_eq!(freq.total(), 0);
    }

    #[test]
    fn whitespace_only_values_are_dropped() {
        let table = RecordTable::new(
            vec!["Cii Result".into()],
            vec![vec!["  ".into()], vec!["Pass".into()], vec!["".into()]],
        );
        let freq = aggregate(&table, &["Cii Result"]);
        assert_eq!(freq.entries(), [("Pass".to_string(), 1)]);
    }

    #[test]
    fn padded_values_are_counted_verbatim() {
        let table = RecordTable::new(
            vec!["Career-1".into(), "Career-2".into()],
            vec![vec!["Doctor ".into(), "Doctor".into()]],
        );
        let freq = aggregate(&table, &["Career-1", "Career-2"]);
        // Trimming is only the blank check; "Doctor " and "Doctor" are
        // distinct keys.
        assert_eq!(
            freq.entries(),
            [("Doctor ".to_string(), 1), ("Doctor".to_string(), 1)]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let table = RecordTable::new(
            vec!["Tammana Test".into()],
            vec![
                vec!["Blue".into()],
                vec!["Red".into()],
                vec!["Green".into()],
                vec!["Green".into()],
            ],
        );
        let freq = aggregate(&table, &["Tammana Test"]);
        assert_eq!(
            freq.entries(),
            [
                ("Green".to_string(), 2),
                ("Blue".to_string(), 1),
                ("Red".to_string(), 1)
            ]
        );
    }

    #[test]
    fn family_table_covers_all_four_groups() {
        let keys: Vec<&str> = FAMILIES.iter().map(|family| family.key).collect();
        assert_eq!(keys, ["tammana", "sten", "cii", "career"]);
        assert!(FAMILIES
            .iter()
            .all(|family| !family.columns.is_empty()));
    }
}
