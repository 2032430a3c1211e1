//! In-memory record table: the parsed CSV snapshot and its filtered subsets.
//!
//! Column presence is never guaranteed, so every accessor returns an absence
//! marker instead of failing; widgets downstream degrade silently when a
//! column is missing. A cell counts as missing when its column is absent or
//! its trimmed value is empty.

use std::collections::BTreeSet;

use csv::{ReaderBuilder, Writer};

/// Ordered rows of string cells addressed by column name. Rows carry no
/// primary key and are only ever addressed positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordTable {
    /// Build a table directly; rows are padded or truncated to the column
    /// count so positional access stays in bounds.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.truncate(width);
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Parse a whole CSV buffer with a header row. Ragged rows are tolerated:
    /// short rows are padded with empty cells, long rows truncated to the
    /// header width. Malformed CSV surfaces as an error.
    pub fn from_csv(bytes: &[u8]) -> Result<Self, String> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);

        let columns: Vec<String> = reader
            .headers()
            .map_err(|err| err.to_string())?
            .iter()
            .map(String::from)
            .collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| err.to_string())?;
            let mut row: Vec<String> = record
                .iter()
                .take(columns.len())
                .map(String::from)
                .collect();
            row.resize(columns.len(), String::new());
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    /// Serialize as UTF-8 CSV with the header row included. Re-parsing the
    /// output reproduces the same columns and rows.
    pub fn to_csv(&self) -> Result<String, String> {
        if self.columns.is_empty() {
            return Ok(String::new());
        }

        let mut writer = Writer::from_writer(Vec::new());
        writer
            .write_record(&self.columns)
            .map_err(|err| err.to_string())?;
        for row in &self.rows {
            writer.write_record(row).map_err(|err| err.to_string())?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| err.to_string())?;
        String::from_utf8(bytes).map_err(|err| err.to_string())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Row count.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Raw cell value, `None` when the column is absent or the row index is
    /// out of range. Empty strings are returned as-is; missing-value
    /// semantics are the caller's concern.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.column_index(column)?;
        self.rows.get(row).map(|cells| cells[index].as_str())
    }

    /// Sorted distinct non-missing values of a column, kept verbatim so each
    /// one matches its own rows under raw equality. Empty when the column is
    /// absent. Drives the filter option lists and the distinct-count KPIs.
    pub fn distinct_non_missing(&self, column: &str) -> Vec<String> {
        let Some(index) = self.column_index(column) else {
            return Vec::new();
        };
        let distinct: BTreeSet<&str> = self
            .rows
            .iter()
            .map(|row| row[index].as_str())
            .filter(|value| !value.trim().is_empty())
            .collect();
        distinct.into_iter().map(String::from).collect()
    }

    /// Arithmetic mean of the numerically-coercible cells of a column. NaN
    /// when the column is absent, the table is empty, or no cell parses.
    pub fn numeric_mean(&self, column: &str) -> f64 {
        let Some(index) = self.column_index(column) else {
            return f64::NAN;
        };
        let mut sum = 0.0;
        let mut count = 0usize;
        for row in &self.rows {
            if let Ok(value) = row[index].trim().parse::<f64>() {
                sum += value;
                count += 1;
            }
        }
        if count == 0 {
            f64::NAN
        } else {
            sum / count as f64
        }
    }

    /// New table with the same columns and the subset of rows whose index
    /// passes the predicate. The input is never mutated.
    pub fn retain_rows<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(usize) -> bool,
    {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .filter(|(index, _)| keep(*index))
            .map(|(_, row)| row.clone())
            .collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordTable {
        RecordTable::new(
            vec!["District".into(), "School Name".into(), "Class".into()],
            vec![
                vec!["A".into(), "X".into(), "9".into()],
                vec!["B".into(), "Y".into(), "10".into()],
                vec!["A".into(), "X".into(), "9".into()],
            ],
        )
    }

    #[test]
    fn parses_header_and_rows() {
        let table = RecordTable::from_csv(b"District,School Name\nA,X\nB,Y\n").unwrap();
        assert_eq!(table.columns(), ["District", "School Name"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(1, "School Name"), Some("Y"));
    }

    #[test]
    fn pads_short_rows_and_truncates_long_ones() {
        let table = RecordTable::from_csv(b"A,B,C\n1\n1,2,3,4\n").unwrap();
        assert_eq!(table.cell(0, "B"), Some(""));
        assert_eq!(table.cell(0, "C"), Some(""));
        assert_eq!(table.cell(1, "C"), Some("3"));
    }

    #[test]
    fn csv_round_trip_preserves_quoting() {
        let table = RecordTable::new(
            vec!["Name".into(), "Notes".into()],
            vec![
                vec!["Smith, Jane".into(), "said \"hi\"".into()],
                vec!["Lee".into(), "line\nbreak".into()],
            ],
        );
        let csv = table.to_csv().unwrap();
        let reparsed = RecordTable::from_csv(csv.as_bytes()).unwrap();
        assert_eq!(reparsed, table);
    }

    #[test]
    fn empty_filtered_table_still_exports_header() {
        let table = sample().retain_rows(|_| false);
        let csv = table.to_csv().unwrap();
        assert_eq!(csv.trim_end(), "District,School Name,Class");
    }

    #[test]
    fn absent_column_yields_none() {
        let table = sample();
        assert_eq!(table.column_index("Career-1"), None);
        assert_eq!(table.cell(0, "Career-1"), None);
    }

    #[test]
    fn distinct_values_are_sorted_and_skip_blanks() {
        let table = RecordTable::new(
            vec!["District".into()],
            vec![
                vec!["B".into()],
                vec!["  ".into()],
                vec!["A".into()],
                vec!["B".into()],
                vec!["".into()],
            ],
        );
        assert_eq!(table.distinct_non_missing("District"), ["A", "B"]);
        assert!(table.distinct_non_missing("School Name").is_empty());
    }

    #[test]
    fn distinct_values_keep_padding_verbatim() {
        let table = RecordTable::new(
            vec!["District".into()],
            vec![vec!["A ".into()], vec!["A".into()]],
        );
        assert_eq!(table.distinct_non_missing("District"), ["A", "A "]);
    }

    #[test]
    fn numeric_mean_skips_unparsable_cells() {
        let table = RecordTable::new(
            vec!["% of Previous Class".into()],
            vec![
                vec!["80".into()],
                vec!["90.5".into()],
                vec!["n/a".into()],
                vec!["".into()],
            ],
        );
        let mean = table.numeric_mean("% of Previous Class");
        assert!((mean - 85.25).abs() < 1e-9);
    }

    #[test]
    fn numeric_mean_is_nan_when_undefined() {
        let table = sample();
        assert!(table.numeric_mean("% of Previous Class").is_nan());
        let empty = table.retain_rows(|_| false);
        assert!(empty.numeric_mean("Class").is_nan());
    }

    #[test]
    fn retain_rows_copies_columns_and_keeps_order() {
        let table = sample();
        let subset = table.retain_rows(|index| index != 1);
        assert_eq!(subset.columns(), table.columns());
        assert_eq!(subset.len(), 2);
        assert_eq!(subset.cell(1, "District"), Some("A"));
        assert_eq!(table.len(), 3);
    }
}
