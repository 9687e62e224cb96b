//! Single-pass analyses over the rows of one file

mod counter;
mod fill;

pub use counter::{count_values, ValueCounts};
pub use fill::{ColumnFill, FillStats};

use crate::error::Result;
use crate::model::Row;

/// Collect the rows whose cell at `index` satisfies `predicate`, up to `limit` rows
pub fn rows_matching<I, P>(
    rows: I,
    index: usize,
    limit: Option<usize>,
    mut predicate: P,
) -> Result<Vec<Row>>
where
    I: IntoIterator<Item = Result<Row>>,
    P: FnMut(&str) -> bool,
{
    let mut matched = Vec::new();
    for row in rows {
        if limit.is_some_and(|max| matched.len() >= max) {
            break;
        }
        let row = row?;
        if predicate(row.get(index)) {
            matched.push(row);
        }
    }
    Ok(matched)
}

/// Rows with an empty cell in one column, plus how many rows were scanned
#[derive(Debug, Default)]
pub struct EmptyCells {
    /// Listed rows, capped by the caller's limit
    pub rows: Vec<Row>,
    /// Number of empty cells found
    pub empty: usize,
    /// Number of data rows scanned
    pub total: usize,
}

/// Scan every row for empty cells in the column at `index`
pub fn empty_cells<I>(rows: I, index: usize, limit: Option<usize>) -> Result<EmptyCells>
where
    I: IntoIterator<Item = Result<Row>>,
{
    let mut result = EmptyCells::default();
    for row in rows {
        let row = row?;
        result.total += 1;
        if row.is_empty_at(index) {
            result.empty += 1;
            if limit.map_or(true, |max| result.rows.len() < max) {
                result.rows.push(row);
            }
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Result<Row>> {
        data.iter()
            .map(|r| Ok(r.iter().copied().collect::<Row>()))
            .collect()
    }

    #[test]
    fn test_rows_matching_respects_limit() {
        let data = rows(&[&["1", "ok"], &["2", "bad"], &["3", "ok"], &["4", "ok"]]);
        let matched = rows_matching(data, 1, Some(2), |v| v == "ok").unwrap();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[1].get(0), "3");
    }

    #[test]
    fn test_empty_cells_counts_past_limit() {
        let data = rows(&[&["1", ""], &["2", "x"], &["3", ""], &["4"]]);
        let result = empty_cells(data, 1, Some(1)).unwrap();
        assert_eq!(result.empty, 3);
        assert_eq!(result.total, 4);
        assert_eq!(result.rows.len(), 1);
    }
}
