//! Row-identity comparison of one column

use tracing::debug;

use crate::config::Direction;
use crate::model::{RowIndex, RowKey};

/// Which of the two files a row is missing from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

/// A difference found between rows sharing a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowMismatch {
    /// No row with this key exists in the given file
    Missing { key: RowKey, missing_in: Side },
    /// Both rows exist and their cells satisfy the direction filter
    Differs {
        key: RowKey,
        first: String,
        second: String,
    },
}

impl RowMismatch {
    /// Get the key for this mismatch
    pub fn key(&self) -> &RowKey {
        match self {
            RowMismatch::Missing { key, .. } => key,
            RowMismatch::Differs { key, .. } => key,
        }
    }
}

/// Match rows by key and compare the cells at `first_col` / `second_col`.
///
/// Keys are visited in the first file's order; keys only the second file has
/// are reported afterwards, in its order.
pub fn compare_rows(
    first: &RowIndex,
    second: &RowIndex,
    first_col: usize,
    second_col: usize,
    direction: Direction,
) -> Vec<RowMismatch> {
    let mut mismatches = Vec::new();

    for (key, row) in first.iter() {
        match second.get(key) {
            Some(other) => {
                let (v1, v2) = (row.get(first_col), other.get(second_col));
                if direction.holds(v1, v2) {
                    mismatches.push(RowMismatch::Differs {
                        key: key.clone(),
                        first: v1.to_string(),
                        second: v2.to_string(),
                    });
                }
            }
            None => mismatches.push(RowMismatch::Missing {
                key: key.clone(),
                missing_in: Side::Second,
            }),
        }
    }

    for (key, _) in second.iter().filter(|(k, _)| !first.contains(k)) {
        mismatches.push(RowMismatch::Missing {
            key: key.clone(),
            missing_in: Side::First,
        });
    }

    debug!(%direction, mismatches = mismatches.len(), "compared rows by key");
    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    use crate::error::Result;
    use crate::model::{KeyBuilder, Row};

    fn index(data: &[&[&str]]) -> RowIndex {
        let rows: Vec<Result<Row>> = data
            .iter()
            .map(|r| Ok(r.iter().copied().collect::<Row>()))
            .collect();
        RowIndex::build(rows, &KeyBuilder::new(vec![0]), Path::new("t.csv")).unwrap()
    }

    fn key(k: &str) -> RowKey {
        RowKey(vec![k.to_string()])
    }

    #[test]
    fn test_reports_differing_and_missing_rows() {
        let a = index(&[&["1", "ok"], &["2", "bad"], &["3", "ok"]]);
        let b = index(&[&["1", "ok"], &["2", "ok"], &["4", "new"]]);
        let result = compare_rows(&a, &b, 1, 1, Direction::NotEqual);

        assert_eq!(
            result,
            vec![
                RowMismatch::Differs {
                    key: key("2"),
                    first: "bad".into(),
                    second: "ok".into()
                },
                RowMismatch::Missing {
                    key: key("3"),
                    missing_in: Side::Second
                },
                RowMismatch::Missing {
                    key: key("4"),
                    missing_in: Side::First
                },
            ]
        );
    }

    #[test]
    fn test_direction_filters_cells() {
        let a = index(&[&["1", "a"], &["2", "c"]]);
        let b = index(&[&["1", "b"], &["2", "b"]]);

        let less = compare_rows(&a, &b, 1, 1, Direction::Less);
        assert_eq!(less.len(), 1);
        assert_eq!(less[0].key(), &key("1"));

        let greater = compare_rows(&a, &b, 1, 1, Direction::Greater);
        assert_eq!(greater.len(), 1);
        assert_eq!(greater[0].key(), &key("2"));
    }
}
