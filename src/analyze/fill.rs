//! Per-column fill rates

use tracing::debug;

use crate::error::Result;
use crate::model::{Headers, Row};

/// Non-empty cell count of one column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFill {
    pub name: String,
    pub non_empty: usize,
}

/// Fill statistics of every column, in header order
#[derive(Debug, Clone, Default)]
pub struct FillStats {
    pub columns: Vec<ColumnFill>,
    pub rows: usize,
}

impl FillStats {
    /// Scan all data rows once
    pub fn scan<I>(headers: &Headers, rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Row>>,
    {
        let mut filled = vec![0usize; headers.len()];
        let mut total = 0;
        for row in rows {
            let row = row?;
            total += 1;
            for (idx, count) in filled.iter_mut().enumerate() {
                if !row.is_empty_at(idx) {
                    *count += 1;
                }
            }
        }

        debug!(rows = total, columns = filled.len(), "collected fill statistics");
        Ok(Self {
            columns: headers
                .names()
                .iter()
                .zip(filled)
                .map(|(name, non_empty)| ColumnFill {
                    name: name.clone(),
                    non_empty,
                })
                .collect(),
            rows: total,
        })
    }

    /// Fraction of rows with a non-empty cell
    pub fn fraction(&self, column: &ColumnFill) -> f64 {
        if self.rows == 0 {
            0.0
        } else {
            column.non_empty as f64 / self.rows as f64
        }
    }
}
