//! Plain-text report output

use std::io::Write;
use std::path::Path;

use crate::analyze::{EmptyCells, FillStats, ValueCounts};
use crate::diff::{CountDelta, RowMismatch, Side, ValueSetDiff};
use crate::error::Result;
use crate::model::{Headers, Row, RowKey};

/// Human-readable report written line by line
pub struct TerminalReport<'w> {
    writer: &'w mut dyn Write,
    delimiter: char,
}

impl<'w> TerminalReport<'w> {
    pub fn new(writer: &'w mut dyn Write, delimiter: char) -> Self {
        Self { writer, delimiter }
    }

    /// One column name per line
    pub fn write_headers(&mut self, headers: &Headers) -> Result<()> {
        for name in headers.names() {
            writeln!(self.writer, "{}", name)?;
        }
        Ok(())
    }

    /// A single bare value
    pub fn write_value(&mut self, value: &str) -> Result<()> {
        writeln!(self.writer, "{}", value)?;
        Ok(())
    }

    /// Value distribution sorted by value, skipping values seen fewer than `min_count` times
    pub fn write_value_distribution(
        &mut self,
        counts: &ValueCounts,
        min_count: usize,
    ) -> Result<()> {
        for (value, count) in counts.sorted() {
            if count < min_count {
                continue;
            }
            writeln!(self.writer, "{}\t{:.6}\t{}", count, counts.fraction(count), value)?;
        }
        writeln!(self.writer, "Total non-empty: {}", counts.non_empty())?;
        writeln!(self.writer, "Total: {}", counts.total())?;
        Ok(())
    }

    /// Rows grouped under a `value (count):` label
    pub fn write_value_rows(&mut self, value: &str, count: usize, rows: &[Row]) -> Result<()> {
        writeln!(self.writer, "{} ({}):", value, count)?;
        self.write_rows(rows)
    }

    /// One line per column in header order, then the row total
    pub fn write_fill_stats(&mut self, stats: &FillStats) -> Result<()> {
        for column in &stats.columns {
            writeln!(
                self.writer,
                "{}\t{}\t{:.6}",
                column.name,
                column.non_empty,
                stats.fraction(column)
            )?;
        }
        writeln!(self.writer, "Total rows: {}", stats.rows)?;
        Ok(())
    }

    /// Rows joined by the delimiter
    pub fn write_rows(&mut self, rows: &[Row]) -> Result<()> {
        for row in rows {
            writeln!(self.writer, "{}", row.join(self.delimiter))?;
        }
        Ok(())
    }

    /// Row-identity keys joined by the delimiter
    pub fn write_keys<'k>(&mut self, keys: impl IntoIterator<Item = &'k RowKey>) -> Result<()> {
        for key in keys {
            writeln!(self.writer, "{}", key.join(self.delimiter))?;
        }
        Ok(())
    }

    /// Summary line of an empty-cell scan
    pub fn write_empty_summary(&mut self, column: &str, empty: &EmptyCells) -> Result<()> {
        writeln!(
            self.writer,
            "{}: {} empty of {} rows",
            column, empty.empty, empty.total
        )?;
        Ok(())
    }

    /// Values missing from either file, as bare values
    pub fn write_value_diff(
        &mut self,
        diff: &ValueSetDiff,
        first: &Path,
        second: &Path,
    ) -> Result<()> {
        self.write_missing_values(&diff.missing_in_second, second)?;
        self.write_missing_values(&diff.missing_in_first, first)
    }

    fn write_missing_values(&mut self, values: &[String], missing_from: &Path) -> Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "Missing in {}:", missing_from.display())?;
        for value in values {
            writeln!(self.writer, "  {}", value)?;
        }
        Ok(())
    }

    /// Rows of `source` carrying values absent from `missing_from`
    pub fn write_missing_rows(
        &mut self,
        rows: &[Row],
        source: &Path,
        missing_from: &Path,
    ) -> Result<()> {
        if rows.is_empty() {
            return Ok(());
        }
        writeln!(
            self.writer,
            "Rows of {} with values missing in {}:",
            source.display(),
            missing_from.display()
        )?;
        self.write_rows(rows)
    }

    /// `value: count1, count2 (delta)` per differing value
    pub fn write_count_deltas(&mut self, deltas: &[CountDelta]) -> Result<()> {
        for delta in deltas {
            writeln!(
                self.writer,
                "{}: {}, {} ({:+})",
                delta.value,
                delta.first,
                delta.second,
                delta.delta()
            )?;
        }
        Ok(())
    }

    /// Per-key cell mismatches and missing rows
    pub fn write_row_mismatches(
        &mut self,
        mismatches: &[RowMismatch],
        first: &Path,
        second: &Path,
    ) -> Result<()> {
        for mismatch in mismatches {
            let key = mismatch.key().join(self.delimiter);
            match mismatch {
                RowMismatch::Differs {
                    first: v1,
                    second: v2,
                    ..
                } => writeln!(self.writer, "{}: {} -> {}", key, v1, v2)?,
                RowMismatch::Missing { missing_in, .. } => {
                    let file = match missing_in {
                        Side::First => first,
                        Side::Second => second,
                    };
                    writeln!(self.writer, "{}: row missing in {}", key, file.display())?
                }
            }
        }
        Ok(())
    }
}
