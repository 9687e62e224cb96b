//! Actions selectable from the command line

use std::io::Write;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::analyze::{count_values, empty_cells, rows_matching, FillStats, ValueCounts};
use crate::config::Config;
use crate::diff::{compare_rows, count_deltas, ValueSetDiff};
use crate::error::Result;
use crate::model::{KeyBuilder, Row, RowIndex};
use crate::output::TerminalReport;
use crate::parser::{self, DelimitedReader};

/// One action, carrying the column it inspects where it needs one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print column names
    Headers,
    /// Print per-column fill rates
    FillStats,
    /// Print every non-empty value of a column
    Column(String),
    /// Print the value distribution of a column
    Values(String),
    /// Count (and optionally list) rows with an empty cell
    Empty(String),
    /// List rows with an empty cell
    EmptyRows(String),
    /// Values present in one file's column but not the other's
    Compare(String),
    /// Per-value count differences, or per-row value mismatches
    Counts(String),
}

impl Action {
    /// Whether the action reads a second file
    pub fn is_comparison(&self) -> bool {
        matches!(self, Action::Compare(_) | Action::Counts(_))
    }
}

/// Run one action, writing its report to `writer`
pub fn run(action: &Action, config: &Config, writer: &mut dyn Write) -> Result<()> {
    config.validate(action)?;
    debug!(?action, file = %config.file.display(), "running action");

    let mut report = TerminalReport::new(writer, char::from(config.delimiter));
    match action {
        Action::Headers => {
            let reader = open_first(config)?;
            report.write_headers(reader.headers())
        }
        Action::FillStats => {
            let reader = open_first(config)?;
            let headers = reader.headers().clone();
            report.write_fill_stats(&FillStats::scan(&headers, reader)?)
        }
        Action::Column(column) => {
            let reader = open_first(config)?;
            let index = reader.headers().resolve(column, &config.file)?;
            for row in reader {
                let row = row?;
                if !row.is_empty_at(index) {
                    report.write_value(row.get(index))?;
                }
            }
            Ok(())
        }
        Action::Values(column) => values(&mut report, config, column),
        Action::Empty(column) => empty(&mut report, config, column, config.show_rows),
        Action::EmptyRows(column) => empty(&mut report, config, column, true),
        Action::Compare(column) => compare(&mut report, config, column),
        Action::Counts(column) if config.show_rows => counts_by_row(&mut report, config, column),
        Action::Counts(column) => counts(&mut report, config, column),
    }
}

fn open_first(config: &Config) -> Result<DelimitedReader> {
    parser::open(&config.file, &config.encoding, config.delimiter)
}

fn open_second(config: &Config) -> Result<DelimitedReader> {
    parser::open(config.second_file()?, config.second_encoding(), config.delimiter)
}

/// Count the values of `column`, resolved against the file's own headers
fn column_counts(reader: DelimitedReader, column: &str) -> Result<ValueCounts> {
    let index = reader.headers().resolve(column, reader.source())?;
    count_values(reader, index)
}

fn values(report: &mut TerminalReport<'_>, config: &Config, column: &str) -> Result<()> {
    let counts = column_counts(open_first(config)?, column)?;
    if !config.show_rows {
        return report.write_value_distribution(&counts, config.min_count);
    }

    // Second pass to group the rows of each kept value
    let reader = open_first(config)?;
    let index = reader.headers().resolve(column, &config.file)?;
    let mut grouped: FxHashMap<String, Vec<Row>> = FxHashMap::default();
    for row in rows_matching(reader, index, None, |v| counts.get(v) >= config.min_count)? {
        grouped.entry(row.get(index).to_string()).or_default().push(row);
    }

    for (value, count) in counts.sorted() {
        if let Some(rows) = grouped.remove(value) {
            report.write_value_rows(value, count, &rows)?;
        }
    }
    Ok(())
}

fn empty(
    report: &mut TerminalReport<'_>,
    config: &Config,
    column: &str,
    list_rows: bool,
) -> Result<()> {
    let reader = open_first(config)?;
    let index = reader.headers().resolve(column, &config.file)?;
    let keys = KeyBuilder::new(reader.headers().resolve_all(&config.row_id, &config.file)?);
    let result = empty_cells(reader, index, config.max_rows)?;

    if !config.row_id.is_empty() {
        let keys: Vec<_> = result.rows.iter().map(|row| keys.build_key(row)).collect();
        report.write_keys(&keys)?;
    } else if list_rows {
        report.write_rows(&result.rows)?;
    }
    report.write_empty_summary(column, &result)
}

fn compare(report: &mut TerminalReport<'_>, config: &Config, column: &str) -> Result<()> {
    let second_path = config.second_file()?;
    let first = column_counts(open_first(config)?, column)?;
    let second = column_counts(open_second(config)?, column)?;
    let diff = ValueSetDiff::between(&first, &second).restrict(config.direction);
    if diff.is_empty() {
        return Ok(());
    }

    if !config.show_rows {
        return report.write_value_diff(&diff, &config.file, second_path);
    }

    let missing = diff.missing_in_second_set();
    let rows = expand(open_first(config)?, column, |v| missing.contains(v))?;
    report.write_missing_rows(&rows, &config.file, second_path)?;

    let missing = diff.missing_in_first_set();
    let rows = expand(open_second(config)?, column, |v| missing.contains(v))?;
    report.write_missing_rows(&rows, second_path, &config.file)
}

fn expand(
    reader: DelimitedReader,
    column: &str,
    predicate: impl FnMut(&str) -> bool,
) -> Result<Vec<Row>> {
    let index = reader.headers().resolve(column, reader.source())?;
    rows_matching(reader, index, None, predicate)
}

fn counts(report: &mut TerminalReport<'_>, config: &Config, column: &str) -> Result<()> {
    let first = column_counts(open_first(config)?, column)?;
    let second = column_counts(open_second(config)?, column)?;
    report.write_count_deltas(&count_deltas(&first, &second, config.direction))
}

fn counts_by_row(report: &mut TerminalReport<'_>, config: &Config, column: &str) -> Result<()> {
    let (first, first_col) = index_file(open_first(config)?, column, &config.row_id)?;
    let (second, second_col) = index_file(open_second(config)?, column, &config.row_id)?;
    let mismatches = compare_rows(&first, &second, first_col, second_col, config.direction);
    report.write_row_mismatches(&mismatches, &config.file, config.second_file()?)
}

/// Index a file by its row-identity columns and resolve the compared column
fn index_file(
    reader: DelimitedReader,
    column: &str,
    row_id: &[String],
) -> Result<(RowIndex, usize)> {
    let source = reader.source().to_path_buf();
    let column_index = reader.headers().resolve(column, &source)?;
    let keys = KeyBuilder::new(reader.headers().resolve_all(row_id, &source)?);
    Ok((RowIndex::build(reader, &keys, &source)?, column_index))
}
