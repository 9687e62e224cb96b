//! Delimited text reader

use std::fs::File;
use std::io::{BufRead, BufReader, Read, Split};
use std::path::{Path, PathBuf};

use csv::ByteRecordsIntoIter;
use encoding_rs::Encoding;
use tracing::{debug, trace};

use crate::error::{ProbeError, Result};
use crate::model::{Headers, Row};

const BOM: char = '\u{feff}';

/// Where data rows come from once the header line has been consumed.
///
/// Multi-column files go through the csv reader, which skips blank lines.
/// In a single-column file a blank line is an empty cell, so those files are
/// read line by line instead.
enum Records<R> {
    Delimited(ByteRecordsIntoIter<BufReader<R>>),
    Lines { lines: Split<BufReader<R>>, line: u64 },
}

/// Forward-only reader yielding the data rows of a delimited file.
///
/// The header row is read eagerly on construction. Fields are split purely on
/// the delimiter byte: quoting is disabled, so a field cannot contain the
/// delimiter. Each field is decoded strictly with the configured encoding.
pub struct DelimitedReader<R = File> {
    source: PathBuf,
    encoding: &'static Encoding,
    delimiter: u8,
    headers: Headers,
    records: Records<R>,
}

impl DelimitedReader {
    /// Open a file for reading
    pub fn open(path: &Path, encoding: &'static Encoding, delimiter: u8) -> Result<Self> {
        let file = File::open(path).map_err(|source| ProbeError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), encoding = encoding.name(), "opened delimited file");
        Self::from_reader(path, file, encoding, delimiter)
    }
}

impl<R: Read> DelimitedReader<R> {
    /// Wrap any reader; `source` names it in error messages
    pub fn from_reader(
        source: impl Into<PathBuf>,
        reader: R,
        encoding: &'static Encoding,
        delimiter: u8,
    ) -> Result<Self> {
        let source = source.into();
        let mut reader = BufReader::new(reader);

        let mut header_line = Vec::new();
        let read = reader
            .read_until(b'\n', &mut header_line)
            .map_err(|e| ProbeError::Read {
                path: source.clone(),
                source: e,
            })?;

        let mut names = if read == 0 {
            Vec::new()
        } else {
            trim_line_end(&mut header_line);
            decode_fields(header_line.split(|&b| b == delimiter), encoding, &source, 1)?
        };
        if let Some(first) = names.first_mut() {
            if let Some(stripped) = first.strip_prefix(BOM) {
                *first = stripped.to_string();
            }
        }

        let records = if names.len() == 1 {
            Records::Lines {
                lines: reader.split(b'\n'),
                line: 1,
            }
        } else {
            Records::Delimited(
                csv::ReaderBuilder::new()
                    .delimiter(delimiter)
                    .quoting(false)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(reader)
                    .into_byte_records(),
            )
        };

        Ok(Self {
            source,
            encoding,
            delimiter,
            headers: Headers::new(names),
            records,
        })
    }

    /// Header row of the file
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Path (or label) of the underlying source
    pub fn source(&self) -> &Path {
        &self.source
    }
}

impl<R: Read> Iterator for DelimitedReader<R> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let Self {
            source,
            encoding,
            delimiter,
            headers,
            records,
        } = self;

        let fields = match records {
            Records::Delimited(records) => {
                let record = match records.next()? {
                    Ok(record) => record,
                    Err(e) => {
                        return Some(Err(ProbeError::Csv {
                            path: source.clone(),
                            source: e,
                        }))
                    }
                };
                // Positions count from the first line after the header
                let line = record.position().map_or(0, |p| p.line() + 1);
                if record.len() < headers.len() {
                    trace!(line, fields = record.len(), "short row");
                }
                decode_fields(record.iter(), *encoding, source, line)
            }
            Records::Lines { lines, line } => {
                let mut bytes = match lines.next()? {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        return Some(Err(ProbeError::Read {
                            path: source.clone(),
                            source: e,
                        }))
                    }
                };
                *line += 1;
                trim_line_end(&mut bytes);
                decode_fields(bytes.split(|&b| b == *delimiter), *encoding, source, *line)
            }
        };
        Some(fields.map(Row::new))
    }
}

fn trim_line_end(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
}

fn decode_fields<'a>(
    fields: impl Iterator<Item = &'a [u8]>,
    encoding: &'static Encoding,
    source: &Path,
    line: u64,
) -> Result<Vec<String>> {
    fields
        .map(|field| {
            encoding
                .decode_without_bom_handling_and_without_replacement(field)
                .map(|s| s.into_owned())
                .ok_or_else(|| ProbeError::Decode {
                    path: source.to_path_buf(),
                    line,
                    encoding: encoding.name(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{UTF_8, WINDOWS_1252};

    use crate::analyze::count_values;

    fn reader(data: &[u8]) -> DelimitedReader<&[u8]> {
        DelimitedReader::from_reader("test.csv", data, UTF_8, b';').unwrap()
    }

    #[test]
    fn test_headers_and_rows() {
        let mut r = reader(b"id;status\n1;ok\n2;\n");
        assert_eq!(r.headers().names(), ["id", "status"]);

        let first = r.next().unwrap().unwrap();
        assert_eq!(first.fields(), ["1", "ok"]);

        let second = r.next().unwrap().unwrap();
        assert_eq!(second.get(1), "");
        assert!(r.next().is_none());
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut r = reader(b"id;status\r\n1;ok\r\n");
        assert_eq!(r.headers().names(), ["id", "status"]);
        assert_eq!(r.next().unwrap().unwrap().fields(), ["1", "ok"]);
    }

    #[test]
    fn test_quotes_are_literal() {
        let mut r = reader(b"a;b\n\"x;y\"\n");
        let row = r.next().unwrap().unwrap();
        assert_eq!(row.fields(), ["\"x", "y\""]);
    }

    #[test]
    fn test_strips_bom() {
        let r = reader(b"\xEF\xBB\xBFid;status\n");
        assert_eq!(r.headers().names(), ["id", "status"]);
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let mut r = reader(b"id;name\n1;caf\xE9\n");
        let err = r.next().unwrap().unwrap_err();
        assert!(matches!(err, ProbeError::Decode { line: 2, .. }));
    }

    #[test]
    fn test_windows_1252() {
        let mut r = DelimitedReader::from_reader(
            "test.csv",
            &b"id;name\n1;caf\xE9\n"[..],
            WINDOWS_1252,
            b';',
        )
        .unwrap();
        let row = r.next().unwrap().unwrap();
        assert_eq!(row.get(1), "café");
    }

    #[test]
    fn test_empty_input_has_no_headers() {
        let mut r = reader(b"");
        assert!(r.headers().is_empty());
        assert!(r.next().is_none());
    }

    #[test]
    fn test_single_column_blank_line_is_empty_cell() {
        let r = reader(b"status\nok\n\nok\n");
        let counts = count_values(r, 0).unwrap();

        assert_eq!(counts.total(), 3);
        assert_eq!(counts.get(""), 1);
        assert_eq!(counts.non_empty(), 2);
    }

    #[test]
    fn test_single_column_decode_error_line() {
        let mut r = reader(b"name\r\nok\r\n\r\ncaf\xE9\r\n");
        assert_eq!(r.next().unwrap().unwrap().fields(), ["ok"]);
        assert_eq!(r.next().unwrap().unwrap().fields(), [""]);
        let err = r.next().unwrap().unwrap_err();
        assert!(matches!(err, ProbeError::Decode { line: 4, .. }));
        assert!(r.next().is_none());
    }
}
