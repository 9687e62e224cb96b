//! Error types for tabprobe

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, indexing or comparing delimited files
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Column '{column}' not found in {}", .path.display())]
    ColumnNotFound { path: PathBuf, column: String },

    #[error("Duplicate row key '{}' in {}", .key.join(";"), .path.display())]
    DuplicateKey { path: PathBuf, key: Vec<String> },

    #[error("Option {option} requires {required}")]
    MissingOption {
        option: &'static str,
        required: &'static str,
    },

    #[error("Option {option} is not used by {action}")]
    UnusedOption {
        option: &'static str,
        action: &'static str,
    },

    #[error("Invalid {encoding} data on line {line} of {}", .path.display())]
    Decode {
        path: PathBuf,
        line: u64,
        encoding: &'static str,
    },

    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    #[error("Encoding {0} is not ASCII-compatible and cannot be split on a byte delimiter")]
    UnsupportedEncoding(&'static str),

    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProbeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_not_found_names_file_and_column() {
        let err = ProbeError::ColumnNotFound {
            path: PathBuf::from("a.csv"),
            column: "status".to_string(),
        };
        assert_eq!(err.to_string(), "Column 'status' not found in a.csv");
    }

    #[test]
    fn test_duplicate_key_joins_components() {
        let err = ProbeError::DuplicateKey {
            path: PathBuf::from("b.csv"),
            key: vec!["1".to_string(), "x".to_string()],
        };
        assert_eq!(err.to_string(), "Duplicate row key '1;x' in b.csv");
    }
}
