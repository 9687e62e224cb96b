//! Configuration handling for tabprobe

use std::path::{Path, PathBuf};

use crate::actions::Action;
use crate::error::{ProbeError, Result};

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b';';

/// Default encoding label
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Relationship between a left-hand and right-hand value that counts as a difference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Left is strictly less than right
    Less,
    /// Left is strictly greater than right
    Greater,
    /// Left and right differ
    #[default]
    NotEqual,
}

impl Direction {
    /// Check whether the pair is a reportable difference
    pub fn holds<T: Ord + ?Sized>(self, left: &T, right: &T) -> bool {
        match self {
            Direction::Less => left < right,
            Direction::Greater => left > right,
            Direction::NotEqual => left != right,
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "<" | "lt" => Ok(Direction::Less),
            ">" | "gt" => Ok(Direction::Greater),
            "=" | "!=" | "ne" => Ok(Direction::NotEqual),
            _ => Err(format!("Unknown direction: {} (expected <, > or =)", s)),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Less => write!(f, "<"),
            Direction::Greater => write!(f, ">"),
            Direction::NotEqual => write!(f, "="),
        }
    }
}

/// Configuration for a single invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// File every action reads
    pub file: PathBuf,
    /// Second file for comparison actions
    pub file2: Option<PathBuf>,
    /// Encoding label of the first file
    pub encoding: String,
    /// Encoding label of the second file (falls back to `encoding`)
    pub encoding2: Option<String>,
    /// Field delimiter byte
    pub delimiter: u8,
    /// Minimum occurrence count for value distributions
    pub min_count: usize,
    /// Cap on the number of listed rows
    pub max_rows: Option<usize>,
    /// List full rows instead of values or counts
    pub show_rows: bool,
    /// Columns forming the row-identity key
    pub row_id: Vec<String>,
    /// Which relationship counts as a difference
    pub direction: Direction,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::new(),
            file2: None,
            encoding: DEFAULT_ENCODING.to_string(),
            encoding2: None,
            delimiter: DEFAULT_DELIMITER,
            min_count: 1,
            max_rows: None,
            show_rows: false,
            row_id: Vec::new(),
            direction: Direction::default(),
        }
    }
}

impl Config {
    /// Create a new Config for a single file
    pub fn new(file: PathBuf) -> Self {
        Self {
            file,
            ..Default::default()
        }
    }

    /// Set the second file for comparisons
    pub fn with_file2(mut self, file2: PathBuf) -> Self {
        self.file2 = Some(file2);
        self
    }

    /// Set the encoding of the first file
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Set the encoding of the second file
    pub fn with_encoding2(mut self, encoding: impl Into<String>) -> Self {
        self.encoding2 = Some(encoding.into());
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the minimum count for value distributions
    pub fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }

    /// Cap the number of listed rows
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// List rows instead of values
    pub fn with_show_rows(mut self, show_rows: bool) -> Self {
        self.show_rows = show_rows;
        self
    }

    /// Set row-identity key columns
    pub fn with_row_id(mut self, columns: Vec<String>) -> Self {
        self.row_id = columns;
        self
    }

    /// Set the direction filter
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Encoding label of the second file
    pub fn second_encoding(&self) -> &str {
        self.encoding2.as_deref().unwrap_or(&self.encoding)
    }

    /// Second file, required by comparison actions
    pub fn second_file(&self) -> Result<&Path> {
        self.file2.as_deref().ok_or(ProbeError::MissingOption {
            option: "compare/counts",
            required: "--file2",
        })
    }

    /// Reject option combinations an action cannot run with
    pub fn validate(&self, action: &Action) -> Result<()> {
        if action.is_comparison() {
            self.second_file()?;
        }
        if matches!(action, Action::Compare(_)) && !self.row_id.is_empty() {
            return Err(ProbeError::UnusedOption {
                option: "--rowid",
                action: "compare",
            });
        }
        if matches!(action, Action::Counts(_)) && self.show_rows && self.row_id.is_empty() {
            return Err(ProbeError::MissingOption {
                option: "counts --rows",
                required: "--rowid",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_direction() {
        assert_eq!("<".parse::<Direction>(), Ok(Direction::Less));
        assert_eq!(">".parse::<Direction>(), Ok(Direction::Greater));
        assert_eq!("=".parse::<Direction>(), Ok(Direction::NotEqual));
        assert_eq!("NE".parse::<Direction>(), Ok(Direction::NotEqual));
        assert!("~".parse::<Direction>().is_err());
        assert!("eq".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_holds() {
        assert!(Direction::Less.holds(&1, &2));
        assert!(!Direction::Less.holds(&2, &2));
        assert!(Direction::Greater.holds("b", "a"));
        assert!(Direction::NotEqual.holds(&0, &3));
        assert!(!Direction::NotEqual.holds(&2, &2));
    }

    #[test]
    fn test_second_encoding_falls_back() {
        let config = Config::new("a.csv".into()).with_encoding("latin1");
        assert_eq!(config.second_encoding(), "latin1");

        let config = config.with_encoding2("utf-8");
        assert_eq!(config.second_encoding(), "utf-8");
    }

    #[test]
    fn test_counts_rows_requires_rowid() {
        let config = Config::new("a.csv".into())
            .with_file2("b.csv".into())
            .with_show_rows(true);
        let err = config.validate(&Action::Counts("status".into())).unwrap_err();
        assert!(matches!(err, ProbeError::MissingOption { required: "--rowid", .. }));

        let config = config.with_row_id(vec!["id".into()]);
        assert!(config.validate(&Action::Counts("status".into())).is_ok());
    }

    #[test]
    fn test_compare_rejects_rowid() {
        let config = Config::new("a.csv".into())
            .with_file2("b.csv".into())
            .with_row_id(vec!["id".into()]);
        let err = config.validate(&Action::Compare("status".into())).unwrap_err();
        assert!(matches!(err, ProbeError::UnusedOption { option: "--rowid", .. }));
    }

    #[test]
    fn test_comparison_requires_second_file() {
        let config = Config::new("a.csv".into());
        assert!(config.validate(&Action::Compare("status".into())).is_err());
        assert!(config.validate(&Action::Headers).is_ok());
    }
}
