//! Header names and column resolution

use std::path::Path;

use crate::error::{ProbeError, Result};

/// Ordered column names from the first row of a file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    names: Vec<String>,
}

impl Headers {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Position of the first column named `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Resolve a column name, failing with the file and column named
    pub fn resolve(&self, name: &str, source: &Path) -> Result<usize> {
        self.position(name).ok_or_else(|| ProbeError::ColumnNotFound {
            path: source.to_path_buf(),
            column: name.to_string(),
        })
    }

    /// Resolve several column names, preserving their order
    pub fn resolve_all(&self, names: &[String], source: &Path) -> Result<Vec<usize>> {
        names.iter().map(|n| self.resolve(n, source)).collect()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
