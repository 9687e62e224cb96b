//! Row-identity key handling

use std::fmt;

use super::table::Row;

/// Ordered tuple of cell values identifying a row
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(pub Vec<String>);

impl RowKey {
    /// Render the key joined by the delimiter
    pub fn join(&self, delimiter: char) -> String {
        let mut sep = [0u8; 4];
        self.0.join(delimiter.encode_utf8(&mut sep))
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(";"))
    }
}

/// Builder for projecting key columns out of rows
#[derive(Debug, Clone)]
pub struct KeyBuilder {
    column_indices: Vec<usize>,
}

impl KeyBuilder {
    /// Create a key builder over the given column indices
    pub fn new(column_indices: Vec<usize>) -> Self {
        Self { column_indices }
    }

    /// Build the key of a row
    pub fn build_key(&self, row: &Row) -> RowKey {
        RowKey(
            self.column_indices
                .iter()
                .map(|&i| row.get(i).to_string())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_key_projects_in_order() {
        let row: Row = ["1", "ok", "x"].into_iter().collect();
        let key = KeyBuilder::new(vec![2, 0]).build_key(&row);
        assert_eq!(key.0, ["x", "1"]);
        assert_eq!(key.join(';'), "x;1");
    }
}
