//! Row index keyed by row-identity tuples

use std::path::Path;

use indexmap::map::Entry;
use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ProbeError, Result};

use super::key::{KeyBuilder, RowKey};
use super::table::Row;

/// Mapping from row-identity key to the single row carrying it, in file order
#[derive(Debug, Default)]
pub struct RowIndex {
    rows: IndexMap<RowKey, Row>,
}

impl RowIndex {
    /// Build an index over all data rows; duplicate keys are an error
    pub fn build<I>(rows: I, keys: &KeyBuilder, source: &Path) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Row>>,
    {
        let mut index = IndexMap::new();
        for row in rows {
            let row = row?;
            match index.entry(keys.build_key(&row)) {
                Entry::Occupied(entry) => {
                    return Err(ProbeError::DuplicateKey {
                        path: source.to_path_buf(),
                        key: entry.key().0.clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(row);
                }
            }
        }

        debug!(path = %source.display(), rows = index.len(), "built row index");
        Ok(Self { rows: index })
    }

    /// Look up a row by key
    pub fn get(&self, key: &RowKey) -> Option<&Row> {
        self.rows.get(key)
    }

    pub fn contains(&self, key: &RowKey) -> bool {
        self.rows.contains_key(key)
    }

    /// Iterate keys and rows in file order
    pub fn iter(&self) -> impl Iterator<Item = (&RowKey, &Row)> {
        self.rows.iter()
    }
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
    fn test_index_lookup() {
        let index = RowIndex::build(
            rows(&[&["1", "ok"], &["2", "bad"]]),
            &KeyBuilder::new(vec![0]),
            Path::new("a.csv"),
        )
        .unwrap();

        assert_eq!(index.iter().count(), 2);
        let row = index.get(&RowKey(vec!["2".into()])).unwrap();
        assert_eq!(row.get(1), "bad");
    }

    #[test]
    fn test_duplicate_key_is_error() {
        let err = RowIndex::build(
            rows(&[&["1", "a", "x"], &["1", "b", "x"], &["1", "a", "y"], &["1", "a", "x"]]),
            &KeyBuilder::new(vec![0, 2]),
            Path::new("a.csv"),
        )
        .unwrap_err();

        match err {
            ProbeError::DuplicateKey { key, .. } => assert_eq!(key, vec!["1", "x"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_keeps_file_order() {
        let index = RowIndex::build(
            rows(&[&["3"], &["1"], &["2"]]),
            &KeyBuilder::new(vec![0]),
            Path::new("a.csv"),
        )
        .unwrap();
        let keys: Vec<_> = index.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["3", "1", "2"]);
    }
}
