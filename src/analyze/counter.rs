//! Value distribution of a single column

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::Result;
use crate::model::Row;

/// Occurrence count of every distinct value in a column.
///
/// Empty cells form their own bucket, so the counts always sum to the number
/// of data rows scanned.
#[derive(Debug, Default, Clone)]
pub struct ValueCounts {
    counts: FxHashMap<String, usize>,
    total: usize,
}

impl ValueCounts {
    /// Record one occurrence of `value`
    pub fn add(&mut self, value: &str) {
        match self.counts.get_mut(value) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(value.to_string(), 1);
            }
        }
        self.total += 1;
    }

    /// Count of `value`, zero when absent
    pub fn get(&self, value: &str) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    pub fn contains(&self, value: &str) -> bool {
        self.counts.contains_key(value)
    }

    /// Number of data rows scanned
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of rows with a non-empty value
    pub fn non_empty(&self) -> usize {
        self.total - self.get("")
    }

    /// Number of distinct values
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Iterate distinct values in no particular order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Values and counts sorted lexicographically by value
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<_> = self.counts.iter().map(|(v, &c)| (v.as_str(), c)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Fraction of all rows carrying a count
    pub fn fraction(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64
        }
    }
}

impl<'a> FromIterator<&'a str> for ValueCounts {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut counts = ValueCounts::default();
        for value in iter {
            counts.add(value);
        }
        counts
    }
}

/// Count the values of the column at `index` over all data rows
pub fn count_values<I>(rows: I, index: usize) -> Result<ValueCounts>
where
    I: IntoIterator<Item = Result<Row>>,
{
    let mut counts = ValueCounts::default();
    for row in rows {
        counts.add(row?.get(index));
    }
    debug!(rows = counts.total(), distinct = counts.distinct(), "counted values");
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_rows() {
        let rows: Vec<Result<Row>> = [["1", "ok"], ["2", ""], ["3", "ok"]]
            .into_iter()
            .map(|r| Ok(r.into_iter().collect::<Row>()))
            .collect();
        let counts = count_values(rows, 1).unwrap();

        assert_eq!(counts.total(), 3);
        assert_eq!(counts.get("ok"), 2);
        assert_eq!(counts.get(""), 1);
        assert_eq!(counts.non_empty(), 2);
        assert_eq!(counts.sorted().iter().map(|(_, c)| c).sum::<usize>(), 3);
    }

    #[test]
    fn test_sorted_is_lexicographic() {
        let counts: ValueCounts = ["b", "a", "c", "a"].into_iter().collect();
        assert_eq!(counts.sorted(), vec![("a", 2), ("b", 1), ("c", 1)]);
    }

    #[test]
    fn test_fraction_of_empty_file() {
        let counts = ValueCounts::default();
        assert_eq!(counts.fraction(0), 0.0);
    }
}
