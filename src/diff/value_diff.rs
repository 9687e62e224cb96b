//! Set difference of the distinct values of a column

use rustc_hash::FxHashSet;

use crate::analyze::ValueCounts;
use crate::config::Direction;

/// Distinct values present on one side but not the other
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValueSetDiff {
    /// Values of the first file absent from the second, sorted
    pub missing_in_second: Vec<String>,
    /// Values of the second file absent from the first, sorted
    pub missing_in_first: Vec<String>,
}

impl ValueSetDiff {
    /// Compare the distinct values of two columns
    pub fn between(first: &ValueCounts, second: &ValueCounts) -> Self {
        Self {
            missing_in_second: missing(first, second),
            missing_in_first: missing(second, first),
        }
    }

    /// Keep only the sides selected by a direction.
    ///
    /// `>` keeps values only the first file has, `<` values only the second
    /// file has, `=` keeps both.
    pub fn restrict(mut self, direction: Direction) -> Self {
        match direction {
            Direction::Greater => self.missing_in_first.clear(),
            Direction::Less => self.missing_in_second.clear(),
            Direction::NotEqual => {}
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.missing_in_second.is_empty() && self.missing_in_first.is_empty()
    }

    /// Lookup set of values missing from the second file
    pub fn missing_in_second_set(&self) -> FxHashSet<&str> {
        self.missing_in_second.iter().map(String::as_str).collect()
    }

    /// Lookup set of values missing from the first file
    pub fn missing_in_first_set(&self) -> FxHashSet<&str> {
        self.missing_in_first.iter().map(String::as_str).collect()
    }
}

fn missing(from: &ValueCounts, other: &ValueCounts) -> Vec<String> {
    let mut values: Vec<String> = from
        .values()
        .filter(|v| !other.contains(v))
        .map(str::to_string)
        .collect();
    values.sort_unstable();
    values
}
