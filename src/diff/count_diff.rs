//! Per-value count comparison

use tracing::debug;

use crate::analyze::ValueCounts;
use crate::config::Direction;

/// A value whose counts differ between the two files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountDelta {
    pub value: String,
    pub first: usize,
    pub second: usize,
}

impl CountDelta {
    /// Signed difference `second - first`
    pub fn delta(&self) -> i64 {
        self.second as i64 - self.first as i64
    }
}

/// Compare value counts under a direction filter, sorted by value.
///
/// A value absent on one side counts as zero there. As a consequence `=`
/// and `<` include values only the second file has, while `>` never does.
pub fn count_deltas(
    first: &ValueCounts,
    second: &ValueCounts,
    direction: Direction,
) -> Vec<CountDelta> {
    let mut deltas: Vec<CountDelta> = first
        .values()
        .chain(second.values().filter(|v| !first.contains(v)))
        .filter_map(|value| {
            let (c1, c2) = (first.get(value), second.get(value));
            direction.holds(&c1, &c2).then(|| CountDelta {
                value: value.to_string(),
                first: c1,
                second: c2,
            })
        })
        .collect();
    deltas.sort_unstable_by(|a, b| a.value.cmp(&b.value));

    debug!(%direction, differences = deltas.len(), "compared value counts");
    deltas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(values: &[&str]) -> ValueCounts {
        values.iter().copied().collect()
    }

    #[test]
    fn test_not_equal_elides_matching_counts() {
        let a = counts(&["ok", "bad"]);
        let b = counts(&["ok", "bad", "bad"]);
        let deltas = count_deltas(&a, &b, Direction::NotEqual);

        assert_eq!(
            deltas,
            vec![CountDelta {
                value: "bad".into(),
                first: 1,
                second: 2
            }]
        );
        assert_eq!(deltas[0].delta(), 1);
    }

    #[test]
    fn test_not_equal_includes_one_sided_values() {
        let a = counts(&["x", "same"]);
        let b = counts(&["y", "same"]);
        let values: Vec<_> = count_deltas(&a, &b, Direction::NotEqual)
            .into_iter()
            .map(|d| (d.value, d.first, d.second))
            .collect();
        assert_eq!(values, vec![(String::from("x"), 1, 0), (String::from("y"), 0, 1)]);
    }

    #[test]
    fn test_less_backfills_second_only_values() {
        let a = counts(&["a", "b", "b"]);
        let b = counts(&["a", "a", "b", "c"]);
        let values: Vec<_> = count_deltas(&a, &b, Direction::Less)
            .into_iter()
            .map(|d| d.value)
            .collect();
        assert_eq!(values, vec!["a", "c"]);
    }

    #[test]
    fn test_greater_skips_second_only_values() {
        let a = counts(&["a", "b", "b", "d"]);
        let b = counts(&["a", "a", "b", "c"]);
        let values: Vec<_> = count_deltas(&a, &b, Direction::Greater)
            .into_iter()
            .map(|d| d.value)
            .collect();
        assert_eq!(values, vec!["b", "d"]);
    }
}
