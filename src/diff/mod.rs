//! Comparison of one column across two files

mod count_diff;
mod row_diff;
mod value_diff;

pub use count_diff::{count_deltas, CountDelta};
pub use row_diff::{compare_rows, RowMismatch, Side};
pub use value_diff::ValueSetDiff;
