//! tabprobe - inspect and compare columns of delimited text files
//!
//! Reads semicolon-delimited files whose first row names the columns and
//! reports headers, fill rates, value distributions, and differences of one
//! column between two files, by value, by count, or row by row.

pub mod actions;
pub mod analyze;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use actions::Action;
pub use config::{Config, Direction};
pub use error::{ProbeError, Result};
