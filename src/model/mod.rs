//! Data model for delimited rows, headers and row-identity keys

mod index;
mod key;
mod schema;
mod table;

pub use index::RowIndex;
pub use key::{KeyBuilder, RowKey};
pub use schema::Headers;
pub use table::Row;
