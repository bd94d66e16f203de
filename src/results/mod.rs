//! Client-facing result model: column metadata and the scrollable cursor

mod column;
mod result_set;

pub use column::Column;
pub use result_set::{ColumnIndex, Concurrency, FetchDirection, ResultSet, ScrollType};
