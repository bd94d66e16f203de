//! Read-only SQL query engine for legacy Paradox table files
//!
//! A filesystem directory is treated as the catalog; each table file in
//! it becomes a queryable table. The engine accepts a SELECT-only SQL
//! dialect and surfaces results through a scrollable, materialized
//! cursor with typed column metadata.
//!
//! ## Architecture
//! - SQL layer: hand-written scanner + recursive-descent parser
//! - Planner: alias binding and ambiguity detection against the catalog
//! - Executor: Cartesian-product evaluation of the flat condition list
//! - Results: bidirectionally scrollable cursor over materialized rows
//!
//! Decoding the binary table layout is delegated to a `TableDecoder`
//! implementation supplied by the host application.

pub mod catalog;
pub mod config;
pub mod results;
pub mod sql;
pub mod types;

mod connection;
mod error;

pub use catalog::{Catalog, DirectoryCatalog, MemoryCatalog, MemoryTable, Table, TableDecoder};
pub use config::DbConfig;
pub use connection::Connection;
pub use error::{ParadoxError, Result};
pub use results::{Column, ColumnIndex, Concurrency, FetchDirection, ResultSet, ScrollType};
pub use types::{sql_type, FieldValue, ParadoxField, RawValue, Row, TableSchema};
