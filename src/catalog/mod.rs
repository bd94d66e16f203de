//! Catalog abstraction: a named collection of read-only tables
//!
//! The filesystem directory is the default catalog; decoding the binary
//! table layout is delegated to a `TableDecoder` supplied by the caller.

mod directory;
mod memory;

pub use directory::DirectoryCatalog;
pub use memory::{MemoryCatalog, MemoryTable};

use crate::error::Result;
use crate::types::{ParadoxField, Row};
use std::path::Path;
use std::sync::Arc;

/// A single read-only table: metadata plus a forward-only row scan.
pub trait Table: Send + Sync {
    /// Table name as known to the catalog.
    fn name(&self) -> &str;

    /// Ordered field descriptors.
    fn fields(&self) -> &[ParadoxField];

    /// Forward-only, finite row iterator.
    fn scan(&self) -> Result<Box<dyn Iterator<Item = Result<Row>> + '_>>;
}

/// Enumerates tables in the catalog.
pub trait Catalog: Send + Sync {
    /// List tables matching `pattern` by name, case-insensitively.
    /// An empty pattern or `%` lists every table. Returns zero or more.
    fn list_tables(&self, pattern: &str) -> Result<Vec<Arc<dyn Table>>>;
}

/// Decodes one table file into a `Table`.
///
/// The binary Paradox decoder lives outside this crate; the directory
/// catalog calls through this seam for every file it opens.
pub trait TableDecoder: Send + Sync {
    fn decode(&self, path: &Path) -> Result<Arc<dyn Table>>;
}
