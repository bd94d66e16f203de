//! Engine configuration
//!
//! Settings for the catalog directory walker and result set defaults.

use serde::{Deserialize, Serialize};

/// Configuration for a Paradox connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfig {
    /// File extension of table files in the catalog directory (without the dot).
    pub table_extension: String,

    /// Maximum number of decoded tables kept in the catalog cache.
    pub table_cache_size: usize,

    /// Default fetch size reported by result sets.
    pub fetch_size: usize,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            table_extension: "db".to_string(),
            table_cache_size: 32,
            fetch_size: 10,
        }
    }
}
