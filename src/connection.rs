//! Connection facade
//!
//! Owns the catalog and runs the parse/plan/execute pipeline for one
//! caller at a time. Statements on a connection are sequenced by a
//! re-entrancy guard; sharing a connection between threads serializes
//! the queries, concurrent use of one `ResultSet` is not supported.

use crate::catalog::{Catalog, DirectoryCatalog, TableDecoder};
use crate::config::DbConfig;
use crate::error::{ParadoxError, Result};
use crate::results::ResultSet;
use crate::sql;
use crate::sql::Statement;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;

pub struct Connection {
    catalog: Arc<dyn Catalog>,
    config: DbConfig,
    guard: Mutex<()>,
}

impl Connection {
    /// Open a catalog directory with the default configuration.
    pub fn open(dir: impl AsRef<Path>, decoder: Arc<dyn TableDecoder>) -> Result<Self> {
        Self::open_with_config(dir, DbConfig::default(), decoder)
    }

    pub fn open_with_config(
        dir: impl AsRef<Path>,
        config: DbConfig,
        decoder: Arc<dyn TableDecoder>,
    ) -> Result<Self> {
        let catalog = DirectoryCatalog::new(dir, &config, decoder)?;
        Ok(Self {
            catalog: Arc::new(catalog),
            config,
            guard: Mutex::new(()),
        })
    }

    /// Adopt an existing catalog (embedding, tests).
    pub fn with_catalog(catalog: Arc<dyn Catalog>) -> Self {
        Self::with_catalog_and_config(catalog, DbConfig::default())
    }

    pub fn with_catalog_and_config(catalog: Arc<dyn Catalog>, config: DbConfig) -> Self {
        Self {
            catalog,
            config,
            guard: Mutex::new(()),
        }
    }

    pub fn catalog(&self) -> &Arc<dyn Catalog> {
        &self.catalog
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Run one SELECT statement and return the materialized cursor.
    pub fn query(&self, sql_text: &str) -> Result<ResultSet> {
        let _statement_guard = self.guard.lock();
        tracing::debug!(sql = sql_text, "executing query");

        let mut statements = sql::parse(sql_text)?;
        if statements.is_empty() {
            return Err(ParadoxError::InvalidSql(sql_text.to_string()));
        }
        let Statement::Select(select) = statements.remove(0);

        let plan = sql::plan(&select, self.catalog.as_ref())?;
        let (columns, rows) = sql::execute(&plan)?;
        Ok(ResultSet::with_fetch_size(
            rows,
            columns,
            self.config.fetch_size,
        ))
    }
}
