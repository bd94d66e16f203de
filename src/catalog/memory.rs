/// In-memory catalog for embedding and tests
use super::{Catalog, Table};
use crate::error::{ParadoxError, Result};
use crate::types::{ParadoxField, Row, TableSchema};
use std::sync::Arc;

/// A fully materialized table held in memory.
#[derive(Debug, Clone)]
pub struct MemoryTable {
    schema: TableSchema,
    rows: Vec<Row>,
}

impl MemoryTable {
    pub fn new(schema: TableSchema, rows: Vec<Row>) -> Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != schema.field_count() {
                return Err(ParadoxError::DataFormat(format!(
                    "Row {} of table '{}' has {} values, expected {}",
                    i,
                    schema.name,
                    row.len(),
                    schema.field_count()
                )));
            }
        }
        Ok(Self { schema, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl Table for MemoryTable {
    fn name(&self) -> &str {
        &self.schema.name
    }

    fn fields(&self) -> &[ParadoxField] {
        &self.schema.fields
    }

    fn scan(&self) -> Result<Box<dyn Iterator<Item = Result<Row>> + '_>> {
        Ok(Box::new(self.rows.iter().cloned().map(Ok)))
    }
}

/// Catalog backed by a fixed set of in-memory tables.
#[derive(Default)]
pub struct MemoryCatalog {
    tables: Vec<Arc<dyn Table>>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(&mut self, table: MemoryTable) {
        self.tables.push(Arc::new(table));
    }
}

impl Catalog for MemoryCatalog {
    fn list_tables(&self, pattern: &str) -> Result<Vec<Arc<dyn Table>>> {
        let all = pattern.is_empty() || pattern == "%";
        Ok(self
            .tables
            .iter()
            .filter(|t| all || t.name().eq_ignore_ascii_case(pattern))
            .cloned()
            .collect())
    }
}
