/// Result set column metadata
use crate::types::sql_type;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Underlying field name
    pub name: String,
    /// Client-facing label (equals the name unless set otherwise)
    pub label: String,
    /// SQL type code (see `types::sql_type`)
    pub sql_type: i32,
    /// Whether the field accepts nulls
    pub nullable: bool,
    /// Name of the table the column was bound from
    pub table_name: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, sql_type: i32) -> Self {
        let name = name.into();
        let label = name.clone();
        Self {
            name,
            label,
            sql_type,
            nullable: true,
            table_name: None,
        }
    }

    pub fn with_table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Client-facing type name for this column.
    pub fn type_name(&self) -> &'static str {
        sql_type::name(self.sql_type)
    }
}
