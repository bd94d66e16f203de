/// Table metadata descriptors exposed by the catalog
use serde::{Deserialize, Serialize};

/// A decoded Paradox field descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParadoxField {
    /// Field name
    pub name: String,
    /// SQL type code (see `types::sql_type`)
    pub sql_type: i32,
    /// Whether the field accepts nulls
    pub nullable: bool,
}

impl ParadoxField {
    pub fn new(name: impl Into<String>, sql_type: i32) -> Self {
        Self {
            name: name.into(),
            sql_type,
            nullable: true,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }
}

/// Table schema: the name and ordered field list of one table file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name (file stem in the catalog directory)
    pub name: String,
    /// Field definitions (ordered)
    pub fields: Vec<ParadoxField>,
}

impl TableSchema {
    pub fn new(name: impl Into<String>, fields: Vec<ParadoxField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    /// Case-insensitive field lookup, returning the field position.
    pub fn find_field(&self, name: &str) -> Option<usize> {
        self.fields
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}
