//! Value and type model bridging Paradox fields to the client SQL-type system

mod table;

pub use table::{ParadoxField, TableSchema};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// SQL type codes as exposed to clients (the JDBC numeric alphabet).
pub mod sql_type {
    pub const CHAR: i32 = 1;
    pub const NUMERIC: i32 = 2;
    pub const INTEGER: i32 = 4;
    pub const BIGINT: i32 = -5;
    pub const DOUBLE: i32 = 8;
    pub const VARCHAR: i32 = 12;
    pub const BOOLEAN: i32 = 16;
    pub const DATE: i32 = 91;
    pub const TIME: i32 = 92;
    pub const TIMESTAMP: i32 = 93;
    pub const BINARY: i32 = -2;
    pub const BLOB: i32 = 2004;
    pub const CLOB: i32 = 2005;

    /// Client-facing name for a type code.
    pub fn name(code: i32) -> &'static str {
        match code {
            CHAR => "CHAR",
            NUMERIC => "NUMERIC",
            INTEGER => "INTEGER",
            BIGINT => "BIGINT",
            DOUBLE => "DOUBLE",
            VARCHAR => "VARCHAR",
            BOOLEAN => "BOOLEAN",
            DATE => "DATE",
            TIME => "TIME",
            TIMESTAMP => "TIMESTAMP",
            BINARY => "BINARY",
            BLOB => "BLOB",
            CLOB => "CLOB",
            _ => "UNKNOWN",
        }
    }
}

/// Decoded payload of a non-null field.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Text(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Date(NaiveDate),
    Time(NaiveTime),
    Timestamp(NaiveDateTime),
    Binary(Vec<u8>),
}

impl std::fmt::Display for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawValue::Text(s) => write!(f, "{}", s),
            RawValue::Integer(i) => write!(f, "{}", i),
            RawValue::Double(d) => write!(f, "{}", d),
            RawValue::Boolean(b) => write!(f, "{}", b),
            RawValue::Date(d) => write!(f, "{}", d),
            RawValue::Time(t) => write!(f, "{}", t),
            RawValue::Timestamp(ts) => write!(f, "{}", ts),
            RawValue::Binary(b) => write!(f, "{} bytes", b.len()),
        }
    }
}

/// A single cell value tagged with its SQL type code.
///
/// Null is an explicit `None`, not a sentinel. Equality is type code
/// first, then value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    sql_type: i32,
    value: Option<RawValue>,
}

impl FieldValue {
    pub fn new(value: RawValue, sql_type: i32) -> Self {
        Self {
            sql_type,
            value: Some(value),
        }
    }

    /// A null value of the given SQL type.
    pub fn null(sql_type: i32) -> Self {
        Self {
            sql_type,
            value: None,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(RawValue::Text(value.into()), sql_type::VARCHAR)
    }

    pub fn integer(value: i64) -> Self {
        Self::new(RawValue::Integer(value), sql_type::INTEGER)
    }

    pub fn double(value: f64) -> Self {
        Self::new(RawValue::Double(value), sql_type::DOUBLE)
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(RawValue::Boolean(value), sql_type::BOOLEAN)
    }

    pub fn sql_type(&self) -> i32 {
        self.sql_type
    }

    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    pub fn raw(&self) -> Option<&RawValue> {
        self.value.as_ref()
    }

    /// Lexical rendering of the value, `None` when null.
    pub fn as_text(&self) -> Option<String> {
        self.value.as_ref().map(|v| v.to_string())
    }
}

/// A row is an ordered sequence of field values, one per column.
pub type Row = Vec<FieldValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_equality() {
        assert_eq!(FieldValue::text("a"), FieldValue::text("a"));
        assert_ne!(FieldValue::text("a"), FieldValue::text("b"));
        // Same payload, different type code
        assert_ne!(
            FieldValue::new(RawValue::Text("a".into()), sql_type::VARCHAR),
            FieldValue::new(RawValue::Text("a".into()), sql_type::CHAR)
        );
    }

    #[test]
    fn test_null_is_explicit() {
        let null = FieldValue::null(sql_type::VARCHAR);
        assert!(null.is_null());
        assert_eq!(null.as_text(), None);
        assert_ne!(null, FieldValue::text(""));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(sql_type::name(sql_type::VARCHAR), "VARCHAR");
        assert_eq!(sql_type::name(sql_type::INTEGER), "INTEGER");
        assert_eq!(sql_type::name(9999), "UNKNOWN");
    }

    #[test]
    fn test_lexical_rendering() {
        assert_eq!(FieldValue::integer(42).as_text().unwrap(), "42");
        assert_eq!(FieldValue::boolean(true).as_text().unwrap(), "true");
    }
}
