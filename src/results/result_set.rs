/// Scrollable result set cursor over a materialized row list
///
/// Positioning follows the client row-iterator model: the cursor starts
/// before the first row, `On(i)` addresses row `i`, and running off
/// either end parks it at BeforeFirst or AfterLast.
use super::column::Column;
use crate::error::{ParadoxError, Result};
use crate::types::{sql_type, RawValue, Row};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    BeforeFirst,
    On(usize),
    AfterLast,
}

/// Client hint for the expected iteration direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDirection {
    Forward,
    Reverse,
}

/// Cursor sensitivity class. Rows are materialized at execution, so the
/// cursor never observes later changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollType {
    Insensitive,
}

/// Cursor concurrency class. The engine is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concurrency {
    ReadOnly,
}

/// Resolves a 1-based column index or a column name to a field offset.
pub trait ColumnIndex {
    fn resolve(&self, result_set: &ResultSet) -> Result<usize>;
}

impl ColumnIndex for usize {
    fn resolve(&self, result_set: &ResultSet) -> Result<usize> {
        if *self == 0 || *self > result_set.columns.len() {
            return Err(ParadoxError::InvalidSql(format!(
                "Invalid column index: {}",
                self
            )));
        }
        Ok(*self - 1)
    }
}

impl ColumnIndex for &str {
    fn resolve(&self, result_set: &ResultSet) -> Result<usize> {
        Ok(result_set.find_column(self)? - 1)
    }
}

pub struct ResultSet {
    rows: Vec<Row>,
    columns: Vec<Column>,
    position: Position,
    closed: bool,
    last_was_null: bool,
    fetch_direction: FetchDirection,
    fetch_size: usize,
}

impl ResultSet {
    pub fn new(rows: Vec<Row>, columns: Vec<Column>) -> Self {
        Self::with_fetch_size(rows, columns, 10)
    }

    pub fn with_fetch_size(rows: Vec<Row>, columns: Vec<Column>, fetch_size: usize) -> Self {
        Self {
            rows,
            columns,
            position: Position::BeforeFirst,
            closed: false,
            last_was_null: false,
            fetch_direction: FetchDirection::Forward,
            fetch_size,
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(ParadoxError::InvalidState(
                "Result set is closed.".to_string(),
            ));
        }
        Ok(())
    }

    // Navigation

    pub fn next(&mut self) -> Result<bool> {
        self.ensure_open()?;
        match self.position {
            Position::BeforeFirst if !self.rows.is_empty() => {
                self.position = Position::On(0);
                Ok(true)
            }
            Position::On(i) if i + 1 < self.rows.len() => {
                self.position = Position::On(i + 1);
                Ok(true)
            }
            _ => {
                self.position = Position::AfterLast;
                Ok(false)
            }
        }
    }

    pub fn previous(&mut self) -> Result<bool> {
        self.ensure_open()?;
        match self.position {
            Position::AfterLast if !self.rows.is_empty() => {
                self.position = Position::On(self.rows.len() - 1);
                Ok(true)
            }
            Position::On(i) if i > 0 => {
                self.position = Position::On(i - 1);
                Ok(true)
            }
            _ => {
                self.position = Position::BeforeFirst;
                Ok(false)
            }
        }
    }

    pub fn first(&mut self) -> Result<bool> {
        self.ensure_open()?;
        if self.rows.is_empty() {
            self.position = Position::BeforeFirst;
            Ok(false)
        } else {
            self.position = Position::On(0);
            Ok(true)
        }
    }

    pub fn last(&mut self) -> Result<bool> {
        self.ensure_open()?;
        if self.rows.is_empty() {
            self.position = Position::AfterLast;
            Ok(false)
        } else {
            self.position = Position::On(self.rows.len() - 1);
            Ok(true)
        }
    }

    pub fn before_first(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.position = Position::BeforeFirst;
        Ok(())
    }

    pub fn after_last(&mut self) -> Result<()> {
        self.ensure_open()?;
        self.position = Position::AfterLast;
        Ok(())
    }

    /// Position by 1-based row number; negative counts from the end.
    /// Row 0 parks the cursor before the first row and reports true.
    pub fn absolute(&mut self, row: i64) -> Result<bool> {
        self.ensure_open()?;
        let len = self.rows.len() as i64;
        if row == 0 {
            self.position = Position::BeforeFirst;
            Ok(true)
        } else if row > 0 {
            if row <= len {
                self.position = Position::On((row - 1) as usize);
                Ok(true)
            } else {
                self.position = Position::AfterLast;
                Ok(false)
            }
        } else {
            let target = len + row;
            if target >= 0 {
                self.position = Position::On(target as usize);
                Ok(true)
            } else {
                self.position = Position::BeforeFirst;
                Ok(false)
            }
        }
    }

    /// Move relative to the current row (`get_row()` + count).
    pub fn relative(&mut self, count: i64) -> Result<bool> {
        self.ensure_open()?;
        let current = self.get_row()? as i64;
        self.absolute(current + count)
    }

    pub fn is_before_first(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.position == Position::BeforeFirst)
    }

    pub fn is_after_last(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.position == Position::AfterLast)
    }

    pub fn is_first(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.position == Position::On(0))
    }

    pub fn is_last(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(!self.rows.is_empty() && self.position == Position::On(self.rows.len() - 1))
    }

    /// 1-based number of the current row, 0 when off-row.
    pub fn get_row(&self) -> Result<usize> {
        self.ensure_open()?;
        match self.position {
            Position::On(i) => Ok(i + 1),
            _ => Ok(0),
        }
    }

    // Metadata

    pub fn get_metadata(&self) -> Result<&[Column]> {
        self.ensure_open()?;
        Ok(&self.columns)
    }

    /// 1-based index of the column with the given name or label,
    /// case-insensitively.
    pub fn find_column(&self, name: &str) -> Result<usize> {
        self.ensure_open()?;
        self.columns
            .iter()
            .position(|c| {
                c.name.eq_ignore_ascii_case(name) || c.label.eq_ignore_ascii_case(name)
            })
            .map(|i| i + 1)
            .ok_or_else(|| ParadoxError::InvalidSql(format!("Invalid column name: {}", name)))
    }

    pub fn fetch_direction(&self) -> Result<FetchDirection> {
        self.ensure_open()?;
        Ok(self.fetch_direction)
    }

    pub fn set_fetch_direction(&mut self, direction: FetchDirection) -> Result<()> {
        self.ensure_open()?;
        self.fetch_direction = direction;
        Ok(())
    }

    pub fn fetch_size(&self) -> Result<usize> {
        self.ensure_open()?;
        Ok(self.fetch_size)
    }

    pub fn set_fetch_size(&mut self, size: usize) -> Result<()> {
        self.ensure_open()?;
        self.fetch_size = size;
        Ok(())
    }

    pub fn scroll_type(&self) -> ScrollType {
        ScrollType::Insensitive
    }

    pub fn concurrency(&self) -> Concurrency {
        Concurrency::ReadOnly
    }

    // Lifecycle

    /// Release row storage and invalidate the cursor. Idempotent.
    pub fn close(&mut self) {
        self.rows = Vec::new();
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// True when the last accessor read a null field.
    pub fn was_null(&self) -> Result<bool> {
        self.ensure_open()?;
        Ok(self.last_was_null)
    }

    // Typed accessors

    /// The addressed field of the current row; `None` when the field is
    /// null. Updates the `was_null` flag.
    fn current_field(&mut self, index: usize) -> Result<Option<&RawValue>> {
        let row = match self.position {
            Position::On(i) => &self.rows[i],
            _ => {
                return Err(ParadoxError::InvalidState(
                    "Cursor is not positioned on a row.".to_string(),
                ))
            }
        };
        let field = &row[index];
        self.last_was_null = field.is_null();
        Ok(field.raw())
    }

    pub fn get_string<I: ColumnIndex>(&mut self, index: I) -> Result<Option<String>> {
        self.ensure_open()?;
        let index = index.resolve(self)?;
        Ok(self.current_field(index)?.map(|raw| raw.to_string()))
    }

    pub fn get_int<I: ColumnIndex>(&mut self, index: I) -> Result<i32> {
        let value = self.get_long(index)?;
        i32::try_from(value)
            .map_err(|_| ParadoxError::DataFormat(format!("Value out of range: {}", value)))
    }

    pub fn get_long<I: ColumnIndex>(&mut self, index: I) -> Result<i64> {
        self.ensure_open()?;
        let index = index.resolve(self)?;
        match self.current_field(index)? {
            None => Ok(0),
            Some(RawValue::Integer(i)) => Ok(*i),
            Some(RawValue::Double(d)) => Ok(*d as i64),
            Some(RawValue::Boolean(b)) => Ok(i64::from(*b)),
            Some(RawValue::Text(s)) => s.trim().parse::<i64>().map_err(|_| {
                ParadoxError::DataFormat(format!("Invalid integer value: {}", s))
            }),
            Some(other) => Err(conversion_error(other, "BIGINT")),
        }
    }

    pub fn get_float<I: ColumnIndex>(&mut self, index: I) -> Result<f32> {
        Ok(self.get_double(index)? as f32)
    }

    pub fn get_double<I: ColumnIndex>(&mut self, index: I) -> Result<f64> {
        self.ensure_open()?;
        let index = index.resolve(self)?;
        match self.current_field(index)? {
            None => Ok(0.0),
            Some(RawValue::Integer(i)) => Ok(*i as f64),
            Some(RawValue::Double(d)) => Ok(*d),
            Some(RawValue::Text(s)) => s.trim().parse::<f64>().map_err(|_| {
                ParadoxError::DataFormat(format!("Invalid numeric value: {}", s))
            }),
            Some(other) => Err(conversion_error(other, "DOUBLE")),
        }
    }

    pub fn get_boolean<I: ColumnIndex>(&mut self, index: I) -> Result<bool> {
        self.ensure_open()?;
        let index = index.resolve(self)?;
        match self.current_field(index)? {
            None => Ok(false),
            Some(RawValue::Boolean(b)) => Ok(*b),
            Some(RawValue::Integer(i)) => Ok(*i != 0),
            Some(RawValue::Double(d)) => Ok(*d != 0.0),
            Some(RawValue::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(ParadoxError::DataFormat(format!(
                    "Invalid boolean value: {}",
                    s
                ))),
            },
            Some(other) => Err(conversion_error(other, "BOOLEAN")),
        }
    }

    pub fn get_date<I: ColumnIndex>(&mut self, index: I) -> Result<Option<NaiveDate>> {
        self.ensure_open()?;
        let index = index.resolve(self)?;
        match self.current_field(index)? {
            None => Ok(None),
            Some(RawValue::Date(d)) => Ok(Some(*d)),
            Some(RawValue::Timestamp(ts)) => Ok(Some(ts.date())),
            Some(RawValue::Text(s)) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
                .map(Some)
                .map_err(|_| ParadoxError::DataFormat(format!("Invalid date value: {}", s))),
            Some(other) => Err(conversion_error(other, "DATE")),
        }
    }

    pub fn get_time<I: ColumnIndex>(&mut self, index: I) -> Result<Option<NaiveTime>> {
        self.ensure_open()?;
        let index = index.resolve(self)?;
        match self.current_field(index)? {
            None => Ok(None),
            Some(RawValue::Time(t)) => Ok(Some(*t)),
            Some(RawValue::Timestamp(ts)) => Ok(Some(ts.time())),
            Some(RawValue::Text(s)) => NaiveTime::parse_from_str(s.trim(), "%H:%M:%S")
                .map(Some)
                .map_err(|_| ParadoxError::DataFormat(format!("Invalid time value: {}", s))),
            Some(other) => Err(conversion_error(other, "TIME")),
        }
    }

    pub fn get_timestamp<I: ColumnIndex>(&mut self, index: I) -> Result<Option<NaiveDateTime>> {
        self.ensure_open()?;
        let index = index.resolve(self)?;
        match self.current_field(index)? {
            None => Ok(None),
            Some(RawValue::Timestamp(ts)) => Ok(Some(*ts)),
            Some(RawValue::Date(d)) => Ok(d.and_hms_opt(0, 0, 0)),
            Some(RawValue::Text(s)) => {
                NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S")
                    .map(Some)
                    .map_err(|_| {
                        ParadoxError::DataFormat(format!("Invalid timestamp value: {}", s))
                    })
            }
            Some(other) => Err(conversion_error(other, "TIMESTAMP")),
        }
    }

    pub fn get_bytes<I: ColumnIndex>(&mut self, index: I) -> Result<Option<Vec<u8>>> {
        self.ensure_open()?;
        let index = index.resolve(self)?;
        match self.current_field(index)? {
            None => Ok(None),
            Some(RawValue::Binary(b)) => Ok(Some(b.clone())),
            Some(RawValue::Text(s)) => Ok(Some(s.as_bytes().to_vec())),
            Some(other) => Err(conversion_error(other, "BINARY")),
        }
    }
}

fn conversion_error(value: &RawValue, target: &str) -> ParadoxError {
    let source = match value {
        RawValue::Text(_) => sql_type::name(sql_type::VARCHAR),
        RawValue::Integer(_) => sql_type::name(sql_type::INTEGER),
        RawValue::Double(_) => sql_type::name(sql_type::DOUBLE),
        RawValue::Boolean(_) => sql_type::name(sql_type::BOOLEAN),
        RawValue::Date(_) => sql_type::name(sql_type::DATE),
        RawValue::Time(_) => sql_type::name(sql_type::TIME),
        RawValue::Timestamp(_) => sql_type::name(sql_type::TIMESTAMP),
        RawValue::Binary(_) => sql_type::name(sql_type::BINARY),
    };
    ParadoxError::DataFormat(format!("Cannot convert {} to {}", source, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;

    fn empty() -> ResultSet {
        ResultSet::new(vec![], vec![])
    }

    fn one_row() -> ResultSet {
        ResultSet::new(
            vec![vec![FieldValue::text("Test")]],
            vec![Column::new("value", sql_type::VARCHAR)],
        )
    }

    fn three_rows() -> ResultSet {
        ResultSet::new(
            vec![
                vec![FieldValue::text("a")],
                vec![FieldValue::text("b")],
                vec![FieldValue::text("c")],
            ],
            vec![Column::new("value", sql_type::VARCHAR)],
        )
    }

    #[test]
    fn test_absolute_zero_on_empty() {
        let mut rs = empty();
        assert!(rs.absolute(0).unwrap());
        assert!(rs.is_before_first().unwrap());
    }

    #[test]
    fn test_absolute_past_end_on_empty() {
        let mut rs = empty();
        assert!(!rs.absolute(1).unwrap());
        assert!(rs.is_after_last().unwrap());
    }

    #[test]
    fn test_absolute_negative_on_empty() {
        let mut rs = empty();
        assert!(!rs.absolute(-1).unwrap());
        assert!(rs.is_before_first().unwrap());
    }

    #[test]
    fn test_absolute_negative_with_rows() {
        let mut rs = one_row();
        assert!(rs.absolute(-1).unwrap());
        assert_eq!(rs.get_row().unwrap(), 1);
    }

    #[test]
    fn test_after_last() {
        let mut rs = one_row();
        rs.after_last().unwrap();
        assert!(rs.is_after_last().unwrap());
    }

    #[test]
    fn test_next_walks_forward() {
        let mut rs = three_rows();
        assert!(rs.is_before_first().unwrap());
        assert!(rs.next().unwrap());
        assert!(rs.is_first().unwrap());
        assert!(rs.next().unwrap());
        assert!(rs.next().unwrap());
        assert!(rs.is_last().unwrap());
        assert!(!rs.next().unwrap());
        assert!(rs.is_after_last().unwrap());
        // Stays parked after the end
        assert!(!rs.next().unwrap());
    }

    #[test]
    fn test_previous_walks_backward() {
        let mut rs = three_rows();
        rs.after_last().unwrap();
        assert!(rs.previous().unwrap());
        assert!(rs.is_last().unwrap());
        assert!(rs.previous().unwrap());
        assert!(rs.previous().unwrap());
        assert!(rs.is_first().unwrap());
        assert!(!rs.previous().unwrap());
        assert!(rs.is_before_first().unwrap());
    }

    #[test]
    fn test_first_and_last() {
        let mut rs = three_rows();
        assert!(rs.last().unwrap());
        assert_eq!(rs.get_row().unwrap(), 3);
        assert!(rs.first().unwrap());
        assert_eq!(rs.get_row().unwrap(), 1);

        let mut rs = empty();
        assert!(!rs.first().unwrap());
        assert!(rs.is_before_first().unwrap());
        assert!(!rs.last().unwrap());
        assert!(rs.is_after_last().unwrap());
    }

    #[test]
    fn test_first_is_idempotent() {
        let mut rs = three_rows();
        assert!(rs.first().unwrap());
        assert!(rs.first().unwrap());
        assert_eq!(rs.get_row().unwrap(), 1);
    }

    #[test]
    fn test_before_first_then_next_equals_first() {
        let mut rs = three_rows();
        rs.last().unwrap();
        rs.before_first().unwrap();
        assert!(rs.next().unwrap());
        assert!(rs.is_first().unwrap());
    }

    #[test]
    fn test_get_row_zero_iff_off_row() {
        let mut rs = three_rows();
        assert_eq!(rs.get_row().unwrap(), 0);
        rs.next().unwrap();
        assert_eq!(rs.get_row().unwrap(), 1);
        rs.after_last().unwrap();
        assert_eq!(rs.get_row().unwrap(), 0);
    }

    #[test]
    fn test_relative_navigation() {
        let mut rs = three_rows();
        assert!(rs.relative(2).unwrap());
        assert_eq!(rs.get_row().unwrap(), 2);
        assert!(rs.relative(-1).unwrap());
        assert_eq!(rs.get_row().unwrap(), 1);
        assert!(!rs.relative(5).unwrap());
        assert!(rs.is_after_last().unwrap());
    }

    #[test]
    fn test_absolute_bounds() {
        let mut rs = three_rows();
        assert!(rs.absolute(3).unwrap());
        assert!(rs.is_last().unwrap());
        assert!(!rs.absolute(4).unwrap());
        assert!(rs.is_after_last().unwrap());
        assert!(rs.absolute(-3).unwrap());
        assert!(rs.is_first().unwrap());
        assert!(!rs.absolute(-4).unwrap());
        assert!(rs.is_before_first().unwrap());
        assert!(rs.absolute(0).unwrap());
        assert!(rs.is_before_first().unwrap());
    }

    #[test]
    fn test_get_string_by_index_and_name() {
        let mut rs = one_row();
        rs.next().unwrap();
        assert_eq!(rs.get_string(1).unwrap().as_deref(), Some("Test"));
        assert_eq!(rs.get_string("value").unwrap().as_deref(), Some("Test"));
        assert_eq!(rs.get_string("VALUE").unwrap().as_deref(), Some("Test"));
    }

    #[test]
    fn test_accessor_off_row_fails() {
        let mut rs = one_row();
        let result = rs.get_string(1);
        assert!(matches!(result, Err(ParadoxError::InvalidState(_))));
        rs.next().unwrap();
        rs.next().unwrap();
        let result = rs.get_string(1);
        assert!(matches!(result, Err(ParadoxError::InvalidState(_))));
    }

    #[test]
    fn test_invalid_column_index() {
        let mut rs = one_row();
        rs.next().unwrap();
        assert!(rs.get_string(0).is_err());
        assert!(rs.get_string(2).is_err());
        assert!(rs.get_string("missing").is_err());
    }

    #[test]
    fn test_numeric_conversions() {
        let mut rs = ResultSet::new(
            vec![vec![
                FieldValue::integer(42),
                FieldValue::text("17"),
                FieldValue::double(2.5),
            ]],
            vec![
                Column::new("i", sql_type::INTEGER),
                Column::new("s", sql_type::VARCHAR),
                Column::new("d", sql_type::DOUBLE),
            ],
        );
        rs.next().unwrap();
        assert_eq!(rs.get_int("i").unwrap(), 42);
        assert_eq!(rs.get_long("s").unwrap(), 17);
        assert_eq!(rs.get_double("d").unwrap(), 2.5);
        assert_eq!(rs.get_string("i").unwrap().as_deref(), Some("42"));
        assert!(rs.get_int("s").is_ok());
        let mut rs2 = one_row();
        rs2.next().unwrap();
        assert!(matches!(
            rs2.get_int(1),
            Err(ParadoxError::DataFormat(_))
        ));
    }

    #[test]
    fn test_null_surfaces_as_zero_with_flag() {
        let mut rs = ResultSet::new(
            vec![vec![
                FieldValue::null(sql_type::INTEGER),
                FieldValue::integer(7),
            ]],
            vec![
                Column::new("n", sql_type::INTEGER),
                Column::new("v", sql_type::INTEGER),
            ],
        );
        rs.next().unwrap();
        assert_eq!(rs.get_int("n").unwrap(), 0);
        assert!(rs.was_null().unwrap());
        assert_eq!(rs.get_string("n").unwrap(), None);
        assert!(rs.was_null().unwrap());
        assert_eq!(rs.get_int("v").unwrap(), 7);
        assert!(!rs.was_null().unwrap());
    }

    #[test]
    fn test_temporal_accessors() {
        let date = NaiveDate::from_ymd_opt(2004, 7, 1).unwrap();
        let time = NaiveTime::from_hms_opt(10, 30, 0).unwrap();
        let mut rs = ResultSet::new(
            vec![vec![
                FieldValue::new(RawValue::Date(date), sql_type::DATE),
                FieldValue::new(RawValue::Time(time), sql_type::TIME),
                FieldValue::new(
                    RawValue::Timestamp(date.and_time(time)),
                    sql_type::TIMESTAMP,
                ),
                FieldValue::text("2004-07-01"),
            ]],
            vec![
                Column::new("d", sql_type::DATE),
                Column::new("t", sql_type::TIME),
                Column::new("ts", sql_type::TIMESTAMP),
                Column::new("s", sql_type::VARCHAR),
            ],
        );
        rs.next().unwrap();
        assert_eq!(rs.get_date("d").unwrap(), Some(date));
        assert_eq!(rs.get_time("t").unwrap(), Some(time));
        assert_eq!(rs.get_timestamp("ts").unwrap(), Some(date.and_time(time)));
        assert_eq!(rs.get_date("ts").unwrap(), Some(date));
        assert_eq!(rs.get_date("s").unwrap(), Some(date));
        assert!(rs.get_date("t").is_err());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut rs = one_row();
        rs.close();
        assert!(rs.is_closed());
        rs.close();
        assert!(rs.is_closed());
    }

    #[test]
    fn test_operations_after_close_fail() {
        let mut rs = one_row();
        rs.next().unwrap();
        rs.close();
        assert!(matches!(rs.next(), Err(ParadoxError::InvalidState(_))));
        assert!(matches!(rs.first(), Err(ParadoxError::InvalidState(_))));
        assert!(matches!(
            rs.get_string(1),
            Err(ParadoxError::InvalidState(_))
        ));
        assert!(matches!(
            rs.get_metadata(),
            Err(ParadoxError::InvalidState(_))
        ));
        assert!(matches!(
            rs.find_column("value"),
            Err(ParadoxError::InvalidState(_))
        ));
    }

    #[test]
    fn test_metadata_and_fetch_settings() {
        let mut rs = one_row();
        assert_eq!(rs.get_metadata().unwrap().len(), 1);
        assert_eq!(rs.fetch_size().unwrap(), 10);
        rs.set_fetch_size(50).unwrap();
        assert_eq!(rs.fetch_size().unwrap(), 50);
        assert_eq!(rs.fetch_direction().unwrap(), FetchDirection::Forward);
        rs.set_fetch_direction(FetchDirection::Reverse).unwrap();
        assert_eq!(rs.fetch_direction().unwrap(), FetchDirection::Reverse);
        assert_eq!(rs.scroll_type(), ScrollType::Insensitive);
        assert_eq!(rs.concurrency(), Concurrency::ReadOnly);
    }

    #[test]
    fn test_find_column_is_one_based() {
        let rs = one_row();
        assert_eq!(rs.find_column("value").unwrap(), 1);
        assert!(rs.find_column("other").is_err());
    }
}
