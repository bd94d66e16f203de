/// Condition evaluator - applies a flat condition list to row combinations
use super::ast::{ConditionNode, FieldRef};
use super::planner::SelectPlan;
use crate::error::{ParadoxError, Result};
use crate::types::{FieldValue, RawValue, Row};
use std::cmp::Ordering;

/// Pending boolean operator while folding a flat list.
#[derive(Debug, Clone, Copy)]
enum BoolOp {
    And,
    Or,
    Xor,
}

impl BoolOp {
    fn apply(self, left: bool, right: bool) -> bool {
        match self {
            BoolOp::And => left && right,
            BoolOp::Or => left || right,
            BoolOp::Xor => left ^ right,
        }
    }
}

/// Evaluates the plan's conditions against one row per plan table.
pub struct ConditionEvaluator<'a> {
    plan: &'a SelectPlan,
}

impl<'a> ConditionEvaluator<'a> {
    pub fn new(plan: &'a SelectPlan) -> Self {
        Self { plan }
    }

    /// Fold the flat condition list left to right. Boolean skeletons
    /// join the accumulator with the next predicate; adjacent predicates
    /// without an operator conjoin. An empty list is true.
    pub fn matches(&self, rows: &[&Row]) -> Result<bool> {
        let mut acc: Option<bool> = None;
        let mut pending: Option<BoolOp> = None;

        for condition in self.plan.conditions() {
            // A skeleton boolean joins the accumulator with the next
            // predicate; a linked one carries its own right operand.
            match condition {
                ConditionNode::And(None) | ConditionNode::Or(None) | ConditionNode::Xor(None) => {
                    if acc.is_none() || pending.is_some() {
                        return Err(ParadoxError::InvalidSql(
                            "Invalid operator location.".to_string(),
                        ));
                    }
                    pending = Some(skeleton_op(condition));
                    continue;
                }
                ConditionNode::And(Some(child))
                | ConditionNode::Or(Some(child))
                | ConditionNode::Xor(Some(child)) => {
                    if pending.is_some() {
                        return Err(ParadoxError::InvalidSql(
                            "Invalid operator location.".to_string(),
                        ));
                    }
                    let value = self.eval(child, rows)?;
                    acc = Some(match acc {
                        None => value,
                        Some(left) => skeleton_op(condition).apply(left, value),
                    });
                    continue;
                }
                _ => {}
            }

            let value = self.eval(condition, rows)?;
            acc = Some(match (acc, pending.take()) {
                (None, _) => value,
                (Some(left), Some(op)) => op.apply(left, value),
                (Some(left), None) => left && value,
            });
        }

        if pending.is_some() {
            return Err(ParadoxError::InvalidSql(
                "Invalid operator location.".to_string(),
            ));
        }
        Ok(acc.unwrap_or(true))
    }

    fn eval(&self, condition: &ConditionNode, rows: &[&Row]) -> Result<bool> {
        match condition {
            ConditionNode::Equals(lhs, rhs) => {
                Ok(self.compare_fields(lhs, rhs, rows)? == Some(Ordering::Equal))
            }
            ConditionNode::NotEquals(lhs, rhs) => {
                Ok(matches!(
                    self.compare_fields(lhs, rhs, rows)?,
                    Some(order) if order != Ordering::Equal
                ))
            }
            ConditionNode::LessThan(lhs, rhs) => {
                Ok(self.compare_fields(lhs, rhs, rows)? == Some(Ordering::Less))
            }
            ConditionNode::GreaterThan(lhs, rhs) => {
                Ok(self.compare_fields(lhs, rhs, rows)? == Some(Ordering::Greater))
            }
            ConditionNode::Between { field, low, high } => {
                let value = self.resolve(field, rows)?;
                let low = self.resolve(low, rows)?;
                let high = self.resolve(high, rows)?;
                Ok(matches!(
                    compare_values(&value, &low),
                    Some(Ordering::Greater) | Some(Ordering::Equal)
                ) && matches!(
                    compare_values(&value, &high),
                    Some(Ordering::Less) | Some(Ordering::Equal)
                ))
            }
            ConditionNode::Not(child) => Ok(!self.eval(child, rows)?),
            ConditionNode::And(Some(child))
            | ConditionNode::Or(Some(child))
            | ConditionNode::Xor(Some(child)) => self.eval(child, rows),
            ConditionNode::And(None) | ConditionNode::Or(None) | ConditionNode::Xor(None) => {
                Err(ParadoxError::InvalidSql(
                    "Invalid operator location.".to_string(),
                ))
            }
            ConditionNode::Exists(_) => Err(ParadoxError::UnsupportedOperation(
                "EXISTS is not supported.".to_string(),
            )),
        }
    }

    fn compare_fields(
        &self,
        lhs: &FieldRef,
        rhs: &FieldRef,
        rows: &[&Row],
    ) -> Result<Option<Ordering>> {
        let left = self.resolve(lhs, rows)?;
        let right = self.resolve(rhs, rows)?;
        Ok(compare_values(&left, &right))
    }

    /// Resolve an operand: a reference matching a plan table column reads
    /// the row value; an unresolvable unqualified reference is a literal.
    fn resolve(&self, field: &FieldRef, rows: &[&Row]) -> Result<FieldValue> {
        match &field.table_alias {
            Some(alias) => {
                let (table_index, table_ref) = self
                    .plan
                    .tables()
                    .iter()
                    .enumerate()
                    .find(|(_, t)| t.alias.eq_ignore_ascii_case(alias))
                    .ok_or_else(|| {
                        ParadoxError::InvalidSql(format!(
                            "Invalid column table alias: {}",
                            alias
                        ))
                    })?;
                let table = table_ref.table.as_ref().ok_or_else(|| {
                    ParadoxError::InvalidSql(format!("Invalid table for alias: {}", alias))
                })?;
                let column = table
                    .fields()
                    .iter()
                    .position(|f| f.name.eq_ignore_ascii_case(&field.name))
                    .ok_or_else(|| {
                        ParadoxError::InvalidSql(format!(
                            "Invalid column name: {}",
                            field.name
                        ))
                    })?;
                Ok(rows[table_index][column].clone())
            }
            None => {
                let mut matches = Vec::new();
                for (table_index, table_ref) in self.plan.tables().iter().enumerate() {
                    if let Some(table) = &table_ref.table {
                        if let Some(column) = table
                            .fields()
                            .iter()
                            .position(|f| f.name.eq_ignore_ascii_case(&field.name))
                        {
                            matches.push((table_index, column));
                        }
                    }
                }
                match matches.len() {
                    0 => Ok(literal_value(&field.name)),
                    1 => {
                        let (table_index, column) = matches[0];
                        Ok(rows[table_index][column].clone())
                    }
                    _ => Err(ParadoxError::InvalidSql(format!(
                        "Column ambiguously defined: {}",
                        field.name
                    ))),
                }
            }
        }
    }
}

fn skeleton_op(condition: &ConditionNode) -> BoolOp {
    match condition {
        ConditionNode::And(_) => BoolOp::And,
        ConditionNode::Or(_) => BoolOp::Or,
        _ => BoolOp::Xor,
    }
}

/// A lexeme with no column binding: numeric if it parses, text otherwise.
fn literal_value(lexeme: &str) -> FieldValue {
    match lexeme.parse::<f64>() {
        Ok(number) => FieldValue::double(number),
        Err(_) => FieldValue::text(lexeme),
    }
}

/// Compare two field values with numeric and text coercion. Null on
/// either side (or incomparable payloads) yields `None`.
pub fn compare_values(left: &FieldValue, right: &FieldValue) -> Option<Ordering> {
    let (left, right) = match (left.raw(), right.raw()) {
        (Some(l), Some(r)) => (l, r),
        _ => return None,
    };
    match (left, right) {
        (RawValue::Integer(a), RawValue::Integer(b)) => Some(a.cmp(b)),
        (RawValue::Double(a), RawValue::Double(b)) => a.partial_cmp(b),
        (RawValue::Integer(a), RawValue::Double(b)) => (*a as f64).partial_cmp(b),
        (RawValue::Double(a), RawValue::Integer(b)) => a.partial_cmp(&(*b as f64)),
        (RawValue::Text(a), RawValue::Text(b)) => Some(a.as_str().cmp(b.as_str())),
        (RawValue::Boolean(a), RawValue::Boolean(b)) => Some(a.cmp(b)),
        (RawValue::Date(a), RawValue::Date(b)) => Some(a.cmp(b)),
        (RawValue::Time(a), RawValue::Time(b)) => Some(a.cmp(b)),
        (RawValue::Timestamp(a), RawValue::Timestamp(b)) => Some(a.cmp(b)),
        (RawValue::Text(a), RawValue::Integer(_)) | (RawValue::Text(a), RawValue::Double(_)) => {
            let parsed = a.trim().parse::<f64>().ok()?;
            compare_values(&FieldValue::double(parsed), &rewrap(right))
        }
        (RawValue::Integer(_), RawValue::Text(b)) | (RawValue::Double(_), RawValue::Text(b)) => {
            let parsed = b.trim().parse::<f64>().ok()?;
            compare_values(&rewrap(left), &FieldValue::double(parsed))
        }
        _ => None,
    }
}

fn rewrap(raw: &RawValue) -> FieldValue {
    match raw {
        RawValue::Integer(i) => FieldValue::double(*i as f64),
        RawValue::Double(d) => FieldValue::double(*d),
        other => FieldValue::new(other.clone(), 0),
    }
}
