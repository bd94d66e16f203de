/// Logical planner - binds statement identifiers to catalog tables
use super::ast::{ConditionNode, ProjectionItem, SelectStatement};
use crate::catalog::{Catalog, Table};
use crate::error::{ParadoxError, Result};
use std::sync::Arc;

/// A table participating in the plan, under its statement alias.
///
/// The table is optional so that alias and existence problems surface
/// when a column binds against it, not when it is appended.
#[derive(Clone)]
pub struct PlanTableRef {
    pub alias: String,
    pub table: Option<Arc<dyn Table>>,
}

impl PlanTableRef {
    pub fn new(alias: impl Into<String>, table: Option<Arc<dyn Table>>) -> Self {
        Self {
            alias: alias.into(),
            table,
        }
    }
}

/// A bound output column: indices into the plan tables and their fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanColumn {
    pub table: usize,
    pub column: usize,
}

/// The resolved, alias-bound representation of a SELECT, frozen after
/// `plan()` returns.
#[derive(Default)]
pub struct SelectPlan {
    tables: Vec<PlanTableRef>,
    columns: Vec<PlanColumn>,
    conditions: Vec<ConditionNode>,
    distinct: bool,
}

impl SelectPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_table(&mut self, table: PlanTableRef) {
        self.tables.push(table);
    }

    /// Bind a column reference (`name` or `alias.name`) against the plan
    /// tables. On error the column list is unchanged.
    pub fn add_column(&mut self, reference: &str) -> Result<()> {
        let bound = match reference.split_once('.') {
            Some((alias, name)) => self.bind_qualified(alias, name)?,
            None => self.bind_unqualified(reference)?,
        };
        self.columns.push(bound);
        Ok(())
    }

    fn bind_qualified(&self, alias: &str, name: &str) -> Result<PlanColumn> {
        let (table_index, table_ref) = self
            .tables
            .iter()
            .enumerate()
            .find(|(_, t)| t.alias.eq_ignore_ascii_case(alias))
            .ok_or_else(|| {
                ParadoxError::InvalidSql(format!("Invalid column table alias: {}", alias))
            })?;
        let table = table_ref.table.as_ref().ok_or_else(|| {
            ParadoxError::InvalidSql(format!("Invalid table for alias: {}", alias))
        })?;
        let column = table
            .fields()
            .iter()
            .position(|f| f.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                ParadoxError::InvalidSql(format!("Invalid column name: {}", name))
            })?;
        Ok(PlanColumn {
            table: table_index,
            column,
        })
    }

    fn bind_unqualified(&self, name: &str) -> Result<PlanColumn> {
        let mut matches = Vec::new();
        for (table_index, table_ref) in self.tables.iter().enumerate() {
            if let Some(table) = &table_ref.table {
                if let Some(column) = table
                    .fields()
                    .iter()
                    .position(|f| f.name.eq_ignore_ascii_case(name))
                {
                    matches.push(PlanColumn {
                        table: table_index,
                        column,
                    });
                }
            }
        }
        match matches.len() {
            0 => Err(ParadoxError::InvalidSql(format!(
                "Invalid column name: {}",
                name
            ))),
            1 => Ok(matches.remove(0)),
            _ => Err(ParadoxError::InvalidSql(format!(
                "Column ambiguously defined: {}",
                name
            ))),
        }
    }

    /// Bind every column of every plan table, in table order.
    pub fn add_all_columns(&mut self) -> Result<()> {
        let mut bound = Vec::new();
        for (table_index, table_ref) in self.tables.iter().enumerate() {
            let table = table_ref.table.as_ref().ok_or_else(|| {
                ParadoxError::InvalidSql(format!(
                    "Invalid table for alias: {}",
                    table_ref.alias
                ))
            })?;
            for column in 0..table.fields().len() {
                bound.push(PlanColumn {
                    table: table_index,
                    column,
                });
            }
        }
        self.columns.extend(bound);
        Ok(())
    }

    /// Append conditions, rejecting those the executor cannot evaluate.
    pub fn add_conditions(&mut self, conditions: &[ConditionNode]) -> Result<()> {
        for condition in conditions {
            reject_unsupported(condition)?;
        }
        self.conditions.extend_from_slice(conditions);
        Ok(())
    }

    pub fn set_distinct(&mut self, distinct: bool) {
        self.distinct = distinct;
    }

    pub fn get_columns(&self) -> &[PlanColumn] {
        &self.columns
    }

    pub fn tables(&self) -> &[PlanTableRef] {
        &self.tables
    }

    pub fn conditions(&self) -> &[ConditionNode] {
        &self.conditions
    }

    pub fn distinct(&self) -> bool {
        self.distinct
    }
}

fn reject_unsupported(condition: &ConditionNode) -> Result<()> {
    match condition {
        ConditionNode::Exists(_) => Err(ParadoxError::UnsupportedOperation(
            "EXISTS is not supported.".to_string(),
        )),
        ConditionNode::Not(child) => reject_unsupported(child),
        ConditionNode::And(Some(child))
        | ConditionNode::Or(Some(child))
        | ConditionNode::Xor(Some(child)) => reject_unsupported(child),
        _ => Ok(()),
    }
}

/// Build the plan for a parsed SELECT against the given catalog.
pub fn plan(statement: &SelectStatement, catalog: &dyn Catalog) -> Result<SelectPlan> {
    tracing::debug!(
        tables = statement.from.len(),
        projection = statement.projection.len(),
        "planning select statement"
    );

    let mut plan = SelectPlan::new();
    plan.set_distinct(statement.distinct);

    for table_ref in &statement.from {
        let table = find_table(catalog, &table_ref.name)?;
        plan.add_table(PlanTableRef::new(&table_ref.alias, Some(table)));
        for join in &table_ref.joins {
            let join_table = find_table(catalog, &join.table_name)?;
            plan.add_table(PlanTableRef::new(&join.alias, Some(join_table)));
            plan.add_conditions(&join.conditions)?;
        }
    }

    for item in &statement.projection {
        match item {
            ProjectionItem::Asterisk => plan.add_all_columns()?,
            ProjectionItem::Field(field) => plan.add_column(&field.qualified_name())?,
            ProjectionItem::Character { .. } | ProjectionItem::Numeric { .. } => {
                return Err(ParadoxError::UnsupportedOperation(
                    "Literal projections are not supported.".to_string(),
                ));
            }
        }
    }

    plan.add_conditions(&statement.conditions)?;
    Ok(plan)
}

fn find_table(catalog: &dyn Catalog, name: &str) -> Result<Arc<dyn Table>> {
    let mut tables = catalog.list_tables(name)?;
    if tables.is_empty() {
        return Err(ParadoxError::NotFound(format!("Table not found: {}", name)));
    }
    Ok(tables.remove(0))
}
