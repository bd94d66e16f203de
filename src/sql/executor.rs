/// Query executor - runs a frozen plan and materializes the result
use super::evaluator::ConditionEvaluator;
use super::planner::SelectPlan;
use crate::error::{ParadoxError, Result};
use crate::results::Column;
use crate::types::Row;

/// Execute the plan: scan every table, filter the Cartesian product
/// through the flat condition list, and project the bound columns.
pub fn execute(plan: &SelectPlan) -> Result<(Vec<Column>, Vec<Row>)> {
    let columns = build_columns(plan)?;

    // Materialize each table scan up front; the cursor contract requires
    // the full row set in memory anyway.
    let mut table_rows: Vec<Vec<Row>> = Vec::with_capacity(plan.tables().len());
    for table_ref in plan.tables() {
        let table = table_ref.table.as_ref().ok_or_else(|| {
            ParadoxError::InvalidSql(format!("Invalid table for alias: {}", table_ref.alias))
        })?;
        let rows: Result<Vec<Row>> = table.scan()?.collect();
        table_rows.push(rows?);
    }

    let mut rows: Vec<Row> = Vec::new();
    if table_rows.is_empty() || table_rows.iter().any(|r| r.is_empty()) {
        tracing::debug!(columns = columns.len(), rows = 0, "executed select plan");
        return Ok((columns, rows));
    }

    let evaluator = ConditionEvaluator::new(plan);
    let mut indices = vec![0usize; table_rows.len()];
    'product: loop {
        let current: Vec<&Row> = indices
            .iter()
            .zip(table_rows.iter())
            .map(|(&i, rows)| &rows[i])
            .collect();

        if evaluator.matches(&current)? {
            let row: Row = plan
                .get_columns()
                .iter()
                .map(|pc| current[pc.table][pc.column].clone())
                .collect();
            if !plan.distinct() || !rows.contains(&row) {
                rows.push(row);
            }
        }

        // Odometer over the table row counts, last table fastest.
        let mut position = indices.len();
        loop {
            if position == 0 {
                break 'product;
            }
            position -= 1;
            indices[position] += 1;
            if indices[position] < table_rows[position].len() {
                break;
            }
            indices[position] = 0;
        }
    }

    tracing::debug!(
        columns = columns.len(),
        rows = rows.len(),
        "executed select plan"
    );
    Ok((columns, rows))
}

fn build_columns(plan: &SelectPlan) -> Result<Vec<Column>> {
    let mut columns = Vec::with_capacity(plan.get_columns().len());
    for plan_column in plan.get_columns() {
        let table_ref = &plan.tables()[plan_column.table];
        let table = table_ref.table.as_ref().ok_or_else(|| {
            ParadoxError::InvalidSql(format!("Invalid table for alias: {}", table_ref.alias))
        })?;
        let field = &table.fields()[plan_column.column];
        let mut column = Column::new(&field.name, field.sql_type).with_table(table.name());
        column.nullable = field.nullable;
        columns.push(column);
    }
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MemoryCatalog, MemoryTable};
    use crate::sql::ast::Statement;
    use crate::sql::planner::plan;
    use crate::sql::{lexer::Lexer, parser::Parser};
    use crate::types::{sql_type, FieldValue, ParadoxField, TableSchema};

    fn areacodes_table() -> MemoryTable {
        let schema = TableSchema::new(
            "AREACODES",
            vec![
                ParadoxField::new("AC", sql_type::VARCHAR),
                ParadoxField::new("State", sql_type::VARCHAR),
                ParadoxField::new("CITIES", sql_type::VARCHAR),
            ],
        );
        MemoryTable::new(
            schema,
            vec![
                vec![
                    FieldValue::text("201"),
                    FieldValue::text("NJ"),
                    FieldValue::text("Hackensack, Jersey City (201/551 overlay)"),
                ],
                vec![
                    FieldValue::text("202"),
                    FieldValue::text("DC"),
                    FieldValue::text("Washington"),
                ],
                vec![
                    FieldValue::text("203"),
                    FieldValue::text("CT"),
                    FieldValue::text("Bridgeport, New Haven"),
                ],
            ],
        )
        .unwrap()
    }

    fn catalog() -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new();
        catalog.add_table(areacodes_table());
        catalog
    }

    fn run(sql: &str) -> (Vec<Column>, Vec<Row>) {
        let tokens = Lexer::new(sql).tokenize().unwrap();
        let Statement::Select(statement) = Parser::new(tokens).parse().unwrap().remove(0);
        let plan = plan(&statement, &catalog()).unwrap();
        execute(&plan).unwrap()
    }

    #[test]
    fn test_execute_projection() {
        let (columns, rows) = run("SELECT AC, State, CITIES FROM AREACODES");
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].name, "AC");
        assert_eq!(columns[0].table_name.as_deref(), Some("AREACODES"));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], FieldValue::text("201"));
        assert_eq!(rows[0][1], FieldValue::text("NJ"));
        assert_eq!(
            rows[0][2],
            FieldValue::text("Hackensack, Jersey City (201/551 overlay)")
        );
    }

    #[test]
    fn test_execute_where_filter() {
        let (_, rows) = run("SELECT AC FROM AREACODES WHERE State = 'DC'");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], FieldValue::text("202"));
    }

    #[test]
    fn test_execute_where_or() {
        let (_, rows) = run("SELECT AC FROM AREACODES WHERE State = 'DC' OR State = 'CT'");
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_execute_join() {
        let (columns, rows) =
            run("SELECT t.AC, u.State FROM AREACODES t INNER JOIN AREACODES u ON t.AC = u.AC");
        assert_eq!(columns.len(), 2);
        // The join condition keeps only the diagonal of the product.
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_execute_cross_product() {
        let (_, rows) = run("SELECT t.AC FROM AREACODES t, AREACODES u");
        assert_eq!(rows.len(), 9);
    }

    #[test]
    fn test_execute_distinct() {
        let (_, rows) = run("SELECT DISTINCT t.State FROM AREACODES t, AREACODES u");
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_execute_empty_result() {
        let (columns, rows) = run("SELECT AC FROM AREACODES WHERE State = 'ZZ'");
        assert_eq!(columns.len(), 1);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_execute_missing_table_in_plan() {
        use crate::sql::planner::{PlanTableRef, SelectPlan};
        let mut plan = SelectPlan::new();
        plan.add_table(PlanTableRef::new("test", None));
        let result = execute(&plan);
        assert!(matches!(result, Err(ParadoxError::InvalidSql(_))));
    }
}
