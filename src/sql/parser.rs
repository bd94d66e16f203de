/// SQL parser - recursive descent over the token stream
use super::ast::*;
use super::token::{Token, TokenType};
use crate::error::{ParadoxError, Result};

pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// The token list must end with an Eof token (see `Lexer::tokenize`).
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the statement list. Only SELECT is supported.
    pub fn parse(&mut self) -> Result<Vec<Statement>> {
        if self.check(TokenType::Eof) {
            return Err(ParadoxError::InvalidSql("Empty SQL statement.".to_string()));
        }

        let mut statements = Vec::new();
        match self.current().token_type {
            TokenType::Select => {
                statements.push(Statement::Select(self.parse_select()?));
            }
            _ => {
                return Err(ParadoxError::UnsupportedOperation(format!(
                    "Unsupported statement: {}",
                    self.current().lexeme
                )));
            }
        }

        if self.check(TokenType::Semicolon) {
            self.expect(TokenType::Semicolon)?;
        }

        Ok(statements)
    }

    fn parse_select(&mut self) -> Result<SelectStatement> {
        let mut select = SelectStatement::new();
        self.expect(TokenType::Select)?;

        // Allowed only at the beginning of the statement
        if self.check(TokenType::Distinct) {
            select.distinct = true;
            self.expect(TokenType::Distinct)?;
        }

        self.parse_projection(&mut select)?;
        if select.projection.is_empty() {
            return Err(ParadoxError::InvalidSql("Empty column list.".to_string()));
        }

        if self.check(TokenType::From) {
            self.parse_from(&mut select)?;
        } else {
            return Err(ParadoxError::InvalidSql("FROM expected.".to_string()));
        }
        Ok(select)
    }

    /// Projection list up to the FROM keyword.
    fn parse_projection(&mut self, select: &mut SelectStatement) -> Result<()> {
        let mut first = true;
        while !self.check(TokenType::Eof) {
            if self.check(TokenType::Distinct) {
                return Err(ParadoxError::InvalidSql(
                    "DISTINCT is only allowed before the first column.".to_string(),
                ));
            }
            if self.check(TokenType::From) {
                break;
            }
            if !first {
                self.expect_msg(TokenType::Comma, "Missing comma.")?;
            }
            match self.current().token_type {
                TokenType::Character => self.parse_character_item(select)?,
                TokenType::Numeric => self.parse_numeric_item(select)?,
                TokenType::Asterisk => {
                    select.projection.push(ProjectionItem::Asterisk);
                    self.expect(TokenType::Asterisk)?;
                }
                _ => self.parse_field_item(select)?,
            }
            first = false;
        }
        Ok(())
    }

    fn parse_character_item(&mut self, select: &mut SelectStatement) -> Result<()> {
        let value = self.current().lexeme.clone();
        self.expect(TokenType::Character)?;
        let alias = self.parse_alias(&value)?;
        select
            .projection
            .push(ProjectionItem::Character { value, alias });
        Ok(())
    }

    fn parse_numeric_item(&mut self, select: &mut SelectStatement) -> Result<()> {
        let value = self.current().lexeme.clone();
        self.expect(TokenType::Numeric)?;
        let alias = self.parse_alias(&value)?;
        select
            .projection
            .push(ProjectionItem::Numeric { value, alias });
        Ok(())
    }

    /// Column reference, optionally qualified and aliased.
    fn parse_field_item(&mut self, select: &mut SelectStatement) -> Result<()> {
        let first_name = self.current().lexeme.clone();
        self.expect(TokenType::Identifier)?;

        let mut table_alias = None;
        let mut name = first_name.clone();
        if self.check(TokenType::Period) {
            self.expect(TokenType::Period)?;
            table_alias = Some(first_name);
            name = self.current().lexeme.clone();
            self.expect(TokenType::Identifier)?;
        }

        let alias = self.parse_alias(&name)?;
        select
            .projection
            .push(ProjectionItem::Field(FieldRef::with_alias(
                table_alias,
                name,
                alias,
            )));
        Ok(())
    }

    /// `AS (identifier | character)`, a bare identifier, or the default.
    fn parse_alias(&mut self, default: &str) -> Result<String> {
        if self.check(TokenType::As) {
            self.expect(TokenType::As)?;
            let alias = self.current().lexeme.clone();
            self.expect_any(&[TokenType::Identifier, TokenType::Character])?;
            Ok(alias)
        } else if self.check(TokenType::Identifier) {
            let alias = self.current().lexeme.clone();
            self.expect(TokenType::Identifier)?;
            Ok(alias)
        } else {
            Ok(default.to_string())
        }
    }

    fn parse_from(&mut self, select: &mut SelectStatement) -> Result<()> {
        self.expect(TokenType::From)?;
        let mut first = true;
        loop {
            if self.check(TokenType::Where)
                || self.check(TokenType::Semicolon)
                || self.check(TokenType::RParen)
                || self.check(TokenType::Eof)
            {
                break;
            }
            if !first {
                self.expect_msg(TokenType::Comma, "Missing comma.")?;
            }
            if self.check(TokenType::Identifier) {
                self.parse_join_table(select)?;
                first = false;
            } else {
                return Err(self.unexpected());
            }
        }

        if select.from.is_empty() {
            return Err(ParadoxError::InvalidSql("Table name expected.".to_string()));
        }

        if self.check(TokenType::Where) {
            self.expect(TokenType::Where)?;
            select.conditions = self.parse_condition_list()?;
        }
        Ok(())
    }

    /// One FROM-list table with its trailing JOIN clauses.
    fn parse_join_table(&mut self, select: &mut SelectStatement) -> Result<()> {
        let table_name = self.current().lexeme.clone();
        let alias = self.parse_table_alias(&table_name)?;

        let mut table = TableRef::new(table_name, alias);
        self.parse_joins(&mut table)?;
        select.from.push(table);
        Ok(())
    }

    /// Consumes the table name and an optional alias.
    fn parse_table_alias(&mut self, table_name: &str) -> Result<String> {
        self.expect(TokenType::Identifier)?;
        if self.check(TokenType::As) {
            self.expect(TokenType::As)?;
            let alias = self.current().lexeme.clone();
            self.expect(TokenType::Identifier)?;
            Ok(alias)
        } else if self.check(TokenType::Identifier) {
            let alias = self.current().lexeme.clone();
            self.expect(TokenType::Identifier)?;
            Ok(alias)
        } else {
            Ok(table_name.to_string())
        }
    }

    fn parse_joins(&mut self, table: &mut TableRef) -> Result<()> {
        while !matches!(
            self.current().token_type,
            TokenType::Comma
                | TokenType::Where
                | TokenType::Semicolon
                | TokenType::RParen
                | TokenType::Eof
        ) {
            let mut kind = JoinKind::Inner;
            if self.check(TokenType::Left) {
                kind = JoinKind::LeftOuter;
                self.expect(TokenType::Left)?;
            } else if self.check(TokenType::Right) {
                kind = JoinKind::RightOuter;
                self.expect(TokenType::Right)?;
            }
            if self.check(TokenType::Inner) {
                self.expect(TokenType::Inner)?;
            } else if self.check(TokenType::Outer) {
                self.expect(TokenType::Outer)?;
            }
            self.expect(TokenType::Join)?;

            let table_name = self.current().lexeme.clone();
            let mut alias = table_name.clone();
            self.expect(TokenType::Identifier)?;
            if self.check(TokenType::As) {
                self.expect(TokenType::As)?;
                alias = self.current().lexeme.clone();
                self.expect(TokenType::Identifier)?;
            } else if !self.check(TokenType::On) {
                alias = self.current().lexeme.clone();
                self.expect(TokenType::Identifier)?;
            }
            self.expect(TokenType::On)?;
            let conditions = self.parse_condition_list()?;

            table.joins.push(JoinClause {
                kind,
                table_name,
                alias,
                conditions,
            });
        }
        Ok(())
    }

    /// Flat condition list in source order, up to a break token.
    /// A parenthesized group is parsed and spliced into the outer list.
    fn parse_condition_list(&mut self) -> Result<Vec<ConditionNode>> {
        let mut conditions = Vec::new();
        while !self.check(TokenType::Eof) {
            if self.current().token_type.is_condition_break() {
                break;
            }
            if self.check(TokenType::LParen) {
                self.expect(TokenType::LParen)?;
                let inner = self.parse_condition_list()?;
                self.expect_msg(TokenType::RParen, "Right parenthesis expected.")?;
                conditions.extend(inner);
                continue;
            }
            conditions.push(self.parse_condition()?);
        }
        Ok(conditions)
    }

    fn parse_condition(&mut self) -> Result<ConditionNode> {
        match self.current().token_type {
            TokenType::Not => {
                self.expect(TokenType::Not)?;
                Ok(ConditionNode::Not(Box::new(self.parse_condition()?)))
            }
            TokenType::And => {
                self.expect(TokenType::And)?;
                Ok(ConditionNode::And(None))
            }
            TokenType::Or => {
                self.expect(TokenType::Or)?;
                Ok(ConditionNode::Or(None))
            }
            TokenType::Xor => {
                self.expect(TokenType::Xor)?;
                Ok(ConditionNode::Xor(None))
            }
            TokenType::Exists => {
                self.expect(TokenType::Exists)?;
                self.expect_msg(TokenType::LParen, "Left parenthesis expected.")?;
                let select = self.parse_select()?;
                self.expect_msg(TokenType::RParen, "Right parenthesis expected.")?;
                Ok(ConditionNode::Exists(Box::new(select)))
            }
            _ => self.parse_field_condition(),
        }
    }

    /// A comparison headed by a field; a bare field is illegal here.
    fn parse_field_condition(&mut self) -> Result<ConditionNode> {
        let field = self.parse_field()?;
        match self.current().token_type {
            TokenType::Between => {
                self.expect(TokenType::Between)?;
                let low = self.parse_field()?;
                self.expect_msg(TokenType::And, "AND expected.")?;
                let high = self.parse_field()?;
                Ok(ConditionNode::Between { field, low, high })
            }
            TokenType::Equals => {
                self.expect(TokenType::Equals)?;
                Ok(ConditionNode::Equals(field, self.parse_field()?))
            }
            TokenType::NotEquals => {
                self.expect(TokenType::NotEquals)?;
                Ok(ConditionNode::NotEquals(field, self.parse_field()?))
            }
            TokenType::NotEquals2 => {
                self.expect(TokenType::NotEquals2)?;
                Ok(ConditionNode::NotEquals(field, self.parse_field()?))
            }
            TokenType::Less => {
                self.expect(TokenType::Less)?;
                Ok(ConditionNode::LessThan(field, self.parse_field()?))
            }
            TokenType::More => {
                self.expect(TokenType::More)?;
                Ok(ConditionNode::GreaterThan(field, self.parse_field()?))
            }
            _ => Err(ParadoxError::InvalidSql(format!(
                "Invalid operator: {}",
                self.current().lexeme
            ))),
        }
    }

    /// A comparison operand: identifier (optionally qualified), numeric
    /// or character literal. Literals keep their lexeme as the name and
    /// are resolved against the plan columns at evaluation time.
    fn parse_field(&mut self) -> Result<FieldRef> {
        let lexeme = self.current().lexeme.clone();
        self.expect_any(&[
            TokenType::Identifier,
            TokenType::Numeric,
            TokenType::Character,
        ])?;

        if self.check(TokenType::Period) {
            self.expect(TokenType::Period)?;
            let name = self.current().lexeme.clone();
            self.expect(TokenType::Identifier)?;
            Ok(FieldRef::new(Some(lexeme), name))
        } else {
            Ok(FieldRef::new(None, lexeme))
        }
    }

    // Helper methods

    fn current(&self) -> &Token {
        &self.tokens[self.position]
    }

    fn check(&self, token_type: TokenType) -> bool {
        self.current().token_type == token_type
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() - 1 {
            self.position += 1;
        }
    }

    fn expect(&mut self, token_type: TokenType) -> Result<()> {
        if self.check(token_type) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn expect_msg(&mut self, token_type: TokenType, message: &str) -> Result<()> {
        if self.check(token_type) {
            self.advance();
            Ok(())
        } else {
            Err(ParadoxError::InvalidSql(message.to_string()))
        }
    }

    fn expect_any(&mut self, token_types: &[TokenType]) -> Result<()> {
        if token_types.iter().any(|tt| self.check(*tt)) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> ParadoxError {
        let token = self.current();
        if token.token_type == TokenType::Eof {
            ParadoxError::InvalidSql("Unexpected end of statement.".to_string())
        } else {
            ParadoxError::InvalidSql(format!(
                "Unexpected token '{}' at line {} column {}",
                token.lexeme, token.line, token.column
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::lexer::Lexer;

    fn parse_sql(sql: &str) -> Result<Vec<Statement>> {
        let tokens = Lexer::new(sql).tokenize()?;
        Parser::new(tokens).parse()
    }

    fn parse_select(sql: &str) -> SelectStatement {
        match parse_sql(sql).unwrap().remove(0) {
            Statement::Select(s) => s,
        }
    }

    #[test]
    fn test_parse_select_star() {
        let select = parse_select("SELECT * FROM t");
        let expected = SelectStatement {
            distinct: false,
            projection: vec![ProjectionItem::Asterisk],
            from: vec![TableRef::new("t", "t")],
            conditions: vec![],
        };
        assert_eq!(select, expected);
    }

    #[test]
    fn test_parse_field_list_with_aliases() {
        let select = parse_select("SELECT AC as 'ACode', State st, CITIES FROM AREACODES");
        assert_eq!(select.projection.len(), 3);
        assert_eq!(
            select.projection[0],
            ProjectionItem::Field(FieldRef::with_alias(None, "AC", "ACode"))
        );
        assert_eq!(
            select.projection[1],
            ProjectionItem::Field(FieldRef::with_alias(None, "State", "st"))
        );
        assert_eq!(
            select.projection[2],
            ProjectionItem::Field(FieldRef::new(None, "CITIES"))
        );
    }

    #[test]
    fn test_parse_qualified_field_alias_defaults_to_column() {
        let select = parse_select("SELECT t.ac FROM areacodes t");
        assert_eq!(
            select.projection[0],
            ProjectionItem::Field(FieldRef::new(Some("t".to_string()), "ac"))
        );
        assert_eq!(select.from[0].alias, "t");
    }

    #[test]
    fn test_parse_distinct() {
        let select = parse_select("SELECT DISTINCT State FROM AREACODES");
        assert!(select.distinct);
    }

    #[test]
    fn test_parse_distinct_after_first_column_fails() {
        let result = parse_sql("SELECT ac, DISTINCT State FROM AREACODES");
        assert!(matches!(result, Err(ParadoxError::InvalidSql(_))));
    }

    #[test]
    fn test_parse_non_select_unsupported() {
        let result = parse_sql("INSERT INTO t VALUES (1)");
        assert!(matches!(
            result,
            Err(ParadoxError::UnsupportedOperation(_))
        ));
    }

    #[test]
    fn test_parse_empty_statement() {
        let result = parse_sql("   ");
        assert!(matches!(result, Err(ParadoxError::InvalidSql(_))));
    }

    #[test]
    fn test_parse_missing_from() {
        let result = parse_sql("SELECT *");
        assert!(matches!(result, Err(ParadoxError::InvalidSql(_))));
    }

    #[test]
    fn test_parse_missing_comma_message() {
        let err = parse_sql("SELECT a b c FROM t").unwrap_err();
        // "a b" parses as alias; the third identifier has no comma
        assert!(err.to_string().contains("Missing comma."));
    }

    #[test]
    fn test_parse_where_flat_condition_list() {
        let select = parse_select("SELECT * FROM t WHERE a = b AND c > 2");
        assert_eq!(select.conditions.len(), 3);
        assert_eq!(
            select.conditions[0],
            ConditionNode::Equals(FieldRef::new(None, "a"), FieldRef::new(None, "b"))
        );
        assert_eq!(select.conditions[1], ConditionNode::And(None));
        assert_eq!(
            select.conditions[2],
            ConditionNode::GreaterThan(FieldRef::new(None, "c"), FieldRef::new(None, "2"))
        );
    }

    #[test]
    fn test_parse_not_and_between() {
        let select = parse_select("SELECT * FROM t WHERE NOT a = 1 OR b BETWEEN 2 AND 5");
        assert_eq!(
            select.conditions[0],
            ConditionNode::Not(Box::new(ConditionNode::Equals(
                FieldRef::new(None, "a"),
                FieldRef::new(None, "1")
            )))
        );
        assert_eq!(select.conditions[1], ConditionNode::Or(None));
        assert_eq!(
            select.conditions[2],
            ConditionNode::Between {
                field: FieldRef::new(None, "b"),
                low: FieldRef::new(None, "2"),
                high: FieldRef::new(None, "5"),
            }
        );
    }

    #[test]
    fn test_parse_not_equals_spellings() {
        let select = parse_select("SELECT * FROM t WHERE a <> b AND a != b");
        assert_eq!(
            select.conditions[0],
            ConditionNode::NotEquals(FieldRef::new(None, "a"), FieldRef::new(None, "b"))
        );
        assert_eq!(
            select.conditions[2],
            ConditionNode::NotEquals(FieldRef::new(None, "a"), FieldRef::new(None, "b"))
        );
    }

    #[test]
    fn test_parse_parenthesized_conditions_spliced() {
        let select = parse_select("SELECT * FROM t WHERE (a = 1 AND b = 2) OR c = 3");
        assert_eq!(select.conditions.len(), 5);
        assert_eq!(select.conditions[1], ConditionNode::And(None));
        assert_eq!(select.conditions[3], ConditionNode::Or(None));
    }

    #[test]
    fn test_parse_bare_field_in_where_fails() {
        let err = parse_sql("SELECT * FROM t WHERE a").unwrap_err();
        assert!(err.to_string().contains("Invalid operator"));
    }

    #[test]
    fn test_parse_inner_join() {
        let select = parse_select(
            "SELECT * FROM a INNER JOIN b AS bb ON a.id = bb.id WHERE a.x = 1",
        );
        assert_eq!(select.from.len(), 1);
        let join = &select.from[0].joins[0];
        assert_eq!(join.kind, JoinKind::Inner);
        assert_eq!(join.table_name, "b");
        assert_eq!(join.alias, "bb");
        assert_eq!(
            join.conditions[0],
            ConditionNode::Equals(
                FieldRef::new(Some("a".to_string()), "id"),
                FieldRef::new(Some("bb".to_string()), "id")
            )
        );
        assert_eq!(select.conditions.len(), 1);
    }

    #[test]
    fn test_parse_outer_join_kinds() {
        let select =
            parse_select("SELECT * FROM a LEFT OUTER JOIN b ON a.id = b.id RIGHT JOIN c ON a.id = c.id");
        assert_eq!(select.from[0].joins[0].kind, JoinKind::LeftOuter);
        assert_eq!(select.from[0].joins[1].kind, JoinKind::RightOuter);
    }

    #[test]
    fn test_parse_comma_separated_tables() {
        let select = parse_select("SELECT * FROM a, b bb, c AS cc");
        assert_eq!(select.from.len(), 3);
        assert_eq!(select.from[0].alias, "a");
        assert_eq!(select.from[1].alias, "bb");
        assert_eq!(select.from[2].alias, "cc");
    }

    #[test]
    fn test_parse_exists() {
        let select = parse_select("SELECT * FROM a WHERE EXISTS (SELECT * FROM b)");
        match &select.conditions[0] {
            ConditionNode::Exists(sub) => {
                assert_eq!(sub.from[0].name, "b");
            }
            other => panic!("Expected EXISTS, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_literal_projection_items() {
        let select = parse_select("SELECT 'hello' AS greeting, 42 FROM t");
        assert_eq!(
            select.projection[0],
            ProjectionItem::Character {
                value: "hello".to_string(),
                alias: "greeting".to_string(),
            }
        );
        assert_eq!(
            select.projection[1],
            ProjectionItem::Numeric {
                value: "42".to_string(),
                alias: "42".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_trailing_semicolon() {
        let statements = parse_sql("SELECT * FROM t;").unwrap();
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn test_comparison_round_trip() {
        let node = ConditionNode::Equals(
            FieldRef::new(Some("table".to_string()), "first"),
            FieldRef::new(Some("table".to_string()), "last"),
        );
        let sql = format!("SELECT * FROM t WHERE {}", node);
        let select = parse_select(&sql);
        assert_eq!(select.conditions[0], node);
    }
}
