/// Abstract syntax tree for SQL statements
use std::fmt;

/// Top-level SQL statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(SelectStatement),
}

/// SELECT statement
#[derive(Debug, Clone, PartialEq)]
pub struct SelectStatement {
    pub distinct: bool,
    pub projection: Vec<ProjectionItem>,
    pub from: Vec<TableRef>,
    /// WHERE conditions in source order (flat list, see `ConditionNode`)
    pub conditions: Vec<ConditionNode>,
}

impl SelectStatement {
    pub fn new() -> Self {
        Self {
            distinct: false,
            projection: Vec::new(),
            from: Vec::new(),
            conditions: Vec::new(),
        }
    }
}

impl Default for SelectStatement {
    fn default() -> Self {
        Self::new()
    }
}

/// One item of the SELECT projection list
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionItem {
    /// `*`
    Asterisk,
    /// Column reference, optionally qualified
    Field(FieldRef),
    /// String literal with alias
    Character { value: String, alias: String },
    /// Numeric literal (verbatim lexeme) with alias
    Numeric { value: String, alias: String },
}

/// A column reference. The alias defaults to the column name.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRef {
    pub table_alias: Option<String>,
    pub name: String,
    pub alias: String,
}

impl FieldRef {
    pub fn new(table_alias: Option<String>, name: impl Into<String>) -> Self {
        let name = name.into();
        let alias = name.clone();
        Self {
            table_alias,
            name,
            alias,
        }
    }

    pub fn with_alias(
        table_alias: Option<String>,
        name: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            table_alias,
            name: name.into(),
            alias: alias.into(),
        }
    }

    /// The `alias.name` form used by the planner, or the bare name.
    pub fn qualified_name(&self) -> String {
        match &self.table_alias {
            Some(table) => format!("{}.{}", table, self.name),
            None => self.name.clone(),
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.table_alias {
            Some(table) => write!(f, "{}.{}", table, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Join kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    LeftOuter,
    RightOuter,
    /// Comma-separated table in the FROM list
    CrossComma,
}

/// A JOIN clause attached to a table reference
#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub kind: JoinKind,
    pub table_name: String,
    pub alias: String,
    /// ON conditions in source order
    pub conditions: Vec<ConditionNode>,
}

/// A table in the FROM list. The alias defaults to the table name.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    pub name: String,
    pub alias: String,
    pub joins: Vec<JoinClause>,
}

impl TableRef {
    pub fn new(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: alias.into(),
            joins: Vec::new(),
        }
    }
}

/// One entry of a flat condition list.
///
/// The parser emits boolean operators as skeleton nodes (child `None`)
/// between the comparisons, preserving source order; association is
/// resolved left to right at evaluation time.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionNode {
    Equals(FieldRef, FieldRef),
    NotEquals(FieldRef, FieldRef),
    LessThan(FieldRef, FieldRef),
    GreaterThan(FieldRef, FieldRef),
    Between {
        field: FieldRef,
        low: FieldRef,
        high: FieldRef,
    },
    And(Option<Box<ConditionNode>>),
    Or(Option<Box<ConditionNode>>),
    Xor(Option<Box<ConditionNode>>),
    Not(Box<ConditionNode>),
    Exists(Box<SelectStatement>),
}

impl fmt::Display for ConditionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionNode::Equals(lhs, rhs) => write!(f, "{} = {}", lhs, rhs),
            ConditionNode::NotEquals(lhs, rhs) => write!(f, "{} <> {}", lhs, rhs),
            ConditionNode::LessThan(lhs, rhs) => write!(f, "{} < {}", lhs, rhs),
            ConditionNode::GreaterThan(lhs, rhs) => write!(f, "{} > {}", lhs, rhs),
            ConditionNode::Between { field, low, high } => {
                write!(f, "{} BETWEEN {} AND {}", field, low, high)
            }
            ConditionNode::And(child) => match child {
                Some(c) => write!(f, "AND {}", c),
                None => write!(f, "AND"),
            },
            ConditionNode::Or(child) => match child {
                Some(c) => write!(f, "OR {}", c),
                None => write!(f, "OR"),
            },
            ConditionNode::Xor(child) => match child {
                Some(c) => write!(f, "XOR {}", c),
                None => write!(f, "XOR"),
            },
            ConditionNode::Not(child) => write!(f, "NOT {}", child),
            ConditionNode::Exists(_) => write!(f, "EXISTS (...)"),
        }
    }
}
