use indexmap::IndexMap;

use crate::ast::{Expr, Literal};

/// One entry of a SELECT list.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    /// `*`
    Wildcard,
    /// Named column
    Named(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// `ORDER BY column [ASC|DESC]`
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub column: String,
    pub direction: Direction,
}

/// A parsed SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// # Example
    /// ```text
    /// SELECT nombre, edad FROM usuarios WHERE edad > 20 ORDER BY edad DESC LIMIT 5
    /// ```
    Select {
        table: String,
        fields: Vec<Field>,
        where_clause: Option<Expr>,
        order_by: Option<OrderBy>,
        limit: Option<f64>,
    },

    /// Without a column list the values are paired with `col0`, `col1`, ...
    ///
    /// # Example
    /// ```text
    /// INSERT INTO usuarios (nombre, edad) VALUES ('Ana', 28)
    /// ```
    Insert {
        table: String,
        columns: Vec<String>,
        values: Vec<Literal>,
    },

    /// Assignments keep declaration order; a repeated column keeps its first
    /// position and takes the last value.
    ///
    /// # Example
    /// ```text
    /// UPDATE usuarios SET puntos = 100 WHERE id = 5
    /// ```
    Update {
        table: String,
        assignments: IndexMap<String, Literal>,
        where_clause: Option<Expr>,
    },

    /// # Example
    /// ```text
    /// DELETE FROM sesiones WHERE expirado = 1
    /// ```
    Delete {
        table: String,
        where_clause: Option<Expr>,
    },
}

impl Statement {
    /// Name of the statement kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Select { .. } => "select",
            Statement::Insert { .. } => "insert",
            Statement::Update { .. } => "update",
            Statement::Delete { .. } => "delete",
        }
    }

    /// Target table (collection) name.
    pub fn table(&self) -> &str {
        match self {
            Statement::Select { table, .. }
            | Statement::Insert { table, .. }
            | Statement::Update { table, .. }
            | Statement::Delete { table, .. } => table,
        }
    }
}
