use crate::ast::Operator;

/// A literal value as written in the statement.
///
/// The tag records how the value was spelled. Whether a `String` is later
/// rendered as a number is decided by [`crate::value::normalize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Unquoted numeric literal
    ///
    /// # Example
    /// ```text
    /// 42
    /// ```
    Number(f64),

    /// Quoted string literal
    ///
    /// # Example
    /// ```text
    /// 'libros'
    /// ```
    String(String),

    /// Bare word used as a value, kept as raw text
    ///
    /// # Example
    /// ```text
    /// WHERE estado = activo
    /// ```
    Identifier(String),
}

/// Boolean condition of a WHERE clause.
///
/// `AND`/`OR` chains are left-leaning binary trees: `a AND b AND c` is
/// `And(And(a, b), c)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Column compared against a literal
    ///
    /// # Example
    /// ```text
    /// edad > 20
    /// ```
    Comparison {
        column: String,
        op: Operator,
        value: Literal,
    },

    And {
        left: Box<Expr>,
        right: Box<Expr>,
    },

    Or {
        left: Box<Expr>,
        right: Box<Expr>,
    },
}
