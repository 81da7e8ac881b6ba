use std::fmt;

/// Operators recognized by the lexer.
///
/// Only the comparison operators can appear in a WHERE clause; the
/// arithmetic ones are lexed so that they produce a parse error instead of
/// an unexpected-character error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // Comparison
    /// Equal (`=`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Not equal, SQL spelling (`<>`)
    LessGreater,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than (`<`)
    LessThan,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Less than or equal (`<=`)
    LessEqual,

    // Arithmetic
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`, doubles as the select-list wildcard
    Star,
    /// `/`
    Slash,
}

impl Operator {
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "!=",
            Operator::LessGreater => "<>",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterEqual => ">=",
            Operator::LessEqual => "<=",
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
        }
    }

    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Operator::Equal
                | Operator::NotEqual
                | Operator::LessGreater
                | Operator::GreaterThan
                | Operator::LessThan
                | Operator::GreaterEqual
                | Operator::LessEqual
        )
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
