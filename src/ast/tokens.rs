use std::fmt;

use crate::ast::Operator;

/// Reserved words of the SQL dialect.
///
/// Keywords are matched case-insensitively; `JOIN`, `ON` and `AS` are
/// reserved even though no statement accepts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Select,
    From,
    Where,
    And,
    Or,
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,
    Limit,
    Order,
    By,
    Asc,
    Desc,
    Join,
    On,
    As,
}

impl Keyword {
    /// Looks up a word in the keyword table, ignoring case.
    pub fn lookup(word: &str) -> Option<Self> {
        let keyword = match word.to_ascii_uppercase().as_str() {
            "SELECT" => Keyword::Select,
            "FROM" => Keyword::From,
            "WHERE" => Keyword::Where,
            "AND" => Keyword::And,
            "OR" => Keyword::Or,
            "INSERT" => Keyword::Insert,
            "INTO" => Keyword::Into,
            "VALUES" => Keyword::Values,
            "UPDATE" => Keyword::Update,
            "SET" => Keyword::Set,
            "DELETE" => Keyword::Delete,
            "LIMIT" => Keyword::Limit,
            "ORDER" => Keyword::Order,
            "BY" => Keyword::By,
            "ASC" => Keyword::Asc,
            "DESC" => Keyword::Desc,
            "JOIN" => Keyword::Join,
            "ON" => Keyword::On,
            "AS" => Keyword::As,
            _ => return None,
        };
        Some(keyword)
    }

    /// Canonical (uppercase) spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Select => "SELECT",
            Keyword::From => "FROM",
            Keyword::Where => "WHERE",
            Keyword::And => "AND",
            Keyword::Or => "OR",
            Keyword::Insert => "INSERT",
            Keyword::Into => "INTO",
            Keyword::Values => "VALUES",
            Keyword::Update => "UPDATE",
            Keyword::Set => "SET",
            Keyword::Delete => "DELETE",
            Keyword::Limit => "LIMIT",
            Keyword::Order => "ORDER",
            Keyword::By => "BY",
            Keyword::Asc => "ASC",
            Keyword::Desc => "DESC",
            Keyword::Join => "JOIN",
            Keyword::On => "ON",
            Keyword::As => "AS",
        }
    }

    /// Keywords the lexer reserves but no grammar rule consumes.
    pub fn is_unsupported(self) -> bool {
        matches!(self, Keyword::Join | Keyword::On | Keyword::As)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Reserved word, stored in canonical form
    ///
    /// # Examples
    /// ```text
    /// SELECT
    /// where
    /// Order
    /// ```
    Keyword(Keyword),

    /// Table or column name
    ///
    /// Starts with a letter or underscore; may contain letters, digits,
    /// underscores, dots and dollar signs. Case is preserved.
    ///
    /// # Examples
    /// ```text
    /// usuarios
    /// users.id
    /// price$usd
    /// ```
    Identifier(String),

    /// Quoted string with escapes already removed
    ///
    /// # Examples
    /// ```text
    /// 'libros'
    /// "it\'s"
    /// ```
    String(String),

    /// Numeric literal
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// ```
    Number(f64),

    /// Comparison or arithmetic operator
    Operator(Operator),

    Comma,
    LParen,
    RParen,
    Semicolon,

    /// End of input
    Eof,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Keyword(kw) => write!(f, "keyword {}", kw),
            Token::Identifier(name) => write!(f, "identifier '{}'", name),
            Token::String(s) => write!(f, "string \"{}\"", s),
            Token::Number(n) => write!(f, "number {}", n),
            Token::Operator(op) => write!(f, "operator '{}'", op),
            Token::Comma => f.write_str("','"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
            Token::Semicolon => f.write_str("';'"),
            Token::Eof => f.write_str("end of input"),
        }
    }
}
