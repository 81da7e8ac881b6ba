pub mod ast;
pub mod cli;
pub mod generator;
pub mod lexer;
pub mod parser;
pub mod value;

pub use ast::{Expr, Literal, Operator, Statement, Token};
pub use generator::{GenerateError, generate};
pub use lexer::{LexError, Lexer, Position, tokenize};
pub use parser::{ParseError, Parser};

use thiserror::Error;
use tracing::{debug, trace};

/// Any failure of the translation pipeline, tagged with the stage it came
/// from.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("lex error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("generate error: {0}")]
    Generate(#[from] GenerateError),
}

/// Result of a successful translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    /// The parsed statement
    pub statement: Statement,
    /// The rendered MongoDB shell command
    pub command: String,
}

/// Tokenizes and parses the first statement of `sql`.
pub fn parse(sql: &str) -> Result<Statement, TranslateError> {
    let tokens = tokenize(sql)?;
    debug!(tokens = tokens.len(), "tokenized statement");
    let statement = Parser::new(tokens).parse()?;
    debug!(kind = statement.kind(), table = statement.table(), "parsed statement");
    Ok(statement)
}

/// Translates one SQL statement into a MongoDB shell command.
///
/// ```
/// let translation = sql2mongo::translate("DELETE FROM sesiones WHERE expirado = 1;").unwrap();
/// assert_eq!(translation.command, r#"db.sesiones.deleteMany({"expirado":1});"#);
/// ```
pub fn translate(sql: &str) -> Result<Translation, TranslateError> {
    let statement = parse(sql)?;
    let command = generate(&statement)?;
    trace!(%command, "generated command");
    Ok(Translation { statement, command })
}
