//! Translate SQL given on the command line, in a file, or on stdin

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::CliError;
use crate::{Statement, translate};

/// Options for the translate command
#[derive(Debug, Clone, Default)]
pub struct TranslateOptions {
    /// Statement words from the command line, joined with spaces
    pub sql: Vec<String>,
    /// Read the statement from this file instead
    pub file: Option<PathBuf>,
    /// Statement read from stdin, used when nothing else is given
    pub stdin: Option<String>,
    /// Also print the parsed statement
    pub show_ast: bool,
}

/// Printed when `translate` runs with no statement, no file and an
/// interactive stdin.
pub const USAGE: &str = "Usage: sql2mongo translate \"SELECT ... FROM ...;\"  (or --file query.sql, or pipe SQL to stdin)";

impl TranslateOptions {
    /// True when no source was given at all. Blank stdin text still counts
    /// as a source and fails with [`CliError::NoInput`].
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty() && self.file.is_none() && self.stdin.is_none()
    }
}

/// Result of a translate operation
#[derive(Debug)]
pub struct TranslateOutput {
    /// Parsed statement, present when `show_ast` was requested
    pub statement: Option<Statement>,
    /// Generated MongoDB command
    pub command: String,
}

impl TranslateOutput {
    /// Text printed to stdout.
    pub fn render(&self) -> String {
        match &self.statement {
            Some(statement) => format!("{:#?}\n{}", statement, self.command),
            None => self.command.clone(),
        }
    }
}

/// Picks the SQL source: `--file` first, then positional words, then stdin.
fn read_sql(options: &TranslateOptions) -> Result<String, CliError> {
    if let Some(path) = &options.file {
        debug!(path = %path.display(), "reading statement from file");
        return Ok(fs::read_to_string(path)?);
    }
    if !options.sql.is_empty() {
        return Ok(options.sql.join(" "));
    }
    match &options.stdin {
        Some(sql) if !sql.trim().is_empty() => Ok(sql.clone()),
        _ => Err(CliError::NoInput),
    }
}

/// Execute a translate operation
pub fn execute_translate(options: &TranslateOptions) -> Result<TranslateOutput, CliError> {
    let sql = read_sql(options)?;
    let translation = translate(&sql)?;

    Ok(TranslateOutput {
        statement: options.show_ast.then_some(translation.statement),
        command: translation.command,
    })
}
