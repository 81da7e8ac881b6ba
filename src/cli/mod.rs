//! CLI support for sql2mongo
//!
//! Provides programmatic access to the command-line front end so it can be
//! embedded in other tools and tested without spawning a process.

mod demos;
mod docs;
mod translate;

pub use demos::{DEMO_STATEMENTS, DemoOutcome, run_demos};
pub use docs::{DocTopic, get_doc_topic, get_docs_overview};
pub use translate::{TranslateOptions, TranslateOutput, USAGE, execute_translate};

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    /// The statement could not be translated
    #[error(transparent)]
    Translate(#[from] crate::TranslateError),

    /// Reading the SQL file or stdin failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// No SQL given
    #[error("No SQL provided. Pass a statement, use --file, or pipe SQL to stdin.")]
    NoInput,

    /// Unknown documentation topic
    #[error("Unknown topic: '{0}'\nRun 'sql2mongo docs' to see available topics.")]
    UnknownTopic(String),
}
