//! Error taxonomy for the scaffold engine

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing tokens, rendering templates, or writing
/// artifacts.
///
/// Parse errors abort the whole invocation before any file is touched.
/// Write errors abort the remaining writes of the same invocation; files
/// already written are not rolled back.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Empty or malformed subject name.
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// Malformed `name:verb` or `field:type` token.
    #[error("invalid token: {0:?}")]
    InvalidToken(String),

    /// Migration subject matches neither `create_<table>_table` nor
    /// `add_<field>_to_<table>_table`. The migration composer downgrades
    /// this to a bare migration instead of failing the command.
    #[error("unrecognized migration pattern: {0:?}")]
    UnknownPattern(String),

    /// Surfaced from the file collaborator; not retried.
    #[error("write failed: {path}")]
    Write {
        /// Destination path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A built-in template failed to compile.
    #[error("template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// A template failed to render against its context.
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),
}

impl From<handlebars::TemplateError> for GenerateError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::Template(Box::new(err))
    }
}
