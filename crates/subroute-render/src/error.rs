//! Error types for help rendering and user interaction.

use thiserror::Error;

/// Error type for template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Template syntax error or failure while evaluating the template.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Help data could not be converted into template values.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type for interactive input.
#[derive(Debug, Error)]
pub enum UiError {
    /// Reading from the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input was closed before a line could be read.
    #[error("input closed before an answer was given")]
    Eof,
}
