//! Error type for dispatch.

use thiserror::Error;

/// Fatal dispatch failure.
///
/// Unknown commands, misplaced flags and help requests are not errors:
/// they are reported on the sinks and through the exit code returned by
/// [`Cli::run`](super::Cli::run).
#[derive(Debug, Error)]
pub enum CliError {
    /// A command factory failed to build its command.
    #[error("failed to construct command {path:?}: {source}")]
    Construction {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl CliError {
    /// Exit code a process should use for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Construction { .. } => 1,
        }
    }
}
