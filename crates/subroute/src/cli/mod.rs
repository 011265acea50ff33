//! Argument dispatch for subcommand-style CLIs.
//!
//! [`Cli`] ties the pieces together: it builds the command registry,
//! classifies the arguments, and then either prints version or help text or
//! runs the resolved command.
//!
//! ## Execution Flow
//!
//! ```text
//! Registry → Classification → Resolution → Help or Run
//! ```
//!
//! 1. Registry: registered paths plus placeholder parents for every
//!    missing ancestor of a nested path.
//!
//! 2. Classification: help and version flags, flags before the command,
//!    the longest registered command path, and the command's arguments.
//!
//! 3. Resolution: the factory for the path builds a fresh command.
//!
//! 4. Help or Run: help requests, unknown paths and misplaced flags print
//!    help; otherwise the command runs and its exit code is returned.
//!
//! ## Output
//!
//! Help requested by the user goes to the help sink. Help printed because
//! something went wrong goes to the error sink, which defaults to the help
//! sink. Both default to stderr so stdout stays free for command output.

mod app;
mod builder;
mod error;
mod help;

pub use app::{Cli, EXIT_UNKNOWN_COMMAND};
pub use builder::CliBuilder;
pub use error::CliError;
pub use help::{basic_help_func, HelpFunc};
