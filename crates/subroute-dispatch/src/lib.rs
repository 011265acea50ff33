//! Command routing for subcommand-style CLIs.
//!
//! `subroute-dispatch` holds the parts of dispatch that do not produce
//! output:
//!
//! - **Prefix registry**: an ordered map from space-separated command paths
//!   with exact, longest-prefix and prefix-walk lookups
//! - **Command registry**: factories by path, hidden entries, and
//!   automatic placeholder parents for nested paths
//! - **Classification**: one pass over the argument vector that finds the
//!   help/version flags, the command path and the command's own arguments
//!
//! ```rust
//! use subroute_dispatch::{classify, factory, Command, CommandRegistry};
//!
//! struct Migrate;
//!
//! impl Command for Migrate {
//!     fn help(&self) -> String { "Run migrations".into() }
//!     fn synopsis(&self) -> String { "Run migrations".into() }
//!     fn run(&mut self, _args: &[String]) -> i32 { 0 }
//! }
//!
//! let registry = CommandRegistry::build(
//!     vec![("db migrate", factory(|| Ok(Migrate)))],
//!     Vec::<String>::new(),
//! );
//! let args: Vec<String> = vec!["db".into(), "migrate".into(), "--dry-run".into()];
//! let state = classify(&args, &registry);
//!
//! assert_eq!(state.subcommand, "db migrate");
//! assert_eq!(state.subcommand_args, vec!["--dry-run".to_string()]);
//! ```

mod classify;
mod command;
mod commands;
pub mod path;
mod registry;

pub use classify::{classify, is_help_flag, is_version_flag, DispatchState};
pub use command::{
    factory, Command, CommandFactory, PlaceholderCommand, PLACEHOLDER_HELP, RUN_RESULT_HELP,
};
pub use commands::{CommandRegistry, ResolveError};
pub use registry::PrefixRegistry;
