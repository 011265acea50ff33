//! Nested subcommand routing with generated help.
//!
//! `subroute` dispatches an argument vector like `app remote add origin`
//! to the command registered under the longest matching path, here
//! `"remote add"`, and generates help for every level of the command tree.
//!
//! - Commands are registered as factories under space-separated paths.
//!   Parents of nested paths that were not registered are filled in with
//!   placeholders whose help lists their children.
//! - `-h`/`--help` anywhere before `--` prints help; `-v`/`--version`
//!   before the command prints the version.
//! - Unknown paths list the commands available at the parent level and
//!   exit with 127.
//! - Hidden commands run but are never listed.
//!
//! ```rust
//! use subroute::{Cli, Command, OutputSink};
//! use subroute_test::SharedBuffer;
//!
//! struct Add;
//!
//! impl Command for Add {
//!     fn help(&self) -> String { "Adds a remote.".into() }
//!     fn synopsis(&self) -> String { "Add a remote".into() }
//!     fn run(&mut self, _args: &[String]) -> i32 { 0 }
//! }
//!
//! let out = SharedBuffer::new();
//! let cli = Cli::builder()
//!     .name("app")
//!     .args(["remote", "--help"])
//!     .command("remote add", || Ok(Add))
//!     .help_sink(out.sink())
//!     .build();
//!
//! assert_eq!(cli.run().unwrap(), 0);
//! assert_eq!(
//!     out.contents(),
//!     "This command is accessed by using one of the subcommands below.\n\n\
//!      Subcommands:\n    add    Add a remote\n"
//! );
//! ```
//!
//! The routing pieces live in [`subroute_dispatch`] and the rendering and
//! terminal pieces in [`subroute_render`]; both are re-exported here.

pub mod cli;

pub use cli::{basic_help_func, Cli, CliBuilder, CliError, HelpFunc, EXIT_UNKNOWN_COMMAND};

pub use subroute_dispatch::{
    classify, factory, is_help_flag, is_version_flag, path, Command, CommandFactory,
    CommandRegistry, DispatchState, PlaceholderCommand, PrefixRegistry, ResolveError,
    PLACEHOLDER_HELP, RUN_RESULT_HELP,
};
pub use subroute_render::{
    BasicUi, Color, ColorChoice, ColoredUi, HelpRenderer, OutputSink, RenderError, Style,
    TemplateEngine, Ui, UiColor, UiError,
};
