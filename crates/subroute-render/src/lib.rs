//! Help rendering and terminal output for subroute CLIs.
//!
//! This crate turns help data into text and gets text to the user:
//!
//! - [`TemplateEngine`]: MiniJinja environment with help-specific filters
//! - [`HelpRenderer`]: command help and command listings from templates
//! - [`OutputSink`]: shared writers with per-sink color configuration
//! - [`Ui`], [`BasicUi`], [`ColoredUi`]: interactive input and output for
//!   command implementations
//!
//! # Templates
//!
//! Command help receives `name`, `subcommand_name`, `help` and
//! `subcommands` (each with `name`, `name_aligned`, `help`, `synopsis`):
//!
//! ```rust
//! use subroute_render::{align_entries, CommandHelp, HelpRenderer, SubcommandEntry};
//!
//! let mut subcommands = vec![
//!     SubcommandEntry::new("add", "", "Add a remote"),
//!     SubcommandEntry::new("remove", "", "Remove a remote"),
//! ];
//! align_entries(&mut subcommands);
//!
//! let data = CommandHelp {
//!     name: "app".into(),
//!     subcommand_name: "remote".into(),
//!     help: "Manage remotes.".into(),
//!     subcommands,
//! };
//! let text = HelpRenderer::new().render_command(None, &data).unwrap();
//! assert_eq!(
//!     text,
//!     "Manage remotes.\n\nSubcommands:\n    add       Add a remote\n    remove    Remove a remote\n"
//! );
//! ```

mod error;
mod help;
mod output;
mod template;
mod ui;

pub use error::{RenderError, UiError};
pub use help::{
    align_entries, CommandHelp, CommandListing, HelpRenderer, SubcommandEntry,
    BASIC_HELP_TEMPLATE, DEFAULT_COMMAND_TEMPLATE,
};
pub use output::{ColorChoice, OutputSink};
pub use template::{pad_to_width, TemplateEngine};
pub use ui::{BasicUi, ColoredUi, Ui, UiColor};

// Re-exported so callers can build styles without depending on console.
pub use console::{Color, Style};
