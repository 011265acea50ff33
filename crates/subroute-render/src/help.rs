//! Help data and rendering.
//!
//! Two kinds of help are rendered:
//!
//! - **Command help** ([`CommandHelp`]): a command's own help text followed
//!   by its immediate subcommands. Commands may supply their own template;
//!   the default one is `templates/command_help.jinja`.
//! - **Command listing** ([`CommandListing`]): the usage line and the list
//!   of available commands shown for the root and for unknown commands.
//!
//! Names in both lists are padded to the widest visible name so synopses
//! line up in one column.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::error::RenderError;
use crate::template::{pad_to_width, TemplateEngine};

/// Default template for command help.
pub const DEFAULT_COMMAND_TEMPLATE: &str = include_str!("templates/command_help.jinja");

/// Default template for the root command listing.
pub const BASIC_HELP_TEMPLATE: &str = include_str!("templates/basic_help.jinja");

/// One row of a subcommand or command listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubcommandEntry {
    /// Display name.
    pub name: String,
    /// Display name padded to the listing's widest name.
    pub name_aligned: String,
    /// Long-form help of the entry.
    pub help: String,
    /// One-line synopsis of the entry.
    pub synopsis: String,
}

impl SubcommandEntry {
    pub fn new(name: impl Into<String>, help: impl Into<String>, synopsis: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name_aligned: name.clone(),
            name,
            help: help.into(),
            synopsis: synopsis.into(),
        }
    }
}

/// Pads every entry's `name_aligned` to the widest name in the list.
pub fn align_entries(entries: &mut [SubcommandEntry]) {
    let width = entries
        .iter()
        .map(|e| e.name.width())
        .max()
        .unwrap_or(0);
    for entry in entries.iter_mut() {
        entry.name_aligned = pad_to_width(&entry.name, width);
    }
}

/// Template data for a command's help.
#[derive(Debug, Clone, Serialize)]
pub struct CommandHelp {
    /// Application name.
    pub name: String,
    /// Full path of the command the help is for.
    pub subcommand_name: String,
    /// The command's help text.
    pub help: String,
    /// Visible immediate children, sorted and aligned.
    pub subcommands: Vec<SubcommandEntry>,
}

/// Template data for the root command listing.
#[derive(Debug, Clone, Serialize)]
pub struct CommandListing {
    /// Application name.
    pub name: String,
    /// Listed commands, sorted and aligned.
    pub commands: Vec<SubcommandEntry>,
}

/// Renders help with a [`TemplateEngine`].
#[derive(Default)]
pub struct HelpRenderer {
    engine: TemplateEngine,
}

impl HelpRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer around a configured engine.
    pub fn with_engine(engine: TemplateEngine) -> Self {
        Self { engine }
    }

    /// Renders command help.
    ///
    /// `template` overrides the default template. The rendered text always
    /// ends in a newline unless the template's own logic removes it: a
    /// template that does not end in a newline gets one appended.
    pub fn render_command(
        &self,
        template: Option<&str>,
        data: &CommandHelp,
    ) -> Result<String, RenderError> {
        let mut template = match template {
            Some(custom) => custom.to_string(),
            None => DEFAULT_COMMAND_TEMPLATE.trim().to_string(),
        };
        if !template.ends_with('\n') {
            template.push('\n');
        }
        self.engine.render(&template, data)
    }

    /// Renders the usage line and command listing.
    pub fn render_listing(&self, data: &CommandListing) -> Result<String, RenderError> {
        self.engine.render(BASIC_HELP_TEMPLATE.trim_end(), data)
    }
}
