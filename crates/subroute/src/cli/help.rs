//! Help generation for the CLI.
//!
//! Root help and the listing shown for unknown commands come from a
//! [`HelpFunc`]; command help is rendered from the command's template.

use std::collections::BTreeMap;
use std::sync::Arc;

use subroute_dispatch::{path, Command, CommandFactory};
use subroute_render::{
    align_entries, CommandHelp, CommandListing, HelpRenderer, OutputSink, SubcommandEntry,
};

use super::app::Cli;

/// Produces the generic help text listing the given commands.
///
/// Receives the visible commands to list keyed by full path. The returned
/// text is written followed by a newline.
pub type HelpFunc = Arc<dyn Fn(&BTreeMap<String, CommandFactory>) -> String + Send + Sync>;

/// The default [`HelpFunc`]: a usage line and an aligned command list.
///
/// ```text
/// Usage: app [--version] [--help] <command> [<args>]
///
/// Available commands are:
///     bar    Synopsis of bar
///     foo    Synopsis of foo
/// ```
pub fn basic_help_func(app: impl Into<String>) -> HelpFunc {
    let app = app.into();
    let renderer = HelpRenderer::new();

    Arc::new(move |commands: &BTreeMap<String, CommandFactory>| {
        let mut entries = Vec::with_capacity(commands.len());
        for (key, factory) in commands {
            match factory() {
                Ok(command) => {
                    entries.push(SubcommandEntry::new(key.clone(), command.help(), command.synopsis()))
                }
                Err(err) => log::error!("command {:?} failed to load: {}", key, err),
            }
        }
        align_entries(&mut entries);

        let listing = CommandListing {
            name: app.clone(),
            commands: entries,
        };
        listing_text(&renderer, &listing)
    })
}

/// Renders `listing`, or logs the failure and returns no text.
fn listing_text(renderer: &HelpRenderer, listing: &CommandListing) -> String {
    match renderer.render_listing(listing) {
        Ok(text) => text,
        Err(err) => {
            log::error!("failed to render command listing: {}", err);
            String::new()
        }
    }
}

impl Cli {
    /// Runs the help function over the visible children of `prefix`.
    pub(crate) fn listing_help(&self, prefix: &str) -> String {
        let commands: BTreeMap<String, CommandFactory> = self
            .registry()
            .children(prefix)
            .into_iter()
            .map(|(key, factory)| (key.to_string(), Arc::clone(factory)))
            .collect();
        (self.help_func)(&commands)
    }

    /// Renders `command`'s help to `out`.
    ///
    /// In a nested CLI the help lists the immediate children of the
    /// resolved path. Rendering failures are reported on the error sink.
    pub(crate) fn command_help(&self, out: &OutputSink, command: &dyn Command) {
        let registry = self.registry();
        let subcommand = self.subcommand();

        let mut subcommands = Vec::new();
        if registry.is_nested() {
            for (key, factory) in registry.children(subcommand) {
                match factory() {
                    Ok(sub) => subcommands.push(SubcommandEntry::new(
                        path::last_segment(key),
                        sub.help(),
                        sub.synopsis(),
                    )),
                    Err(err) => self
                        .error_sink
                        .write_diagnostic(&format!("Error instantiating {:?}: {}\n", key, err)),
                }
            }
        }
        align_entries(&mut subcommands);

        let data = CommandHelp {
            name: self.name.clone(),
            subcommand_name: subcommand.to_string(),
            help: command.help(),
            subcommands,
        };

        let template = command.help_template();
        match self.renderer.render_command(template.as_deref(), &data) {
            Ok(text) => out.write_str(&text),
            Err(err) => self
                .error_sink
                .write_diagnostic(&format!("Internal error rendering help: {}\n", err)),
        }
    }
}
