//! Command capability set and factories.
//!
//! A [`Command`] is the unit of work a CLI routes to. The dispatcher never
//! holds commands across calls: it asks a [`CommandFactory`] for a fresh
//! instance whenever it needs one, including once per visible entry when
//! rendering help. Factories must therefore be cheap and free of side
//! effects; expensive work belongs in [`Command::run`].

use std::fmt;
use std::sync::Arc;

/// Reserved result a command returns from [`Command::run`] to ask the
/// dispatcher to show its help instead of exiting with the value.
///
/// The dispatcher reports exit code `1` when it sees this value.
pub const RUN_RESULT_HELP: i32 = -18511;

/// Help text used by synthesized parent commands.
pub const PLACEHOLDER_HELP: &str =
    "This command is accessed by using one of the subcommands below.";

/// A routable command.
pub trait Command {
    /// Long-form help text shown by `-h` and in error output.
    fn help(&self) -> String;

    /// One-line description shown in the parent's subcommand listing.
    fn synopsis(&self) -> String;

    /// Runs the command with the arguments that follow its path.
    ///
    /// The returned value becomes the process exit code, except for
    /// [`RUN_RESULT_HELP`].
    fn run(&mut self, args: &[String]) -> i32;

    /// Custom template for this command's help.
    ///
    /// `None` selects the default template.
    fn help_template(&self) -> Option<String> {
        None
    }
}

/// Produces a fresh [`Command`] or a construction error.
pub type CommandFactory = Arc<dyn Fn() -> anyhow::Result<Box<dyn Command>> + Send + Sync>;

/// Wraps a closure returning a concrete command into a [`CommandFactory`].
///
/// ```rust
/// use subroute_dispatch::{factory, Command};
///
/// struct Hello;
///
/// impl Command for Hello {
///     fn help(&self) -> String { "Say hello".into() }
///     fn synopsis(&self) -> String { "Say hello".into() }
///     fn run(&mut self, _args: &[String]) -> i32 { 0 }
/// }
///
/// let make = factory(|| Ok(Hello));
/// assert_eq!(make().unwrap().synopsis(), "Say hello");
/// ```
pub fn factory<F, C>(f: F) -> CommandFactory
where
    F: Fn() -> anyhow::Result<C> + Send + Sync + 'static,
    C: Command + 'static,
{
    Arc::new(move || f().map(|cmd| Box::new(cmd) as Box<dyn Command>))
}

/// No-op command standing in for an unregistered parent path.
///
/// It exists so `app remote` resolves when only `remote add` is registered:
/// running it asks for help, which lists the real children.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderCommand;

impl PlaceholderCommand {
    /// A factory producing placeholder commands.
    pub fn factory() -> CommandFactory {
        factory(|| Ok(PlaceholderCommand))
    }
}

impl Command for PlaceholderCommand {
    fn help(&self) -> String {
        PLACEHOLDER_HELP.to_string()
    }

    fn synopsis(&self) -> String {
        String::new()
    }

    fn run(&mut self, _args: &[String]) -> i32 {
        RUN_RESULT_HELP
    }
}

impl fmt::Debug for dyn Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("synopsis", &self.synopsis())
            .finish_non_exhaustive()
    }
}
