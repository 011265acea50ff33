//! CliBuilder for constructing Cli instances.

use subroute_dispatch::{factory, Command, CommandFactory};
use subroute_render::{HelpRenderer, OutputSink, TemplateEngine};

use super::app::Cli;
use super::help::{basic_help_func, HelpFunc};

const DEFAULT_APP_NAME: &str = "app";

/// Builder for [`Cli`].
///
/// Every setting is optional. Without a help function the CLI uses
/// [`basic_help_func`] with the configured name. Help goes to stderr unless
/// a help sink is set, and errors go to the help sink unless an error sink
/// is set.
///
/// ```rust
/// use subroute::{Cli, PlaceholderCommand};
///
/// let cli = Cli::builder()
///     .name("tool")
///     .version("tool 1.2.0")
///     .args(["--version"])
///     .command_factory("remote add", PlaceholderCommand::factory())
///     .hidden("debug")
///     .build();
///
/// assert!(cli.is_version());
/// ```
#[derive(Default)]
pub struct CliBuilder {
    name: String,
    version: String,
    args: Vec<String>,
    commands: Vec<(String, CommandFactory)>,
    hidden: Vec<String>,
    help_func: Option<HelpFunc>,
    help_sink: Option<OutputSink>,
    error_sink: Option<OutputSink>,
    engine: Option<TemplateEngine>,
}

impl CliBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Application name, used in usage lines and available to templates.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Version string printed for `-v`/`--version`. Empty disables the
    /// version flags.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Arguments to dispatch, without the program name.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Registers a command under a space-separated path.
    ///
    /// The closure is called each time the command is needed. `""`
    /// registers the default command.
    pub fn command<F, C>(self, path: impl Into<String>, make: F) -> Self
    where
        F: Fn() -> anyhow::Result<C> + Send + Sync + 'static,
        C: Command + 'static,
    {
        self.command_factory(path, factory(make))
    }

    /// Registers a prebuilt factory. A later registration of the same path
    /// replaces an earlier one.
    pub fn command_factory(mut self, path: impl Into<String>, factory: CommandFactory) -> Self {
        self.commands.push((path.into(), factory));
        self
    }

    /// Registers several factories at once.
    pub fn commands<I, K>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = (K, CommandFactory)>,
        K: Into<String>,
    {
        self.commands
            .extend(commands.into_iter().map(|(path, factory)| (path.into(), factory)));
        self
    }

    /// Keeps a command out of help listings. It still runs when invoked.
    pub fn hidden(mut self, path: impl Into<String>) -> Self {
        self.hidden.push(path.into());
        self
    }

    /// Replaces the function generating root help and unknown-command
    /// listings.
    pub fn help_func(mut self, help_func: HelpFunc) -> Self {
        self.help_func = Some(help_func);
        self
    }

    /// Where help goes. Defaults to the error sink if only that is set,
    /// else stderr.
    pub fn help_sink(mut self, sink: OutputSink) -> Self {
        self.help_sink = Some(sink);
        self
    }

    /// Where diagnostics go. Defaults to the help sink.
    pub fn error_sink(mut self, sink: OutputSink) -> Self {
        self.error_sink = Some(sink);
        self
    }

    /// Template engine used for command help, e.g. with extra filters.
    pub fn template_engine(mut self, engine: TemplateEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn build(self) -> Cli {
        let help_func = self.help_func.unwrap_or_else(|| {
            let name = if self.name.is_empty() {
                DEFAULT_APP_NAME
            } else {
                self.name.as_str()
            };
            basic_help_func(name)
        });
        // A single configured sink receives both help and errors.
        let (help_sink, error_sink) = match (self.help_sink, self.error_sink) {
            (Some(help), Some(errors)) => (help, errors),
            (Some(help), None) => (help.clone(), help),
            (None, Some(errors)) => (errors.clone(), errors),
            (None, None) => {
                let sink = OutputSink::stderr();
                (sink.clone(), sink)
            }
        };
        let renderer = match self.engine {
            Some(engine) => HelpRenderer::with_engine(engine),
            None => HelpRenderer::new(),
        };

        Cli::from_parts(
            self.name,
            self.version,
            self.args,
            self.commands,
            self.hidden,
            help_func,
            help_sink,
            error_sink,
            renderer,
        )
    }
}
