//! The [`Cli`] type: classification, resolution and help dispatch.

use once_cell::sync::OnceCell;

use subroute_dispatch::{classify, CommandFactory, CommandRegistry, DispatchState, ResolveError, RUN_RESULT_HELP};
use subroute_render::{HelpRenderer, OutputSink};

use super::error::CliError;
use super::help::HelpFunc;

/// Printed before command help when flags precede the command path.
pub(crate) const INVALID_FLAGS_MESSAGE: &str = "Invalid flags before the subcommand. If these flags are for\n\
     the subcommand, please put them after the subcommand.\n\n";

/// Exit code for an unknown command path.
pub const EXIT_UNKNOWN_COMMAND: i32 = 127;

/// Registry and classification, computed on first use.
struct Prepared {
    registry: CommandRegistry,
    state: DispatchState,
}

/// A command-line interface routing arguments to registered commands.
///
/// Built with [`CliBuilder`](super::CliBuilder). The registry is built and
/// the arguments classified once, on the first call to [`run`](Self::run)
/// or any accessor. Concurrent first callers block until that work is done
/// and then observe the same result.
///
/// ```rust
/// use subroute::{Cli, Command, OutputSink};
/// # use std::io;
///
/// struct Hello;
///
/// impl Command for Hello {
///     fn help(&self) -> String { "Says hello.".into() }
///     fn synopsis(&self) -> String { "Say hello".into() }
///     fn run(&mut self, args: &[String]) -> i32 { args.len() as i32 }
/// }
///
/// let cli = Cli::builder()
///     .name("app")
///     .args(["hello", "a", "b"])
///     .command("hello", || Ok(Hello))
///     .help_sink(OutputSink::new(io::sink()))
///     .build();
///
/// assert_eq!(cli.subcommand(), "hello");
/// assert_eq!(cli.run().unwrap(), 2);
/// ```
pub struct Cli {
    pub(crate) name: String,
    pub(crate) version: String,
    pub(crate) args: Vec<String>,
    pub(crate) commands: Vec<(String, CommandFactory)>,
    pub(crate) hidden: Vec<String>,
    pub(crate) help_func: HelpFunc,
    pub(crate) help_sink: OutputSink,
    pub(crate) error_sink: OutputSink,
    pub(crate) renderer: HelpRenderer,
    prepared: OnceCell<Prepared>,
}

impl Cli {
    /// Creates a new builder.
    pub fn builder() -> super::CliBuilder {
        super::CliBuilder::new()
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        name: String,
        version: String,
        args: Vec<String>,
        commands: Vec<(String, CommandFactory)>,
        hidden: Vec<String>,
        help_func: HelpFunc,
        help_sink: OutputSink,
        error_sink: OutputSink,
        renderer: HelpRenderer,
    ) -> Self {
        Self {
            name,
            version,
            args,
            commands,
            hidden,
            help_func,
            help_sink,
            error_sink,
            renderer,
            prepared: OnceCell::new(),
        }
    }

    fn prepared(&self) -> &Prepared {
        self.prepared.get_or_init(|| {
            let registry = CommandRegistry::build(
                self.commands.iter().map(|(key, factory)| (key.as_str(), factory.clone())),
                &self.hidden,
            );
            let state = classify(&self.args, &registry);
            Prepared { registry, state }
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The application name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version string; empty when version output is disabled.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The arguments being dispatched, program name excluded.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The command registry, with placeholder parents filled in.
    pub fn registry(&self) -> &CommandRegistry {
        &self.prepared().registry
    }

    /// The full classification result.
    pub fn dispatch_state(&self) -> &DispatchState {
        &self.prepared().state
    }

    /// Returns true if a help flag was given before `--`.
    pub fn is_help(&self) -> bool {
        self.dispatch_state().is_help
    }

    /// Returns true if a version flag was given before the command path.
    pub fn is_version(&self) -> bool {
        self.dispatch_state().is_version
    }

    /// The resolved command path, `""` when none was found.
    pub fn subcommand(&self) -> &str {
        &self.dispatch_state().subcommand
    }

    /// Arguments that will be passed to the command.
    pub fn subcommand_args(&self) -> &[String] {
        &self.dispatch_state().subcommand_args
    }

    /// Flags given before the command path.
    pub fn leading_flags(&self) -> &[String] {
        &self.dispatch_state().leading_flags
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Runs the CLI and returns the process exit code.
    ///
    /// - version requested (and a version configured): prints it, `0`
    /// - help requested without a command: root listing, `0`
    /// - unknown command path: listing of its parent on the error sink, `127`
    /// - help requested for a command: its help, `0`
    /// - flags before the command path: diagnostic and help on the error
    ///   sink, `1`
    /// - otherwise the command's own exit code, except that
    ///   [`RUN_RESULT_HELP`] prints its help on the error sink and gives `1`
    ///
    /// A factory that fails to build the command is the only error.
    pub fn run(&self) -> Result<i32, CliError> {
        let Prepared { registry, state } = self.prepared();

        if state.is_version && !self.version.is_empty() {
            log::debug!("dispatch: version");
            self.help_sink.write_str(&format!("{}\n", self.version));
            return Ok(0);
        }

        if state.is_help && !state.has_subcommand() {
            log::debug!("dispatch: root help");
            self.help_sink.write_str(&format!("{}\n", self.listing_help("")));
            return Ok(0);
        }

        let mut command = match registry.resolve(&state.subcommand) {
            Ok(command) => command,
            Err(ResolveError::Unknown(path)) => {
                log::debug!("dispatch: unknown command {:?}", path);
                let listing = self.listing_help(state.subcommand_parent());
                self.error_sink.write_str(&format!("{}\n", listing));
                return Ok(EXIT_UNKNOWN_COMMAND);
            }
            Err(ResolveError::Construction { path, source }) => {
                return Err(CliError::Construction { path, source });
            }
        };

        if state.is_help {
            log::debug!("dispatch: help for {:?}", state.subcommand);
            self.command_help(&self.help_sink, command.as_ref());
            return Ok(0);
        }

        if !state.leading_flags.is_empty() {
            log::debug!("dispatch: leading flags {:?}", state.leading_flags);
            self.error_sink.write_diagnostic(INVALID_FLAGS_MESSAGE);
            self.command_help(&self.error_sink, command.as_ref());
            return Ok(1);
        }

        log::debug!(
            "dispatch: running {:?} with {:?}",
            state.subcommand,
            state.subcommand_args
        );
        let code = command.run(&state.subcommand_args);
        if code == RUN_RESULT_HELP {
            self.command_help(&self.error_sink, command.as_ref());
            return Ok(1);
        }
        Ok(code)
    }
}
