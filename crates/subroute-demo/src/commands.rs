use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use clap::Parser;
use subroute::{Command, Ui, RUN_RESULT_HELP};

/// Parses a leaf command's arguments, reporting failures through `ui`.
fn parse<P: Parser>(ui: &dyn Ui, args: &[String]) -> Option<P> {
    match P::try_parse_from(args) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            ui.error(err.to_string().trim_end());
            None
        }
    }
}

fn clap_help<P: Parser>() -> String {
    P::command().render_help().to_string().trim_end().to_string()
}

/// In-memory remote table shared by the remote commands.
#[derive(Debug, Clone, Default)]
pub struct Remotes(Arc<Mutex<BTreeMap<String, String>>>);

impl Remotes {
    pub fn seeded() -> Self {
        let remotes = Self::default();
        remotes.lock().insert(
            "origin".to_string(),
            "https://example.com/srdemo.git".to_string(),
        );
        remotes
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        match self.0.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

// =========================================================================
// greet
// =========================================================================

#[derive(Debug, Parser)]
#[command(
    name = "srdemo greet",
    about = "Greets someone. Asks for a name when none is given.",
    no_binary_name = true,
    disable_help_flag = true
)]
struct GreetArgs {
    /// Greet loudly
    #[arg(long)]
    shout: bool,
    /// Who to greet
    name: Option<String>,
}

pub struct GreetCommand {
    ui: Arc<dyn Ui>,
}

impl GreetCommand {
    pub fn new(ui: Arc<dyn Ui>) -> Self {
        Self { ui }
    }
}

impl Command for GreetCommand {
    fn help(&self) -> String {
        clap_help::<GreetArgs>()
    }

    fn synopsis(&self) -> String {
        "Greet someone".to_string()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        let Some(parsed) = parse::<GreetArgs>(self.ui.as_ref(), args) else {
            return RUN_RESULT_HELP;
        };

        let name = match parsed.name {
            Some(name) => name,
            None => match self.ui.ask("Who should I greet?") {
                Ok(name) if !name.trim().is_empty() => name.trim().to_string(),
                Ok(_) => {
                    self.ui.warn("No name given.");
                    return 1;
                }
                Err(err) => {
                    self.ui.error(&err.to_string());
                    return 1;
                }
            },
        };

        let greeting = format!("Hello, {}!", name);
        if parsed.shout {
            self.ui.info(&greeting.to_uppercase());
        } else {
            self.ui.info(&greeting);
        }
        0
    }
}

// =========================================================================
// remote add / remote list
// =========================================================================

#[derive(Debug, Parser)]
#[command(
    name = "srdemo remote add",
    about = "Adds a named remote.",
    no_binary_name = true,
    disable_help_flag = true
)]
struct RemoteAddArgs {
    /// Remote name
    name: String,
    /// Remote URL
    url: String,
}

pub struct RemoteAddCommand {
    ui: Arc<dyn Ui>,
    remotes: Remotes,
}

impl RemoteAddCommand {
    pub fn new(ui: Arc<dyn Ui>, remotes: Remotes) -> Self {
        Self { ui, remotes }
    }
}

impl Command for RemoteAddCommand {
    fn help(&self) -> String {
        clap_help::<RemoteAddArgs>()
    }

    fn synopsis(&self) -> String {
        "Add a remote".to_string()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        let Some(parsed) = parse::<RemoteAddArgs>(self.ui.as_ref(), args) else {
            return RUN_RESULT_HELP;
        };

        let mut remotes = self.remotes.lock();
        if remotes.contains_key(&parsed.name) {
            self.ui
                .warn(&format!("Remote {} already exists.", parsed.name));
            return 1;
        }
        self.ui
            .info(&format!("Added {} -> {}", parsed.name, parsed.url));
        remotes.insert(parsed.name, parsed.url);
        0
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "srdemo remote list",
    about = "Lists remotes.",
    no_binary_name = true,
    disable_help_flag = true
)]
struct RemoteListArgs {
    /// Show URLs
    #[arg(short = 'V', long)]
    verbose: bool,
}

pub struct RemoteListCommand {
    ui: Arc<dyn Ui>,
    remotes: Remotes,
}

impl RemoteListCommand {
    pub fn new(ui: Arc<dyn Ui>, remotes: Remotes) -> Self {
        Self { ui, remotes }
    }
}

impl Command for RemoteListCommand {
    fn help(&self) -> String {
        clap_help::<RemoteListArgs>()
    }

    fn synopsis(&self) -> String {
        "List remotes".to_string()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        let Some(parsed) = parse::<RemoteListArgs>(self.ui.as_ref(), args) else {
            return RUN_RESULT_HELP;
        };

        for (name, url) in self.remotes.lock().iter() {
            if parsed.verbose {
                self.ui.output(&format!("{}\t{}", name, url));
            } else {
                self.ui.output(name);
            }
        }
        0
    }
}

// =========================================================================
// default
// =========================================================================

/// Runs when no command is given.
pub struct StatusCommand {
    ui: Arc<dyn Ui>,
    remotes: Remotes,
}

impl StatusCommand {
    pub fn new(ui: Arc<dyn Ui>, remotes: Remotes) -> Self {
        Self { ui, remotes }
    }
}

impl Command for StatusCommand {
    fn help(&self) -> String {
        "Shows a short status line.".to_string()
    }

    fn synopsis(&self) -> String {
        String::new()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        if !args.is_empty() {
            self.ui.warn(&format!("Ignoring arguments: {}", args.join(" ")));
        }
        let count = self.remotes.lock().len();
        self.ui.info(&format!(
            "{} remote(s) configured. Run `srdemo --help` for commands.",
            count
        ));
        0
    }
}

// =========================================================================
// debug (hidden)
// =========================================================================

/// Echoes its arguments, one per line, quoted.
pub struct DebugCommand {
    ui: Arc<dyn Ui>,
}

impl DebugCommand {
    pub fn new(ui: Arc<dyn Ui>) -> Self {
        Self { ui }
    }
}

impl Command for DebugCommand {
    fn help(&self) -> String {
        "Prints the arguments it receives.".to_string()
    }

    fn synopsis(&self) -> String {
        "Print arguments".to_string()
    }

    fn run(&mut self, args: &[String]) -> i32 {
        for arg in args {
            self.ui.output(&format!("{:?}", arg));
        }
        0
    }
}
