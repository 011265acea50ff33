//! `srdemo`: a small nested CLI built on subroute.
//!
//! ```text
//! srdemo
//! srdemo greet [--shout] [NAME]
//! srdemo remote add <NAME> <URL>
//! srdemo remote list
//! ```
//!
//! `srdemo remote` is never registered; subroute fills it in and its help
//! lists `add` and `list`. Set `RUST_LOG=debug` to watch dispatch.

mod commands;

use std::process;
use std::sync::Arc;

use subroute::{BasicUi, Cli, ColoredUi, Ui, UiColor};

use commands::{
    DebugCommand, GreetCommand, RemoteAddCommand, RemoteListCommand, Remotes, StatusCommand,
};

fn main() {
    env_logger::init();

    let ui: Arc<dyn Ui> = Arc::new(
        ColoredUi::new(BasicUi::new())
            .info_color(UiColor::GREEN)
            .error_color(UiColor::RED.bold())
            .warn_color(UiColor::YELLOW),
    );
    let remotes = Remotes::seeded();

    let cli = {
        let (greet_ui, add_ui) = (ui.clone(), ui.clone());
        let (list_ui, debug_ui) = (ui.clone(), ui.clone());
        let (add_remotes, list_remotes) = (remotes.clone(), remotes.clone());
        let (status_ui, status_remotes) = (ui.clone(), remotes.clone());

        Cli::builder()
            .name("srdemo")
            .version(concat!("srdemo ", env!("CARGO_PKG_VERSION")))
            .args(std::env::args().skip(1))
            .command("", move || {
                Ok(StatusCommand::new(status_ui.clone(), status_remotes.clone()))
            })
            .command("greet", move || Ok(GreetCommand::new(greet_ui.clone())))
            .command("remote add", move || {
                Ok(RemoteAddCommand::new(add_ui.clone(), add_remotes.clone()))
            })
            .command("remote list", move || {
                Ok(RemoteListCommand::new(list_ui.clone(), list_remotes.clone()))
            })
            .command("debug", move || Ok(DebugCommand::new(debug_ui.clone())))
            .hidden("debug")
            .build()
    };

    match cli.run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            log::error!("{}", err);
            ui.error(&err.to_string());
            process::exit(err.exit_code());
        }
    }
}
