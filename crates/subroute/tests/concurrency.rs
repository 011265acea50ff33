use std::sync::Arc;
use std::thread;

use subroute::{Cli, DispatchState};
use subroute_test::{MockCommand, SharedBuffer};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_cli_is_send_and_sync() {
    assert_send_sync::<Cli>();
}

#[test]
fn test_concurrent_first_use_shares_one_classification() {
    let command = MockCommand::new();
    let cli = Arc::new(
        Cli::builder()
            .args(["remote", "add", "origin", "-f"])
            .command_factory("remote add", command.factory())
            .help_sink(SharedBuffer::new().sink())
            .build(),
    );

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cli = Arc::clone(&cli);
            thread::spawn(move || cli.dispatch_state() as *const DispatchState as usize)
        })
        .collect();

    let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let local = cli.dispatch_state() as *const DispatchState as usize;
    assert!(addresses.iter().all(|a| *a == local));

    assert_eq!(cli.subcommand(), "remote add");
    assert_eq!(cli.subcommand_args(), ["origin", "-f"]);
    assert_eq!(cli.run().unwrap(), 0);
    assert_eq!(command.run_args(), ["origin", "-f"]);
}
