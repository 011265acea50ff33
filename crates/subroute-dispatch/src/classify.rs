//! Argument classification.
//!
//! [`classify`] scans the raw argument vector once, left to right, and
//! splits it into the global flags, the command path and the arguments that
//! belong to the command. Rules, in order, for each token:
//!
//! 1. `--` stops scanning. Later tokens are never inspected.
//! 2. `-h`, `-help`, `--help` request help at any position.
//! 3. Before a command path is found: `-v`, `-version`, `--version`
//!    request the version, other `-`-prefixed tokens are recorded as
//!    leading flags, and the first non-empty, non-flag token starts the
//!    command path.
//!
//! In a nested registry the path is extended greedily with the tokens that
//! follow, and the longest registered path that covers whole segments wins.
//! If no command path is found and a default command (`""`) exists, the
//! leading flags become its arguments.

use crate::commands::CommandRegistry;
use crate::path;

const HELP_FLAGS: [&str; 3] = ["-h", "-help", "--help"];
const VERSION_FLAGS: [&str; 3] = ["-v", "-version", "--version"];
const END_OF_FLAGS: &str = "--";

/// Everything dispatch needs to know about one argument vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchState {
    /// A help flag was seen before `--`.
    pub is_help: bool,
    /// A version flag was seen before the command path and `--`.
    pub is_version: bool,
    /// The command path to run; `""` when none was identified.
    pub subcommand: String,
    /// Arguments handed to the command.
    pub subcommand_args: Vec<String>,
    /// Flags seen before the command path.
    pub leading_flags: Vec<String>,
}

impl DispatchState {
    /// Returns true if a command path was identified.
    pub fn has_subcommand(&self) -> bool {
        !self.subcommand.is_empty()
    }

    /// The parent of the attempted command path, `""` for top-level paths.
    pub fn subcommand_parent(&self) -> &str {
        path::parent(&self.subcommand)
    }
}

/// Returns true for `-h`, `-help` and `--help`.
pub fn is_help_flag(arg: &str) -> bool {
    HELP_FLAGS.contains(&arg)
}

/// Returns true for `-v`, `-version` and `--version`.
pub fn is_version_flag(arg: &str) -> bool {
    VERSION_FLAGS.contains(&arg)
}

/// Classifies `args` (program name excluded) against `registry`.
pub fn classify(args: &[String], registry: &CommandRegistry) -> DispatchState {
    let mut state = DispatchState::default();

    for (i, arg) in args.iter().enumerate() {
        if arg == END_OF_FLAGS {
            break;
        }

        if is_help_flag(arg) {
            state.is_help = true;
            continue;
        }

        if state.has_subcommand() {
            continue;
        }

        if is_version_flag(arg) {
            state.is_version = true;
            continue;
        }

        if arg.is_empty() {
            continue;
        }

        if arg.starts_with('-') {
            state.leading_flags.push(arg.clone());
            continue;
        }

        let mut consumed = 1;
        state.subcommand = arg.clone();

        if registry.is_nested() {
            if arg.contains(path::SEGMENT_SEPARATOR) {
                // A quoted "foo bar" is an argument, never a path.
                state.subcommand.clear();
                log::debug!("rejected command token with embedded space: {:?}", arg);
                return state;
            }

            let end = args[i..]
                .iter()
                .position(|a| !path::is_segment(a))
                .map_or(args.len(), |offset| i + offset);
            let candidate = args[i..end].join(" ");

            if let Some(found) = registry.longest_command_prefix(&candidate) {
                consumed = path::depth(found);
                state.subcommand = found.to_string();
            }
        }

        state.subcommand_args = args[i + consumed..].to_vec();
    }

    if !state.has_subcommand() && registry.has_default() {
        let mut args = std::mem::take(&mut state.leading_flags);
        args.append(&mut state.subcommand_args);
        state.subcommand_args = args;
    }

    log::debug!(
        "classified arguments: subcommand={:?} help={} version={} args={:?}",
        state.subcommand,
        state.is_help,
        state.is_version,
        state.subcommand_args
    );

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{factory, Command, CommandFactory};

    struct Noop;

    impl Command for Noop {
        fn help(&self) -> String {
            String::new()
        }

        fn synopsis(&self) -> String {
            String::new()
        }

        fn run(&mut self, _args: &[String]) -> i32 {
            0
        }
    }

    fn registry(paths: &[&str]) -> CommandRegistry {
        let entries: Vec<(String, CommandFactory)> = paths
            .iter()
            .map(|p| (p.to_string(), factory(|| Ok(Noop))))
            .collect();
        CommandRegistry::build(entries, Vec::<String>::new())
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn run(paths: &[&str], values: &[&str]) -> DispatchState {
        classify(&args(values), &registry(paths))
    }

    #[test]
    fn test_help_flags() {
        let cases: &[(&[&str], bool)] = &[
            (&["-h"], true),
            (&["-help"], true),
            (&["--help"], true),
            (&["-h", "foo"], true),
            (&["foo", "bar"], false),
            (&["-v", "bar"], false),
            (&["foo", "-h"], true),
            (&["foo", "-help"], true),
            (&["foo", "--help"], true),
            (&["foo", "bar", "-h"], true),
            (&["foo", "bar", "--", "zip", "-h"], false),
            (&["foo", "bar", "--", "zip", "--help"], false),
        ];
        for (values, expected) in cases {
            assert_eq!(run(&[], values).is_help, *expected, "args: {:?}", values);
        }
    }

    #[test]
    fn test_version_flags() {
        let cases: &[(&[&str], bool)] = &[
            (&["--", "-v"], false),
            (&["--", "--version"], false),
            (&["-v"], true),
            (&["-version"], true),
            (&["--version"], true),
            (&["-v", "foo"], true),
            (&["foo", "bar"], false),
            (&["-h", "bar"], false),
            (&["foo", "-v"], false),
            (&["foo", "--version"], false),
            (&["foo", "--", "zip", "-v"], false),
        ];
        for (values, expected) in cases {
            assert_eq!(run(&[], values).is_version, *expected, "args: {:?}", values);
        }
    }

    #[test]
    fn test_flat_subcommand() {
        let cases: &[(&[&str], &str)] = &[
            (&["bar"], "bar"),
            (&["foo", "-h"], "foo"),
            (&["-h", "bar"], "bar"),
            (&["foo", "bar", "-h"], "foo"),
        ];
        for (values, expected) in cases {
            assert_eq!(run(&[], values).subcommand, *expected, "args: {:?}", values);
        }
    }

    #[test]
    fn test_nested_subcommand() {
        let cases: &[(&[&str], &str)] = &[
            (&["bar"], "bar"),
            (&["foo", "-h"], "foo"),
            (&["-h", "bar"], "bar"),
            (&["foo", "bar", "-h"], "foo bar"),
            (&["foo", "bar", "baz", "-h"], "foo bar"),
            (&["foo", "bar", "-h", "baz"], "foo bar"),
            (&["-h", "foo", "bar"], "foo bar"),
        ];
        for (values, expected) in cases {
            let state = run(&["foo bar"], values);
            assert_eq!(state.subcommand, *expected, "args: {:?}", values);
        }
    }

    #[test]
    fn test_flat_args_after_subcommand() {
        let state = run(&["foo"], &["foo", "-bar", "-baz"]);
        assert_eq!(state.subcommand, "foo");
        assert_eq!(state.subcommand_args, args(&["-bar", "-baz"]));
        assert!(state.leading_flags.is_empty());
    }

    #[test]
    fn test_leading_blank_is_skipped() {
        let state = run(&["foo"], &["", "foo", "-bar"]);
        assert_eq!(state.subcommand, "foo");
        assert_eq!(state.subcommand_args, args(&["-bar"]));
    }

    #[test]
    fn test_leading_flags_recorded() {
        let state = run(&["foo"], &["-bad-flag", "foo", "x"]);
        assert_eq!(state.subcommand, "foo");
        assert_eq!(state.leading_flags, args(&["-bad-flag"]));
        assert_eq!(state.subcommand_args, args(&["x"]));
    }

    #[test]
    fn test_nested_consumes_matched_segments() {
        let state = run(&["foo", "foo bar"], &["foo", "bar", "-bar", "-baz"]);
        assert_eq!(state.subcommand, "foo bar");
        assert_eq!(state.subcommand_args, args(&["-bar", "-baz"]));
    }

    #[test]
    fn test_nested_unregistered_tail_is_argument() {
        let state = run(&["foo", "foo bar"], &["foo", "qux", "zip"]);
        assert_eq!(state.subcommand, "foo");
        assert_eq!(state.subcommand_args, args(&["qux", "zip"]));
    }

    #[test]
    fn test_nested_blank_stops_extension() {
        let state = run(&["foo", "foo bar"], &["foo", "", "bar", "-baz"]);
        assert_eq!(state.subcommand, "foo");
        assert_eq!(state.subcommand_args, args(&["", "bar", "-baz"]));
    }

    #[test]
    fn test_nested_quoted_argument() {
        let state = run(&["foo", "foo bar"], &["foo", "bar baz"]);
        assert_eq!(state.subcommand, "foo");
        assert_eq!(state.subcommand_args, args(&["bar baz"]));
    }

    #[test]
    fn test_nested_quoted_command_aborts() {
        let state = run(&["foo", "foo bar"], &["foo bar", "-x"]);
        assert_eq!(state.subcommand, "");
        assert!(state.subcommand_args.is_empty());
    }

    #[test]
    fn test_nested_partial_segment_rejected() {
        let state = run(&["foo", "foo bar"], &["foobar"]);
        assert_eq!(state.subcommand, "foobar");
        assert!(state.subcommand_args.is_empty());
    }

    #[test]
    fn test_nested_partial_segment_keeps_first_token() {
        let state = run(&["foo", "foo bar"], &["fooasdf", "more", "-o=foo"]);
        assert_eq!(state.subcommand, "fooasdf");
        assert_eq!(state.subcommand_args, args(&["more", "-o=foo"]));
    }

    #[test]
    fn test_args_after_end_of_flags_are_kept() {
        let state = run(&["foo"], &["foo", "--", "-h", "x"]);
        assert!(!state.is_help);
        assert_eq!(state.subcommand_args, args(&["--", "-h", "x"]));
    }

    #[test]
    fn test_default_command_takes_leading_flags() {
        let state = run(&["", "foo"], &["-bar", "-baz"]);
        assert_eq!(state.subcommand, "");
        assert_eq!(state.subcommand_args, args(&["-bar", "-baz"]));
        assert!(state.leading_flags.is_empty());
    }

    #[test]
    fn test_no_default_keeps_leading_flags() {
        let state = run(&["foo"], &["-bar"]);
        assert_eq!(state.subcommand, "");
        assert_eq!(state.leading_flags, args(&["-bar"]));
        assert!(state.subcommand_args.is_empty());
    }

    #[test]
    fn test_metacharacters_in_paths() {
        let state = run(&["a.b", "a.b c+"], &["a.b", "c+", "x"]);
        assert_eq!(state.subcommand, "a.b c+");
        assert_eq!(state.subcommand_args, args(&["x"]));

        let state = run(&["a.b", "a.b c"], &["axb", "c"]);
        assert_eq!(state.subcommand, "axb");
    }

    #[test]
    fn test_subcommand_parent() {
        let state = run(&["foo bar baz"], &["foo", "bar", "nope"]);
        assert_eq!(state.subcommand, "foo bar");
        assert_eq!(state.subcommand_parent(), "foo");
    }
}
