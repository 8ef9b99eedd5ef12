//! # Pig CLI Library
//!
//! Command-line front end for the [`pig_engine`] rules core. It owns every
//! piece of I/O the engine leaves out: argument parsing, configuration,
//! setup prompts, reading hold/roll answers, and rendering game events.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments, reads stdin and writes to the given streams.
//! [`run_with_input`] takes the input stream explicitly, which is how the
//! tests drive whole sessions.
//!
//! ```no_run
//! use std::io;
//! let code = pig_cli::run(["pig", "play", "--players", "2"], &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play interactive games until nobody wants another
//! - `rolls`: Sample the seeded die and print a histogram
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, PigCli};
use commands::{PlayOptions, handle_cfg_command, handle_play_command, handle_rolls_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "rolls", "cfg"];

/// Main entry point for the CLI application, reading answers from stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with an explicit input stream.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// let mut input = Cursor::new("Alice\nBob\nn\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = pig_cli::run_with_input(
///     ["pig", "play", "--players", "2", "--target", "1", "--seed", "3"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Winner!"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PigCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Pig CLI\nUsage: pig <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: pig --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            players,
            target,
            seed,
            format,
        } => {
            let opts = PlayOptions {
                players,
                target,
                seed,
                format,
            };
            handle_play_command(opts, stdin, out, err)
        }
        Commands::Rolls { seed, count } => handle_rolls_command(seed, count, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::error!("command failed: {}", e);
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_cli_parses_all_subcommands() {
        let commands = vec![
            vec!["pig", "cfg"],
            vec!["pig", "play"],
            vec!["pig", "play", "--players", "3", "--target", "50", "--seed", "1"],
            vec!["pig", "play", "--format", "json"],
            vec!["pig", "rolls"],
            vec!["pig", "rolls", "--seed", "9", "--count", "10"],
        ];
        for cmd_args in commands {
            let result = PigCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn test_play_rejects_lonely_tables_and_zero_target() {
        assert!(PigCli::try_parse_from(["pig", "play", "--players", "1"]).is_err());
        assert!(PigCli::try_parse_from(["pig", "play", "--target", "0"]).is_err());
        assert!(PigCli::try_parse_from(["pig", "play", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_unknown_command_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");
        let code = run_with_input(["pig", "deal"], &mut input, &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let stderr = String::from_utf8(err).unwrap();
        assert!(stderr.contains("Commands:"));
        assert!(stderr.contains("  rolls"));
        assert!(out.is_empty());
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");
        let code = run_with_input(["pig", "--help"], &mut input, &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("play"));
    }

    #[test]
    fn test_rolls_dispatch() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");
        let code = run_with_input(
            ["pig", "rolls", "--seed", "5", "--count", "12"],
            &mut input,
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().starts_with("seed: 5"));
    }
}
