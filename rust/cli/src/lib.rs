//! # fivedraw CLI Library
//!
//! Command-line front end for the five-card draw engine.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the matching subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let args = vec!["fivedraw", "eval", "Ah", "Kh", "Qh", "Jh", "10h"];
//! let code = fivedraw_cli::run(args, &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Str. Flush"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds against CPU opponents from the terminal
//! - `sim`: Run an all-CPU table and optionally record every round as JSONL
//! - `eval`: Evaluate a five-card hand
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod session;
pub mod ui;
pub mod validation;

use cli::{Commands, FivedrawCli};
use commands::{
    PlayOptions, SimOptions, handle_cfg_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// `play` reads its input from the process stdin.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// Same as [`run`] with an explicit input stream for `play`.
///
/// ```
/// use std::io::Cursor;
///
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = Cursor::new(b"q\n".to_vec());
/// let args = ["fivedraw", "play", "--opponents", "1", "--seed", "3"];
/// let code = fivedraw_cli::run_with_input(args, &mut out, &mut err, &mut input);
/// assert_eq!(code, 0);
/// ```
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn std::io::BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "eval", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = FivedrawCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: fivedraw <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => {
            let result = match cli.cmd {
                Commands::Cfg => handle_cfg_command(out, err),
                Commands::Eval { cards } => handle_eval_command(&cards, out, err),
                Commands::Play {
                    opponents,
                    rounds,
                    seed,
                    name,
                } => {
                    let opts = PlayOptions {
                        opponents: opponents.map(usize::from),
                        rounds,
                        seed,
                        name,
                    };
                    handle_play_command(opts, out, err, stdin)
                }
                Commands::Sim {
                    rounds,
                    players,
                    seed,
                    output,
                    ai,
                } => {
                    let opts = SimOptions {
                        rounds,
                        players: usize::from(players),
                        seed,
                        output,
                        ai,
                    };
                    handle_sim_command(opts, out, err)
                }
            };
            exit_for(result, err)
        }
    }
}

fn exit_for(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e @ CliError::Interrupted(_)) => {
            let _ = writeln!(err, "{}", e);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            if writeln!(err, "Error: {}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::ERROR
        }
    }
}
