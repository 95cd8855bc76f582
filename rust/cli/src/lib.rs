//! # headsup CLI Library
//!
//! Terminal front end for the heads-up Hold'em engine: play against a
//! scripted opponent, evaluate hands, and inspect the configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the command line, dispatches to a subcommand handler, and
//! returns the process exit code.
//!
//! ```
//! use std::io;
//! let args = vec!["headsup", "eval", "As", "Ks", "Qs", "Js", "Ts"];
//! let code = headsup_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against the opponent policy
//! - `eval`: Print the best five-card hand among the given cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

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

use cli::{Commands, HeadsupCli};
use commands::{PlayOptions, handle_cfg_command, handle_eval_command, handle_play_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "eval", "cfg"];

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Command-line arguments including the program name
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when input ends mid-hand.
/// `play` reads the player's actions from the process stdin.
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
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let mut input = Cursor::new("fold\nn\n");
/// let args = ["headsup", "play", "--seed", "1", "--delay-ms", "0"];
/// let code = headsup_cli::run_with_input(args, &mut out, &mut err, &mut input);
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
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HeadsupCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };
    logging::init_logging();

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Play {
            hands,
            seed,
            opponent,
            delay_ms,
            stack,
        } => match config::load() {
            Ok(cfg) => {
                let options = PlayOptions {
                    hands,
                    seed: seed.or(cfg.seed),
                    opponent: opponent.unwrap_or(cfg.opponent),
                    opponent_delay_ms: delay_ms.unwrap_or(cfg.opponent_delay_ms),
                    starting_stack: stack.unwrap_or(cfg.starting_stack),
                };
                handle_play_command(options, out, err, stdin)
            }
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = writeln!(err, "\nInterrupted: {}", msg);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version go to stdout and succeed
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        return match write!(out, "{}", e) {
            Ok(()) => exit_code::SUCCESS,
            Err(_) => exit_code::ERROR,
        };
    }

    let _ = writeln!(err, "{}", e);
    let _ = writeln!(err, "headsup - heads-up Hold'em");
    let _ = writeln!(err, "Usage: headsup <command> [options]\n");
    let _ = writeln!(err, "Commands:");
    for c in COMMANDS {
        let _ = writeln!(err, "  {}", c);
    }
    let _ = writeln!(err, "\nFor full help, run: headsup --help");
    exit_code::ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_command_parses() {
        let commands = [
            vec!["headsup", "cfg"],
            vec!["headsup", "play"],
            vec!["headsup", "eval", "As", "Kd", "Qc", "Jh", "9s"],
        ];
        for args in &commands {
            assert!(HeadsupCli::try_parse_from(args).is_ok(), "{:?}", args);
        }
        assert_eq!(COMMANDS.len(), commands.len());
    }

    #[test]
    fn play_flags_are_parsed() {
        let cli = HeadsupCli::try_parse_from([
            "headsup",
            "play",
            "--hands",
            "3",
            "--seed",
            "9",
            "--opponent",
            "passive",
            "--delay-ms",
            "0",
            "--stack",
            "200",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Play {
                hands,
                seed,
                opponent,
                delay_ms,
                stack,
            } => {
                assert_eq!(hands, Some(3));
                assert_eq!(seed, Some(9));
                assert_eq!(opponent.as_deref(), Some("passive"));
                assert_eq!(delay_ms, Some(0));
                assert_eq!(stack, Some(200));
            }
            other => panic!("expected play, got {:?}", other),
        }
    }

    #[test]
    fn zero_hands_and_zero_stack_are_rejected_by_clap() {
        assert!(HeadsupCli::try_parse_from(["headsup", "play", "--hands", "0"]).is_err());
        assert!(HeadsupCli::try_parse_from(["headsup", "play", "--stack", "0"]).is_err());
    }

    #[test]
    fn unknown_command_prints_usage() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["headsup", "deal"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Usage: headsup <command>"));
        assert!(errors.contains("  eval"));
    }

    #[test]
    fn help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["headsup", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("play"));
        assert!(err.is_empty());
    }
}
