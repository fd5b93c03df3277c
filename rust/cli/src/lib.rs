//! # Pokerhand CLI Library
//!
//! Command-line front end for the pokerhand engine: classify hands typed on
//! the command line, deal random hands, run category simulations, and enter
//! hands interactively.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = pokerhand_cli::run(["pokerhand", "eval", "AS", "KS", "QS", "JS", "10S"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert_eq!(String::from_utf8(out).unwrap(), "royal_flush\n");
//! ```
//!
//! ## Available Subcommands
//!
//! - `eval`: Classify 5 (draw) or 7 (Hold'em) cards given as arguments
//! - `deal`: Deal a single hand for inspection
//! - `sim`: Deal many hands and tally the categories
//! - `play`: Enter hands interactively
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

use cli::{Commands, PokerhandCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
    handle_sim_command,
};
use pokerhand_engine::game::Variant;

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// Command-line flags take precedence over the resolved configuration.
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
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = pokerhand_cli::run(["pokerhand", "deal", "--seed", "42"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["eval", "deal", "sim", "play", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokerhandCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with a zero exit
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err, "Usage: pokerhand <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    let _ = writeln!(err, "\nFor full help, run: pokerhand --help");
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging();

    if let Commands::Cfg = cli.cmd {
        return finish(handle_cfg_command(out, err), err);
    }

    let cfg = match config::load_with_sources() {
        Ok(resolved) => resolved.config,
        Err(e) => return finish(Err(e.into()), err),
    };
    tracing::debug!(?cfg, "configuration resolved");

    let variant_or = |arg: Option<cli::VariantArg>| arg.map(Variant::from).unwrap_or(cfg.variant);

    let result = match cli.cmd {
        Commands::Eval { cards, verbose } => {
            handle_eval_command(&cards, verbose || cfg.verbose, out)
        }
        Commands::Deal {
            variant,
            seed,
            verbose,
        } => handle_deal_command(
            variant_or(variant),
            seed.or(cfg.seed),
            verbose || cfg.verbose,
            out,
        ),
        Commands::Sim {
            variant,
            rounds,
            seed,
            json,
        } => handle_sim_command(
            variant_or(variant),
            rounds.unwrap_or(cfg.rounds),
            seed.or(cfg.seed),
            json,
            out,
        ),
        Commands::Play { variant } => {
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(variant_or(variant), out, err, &mut stdin_lock)
        }
        Commands::Cfg => handle_cfg_command(out, err),
    };
    finish(result, err)
}

/// Maps a command result to an exit code, reporting errors on `err`.
fn finish(result: Result<(), CliError>, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = ui::display_warning(err, &format!("Interrupted: {}", msg));
            exit_code::INTERRUPTED
        }
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
