//! Redoubt agent binary: speaks the match protocol on stdin/stdout.

// Allow print in the binary; protocol output and fatal errors go through
// the standard streams directly.
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod logging;

use clap::Parser;
use std::io;
use std::process::ExitCode;

use redoubt::{session, PolicyConfig};

/// Redoubt - heuristic agent for grid tower-defense matches
#[derive(Parser, Debug)]
#[command(name = "redoubt")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log verbosity on stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,

    /// Structural amount that triggers the one-shot perimeter migration
    #[arg(long, default_value_t = 24.0)]
    migration_threshold: f64,

    /// Structural amount funding the post-migration shield upgrade
    #[arg(long, default_value_t = 8.0)]
    shield_threshold: f64,

    /// Mobile amount below which a turn stalls instead of rushing
    #[arg(long, default_value_t = 12.0)]
    rush_gate: f64,

    /// Rebuild turrets behind cells the opponent has breached
    #[arg(long)]
    reactive_defense: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(args.log_level) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let config = PolicyConfig {
        migration_threshold: args.migration_threshold,
        shield_upgrade_threshold: args.shield_threshold,
        rush_gate: args.rush_gate,
        reactive_defense: args.reactive_defense,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match session::run(stdin.lock(), &mut stdout.lock(), config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
