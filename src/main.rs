//! scoretab: league standings from match results.
//!
//! Reads "Team A 3, Team B 1" lines from a file or stdin, folds them into
//! per-team totals under the win(3)/draw(1)/loss(0) rule, and prints a
//! tie-aware ranked table.

mod cli;
mod config;
mod constants;
mod core;
mod state;

use clap::Parser;
use color_eyre::eyre::Result;

use crate::cli::args::Args;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.verbose);
    cli::commands::run(&args)
}

/// Route log records to stderr; `-v` raises the default level to debug and
/// `RUST_LOG` overrides everything.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
