//! Speedwatch - simulated vehicle speed telemetry monitor
//!
//! A CLI tool that simulates speed telemetry for a rental fleet and
//! raises alerts plus channel notifications when thresholds are
//! exceeded.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;
use env_logger::Env;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
