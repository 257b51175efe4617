//! CLI definition using clap

use clap::{Parser, Subcommand};
use speedwatch_types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "speedwatch")]
#[command(version)]
#[command(about = "Simulated vehicle speed telemetry with threshold alerts")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the speed monitoring simulation
    Run {
        /// Number of ticks to simulate. Uses config value if not
        /// specified; with neither, runs until interrupted.
        #[arg(long, short = 'n')]
        ticks: Option<u64>,

        /// Seed the speed sampler for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Delay between ticks in milliseconds. Uses config value if not specified.
        #[arg(long)]
        interval_ms: Option<u64>,

        /// Fleet definition TOML (overrides config)
        #[arg(long)]
        fleet: Option<PathBuf>,
    },

    /// Check a single speed sample against one vehicle
    Check {
        /// Vehicle id (e.g. 101)
        #[arg(long, short = 'i')]
        id: u32,

        /// Speed sample in km/h
        #[arg(long, short = 's')]
        speed: u32,

        /// Fleet definition TOML (overrides config)
        #[arg(long)]
        fleet: Option<PathBuf>,
    },

    /// Show the active fleet
    Fleet {
        /// Fleet definition TOML (overrides config)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Set delay between ticks in milliseconds
        #[arg(long)]
        set_interval_ms: Option<u64>,

        /// Set default tick budget for run
        #[arg(long)]
        set_ticks: Option<u64>,

        /// Set default fleet definition TOML
        #[arg(long)]
        set_fleet: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
