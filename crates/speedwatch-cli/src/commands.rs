//! Command handlers

use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use speedwatch_app::{fleet, Config, Simulation};
use speedwatch_domain::service::{alert_line, notification_message};
use speedwatch_domain::{check_speed, Vehicle};
use speedwatch_notify::notifier_for;
use speedwatch_telemetry::{RandomSampler, SpeedSampler};
use speedwatch_types::{OutputFormat, Result};

use crate::cli::{Cli, Commands};
use crate::output::{output_check_result, output_fleet, output_summary};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    match &cli.command {
        Commands::Run {
            ticks,
            seed,
            interval_ms,
            fleet,
        } => {
            // CLI value if specified, otherwise config value
            let tick_budget = ticks.or(config.default_ticks);
            let interval_ms = interval_ms.unwrap_or(config.interval_ms);
            cmd_run(
                &cli,
                &config,
                tick_budget,
                *seed,
                interval_ms,
                fleet.clone(),
            )
        }

        Commands::Check { id, speed, fleet } => {
            cmd_check(&config, *id, *speed, fleet.clone())
        }

        Commands::Fleet { file } => cmd_fleet(&config, file.clone()),

        Commands::Config {
            show,
            set_format,
            set_interval_ms,
            set_ticks,
            set_fleet,
            reset,
        } => cmd_config(
            *show,
            *set_format,
            *set_interval_ms,
            *set_ticks,
            set_fleet.clone(),
            *reset,
        ),
    }
}

fn active_fleet(config: &Config, fleet_file: Option<PathBuf>) -> Result<Vec<Vehicle>> {
    let path = fleet_file.or_else(|| config.fleet_file.clone());
    fleet::resolve_fleet(path.as_deref())
}

fn cmd_run(
    cli: &Cli,
    config: &Config,
    ticks: Option<u64>,
    seed: Option<u64>,
    interval_ms: u64,
    fleet_file: Option<PathBuf>,
) -> Result<()> {
    let vehicles = active_fleet(config, fleet_file)?;
    if cli.verbose {
        eprintln!(
            "Monitoring {} vehicle(s), interval {} ms",
            vehicles.len(),
            interval_ms
        );
    }

    let sampler: Box<dyn SpeedSampler> = match seed {
        Some(seed) => Box::new(RandomSampler::with_seed(seed)),
        None => Box::new(RandomSampler::new()),
    };

    let interval = if interval_ms > 0 {
        Some(Duration::from_millis(interval_ms))
    } else {
        None
    };

    // No signal plumbing: an unbounded run ends with the process.
    let stop = AtomicBool::new(false);
    let mut simulation = Simulation::new(vehicles, sampler);
    let summary = simulation.run(ticks, interval, &stop)?;

    output_summary(config.output_format, &summary)
}

fn cmd_check(config: &Config, id: u32, speed: u32, fleet_file: Option<PathBuf>) -> Result<()> {
    let vehicles = active_fleet(config, fleet_file)?;
    let vehicle = fleet::find_vehicle(&vehicles, id)?;

    let result = check_speed(vehicle, speed);
    if result.exceeded {
        println!("{}", alert_line(&result));
        notifier_for(result.channel).deliver(&notification_message(&result))?;
    }

    output_check_result(config.output_format, &result)
}

fn cmd_fleet(config: &Config, file: Option<PathBuf>) -> Result<()> {
    let vehicles = active_fleet(config, file)?;
    output_fleet(config.output_format, &vehicles)
}

fn cmd_config(
    show: bool,
    set_format: Option<OutputFormat>,
    set_interval_ms: Option<u64>,
    set_ticks: Option<u64>,
    set_fleet: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        println!("{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut changed = false;

    if let Some(format) = set_format {
        config.output_format = format;
        changed = true;
    }
    if let Some(interval_ms) = set_interval_ms {
        config.interval_ms = interval_ms;
        changed = true;
    }
    if let Some(ticks) = set_ticks {
        config.default_ticks = Some(ticks);
        changed = true;
    }
    if let Some(fleet_file) = set_fleet {
        config.fleet_file = Some(fleet_file);
        changed = true;
    }

    if changed {
        config.save()?;
        println!("Configuration updated.");
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}
