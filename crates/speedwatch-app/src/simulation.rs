//! Speed monitoring simulation
//!
//! Wires a speed sampler to the fleet's threshold checks and the
//! notification backends. One tick = one sample checked against every
//! vehicle. A tick budget and a shared stop flag bound the run; with
//! neither, the run continues until the process is terminated.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use speedwatch_domain::service::{alert_line, notification_message};
use speedwatch_domain::{check_fleet, Vehicle};
use speedwatch_notify::{notifier_for, Notifier};
use speedwatch_telemetry::SpeedSampler;
use speedwatch_types::{NotificationChannel, Result};

/// Outcome of a bounded (or stopped) simulation run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub ticks: u64,
    pub alerts: u64,
}

pub struct Simulation {
    fleet: Vec<Vehicle>,
    sampler: Box<dyn SpeedSampler>,
    notifiers: HashMap<NotificationChannel, Box<dyn Notifier>>,
}

impl Simulation {
    /// Simulation delivering through the console notifiers
    pub fn new(fleet: Vec<Vehicle>, sampler: Box<dyn SpeedSampler>) -> Self {
        Self {
            fleet,
            sampler,
            notifiers: HashMap::new(),
        }
    }

    /// Simulation delivering through the given notifiers.
    ///
    /// Channels not covered fall back to the console backend.
    pub fn with_notifiers(
        fleet: Vec<Vehicle>,
        sampler: Box<dyn SpeedSampler>,
        notifiers: Vec<Box<dyn Notifier>>,
    ) -> Self {
        let notifiers = notifiers
            .into_iter()
            .map(|n| (n.channel(), n))
            .collect();
        Self {
            fleet,
            sampler,
            notifiers,
        }
    }

    pub fn fleet(&self) -> &[Vehicle] {
        &self.fleet
    }

    /// Run one tick: sample once, check every vehicle, alert + notify
    /// per exceeding vehicle. Returns the number of alerts raised.
    pub fn tick(&mut self) -> Result<u64> {
        let speed = self.sampler.sample();
        println!("car speed value {speed}");
        log::debug!("sampled {speed} km/h against {} vehicle(s)", self.fleet.len());

        let mut alerts = 0;
        for result in check_fleet(&self.fleet, speed) {
            if result.exceeded {
                println!("{}", alert_line(&result));
                let notifier = self
                    .notifiers
                    .entry(result.channel)
                    .or_insert_with(|| notifier_for(result.channel));
                notifier.deliver(&notification_message(&result))?;
                alerts += 1;
            }
        }
        Ok(alerts)
    }

    /// Run until the tick budget is spent or the stop flag is raised.
    ///
    /// `ticks: None` runs unbounded. The flag is checked before every
    /// tick, so a pre-raised flag yields a zero-tick summary.
    pub fn run(
        &mut self,
        ticks: Option<u64>,
        interval: Option<Duration>,
        stop: &AtomicBool,
    ) -> Result<RunSummary> {
        let started_at = Utc::now();
        let mut done = 0u64;
        let mut alerts = 0u64;

        loop {
            if stop.load(Ordering::SeqCst) {
                log::debug!("stop flag raised after {done} tick(s)");
                break;
            }
            if let Some(budget) = ticks {
                if done >= budget {
                    break;
                }
            }

            alerts += self.tick()?;
            done += 1;

            let more = ticks.map_or(true, |budget| done < budget);
            if more && !stop.load(Ordering::SeqCst) {
                if let Some(delay) = interval {
                    thread::sleep(delay);
                }
            }
        }

        Ok(RunSummary {
            started_at,
            ticks: done,
            alerts,
        })
    }
}
