//! Output formatting module

use speedwatch_app::RunSummary;
use speedwatch_domain::{SpeedCheckResult, Vehicle};
use speedwatch_types::{OutputFormat, Result};

pub fn output_check_result(output_format: OutputFormat, result: &SpeedCheckResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(result)?;
        println!("{}", content);
    } else {
        // Table format
        println!("\nSpeed Check");
        println!("===========");
        println!("Vehicle id:      {}", result.vehicle_id);
        println!("Sample:          {} km/h", result.speed_kmh);
        println!("Max speed:       {} km/h", result.max_speed_kmh);
        println!("Channel:         {}", result.channel);
        println!(
            "Exceeded:        {}",
            if result.exceeded { "Yes" } else { "No" }
        );
        if let Some(excess) = result.excess_kmh {
            println!("Excess:          {} km/h", excess);
        }
        if let Some(ratio) = result.load_ratio_percent {
            println!("Speed ratio:     {:.1}%", ratio);
        }
    }

    Ok(())
}

pub fn output_summary(output_format: OutputFormat, summary: &RunSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(summary)?;
        println!("{}", content);
    } else {
        println!("\nRun Summary");
        println!("===========");
        println!("Started:         {}", summary.started_at.to_rfc3339());
        println!("Ticks:           {}", summary.ticks);
        println!("Alerts:          {}", summary.alerts);
    }

    Ok(())
}

pub fn output_fleet(output_format: OutputFormat, fleet: &[Vehicle]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(fleet)?;
        println!("{}", content);
    } else {
        println!("\nActive Fleet");
        println!("============");
        println!("{:<8} {:>12} {:<10} {}", "Id", "Max (km/h)", "Channel", "Label");
        println!("{}", "-".repeat(44));
        for vehicle in fleet {
            println!(
                "{:<8} {:>12} {:<10} {}",
                vehicle.id,
                vehicle.max_speed_kmh,
                vehicle.channel.to_string(),
                vehicle.label.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}
