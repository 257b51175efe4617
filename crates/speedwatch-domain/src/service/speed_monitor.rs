//! Speed threshold checking service

use serde::{Deserialize, Serialize};
use speedwatch_types::NotificationChannel;

use crate::model::Vehicle;

/// Result of a threshold check for a single vehicle against one sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedCheckResult {
    pub vehicle_id: u32,
    pub speed_kmh: u32,
    pub max_speed_kmh: u32,
    pub channel: NotificationChannel,
    pub exceeded: bool,
    pub excess_kmh: Option<u32>,
    pub load_ratio_percent: Option<f64>,
}

/// Check one sample against one vehicle's threshold.
///
/// Strictly greater-than: a sample equal to the threshold does not
/// count as exceeding it. Stateless; repeated exceeding samples each
/// produce a fresh result with no de-duplication.
pub fn check_speed(vehicle: &Vehicle, speed_kmh: u32) -> SpeedCheckResult {
    let exceeded = speed_kmh > vehicle.max_speed_kmh;
    let ratio = if vehicle.max_speed_kmh > 0 {
        Some((speed_kmh as f64 / vehicle.max_speed_kmh as f64) * 100.0)
    } else {
        None
    };
    SpeedCheckResult {
        vehicle_id: vehicle.id,
        speed_kmh,
        max_speed_kmh: vehicle.max_speed_kmh,
        channel: vehicle.channel,
        exceeded,
        excess_kmh: if exceeded {
            Some(speed_kmh - vehicle.max_speed_kmh)
        } else {
            None
        },
        load_ratio_percent: ratio,
    }
}

/// Check one sample against every vehicle in a fleet
pub fn check_fleet(vehicles: &[Vehicle], speed_kmh: u32) -> Vec<SpeedCheckResult> {
    vehicles
        .iter()
        .map(|vehicle| check_speed(vehicle, speed_kmh))
        .collect()
}

/// Render the alert line for an exceeding check result
pub fn alert_line(result: &SpeedCheckResult) -> String {
    format!(
        "[Alert] Car ID: {} - Speed limit exceeded! Current Speed: {} km/h, Max Speed: {} km/h",
        result.vehicle_id, result.speed_kmh, result.max_speed_kmh
    )
}

/// Render the message delivered to the rental company
pub fn notification_message(result: &SpeedCheckResult) -> String {
    format!(
        "Car ID: {} exceeded speed limit of {} km/h.",
        result.vehicle_id, result.max_speed_kmh
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_vehicle() -> Vehicle {
        Vehicle::new(101, 80, NotificationChannel::Firebase)
    }

    #[test]
    fn test_under_threshold() {
        let result = check_speed(&demo_vehicle(), 50);
        assert!(!result.exceeded);
        assert!(result.excess_kmh.is_none());
        assert!((result.load_ratio_percent.unwrap() - 62.5).abs() < 0.01);
    }

    #[test]
    fn test_at_threshold_does_not_exceed() {
        let result = check_speed(&demo_vehicle(), 80);
        assert!(!result.exceeded);
        assert!(result.excess_kmh.is_none());
    }

    #[test]
    fn test_over_threshold() {
        let result = check_speed(&demo_vehicle(), 85);
        assert!(result.exceeded);
        assert_eq!(result.excess_kmh, Some(5));
    }

    #[test]
    fn test_zero_threshold_has_no_ratio() {
        let vehicle = Vehicle::new(7, 0, NotificationChannel::Aws);
        let result = check_speed(&vehicle, 1);
        assert!(result.exceeded);
        assert!(result.load_ratio_percent.is_none());
    }

    #[test]
    fn test_alert_line_format() {
        let result = check_speed(&demo_vehicle(), 85);
        assert_eq!(
            alert_line(&result),
            "[Alert] Car ID: 101 - Speed limit exceeded! Current Speed: 85 km/h, Max Speed: 80 km/h"
        );
    }

    #[test]
    fn test_notification_message_format() {
        let result = check_speed(&demo_vehicle(), 85);
        assert_eq!(
            notification_message(&result),
            "Car ID: 101 exceeded speed limit of 80 km/h."
        );
    }

    #[test]
    fn test_check_fleet_checks_every_vehicle() {
        let fleet = vec![
            Vehicle::new(101, 80, NotificationChannel::Firebase),
            Vehicle::new(102, 90, NotificationChannel::Aws),
        ];
        let results = check_fleet(&fleet, 85);
        assert_eq!(results.len(), 2);
        assert!(results[0].exceeded);
        assert!(!results[1].exceeded);
    }
}
