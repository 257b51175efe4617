//! Vehicle type definitions

use serde::{Deserialize, Serialize};
use speedwatch_types::NotificationChannel;

/// A monitored rental vehicle. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Vehicle id (e.g. 101)
    pub id: u32,
    /// Maximum permitted speed (km/h)
    pub max_speed_kmh: u32,
    /// Where speed alerts for this vehicle are delivered
    #[serde(default)]
    pub channel: NotificationChannel,
    /// Optional human-readable label (e.g. fleet or company name)
    #[serde(default)]
    pub label: Option<String>,
}

impl Vehicle {
    pub fn new(id: u32, max_speed_kmh: u32, channel: NotificationChannel) -> Self {
        Self {
            id,
            max_speed_kmh,
            channel,
            label: None,
        }
    }
}
