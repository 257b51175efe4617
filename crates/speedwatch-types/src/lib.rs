//! Core types for vehicle speed monitoring

mod error;

pub use error::*;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for results
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Notification delivery backend for a vehicle's speed alerts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    #[default]
    Firebase,
    Aws,
}

impl NotificationChannel {
    /// Label used to prefix delivered notification lines
    pub fn label(&self) -> &'static str {
        match self {
            NotificationChannel::Firebase => "Firebase",
            NotificationChannel::Aws => "AWS",
        }
    }
}

impl std::fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationChannel::Firebase => write!(f, "firebase"),
            NotificationChannel::Aws => write!(f, "aws"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_labels() {
        assert_eq!(NotificationChannel::Firebase.label(), "Firebase");
        assert_eq!(NotificationChannel::Aws.label(), "AWS");
    }

    #[test]
    fn test_channel_serde_lowercase() {
        let json = serde_json::to_string(&NotificationChannel::Aws).unwrap();
        assert_eq!(json, "\"aws\"");
        let back: NotificationChannel = serde_json::from_str("\"firebase\"").unwrap();
        assert_eq!(back, NotificationChannel::Firebase);
    }
}
