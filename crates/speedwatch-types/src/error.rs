//! Error types for speedwatch

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Fleet definition errors
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("Unknown vehicle id: {0}")]
    UnknownVehicle(u32),

    #[error("Failed to parse fleet file: {0}")]
    ParseError(String),

    #[error("Fleet file not found: {0}")]
    FileNotFound(String),
}

/// Notification delivery errors
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Notification delivery failed: {0}")]
    DeliveryFailed(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fleet error: {0}")]
    Fleet(#[from] FleetError),

    #[error("Notification error: {0}")]
    Notify(#[from] NotifyError),
}

pub type Result<T> = std::result::Result<T, Error>;
