//! Domain layer: vehicle model and speed threshold services

pub mod model;
pub mod service;

pub use model::Vehicle;
pub use service::{check_fleet, check_speed, SpeedCheckResult};
