//! Application service layer - configuration, fleet loading, simulation

pub mod config;
pub mod fleet;
pub mod simulation;

pub use config::Config;
pub use fleet::{default_fleet, find_vehicle, load_fleet, resolve_fleet};
pub use simulation::{RunSummary, Simulation};
