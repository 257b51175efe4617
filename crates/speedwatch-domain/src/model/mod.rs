//! Domain model types

pub mod vehicle;

pub use vehicle::Vehicle;
