//! Fleet definition loading from TOML
//!
//! A fleet file is a TOML document with a `[[vehicle]]` array. When no
//! file is configured the built-in demo fleet is used.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use speedwatch_domain::Vehicle;
use speedwatch_types::{FleetError, NotificationChannel, Result};

/// Container for parsing a fleet TOML file
#[derive(Debug, Deserialize)]
struct FleetFile {
    #[serde(rename = "vehicle")]
    vehicles: Vec<Vehicle>,
}

/// The two demo vehicles used when no fleet file is configured
pub fn default_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle::new(101, 80, NotificationChannel::Firebase),
        Vehicle::new(102, 90, NotificationChannel::Aws),
    ]
}

/// Load a fleet from a TOML file
pub fn load_fleet(path: &Path) -> Result<Vec<Vehicle>> {
    if !path.exists() {
        return Err(FleetError::FileNotFound(path.display().to_string()).into());
    }
    let content = fs::read_to_string(path)?;
    load_fleet_from_str(&content)
}

/// Load a fleet from TOML text
pub fn load_fleet_from_str(toml_content: &str) -> Result<Vec<Vehicle>> {
    let file: FleetFile =
        toml::from_str(toml_content).map_err(|e| FleetError::ParseError(e.to_string()))?;
    if file.vehicles.is_empty() {
        log::warn!("Fleet file defines no vehicles; falling back to the demo fleet");
        return Ok(default_fleet());
    }
    Ok(file.vehicles)
}

/// Resolve the active fleet: explicit file if given, demo fleet otherwise
pub fn resolve_fleet(fleet_file: Option<&Path>) -> Result<Vec<Vehicle>> {
    match fleet_file {
        Some(path) => load_fleet(path),
        None => Ok(default_fleet()),
    }
}

/// Find a vehicle by id
pub fn find_vehicle(fleet: &[Vehicle], id: u32) -> Result<&Vehicle> {
    fleet
        .iter()
        .find(|v| v.id == id)
        .ok_or_else(|| FleetError::UnknownVehicle(id).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const FLEET_TOML: &str = r#"
[[vehicle]]
id = 101
max_speed_kmh = 80
channel = "firebase"

[[vehicle]]
id = 102
max_speed_kmh = 90
channel = "aws"
label = "van"
"#;

    #[test]
    fn test_parse_fleet_toml() {
        let fleet = load_fleet_from_str(FLEET_TOML).unwrap();
        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet[0].id, 101);
        assert_eq!(fleet[0].max_speed_kmh, 80);
        assert_eq!(fleet[0].channel, NotificationChannel::Firebase);
        assert_eq!(fleet[1].channel, NotificationChannel::Aws);
        assert_eq!(fleet[1].label.as_deref(), Some("van"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fleet.toml");
        std::fs::write(&path, FLEET_TOML).unwrap();
        let fleet = load_fleet(&path).unwrap();
        assert_eq!(fleet.len(), 2);
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let err = load_fleet(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_empty_fleet_falls_back_to_demo() {
        let fleet = load_fleet_from_str("vehicle = []").unwrap();
        assert_eq!(fleet.len(), 2);
        assert_eq!(fleet[0].id, 101);
    }

    #[test]
    fn test_default_fleet_matches_demo_records() {
        let fleet = default_fleet();
        assert_eq!(fleet[0].id, 101);
        assert_eq!(fleet[0].max_speed_kmh, 80);
        assert_eq!(fleet[1].id, 102);
        assert_eq!(fleet[1].max_speed_kmh, 90);
    }

    #[test]
    fn test_find_vehicle() {
        let fleet = default_fleet();
        assert_eq!(find_vehicle(&fleet, 102).unwrap().max_speed_kmh, 90);
        assert!(find_vehicle(&fleet, 999).is_err());
    }
}
