//! Domain services

pub mod speed_monitor;

pub use speed_monitor::{
    alert_line, check_fleet, check_speed, notification_message, SpeedCheckResult,
};
