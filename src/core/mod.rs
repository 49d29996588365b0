// Core business logic module

pub mod comfort;
pub mod config;

// Re-export commonly used items
pub use config::{MonitorConfig, SensorMode};
