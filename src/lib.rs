// Comfort Monitor Library - Public API

// Re-export error types
pub mod error;
pub use error::{MonitorError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod ui;

// Re-export commonly used types
pub use core::comfort::{
    evaluate, Classification, Parameter, PollingScheduler, PublishedState, Reading,
    SchedulerState, SensorOutcome, SensorReader, Severity, StatusHandle, ThresholdRange,
    Thresholds,
};
pub use core::config::{MonitorConfig, SensorMode};

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
