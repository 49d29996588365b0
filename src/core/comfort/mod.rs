//! Room comfort pipeline.
//!
//! Sensor reader -> comfort evaluator -> published state, driven by the
//! polling scheduler.

mod evaluator;
pub mod reader;
mod reading;
mod scheduler;
mod state;
mod thresholds;

pub use evaluator::{
    evaluate, Classification, Severity, STATUS_CRITICAL, STATUS_OK, STATUS_UNAVAILABLE,
    STATUS_WARNING,
};
pub use reader::{LiveReader, SensorReader, SyntheticReader};
pub use reading::{Parameter, Reading, SensorOutcome};
pub use scheduler::{poll_once, run_poll_loop, PollingScheduler};
pub use state::{PublishedState, SchedulerState, StatusHandle};
pub use thresholds::{ThresholdRange, Thresholds};
