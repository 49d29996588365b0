//! Comfort evaluation.
//!
//! Maps a reading (or an outage) and the threshold table to a comfort verdict.

use serde::{Deserialize, Serialize};

use super::reading::{Parameter, SensorOutcome};
use super::thresholds::Thresholds;

pub const STATUS_UNAVAILABLE: &str = "device not found";
pub const STATUS_OK: &str = "excellent for study/focus";
pub const STATUS_WARNING: &str = "attention: 1 parameter out of ideal range";
pub const STATUS_CRITICAL: &str = "poor for study/focus: multiple critical parameters";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Ok,
    Warning,
    Critical,
    Unavailable,
}

impl Severity {
    pub fn color_key(&self) -> &'static str {
        match self {
            Severity::Ok => "green",
            Severity::Warning => "yellow",
            Severity::Critical => "red",
            Severity::Unavailable => "blue",
        }
    }

    pub fn color_hex(&self) -> &'static str {
        match self {
            Severity::Ok => "#2E7D32",
            Severity::Warning => "#F9A825",
            Severity::Critical => "#C62828",
            Severity::Unavailable => "#1565C0",
        }
    }
}

/// Comfort verdict for one poll cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub status_text: String,
    pub severity: Severity,
    /// Out-of-range parameters, in evaluation order
    pub out_of_range: Vec<Parameter>,
}

impl Classification {
    pub fn unavailable() -> Self {
        Self {
            status_text: STATUS_UNAVAILABLE.to_string(),
            severity: Severity::Unavailable,
            out_of_range: Vec::new(),
        }
    }

    pub fn is_out_of_range(&self, parameter: Parameter) -> bool {
        self.out_of_range.contains(&parameter)
    }
}

/// Classify a sensor outcome against the threshold table.
pub fn evaluate(input: &SensorOutcome, thresholds: &Thresholds) -> Classification {
    let reading = match input {
        SensorOutcome::Reading(reading) => reading,
        SensorOutcome::Unavailable => return Classification::unavailable(),
    };

    let out_of_range: Vec<Parameter> = Parameter::ALL
        .into_iter()
        .filter(|&parameter| !thresholds.range(parameter).contains(reading.value(parameter)))
        .collect();

    let (severity, status_text) = match out_of_range.len() {
        0 => (Severity::Ok, STATUS_OK),
        1 => (Severity::Warning, STATUS_WARNING),
        _ => (Severity::Critical, STATUS_CRITICAL),
    };

    Classification {
        status_text: status_text.to_string(),
        severity,
        out_of_range,
    }
}
