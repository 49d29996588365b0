use chrono::{DateTime, Local, Utc};
use colored::{ColoredString, Colorize};

use crate::core::comfort::{Classification, Parameter, PublishedState, Severity, Thresholds};

/// Format timestamp in local time (YYYY-MM-DD HH:MM:SS)
pub fn format_time(time: DateTime<Utc>) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a measured value with its unit, e.g. `22.5°C` or `55`
pub fn format_value(parameter: Parameter, value: f64) -> String {
    match parameter {
        Parameter::Luminosity => format!("{:.0}{}", value, parameter.unit()),
        _ => format!("{:.1}{}", value, parameter.unit()),
    }
}

/// Format the ideal range, e.g. `ideal 20.0-26.0°C`
pub fn format_ideal_range(parameter: Parameter, thresholds: &Thresholds) -> String {
    let range = thresholds.range(parameter);
    format!("ideal {:.1}-{:.1}{}", range.min, range.max, parameter.unit())
}

pub fn paint_severity(text: &str, severity: Severity) -> ColoredString {
    match severity {
        Severity::Ok => text.green().bold(),
        Severity::Warning => text.yellow().bold(),
        Severity::Critical => text.red().bold(),
        Severity::Unavailable => text.blue().bold(),
    }
}

/// One-line plain-text summary of a published state
pub fn format_status_line(state: &PublishedState) -> String {
    let Some(classification) = &state.classification else {
        return "waiting for first reading...".to_string();
    };

    let when = state
        .produced_at
        .map(format_time)
        .unwrap_or_else(|| "-".to_string());

    let mut line = format!(
        "[{}] #{} {:?}: {}",
        when, state.cycle, classification.severity, classification.status_text
    );

    if let Some(reading) = &state.reading {
        let values: Vec<String> = Parameter::ALL
            .into_iter()
            .map(|parameter| {
                let flag = if classification.is_out_of_range(parameter) { "!" } else { "" };
                format!(
                    "{}={}{}",
                    parameter,
                    format_value(parameter, reading.value(parameter)),
                    flag
                )
            })
            .collect();
        line.push_str(&format!(" | {}", values.join(" ")));
    } else {
        let values: Vec<String> = Parameter::ALL
            .into_iter()
            .map(|parameter| format!("{}={}", parameter, MISSING_VALUE))
            .collect();
        line.push_str(&format!(" | {}", values.join(" ")));
    }

    line
}

/// Placeholder shown for values while the device is unavailable
pub const MISSING_VALUE: &str = "—";

/// Dashboard summary of which parameters are outside their ideal range
pub fn out_of_range_summary(classification: &Classification) -> String {
    if classification.severity == Severity::Unavailable {
        return "Device not found; no values this cycle.".to_string();
    }

    if classification.out_of_range.is_empty() {
        return "All parameters within ideal range.".to_string();
    }

    let labels: Vec<&str> = classification
        .out_of_range
        .iter()
        .map(|parameter| parameter.label())
        .collect();
    format!("Parameters out of ideal range: {}.", labels.join(", "))
}

/// Print a colored status block for the terminal
pub fn print_status(state: &PublishedState, thresholds: &Thresholds) {
    let Some(classification) = &state.classification else {
        println!("{}", "Waiting for first reading...".dimmed());
        return;
    };

    let when = state
        .produced_at
        .map(format_time)
        .unwrap_or_else(|| "-".to_string());

    println!(
        "{} {}",
        format!("[{}]", when).dimmed(),
        paint_severity(&classification.status_text, classification.severity)
    );

    for parameter in Parameter::ALL {
        let value = match &state.reading {
            Some(reading) => {
                let value = format!("{:>8}", format_value(parameter, reading.value(parameter)));
                if classification.is_out_of_range(parameter) {
                    value.red().bold()
                } else {
                    value.green()
                }
            }
            None => format!("{:>8}", MISSING_VALUE).dimmed(),
        };
        println!(
            "  {:<12} {}  {}",
            parameter.label(),
            value,
            format_ideal_range(parameter, thresholds).dimmed()
        );
    }

    println!("  {}", out_of_range_summary(classification));
}
