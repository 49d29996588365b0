// UI and formatting module

pub mod formatters;

// Re-export commonly used items for cleaner imports
pub use formatters::{
    format_ideal_range, format_status_line, format_time, format_value, out_of_range_summary,
    paint_severity, print_status, MISSING_VALUE,
};
