use anyhow::Result;

use crate::core::comfort::{PublishedState, Thresholds};
use crate::ui::{format_status_line, print_status};

/// How `run` and `once` print a published state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored multi-line block
    Pretty,
    /// One plain line per cycle
    Compact,
    /// One JSON object per cycle
    Json,
}

impl OutputFormat {
    pub fn from_matches(matches: &clap::ArgMatches) -> Self {
        if matches.get_flag("json") {
            OutputFormat::Json
        } else if matches.get_flag("compact") {
            OutputFormat::Compact
        } else {
            OutputFormat::Pretty
        }
    }

    pub fn print(&self, state: &PublishedState, thresholds: &Thresholds) -> Result<()> {
        match self {
            OutputFormat::Json => println!("{}", serde_json::to_string(state)?),
            OutputFormat::Compact => println!("{}", format_status_line(state)),
            OutputFormat::Pretty => {
                print_status(state, thresholds);
                println!();
            }
        }
        Ok(())
    }
}
