use anyhow::{Context, Result};

use crate::core::comfort::{poll_once, SensorReader};
use super::config::resolve;
use super::output::OutputFormat;

/// Run a single poll cycle and print the result
pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let config = resolve(matches)?;
    config.validate().context("Refusing to poll with an invalid configuration")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?;

    let state = runtime.block_on(async {
        let mut reader = SensorReader::from_config(&config)?;
        log::info!("Polling once: reader = {}", reader.describe());
        Ok::<_, crate::MonitorError>(poll_once(&mut reader, &config.thresholds).await)
    })?;

    OutputFormat::from_matches(matches).print(&state, &config.thresholds)
}
