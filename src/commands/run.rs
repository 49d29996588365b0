//! Continuous monitoring command.
//!
//! Starts the polling scheduler and prints every newly published state until
//! Ctrl+C is pressed.

use anyhow::{Context, Result};
use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::core::comfort::PollingScheduler;
use super::config::resolve;
use super::output::OutputFormat;

const REFRESH_INTERVAL: Duration = Duration::from_millis(200);

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let config = resolve(matches)?;
    let format = OutputFormat::from_matches(matches);

    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_clone = stop_flag.clone();

    // Setup Ctrl+C handler
    ctrlc::set_handler(move || {
        stop_flag_clone.store(true, Ordering::Relaxed);
    })
    .map_err(|e| anyhow::anyhow!("Failed to set Ctrl+C handler: {}", e))?;

    let scheduler = PollingScheduler::start(&config).context("Failed to start comfort monitor")?;

    if format != OutputFormat::Json {
        println!(
            "{}",
            format!(
                "Monitoring room comfort every {}s. Press Ctrl+C to stop.",
                config.poll_interval_secs
            )
            .cyan()
            .bold()
        );
        println!();
    }

    let mut last_cycle = 0;
    while !stop_flag.load(Ordering::Relaxed) {
        let state = scheduler.latest();
        if state.cycle != last_cycle {
            last_cycle = state.cycle;
            format.print(&state, &config.thresholds)?;
        }
        std::thread::sleep(REFRESH_INTERVAL);
    }

    let last = scheduler.shutdown();
    if format != OutputFormat::Json {
        println!("{}", format!("Stopped after {} poll cycles", last.cycle).dimmed());
    }

    Ok(())
}
