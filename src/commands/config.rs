use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use crate::core::{MonitorConfig, SensorMode};

/// Load the configuration file and apply command-line overrides.
///
/// Shared by every subcommand that needs a `MonitorConfig`.
pub fn resolve(matches: &clap::ArgMatches) -> Result<MonitorConfig> {
    let explicit = matches.get_one::<PathBuf>("config");
    let mut config = MonitorConfig::load(explicit.map(PathBuf::as_path))
        .context("Failed to load configuration")?;

    if matches.get_flag("mock") {
        config.mode = SensorMode::Synthetic;
    }
    if let Some(device) = matches.get_one::<String>("device") {
        config.device_id = Some(device.clone());
    }
    if let Some(broker) = matches.get_one::<String>("broker") {
        config.broker_url = broker.clone();
    }
    if let Some(&interval) = matches.get_one::<u64>("interval") {
        config.poll_interval_secs = interval;
    }
    if let Some(&p_offline) = matches.get_one::<f64>("p-offline") {
        config.p_offline = p_offline;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }

    Ok(config)
}

/// Print the effective configuration and whether it would start
pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    let config = resolve(matches)?;

    print!("{}", config.to_toml().context("Failed to render configuration")?);
    println!();

    match config.validate() {
        Ok(()) => println!("{}", "Configuration is valid".green().bold()),
        Err(e) => {
            println!("{}", format!("Configuration is invalid: {}", e).red().bold());
            return Err(e.into());
        }
    }

    Ok(())
}
