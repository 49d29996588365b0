use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use comfort_monitor::commands;

fn cli() -> Command {
    Command::new("comfort-monitor")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Monitors room comfort (temperature, humidity, luminosity) from a context broker")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Path to a TOML configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .help("Use synthetic readings instead of the broker")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("device")
                .short('d')
                .long("device")
                .value_name("ID")
                .help("Device entity id on the broker")
                .global(true),
        )
        .arg(
            Arg::new("broker")
                .short('b')
                .long("broker")
                .value_name("URL")
                .help("Context broker base URL")
                .global(true),
        )
        .arg(
            Arg::new("interval")
                .short('i')
                .long("interval")
                .value_name("SECONDS")
                .help("Poll interval in seconds")
                .value_parser(clap::value_parser!(u64))
                .global(true),
        )
        .arg(
            Arg::new("p-offline")
                .long("p-offline")
                .value_name("PROBABILITY")
                .help("Simulated dropout probability in synthetic mode")
                .value_parser(clap::value_parser!(f64))
                .global(true),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Random seed for synthetic mode")
                .value_parser(clap::value_parser!(u64))
                .global(true),
        )
        .subcommand(
            Command::new("run")
                .about("Poll continuously and print each new comfort status")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print one JSON object per cycle")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Print a single plain status line per cycle")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("json"),
                ),
        )
        .subcommand(
            Command::new("once")
                .about("Poll a single time and print the comfort status")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the result as JSON")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Print a single plain status line")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("json"),
                ),
        )
        .subcommand(Command::new("config").about("Show and validate the effective configuration"))
        .subcommand(Command::new("version").about("Shows version information"))
}

fn main() -> Result<()> {
    comfort_monitor::init_logging();

    let matches = cli().get_matches();

    if matches.get_flag("version") {
        return commands::version();
    }

    match matches.subcommand() {
        Some(("run", sub_matches)) => commands::run(sub_matches),
        Some(("once", sub_matches)) => commands::once(sub_matches),
        Some(("config", sub_matches)) => commands::config(sub_matches),
        Some(("version", _)) => commands::version(),
        _ => {
            println!("Welcome to comfort-monitor!");
            println!("Use 'comfort-monitor --help' for more information.");
            Ok(())
        }
    }
}
