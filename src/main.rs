use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use gradebook::cli::{execute_command, get_log_level, Cli};
use gradebook::config::load_config;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()).context("Failed to load configuration") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    };

    // -v wins, then RUST_LOG, then the configured level
    let filter = if cli.verbose > 0 {
        EnvFilter::new(get_log_level(cli.verbose))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("gradebook started with verbosity level: {}", cli.verbose);

    if let Err(e) = execute_command(cli.command, config).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
