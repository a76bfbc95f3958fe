//! Zonectl CLI
//!
//! Operations tooling for the geospatial-data-management environment:
//! watchdog flag toggling, zone-job status polling, credential validation,
//! script compilation and delivery-service control. Each invocation does
//! one thing and reports via exit code: 0 on success, 1 on any error.

mod commands;
mod config;
mod process;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "zonectl")]
#[command(about = "Operations CLI for the zone-processing environment", long_about = None)]
struct Cli {
    /// Path to the environments configuration file
    #[arg(long, env = "ZONECTL_CONFIG", default_value = "environments.toml")]
    config: String,

    /// Environment tag selecting a configuration section (e.g. PRO, TST, DEV)
    #[arg(long = "env", env = "ZONECTL_ENV", default_value = "PRO")]
    env_tag: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zonectl=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings = Settings::load(&cli.config, &cli.env_tag)?;

    handle_command(cli.command, &settings).await
}
