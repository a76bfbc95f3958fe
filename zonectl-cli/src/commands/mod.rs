//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod compile;
mod creds;
mod delivery;
mod jobs;
mod watchdog;

pub use delivery::DeliveryCommands;
pub use jobs::JobsCommands;
pub use watchdog::WatchdogCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Settings;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Watchdog flag control
    Watchdog {
        #[command(subcommand)]
        command: WatchdogCommands,
    },
    /// Zone-job status tools
    Jobs {
        #[command(subcommand)]
        command: JobsCommands,
    },
    /// Validate every configured database account
    Creds,
    /// Compile a transformation script with the configured compiler
    Compile {
        /// Path of the script to compile
        script: String,
    },
    /// Delivery-service control
    Delivery {
        #[command(subcommand)]
        command: DeliveryCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, settings: &Settings) -> Result<()> {
    match command {
        Commands::Watchdog { command } => watchdog::handle_watchdog_command(command, settings),
        Commands::Jobs { command } => jobs::handle_jobs_command(command, settings).await,
        Commands::Creds => creds::check_all_accounts(settings).await,
        Commands::Compile { script } => compile::compile_script(&script, settings),
        Commands::Delivery { command } => delivery::handle_delivery_command(command, settings),
    }
}
