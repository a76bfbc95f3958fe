//! Delivery-service control
//!
//! Pausing and resuming go through the environment's control program with
//! structured arguments; the environment tag travels as an argument so the
//! control program never has to guess its context.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use crate::config::Settings;
use crate::process::run_checked;

/// Delivery subcommands
#[derive(Subcommand)]
pub enum DeliveryCommands {
    /// Pause the delivery service
    Pause,
    /// Resume the delivery service
    Resume,
}

/// Handle delivery commands
pub fn handle_delivery_command(command: DeliveryCommands, settings: &Settings) -> Result<()> {
    let action = match command {
        DeliveryCommands::Pause => "pause",
        DeliveryCommands::Resume => "resume",
    };

    run_checked(
        &settings.env.delivery_ctl,
        &[action, settings.env_tag.as_str()],
    )
    .with_context(|| format!("delivery {} failed", action))?;

    println!(
        "{} Delivery service {} ({})",
        "✓".green(),
        match action {
            "pause" => "paused",
            _ => "resumed",
        },
        settings.env_tag
    );

    Ok(())
}
