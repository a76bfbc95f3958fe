//! Watchdog command handlers
//!
//! Starting and stopping rename the marker pair; `status` only reads it.
//! Requesting a state the flag is already in is a warning no-op, never an
//! error, so schedulers can re-issue the command safely.

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use crate::config::Settings;
use zonectl_core::domain::flag::FlagState;
use zonectl_core::watchdog;

/// Watchdog subcommands
#[derive(Subcommand)]
pub enum WatchdogCommands {
    /// Turn the watchdog on
    On,
    /// Turn the watchdog off
    Off,
    /// Report the current flag state without changing it
    Status,
}

/// Handle watchdog commands
pub fn handle_watchdog_command(command: WatchdogCommands, settings: &Settings) -> Result<()> {
    let dir = &settings.env.watchdog_dir;

    match command {
        WatchdogCommands::On => toggle_to(dir, FlagState::Active),
        WatchdogCommands::Off => toggle_to(dir, FlagState::Inactive),
        WatchdogCommands::Status => {
            let state = watchdog::observe(dir)?;
            println!("Watchdog is {}", colorize_state(state));
            Ok(())
        }
    }
}

fn toggle_to(dir: &std::path::Path, desired: FlagState) -> Result<()> {
    let observed = watchdog::toggle(dir, desired)?;

    if observed == desired {
        println!(
            "{}",
            format!("⚠ Watchdog already {}, nothing done", desired).yellow()
        );
    } else {
        println!(
            "{} Watchdog {} (was {})",
            "✓".green(),
            colorize_state(desired),
            observed
        );
    }

    Ok(())
}

fn colorize_state(state: FlagState) -> colored::ColoredString {
    match state {
        FlagState::Active => state.to_string().green(),
        FlagState::Inactive => state.to_string().red(),
    }
}
