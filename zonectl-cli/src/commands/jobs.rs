//! Zone-job command handlers
//!
//! `status` is a one-shot listing of the jobs a set of filters selects;
//! `watch` drives the bounded polling loop until the selected jobs report
//! done or the attempt budget runs out. Filters are substrings: a partial
//! identifier selects every known job containing it, and a filter hitting
//! several jobs is allowed (a warning names them all).

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use crate::config::Settings;
use zonectl_client::ZoneServiceClient;
use zonectl_core::domain::job::{JobStatus, ZoneJob};
use zonectl_core::matching::expand_filters;
use zonectl_core::poll::{PollOutcome, PollingLoop};

/// Jobs subcommands
#[derive(Subcommand)]
pub enum JobsCommands {
    /// Show the current state of the matching jobs once
    Status {
        /// Job identifier filters (substring match); none lists everything
        filters: Vec<String>,
    },
    /// Poll the matching jobs until they complete or attempts run out
    Watch {
        /// Job identifier filters (substring match)
        #[arg(required = true)]
        filters: Vec<String>,

        /// Seconds to wait between polling rounds
        #[arg(long, default_value_t = 60)]
        interval: u64,

        /// Polling rounds before giving up
        #[arg(long, default_value_t = 10)]
        max_attempts: u32,
    },
}

/// Handle jobs commands
pub async fn handle_jobs_command(command: JobsCommands, settings: &Settings) -> Result<()> {
    let client = ZoneServiceClient::new(&settings.env.service_url);

    match command {
        JobsCommands::Status { filters } => show_status(&client, &filters).await,
        JobsCommands::Watch {
            filters,
            interval,
            max_attempts,
        } => watch_jobs(&client, &filters, interval, max_attempts).await,
    }
}

/// One-shot status listing
async fn show_status(client: &ZoneServiceClient, filters: &[String]) -> Result<()> {
    let known = client
        .list_jobs()
        .await
        .context("failed to list jobs from the zone-processing service")?;

    let shown: Vec<&ZoneJob> = if filters.is_empty() {
        known.iter().collect()
    } else {
        let selected = expand_filters(&known, filters)?;
        known
            .iter()
            .filter(|j| selected.iter().any(|s| s == &j.zt_id))
            .collect()
    };

    if shown.is_empty() {
        println!("{}", "No jobs found.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} job(s):", shown.len()).bold());
    for job in shown {
        print_job_line(job);
    }

    Ok(())
}

/// Expand filters, then poll until done or out of attempts
///
/// Jobs still pending at the end are reported, not fatal: the scheduler
/// that launched us decides what to do with the leftovers, so the exit
/// code stays 0.
async fn watch_jobs(
    client: &ZoneServiceClient,
    filters: &[String],
    interval: u64,
    max_attempts: u32,
) -> Result<()> {
    let known = client
        .list_jobs()
        .await
        .context("failed to list jobs from the zone-processing service")?;

    let selected = expand_filters(&known, filters)?;

    println!(
        "{}",
        format!(
            "Watching {} job(s), every {}s, up to {} attempt(s)",
            selected.len(),
            interval,
            max_attempts
        )
        .bold()
    );

    let outcome = PollingLoop::new(Duration::from_secs(interval), max_attempts)
        .run(client, selected)
        .await
        .context("polling run aborted")?;

    print_outcome(&outcome);

    Ok(())
}

fn print_outcome(outcome: &PollOutcome) {
    for zt_id in &outcome.completed {
        println!("  {} {}", "✓".green(), zt_id);
    }
    for zt_id in &outcome.still_pending {
        println!("  {} {}", "…".yellow(), zt_id.yellow());
    }

    if outcome.all_done() {
        println!("{}", "All jobs completed.".green().bold());
    } else {
        println!(
            "{}",
            format!(
                "{} job(s) still pending after the last attempt.",
                outcome.still_pending.len()
            )
            .yellow()
            .bold()
        );
    }
}

fn print_job_line(job: &ZoneJob) {
    let label = job.label.as_deref().unwrap_or("-");
    println!(
        "  {} {}  {}  {}",
        "▸".cyan(),
        job.zt_id,
        colorize_status(job.status),
        label.dimmed()
    );
}

fn colorize_status(status: JobStatus) -> colored::ColoredString {
    let status_str = status.to_string();
    match status {
        JobStatus::Pending => status_str.yellow(),
        JobStatus::Running => status_str.cyan(),
        JobStatus::Done => status_str.green(),
        JobStatus::Error => status_str.red(),
    }
}
