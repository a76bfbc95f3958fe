//! Credential validation
//!
//! Opens one PostgreSQL connection per configured account and closes it
//! again; nothing is queried. Every account is attempted regardless of
//! earlier failures so the report always covers the full set, then any
//! failure makes the invocation exit non-zero.

use anyhow::{Result, bail};
use colored::*;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};
use tracing::{debug, warn};

use crate::config::Settings;
use zonectl_core::domain::account::{AccountCheck, AccountEntry, ValidationReport};

/// Validate every account of the selected environment
pub async fn check_all_accounts(settings: &Settings) -> Result<()> {
    let accounts = &settings.env.accounts;

    if accounts.is_empty() {
        println!(
            "{}",
            format!(
                "No accounts configured for environment {}.",
                settings.env_tag
            )
            .yellow()
        );
        return Ok(());
    }

    let mut report = ValidationReport::default();
    for account in accounts {
        report.push(check_account(account).await);
    }

    print_report(&report);

    if report.has_failures() {
        bail!(
            "{} of {} account(s) failed validation",
            report.failure_count(),
            report.checks.len()
        );
    }

    Ok(())
}

/// One scoped connection attempt: connect, then close immediately
async fn check_account(account: &AccountEntry) -> AccountCheck {
    debug!(account = %account.name, host = %account.host, "attempting connection");

    let password = match std::env::var(&account.password_env) {
        Ok(p) => p,
        Err(_) => {
            return AccountCheck::failed(
                &account.name,
                format!("environment variable {} is not set", account.password_env),
            );
        }
    };

    let options = PgConnectOptions::new()
        .host(&account.host)
        .port(account.port)
        .username(&account.user)
        .password(&password)
        .database(&account.database);

    match PgConnection::connect_with(&options).await {
        Ok(conn) => {
            if let Err(e) = conn.close().await {
                // The credentials worked; a close failure is only noise
                warn!(account = %account.name, error = %e, "failed to close connection cleanly");
            }
            AccountCheck::succeeded(&account.name)
        }
        Err(e) => AccountCheck::failed(&account.name, e.to_string()),
    }
}

fn print_report(report: &ValidationReport) {
    println!("{}", "Credential check:".bold());
    for check in &report.checks {
        match &check.error {
            None => println!("  {} {}", "✓".green(), check.account),
            Some(detail) => {
                println!("  {} {}: {}", "✗".red(), check.account, detail.red());
            }
        }
    }
    println!(
        "{} succeeded, {} failed",
        report.success_count(),
        report.failure_count()
    );
}
