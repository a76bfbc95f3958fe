//! Database account domain types
//!
//! Account entries come from the static environment configuration and are
//! validated, never mutated. Credentials are referenced by environment
//! variable name so the configuration file never carries a secret inline.

use serde::{Deserialize, Serialize};

/// One configured database account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountEntry {
    /// Name of the entry, used for per-entry reporting
    pub name: String,
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    /// Environment variable holding the password
    pub password_env: String,
    pub database: String,
}

fn default_port() -> u16 {
    5432
}

/// Result of one connection attempt
#[derive(Debug, Clone)]
pub struct AccountCheck {
    /// Name of the account entry this check belongs to
    pub account: String,
    /// Error detail when the connection attempt failed
    pub error: Option<String>,
}

impl AccountCheck {
    pub fn succeeded(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            error: None,
        }
    }

    pub fn failed(account: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Ordered per-entry results of a full credential validation pass
///
/// Validation never stops at the first failure; the report always covers
/// every configured account, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub checks: Vec<AccountCheck>,
}

impl ValidationReport {
    pub fn push(&mut self, check: AccountCheck) {
        self.checks.push(check);
    }

    pub fn success_count(&self) -> usize {
        self.checks.iter().filter(|c| c.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.checks.len() - self.success_count()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_report_attributes_results_per_entry() {
        let mut report = ValidationReport::default();
        report.push(AccountCheck::succeeded("geodata_pro"));
        report.push(AccountCheck::failed("archive_pro", "connection refused"));

        assert_eq!(report.success_count(), 1);
        assert_eq!(report.failure_count(), 1);
        assert!(report.has_failures());

        assert!(report.checks[0].is_success());
        assert_eq!(report.checks[0].account, "geodata_pro");
        assert_eq!(report.checks[1].account, "archive_pro");
        assert_eq!(
            report.checks[1].error.as_deref(),
            Some("connection refused")
        );
    }

    #[test]
    fn test_report_preserves_configuration_order() {
        let mut report = ValidationReport::default();
        for name in ["first", "second", "third"] {
            report.push(AccountCheck::succeeded(name));
        }

        let names: Vec<_> = report.checks.iter().map(|c| c.account.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert!(!report.has_failures());
    }
}
