//! Configuration module
//!
//! The environments file is a TOML document with one table per environment
//! tag. Each table carries the service URL, the watchdog directory, the
//! external programs the CLI shells out to, and the database accounts to
//! validate. Passwords are never stored inline; each account names the
//! environment variable holding its password.
//!
//! ```toml
//! [environments.PRO]
//! service_url = "http://geoservice.internal:8080"
//! watchdog_dir = "/srv/geo/pro/watchdog"
//! compiler = "/opt/geo/bin/compile-transform"
//! delivery_ctl = "/opt/geo/bin/delivery-ctl"
//!
//! [[environments.PRO.accounts]]
//! name = "geodata_pro"
//! host = "db.internal"
//! user = "geodata"
//! password_env = "ZONECTL_PW_GEODATA_PRO"
//! database = "geodata"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

use zonectl_core::domain::account::AccountEntry;

/// Top-level shape of the environments file
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub environments: BTreeMap<String, EnvConfig>,
}

/// Configuration section for one environment tag
#[derive(Debug, Clone, Deserialize)]
pub struct EnvConfig {
    /// Base URL of the zone-processing service
    pub service_url: String,

    /// Directory holding the watchdog marker pair
    pub watchdog_dir: PathBuf,

    /// External transformation-script compiler
    pub compiler: String,

    /// External delivery-service control program
    pub delivery_ctl: String,

    /// Database accounts to validate, in reporting order
    #[serde(default)]
    pub accounts: Vec<AccountEntry>,
}

impl EnvConfig {
    /// Sanity checks applied after the section is selected
    pub fn validate(&self) -> Result<()> {
        if !self.service_url.starts_with("http://") && !self.service_url.starts_with("https://") {
            bail!("service_url must start with http:// or https://");
        }
        if self.compiler.is_empty() {
            bail!("compiler cannot be empty");
        }
        if self.delivery_ctl.is_empty() {
            bail!("delivery_ctl cannot be empty");
        }
        Ok(())
    }
}

/// Resolved settings for one invocation: the chosen environment section
#[derive(Debug, Clone)]
pub struct Settings {
    /// The tag the section was selected by
    pub env_tag: String,
    pub env: EnvConfig,
}

impl Settings {
    /// Loads the configuration file and selects one environment section
    ///
    /// # Errors
    /// Fails on an unreadable or malformed file, an unknown tag (the error
    /// lists the configured tags), or an invalid section.
    pub fn load(path: &str, env_tag: &str) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path))?;
        let file: ConfigFile = toml::from_str(&raw)
            .with_context(|| format!("failed to parse configuration file {}", path))?;

        Self::select(file, env_tag)
    }

    fn select(file: ConfigFile, env_tag: &str) -> Result<Self> {
        let Some(env) = file.environments.get(env_tag) else {
            let known: Vec<&str> = file.environments.keys().map(String::as_str).collect();
            bail!(
                "no [environments.{}] section in configuration (known tags: {})",
                env_tag,
                known.join(", ")
            );
        };

        env.validate()
            .with_context(|| format!("invalid [environments.{}] section", env_tag))?;

        debug!(env_tag, service_url = %env.service_url, "environment selected");

        Ok(Self {
            env_tag: env_tag.to_string(),
            env: env.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [environments.PRO]
        service_url = "http://geoservice.internal:8080"
        watchdog_dir = "/srv/geo/pro/watchdog"
        compiler = "/opt/geo/bin/compile-transform"
        delivery_ctl = "/opt/geo/bin/delivery-ctl"

        [[environments.PRO.accounts]]
        name = "geodata_pro"
        host = "db.internal"
        user = "geodata"
        password_env = "ZONECTL_PW_GEODATA_PRO"
        database = "geodata"

        [environments.TST]
        service_url = "http://geoservice.test:8080"
        watchdog_dir = "/srv/geo/tst/watchdog"
        compiler = "/opt/geo/bin/compile-transform"
        delivery_ctl = "/opt/geo/bin/delivery-ctl"
    "#;

    fn parse(raw: &str) -> ConfigFile {
        toml::from_str(raw).unwrap()
    }

    #[test]
    fn test_select_known_tag() {
        let settings = Settings::select(parse(SAMPLE), "PRO").unwrap();
        assert_eq!(settings.env_tag, "PRO");
        assert_eq!(settings.env.accounts.len(), 1);
        assert_eq!(settings.env.accounts[0].name, "geodata_pro");
        // port falls back to the PostgreSQL default
        assert_eq!(settings.env.accounts[0].port, 5432);
    }

    #[test]
    fn test_accounts_are_optional() {
        let settings = Settings::select(parse(SAMPLE), "TST").unwrap();
        assert!(settings.env.accounts.is_empty());
    }

    #[test]
    fn test_unknown_tag_lists_known_ones() {
        let err = Settings::select(parse(SAMPLE), "DEV").unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("environments.DEV"));
        assert!(msg.contains("PRO"));
        assert!(msg.contains("TST"));
    }

    #[test]
    fn test_invalid_service_url_is_rejected() {
        let raw = SAMPLE.replace("http://geoservice.internal:8080", "not-a-url");
        let err = Settings::select(parse(&raw), "PRO").unwrap_err();
        assert!(format!("{:#}", err).contains("service_url"));
    }
}
