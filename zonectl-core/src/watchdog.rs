//! Watchdog marker-file toggle
//!
//! The flag lives on disk as one of two zero-byte marker files in the
//! per-environment watchdog directory. A transition is a single rename
//! between the two names, so exactly one marker exists at any point of a
//! successful toggle. Finding neither marker means the deployment is
//! broken; the toggle never creates a marker out of nothing.
//!
//! Concurrent toggles of the same pair from two processes are not guarded
//! against; the operational assumption is one invocation at a time.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{info, warn};

use crate::domain::flag::FlagState;

/// Reads the current flag state without touching anything
///
/// # Errors
/// Fails when the directory is missing or neither marker exists.
pub fn observe(dir: &Path) -> Result<FlagState> {
    if !dir.is_dir() {
        bail!("watchdog directory {} does not exist", dir.display());
    }

    if dir.join(FlagState::Active.marker_name()).exists() {
        Ok(FlagState::Active)
    } else if dir.join(FlagState::Inactive.marker_name()).exists() {
        Ok(FlagState::Inactive)
    } else {
        bail!(
            "neither watchdog marker found in {} (expected {} or {})",
            dir.display(),
            FlagState::Active.marker_name(),
            FlagState::Inactive.marker_name()
        );
    }
}

/// Transitions the flag to `desired` and returns the state observed before
/// the call
///
/// Already in the desired state: warns and performs no rename. In the
/// opposite state: one atomic rename. Neither marker present: error, the
/// marker pair is a deployment artifact this tool never creates.
pub fn toggle(dir: &Path, desired: FlagState) -> Result<FlagState> {
    let observed = observe(dir)?;

    if observed == desired {
        warn!(
            state = %desired,
            dir = %dir.display(),
            "watchdog already in the requested state, nothing to do"
        );
        return Ok(observed);
    }

    let from = dir.join(observed.marker_name());
    let to = dir.join(desired.marker_name());
    fs::rename(&from, &to).with_context(|| {
        format!(
            "failed to rename {} to {}",
            from.display(),
            to.display()
        )
    })?;

    info!(
        from = %observed,
        to = %desired,
        dir = %dir.display(),
        "watchdog toggled"
    );

    Ok(observed)
}
