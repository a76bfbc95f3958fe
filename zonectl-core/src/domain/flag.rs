//! Watchdog flag domain types
//!
//! The watchdog flag is persisted as exactly one of two zero-byte marker
//! files in a per-environment directory, distinguished purely by extension.
//! Toggling is a single rename between the two names.

use serde::{Deserialize, Serialize};

/// Marker file present while the watchdog is active
pub const MARKER_ON: &str = "xmlrpc_watchdog.on";

/// Marker file present while the watchdog is inactive
pub const MARKER_OFF: &str = "xmlrpc_watchdog.off";

/// Observable state of the watchdog flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagState {
    Active,
    Inactive,
}

impl FlagState {
    /// File name of the marker that encodes this state
    pub fn marker_name(self) -> &'static str {
        match self {
            FlagState::Active => MARKER_ON,
            FlagState::Inactive => MARKER_OFF,
        }
    }

    /// The other state of the pair
    pub fn opposite(self) -> Self {
        match self {
            FlagState::Active => FlagState::Inactive,
            FlagState::Inactive => FlagState::Active,
        }
    }
}

impl std::fmt::Display for FlagState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FlagState::Active => "active",
            FlagState::Inactive => "inactive",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_names_differ_only_by_extension() {
        assert_eq!(FlagState::Active.marker_name(), "xmlrpc_watchdog.on");
        assert_eq!(FlagState::Inactive.marker_name(), "xmlrpc_watchdog.off");
    }

    #[test]
    fn test_opposite_is_involutive() {
        assert_eq!(FlagState::Active.opposite(), FlagState::Inactive);
        assert_eq!(FlagState::Active.opposite().opposite(), FlagState::Active);
    }
}
