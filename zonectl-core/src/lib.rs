//! Zonectl Core
//!
//! Core types and logic for the zonectl operations tooling.
//!
//! This crate contains:
//! - Domain types: zone jobs, watchdog flag states, account entries
//! - Polling: bounded status polling against an abstract probe
//! - Matching: permissive expansion of job-identifier filters
//! - Watchdog: the marker-file flag toggle

pub mod domain;
pub mod matching;
pub mod poll;
pub mod watchdog;
