//! Core domain types
//!
//! This module contains the domain structures shared across the zonectl
//! tools. These types represent the operational entities: jobs tracked on
//! the zone-processing service, the watchdog flag pair, and the database
//! accounts listed in configuration.

pub mod account;
pub mod flag;
pub mod job;
