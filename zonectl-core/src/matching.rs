//! Job-identifier filter expansion
//!
//! Operators hand the polling tool partial identifiers; a filter matches
//! every known job whose identifier contains it as a substring. This is a
//! deliberately permissive legacy contract: one filter can pull in several
//! jobs. A multi-match is accepted and logged so the operator can see what
//! the filter actually selected; it is not tightened to an exact match.

use anyhow::{Result, anyhow};
use tracing::{debug, warn};

use crate::domain::job::ZoneJob;

/// Expands caller-supplied filters against the known job listing
///
/// Returns the matched identifiers in listing order, deduplicated across
/// filters.
///
/// # Errors
/// A filter matching no known job is a user-facing error; the message lists
/// the identifiers the service knows about.
pub fn expand_filters(known: &[ZoneJob], filters: &[String]) -> Result<Vec<String>> {
    let mut selected: Vec<String> = Vec::new();

    for filter in filters {
        let matches: Vec<&str> = known
            .iter()
            .filter(|job| job.zt_id.contains(filter.as_str()))
            .map(|job| job.zt_id.as_str())
            .collect();

        match matches.len() {
            0 => {
                let known_ids: Vec<&str> = known.iter().map(|j| j.zt_id.as_str()).collect();
                return Err(anyhow!(
                    "no known job matches '{}' (known jobs: {})",
                    filter,
                    known_ids.join(", ")
                ));
            }
            1 => debug!(filter = %filter, zt_id = matches[0], "filter matched one job"),
            _ => warn!(
                filter = %filter,
                matched = %matches.join(", "),
                "filter matches several jobs, all of them will be polled"
            ),
        }

        for zt_id in matches {
            if !selected.iter().any(|s| s == zt_id) {
                selected.push(zt_id.to_string());
            }
        }
    }

    Ok(selected)
}
