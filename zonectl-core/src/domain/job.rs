//! Zone job domain types

use serde::{Deserialize, Serialize};

/// One unit of work tracked on the zone-processing service
///
/// The identifier (`zt_id`) is an opaque token; nothing in this system
/// assumes a particular shape for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneJob {
    /// Opaque job/zone identifier
    pub zt_id: String,
    /// Human-readable label reported by the service, if any
    pub label: Option<String>,
    pub status: JobStatus,
}

impl ZoneJob {
    /// Creates a job in the pending state, mostly useful in tests
    pub fn pending(zt_id: impl Into<String>) -> Self {
        Self {
            zt_id: zt_id.into(),
            label: None,
            status: JobStatus::Pending,
        }
    }
}

/// Status of a zone job as reported by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Done,
    Error,
}

impl JobStatus {
    /// Whether this status means the job has completed successfully
    ///
    /// Only a confirmed done status removes a job from a polling run;
    /// an error status keeps the job pending until the attempt budget
    /// runs out, and the leftover set is reported to the operator.
    pub fn is_done(self) -> bool {
        matches!(self, JobStatus::Done)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JobStatus::Pending => "pending",
            JobStatus::Running => "running",
            JobStatus::Done => "done",
            JobStatus::Error => "error",
        };
        write!(f, "{}", s)
    }
}
