//! Bounded status polling
//!
//! Repeatedly checks a set of job identifiers against a status probe until
//! every job reports done or the attempt budget is exhausted. The pending
//! set only ever shrinks; a job is removed the round its probe reports a
//! confirmed done status. Exhausting the budget is an outcome, not an
//! error: the leftover set is returned for the caller to report.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::time;
use tracing::{debug, info, warn};

use crate::domain::job::JobStatus;

/// Errors raised by a status probe
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The probe could not reach or understand the service this round.
    ///
    /// The affected job stays pending and is retried on the next attempt.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The probe itself is broken (e.g. an unusable endpoint URL).
    ///
    /// Retrying cannot help; the whole polling run aborts.
    #[error("probe failure: {0}")]
    Fatal(String),
}

impl ProbeError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProbeError::Fatal(_))
    }
}

/// Source of job status, one query per job identifier
#[async_trait]
pub trait StatusProbe {
    async fn status(&self, zt_id: &str) -> Result<JobStatus, ProbeError>;
}

/// Outcome of a polling run
#[derive(Debug, Clone, Default)]
pub struct PollOutcome {
    /// Jobs that reported done within the attempt budget
    pub completed: Vec<String>,
    /// Jobs never confirmed done after the final attempt
    pub still_pending: Vec<String>,
}

impl PollOutcome {
    pub fn all_done(&self) -> bool {
        self.still_pending.is_empty()
    }
}

/// Bounded polling loop over a [`StatusProbe`]
///
/// With `max_attempts = 0` no probe is ever issued and the full input set
/// comes back as still pending. The inter-attempt sleep is skipped after
/// the last attempt and once nothing is pending.
#[derive(Debug, Clone)]
pub struct PollingLoop {
    interval: Duration,
    max_attempts: u32,
}

impl PollingLoop {
    pub fn new(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
        }
    }

    /// Runs the loop to completion
    ///
    /// # Arguments
    /// * `probe` - Status source queried once per pending job per attempt
    /// * `jobs` - Identifiers to track; may be empty
    ///
    /// # Errors
    /// Only a fatal [`ProbeError`] aborts the run. Per-round probe failures
    /// are logged and the job is treated as not yet done.
    pub async fn run(
        &self,
        probe: &impl StatusProbe,
        jobs: Vec<String>,
    ) -> Result<PollOutcome, ProbeError> {
        let mut pending = jobs;
        let mut completed = Vec::new();

        info!(
            jobs = pending.len(),
            max_attempts = self.max_attempts,
            interval_secs = self.interval.as_secs(),
            "starting polling run"
        );

        for attempt in 1..=self.max_attempts {
            if pending.is_empty() {
                break;
            }

            debug!(attempt, pending = pending.len(), "polling round");

            let mut still_pending = Vec::with_capacity(pending.len());
            for zt_id in pending {
                match probe.status(&zt_id).await {
                    Ok(status) if status.is_done() => {
                        info!(%zt_id, attempt, "job completed");
                        completed.push(zt_id);
                    }
                    Ok(status) => {
                        debug!(%zt_id, %status, "job not done yet");
                        still_pending.push(zt_id);
                    }
                    Err(e) if e.is_fatal() => return Err(e),
                    Err(e) => {
                        warn!(%zt_id, error = %e, "probe failed, keeping job pending");
                        still_pending.push(zt_id);
                    }
                }
            }
            pending = still_pending;

            if !pending.is_empty() && attempt < self.max_attempts {
                time::sleep(self.interval).await;
            }
        }

        if !pending.is_empty() {
            warn!(
                pending = pending.len(),
                "attempt budget exhausted with jobs still pending"
            );
        }

        Ok(PollOutcome {
            completed,
            still_pending: pending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Probe fed with a per-job sequence of answers; repeats the last one
    struct ScriptedProbe {
        scripts: Mutex<HashMap<String, Vec<Result<JobStatus, String>>>>,
        calls: AtomicUsize,
    }

    impl ScriptedProbe {
        fn new(scripts: Vec<(&str, Vec<Result<JobStatus, String>>)>) -> Self {
            let scripts = scripts
                .into_iter()
                .map(|(id, seq)| (id.to_string(), seq))
                .collect();
            Self {
                scripts: Mutex::new(scripts),
                calls: AtomicUsize::new(0),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl StatusProbe for ScriptedProbe {
        async fn status(&self, zt_id: &str) -> Result<JobStatus, ProbeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let mut scripts = self.scripts.lock().unwrap();
            let seq = scripts
                .get_mut(zt_id)
                .unwrap_or_else(|| panic!("probe asked about unknown job {}", zt_id));
            let answer = if seq.len() > 1 { seq.remove(0) } else { seq[0].clone() };
            answer.map_err(ProbeError::Unavailable)
        }
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_all_jobs_done_within_budget_leaves_nothing_pending() {
        let probe = ScriptedProbe::new(vec![
            ("ZT-100", vec![Ok(JobStatus::Running), Ok(JobStatus::Done)]),
            ("ZT-200", vec![Ok(JobStatus::Done)]),
        ]);
        let outcome = PollingLoop::new(Duration::ZERO, 5)
            .run(&probe, ids(&["ZT-100", "ZT-200"]))
            .await
            .unwrap();

        assert!(outcome.all_done());
        assert_eq!(outcome.completed, ids(&["ZT-200", "ZT-100"]));
    }

    #[tokio::test]
    async fn test_zero_attempts_performs_zero_probes() {
        let probe = ScriptedProbe::new(vec![("ZT-100", vec![Ok(JobStatus::Done)])]);
        let outcome = PollingLoop::new(Duration::ZERO, 0)
            .run(&probe, ids(&["ZT-100"]))
            .await
            .unwrap();

        assert_eq!(probe.call_count(), 0);
        assert!(outcome.completed.is_empty());
        assert_eq!(outcome.still_pending, ids(&["ZT-100"]));
    }

    #[tokio::test]
    async fn test_empty_input_exits_immediately() {
        let probe = ScriptedProbe::new(vec![]);
        let outcome = PollingLoop::new(Duration::from_secs(3600), 10)
            .run(&probe, Vec::new())
            .await
            .unwrap();

        assert_eq!(probe.call_count(), 0);
        assert!(outcome.all_done());
        assert!(outcome.completed.is_empty());
    }

    #[tokio::test]
    async fn test_budget_exhaustion_reports_leftovers_without_error() {
        let probe = ScriptedProbe::new(vec![
            ("ZT-100", vec![Ok(JobStatus::Done)]),
            ("ZT-200", vec![Ok(JobStatus::Running)]),
        ]);
        let outcome = PollingLoop::new(Duration::ZERO, 3)
            .run(&probe, ids(&["ZT-100", "ZT-200"]))
            .await
            .unwrap();

        assert_eq!(outcome.completed, ids(&["ZT-100"]));
        assert_eq!(outcome.still_pending, ids(&["ZT-200"]));
        // one probe for ZT-100, three for ZT-200
        assert_eq!(probe.call_count(), 4);
    }

    #[tokio::test]
    async fn test_unavailable_probe_keeps_job_pending_for_the_round() {
        let probe = ScriptedProbe::new(vec![(
            "ZT-100",
            vec![Err("connection refused".to_string()), Ok(JobStatus::Done)],
        )]);
        let outcome = PollingLoop::new(Duration::ZERO, 5)
            .run(&probe, ids(&["ZT-100"]))
            .await
            .unwrap();

        assert!(outcome.all_done());
        assert_eq!(probe.call_count(), 2);
    }

    #[tokio::test]
    async fn test_error_status_never_counts_as_done() {
        let probe = ScriptedProbe::new(vec![("ZT-100", vec![Ok(JobStatus::Error)])]);
        let outcome = PollingLoop::new(Duration::ZERO, 2)
            .run(&probe, ids(&["ZT-100"]))
            .await
            .unwrap();

        assert_eq!(outcome.still_pending, ids(&["ZT-100"]));
    }

    struct FatalProbe;

    #[async_trait]
    impl StatusProbe for FatalProbe {
        async fn status(&self, _zt_id: &str) -> Result<JobStatus, ProbeError> {
            Err(ProbeError::Fatal("bad endpoint".to_string()))
        }
    }

    #[tokio::test]
    async fn test_fatal_probe_error_aborts_the_run() {
        let result = PollingLoop::new(Duration::ZERO, 5)
            .run(&FatalProbe, ids(&["ZT-100"]))
            .await;

        assert!(matches!(result, Err(ProbeError::Fatal(_))));
    }
}
