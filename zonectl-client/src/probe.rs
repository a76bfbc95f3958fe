//! Status probe implementation
//!
//! Lets the polling loop in zonectl-core drive this client directly.

use async_trait::async_trait;
use tracing::debug;

use crate::ZoneServiceClient;
use zonectl_core::domain::job::JobStatus;
use zonectl_core::poll::{ProbeError, StatusProbe};

#[async_trait]
impl StatusProbe for ZoneServiceClient {
    async fn status(&self, zt_id: &str) -> Result<JobStatus, ProbeError> {
        debug!(%zt_id, "probing job status");
        let status = self.job_status(zt_id).await?;
        Ok(status)
    }
}
