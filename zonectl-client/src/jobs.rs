//! Job-related API endpoints

use crate::ZoneServiceClient;
use crate::error::Result;
use zonectl_core::domain::job::{JobStatus, ZoneJob};

impl ZoneServiceClient {
    /// List every job the service currently knows about
    ///
    /// This listing is the universe the CLI expands identifier filters
    /// against before a polling run.
    pub async fn list_jobs(&self) -> Result<Vec<ZoneJob>> {
        let url = format!("{}/api/zones/jobs", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get the current state of a single job
    ///
    /// # Arguments
    /// * `zt_id` - The full job identifier (not a filter)
    pub async fn job_status(&self, zt_id: &str) -> Result<JobStatus> {
        let url = format!("{}/api/zones/jobs/{}/status", self.base_url, zt_id);
        let response = self.client.get(&url).send().await?;

        let job: ZoneJob = self.handle_response(response).await?;
        Ok(job.status)
    }
}
