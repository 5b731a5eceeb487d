//! Descriptor endpoint queries
//!
//! Read-only calls against the job's `api/json` resource: the validation
//! probe run at construction and the queue-to-build resolution scan the
//! poll loop drives.

use tracing::{debug, info};

use crate::JobClient;
use crate::error::{ClientError, Result};
use gantry_core::domain::build::{Build, QueueId};
use gantry_core::dto::job::{BuildListing, JobDescriptor};

/// Field selector bounding the poll payload to what the scan needs
const BUILDS_TREE: &str = "builds[url,id,result,queueId]";

impl JobClient {
    /// Probe the descriptor endpoint and confirm the job is buildable
    ///
    /// Precondition check only: one outbound GET, no state beyond the
    /// descriptor it returns.
    pub(crate) async fn validate(&self) -> Result<JobDescriptor> {
        let url = format!("{}/api/json", self.base_url());
        debug!(url = %url, "GET job descriptor");

        let response = self
            .authenticated(self.client.get(&url))
            .send()
            .await
            .map_err(|e| ClientError::validation(format!("HTTP request failed: {e}")))?;

        let descriptor: JobDescriptor = self
            .handle_json(response, ClientError::validation)
            .await?;

        if !descriptor.buildable {
            return Err(ClientError::validation("job is not buildable"));
        }

        info!("job endpoint validated");
        Ok(descriptor)
    }

    /// Resolve a queue item to the build created from it
    ///
    /// Fetches a bounded listing of recent builds and scans it for the
    /// first entry whose queue id matches. `None` means no such build
    /// exists yet, which is a normal observation for a freshly queued item,
    /// not an error. The server is the sole source of truth; nothing is
    /// cached between calls.
    pub async fn resolve(&self, queue_id: QueueId) -> Result<Option<Build>> {
        let url = format!("{}/api/json?tree={}", self.base_url(), BUILDS_TREE);
        debug!(url = %url, queue_id, "GET build listing");

        let response = self
            .authenticated(self.client.get(&url))
            .send()
            .await
            .map_err(|e| ClientError::fetch(format!("HTTP request failed: {e}")))?;

        let listing: BuildListing = self.handle_json(response, ClientError::fetch).await?;

        Ok(listing
            .builds
            .into_iter()
            .find(|record| record.matches(queue_id))
            .and_then(|record| record.into_build()))
    }
}
