//! Trigger endpoint
//!
//! Submits a build request and extracts the queue item the server assigns
//! from the response's `Location` reference.

use reqwest::header::LOCATION;
use tracing::{debug, info};

use crate::JobClient;
use crate::error::{ClientError, Result};
use gantry_core::domain::build::QueueId;

impl JobClient {
    /// Trigger a build of the job
    ///
    /// With no parameters this posts to the plain build endpoint with an
    /// empty body; with parameters it posts a form-encoded body to the
    /// parameterized one. Parameters are sent in order, duplicate names
    /// included.
    ///
    /// # Returns
    /// The queue item id the server assigned to the pending build.
    pub async fn trigger(&self, params: &[(String, String)]) -> Result<QueueId> {
        let url = if params.is_empty() {
            format!("{}/build", self.base_url())
        } else {
            format!("{}/buildWithParameters", self.base_url())
        };

        debug!(url = %url, params = ?params, "POST trigger request");

        let mut request = self.authenticated(self.client.post(&url));
        if !params.is_empty() {
            request = request.form(params);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::trigger(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.text().await.unwrap_or_default();

        debug!(status = %status, location = ?location, body = %body, "trigger response");

        if !status.is_success() {
            return Err(ClientError::rejected(status.as_u16(), body));
        }

        let location =
            location.ok_or_else(|| ClientError::trigger("response carried no Location header"))?;

        let queue_id = parse_queue_ref(&location).ok_or_else(|| {
            ClientError::trigger(format!(
                "Location header does not reference a queue item: {location}"
            ))
        })?;

        info!("build triggered, queue item {}", queue_id);
        Ok(queue_id)
    }
}

/// Extract the queue item id from a trigger response's `Location` reference
///
/// The reference must contain a `/queue/item/<digits>` path segment.
fn parse_queue_ref(location: &str) -> Option<QueueId> {
    let (_, rest) = location.split_once("/queue/item/")?;
    let digits: &str = &rest[..rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len())];

    digits.parse().ok()
}
