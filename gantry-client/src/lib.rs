//! Gantry HTTP Client
//!
//! A typed client for triggering a Jenkins job over its REST API and
//! resolving the queued trigger to the concrete build it produces.
//!
//! The client is bound to a single job endpoint, which it validates on
//! construction: a client you hold always points at a buildable job.
//!
//! # Example
//!
//! ```no_run
//! use gantry_client::{JobClient, JobEndpoint, wait_for_outcome};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let endpoint = JobEndpoint::new("https://ci.example.net/job/foo")
//!         .with_credentials("robocop", "secret");
//!     let client = JobClient::connect(endpoint).await?;
//!
//!     let queue_id = client.trigger(&[]).await?;
//!     let outcome = wait_for_outcome(
//!         &client,
//!         queue_id,
//!         Duration::from_secs(10),
//!         Duration::from_secs(1800),
//!     )
//!     .await?;
//!
//!     println!("build {}", outcome);
//!     Ok(())
//! }
//! ```

pub mod error;

mod endpoint;
mod poll;
mod status;
mod trigger;

// Re-export commonly used types
pub use endpoint::{Credentials, JobEndpoint};
pub use error::{ClientError, Result};
pub use gantry_core::domain::build::QueueId;
pub use poll::wait_for_outcome;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

/// HTTP client for a single buildable job
///
/// Owns the validated [`JobEndpoint`] and provides the two protocol
/// operations the tool needs:
/// - `trigger`: submit a build request and extract the queue item id
/// - `resolve`: map a queue item id to the build created from it
#[derive(Debug, Clone)]
pub struct JobClient {
    /// Validated job address plus optional credentials
    endpoint: JobEndpoint,
    /// HTTP client instance
    client: Client,
    /// Web URL reported by the job descriptor during validation
    web_url: Option<String>,
}

impl JobClient {
    /// Validate the endpoint and construct a client for it
    ///
    /// Issues one read-only descriptor query; fails with a validation error
    /// if the endpoint does not denote a buildable job.
    ///
    /// # Example
    /// ```no_run
    /// # use gantry_client::{JobClient, JobEndpoint};
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = JobClient::connect(JobEndpoint::new("https://ci.example.net/job/foo")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(endpoint: JobEndpoint) -> Result<Self> {
        Self::connect_with_client(endpoint, Client::new()).await
    }

    /// Validate the endpoint using a caller-configured HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub async fn connect_with_client(endpoint: JobEndpoint, client: Client) -> Result<Self> {
        let mut job_client = Self {
            endpoint,
            client,
            web_url: None,
        };

        let descriptor = job_client.validate().await?;
        job_client.web_url = descriptor.url;

        Ok(job_client)
    }

    /// The normalized base URL of the job
    pub fn base_url(&self) -> &str {
        self.endpoint.url()
    }

    /// The job's web URL as reported by its descriptor, if any
    pub fn web_url(&self) -> Option<&str> {
        self.web_url.as_deref()
    }

    /// Apply the configured credentials to an outgoing request
    fn authenticated(&self, request: RequestBuilder) -> RequestBuilder {
        match self.endpoint.credentials() {
            Some(credentials) => {
                request.basic_auth(&credentials.username, Some(&credentials.secret))
            }
            None => request,
        }
    }

    /// Read a JSON response, debug-logging status and full body before parsing
    ///
    /// Non-2xx statuses and malformed payloads both go through `err`, so the
    /// caller decides which error kind the response belongs to.
    async fn handle_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        err: impl Fn(String) -> ClientError,
    ) -> Result<T> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        debug!(status = %status, body = %body, "response");

        if !status.is_success() {
            return Err(err(format!("server returned status {status}")));
        }

        serde_json::from_str(&body).map_err(|e| err(format!("malformed payload: {e}")))
    }
}
