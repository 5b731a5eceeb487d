//! Run configuration
//!
//! The validated value object handed to the run logic. The client crates
//! never read the environment or argument vectors; everything arrives
//! through this struct.

use std::time::Duration;

/// Configuration for a single trigger-and-wait run
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the job to trigger
    pub job_url: String,

    /// Basic-auth user name; credentials apply only when both halves are set
    pub username: Option<String>,

    /// Basic-auth token or password
    pub secret: Option<String>,

    /// Ordered job parameters; duplicate names are sent as-is
    pub params: Vec<(String, String)>,

    /// Exit right after a successful trigger instead of polling
    pub no_wait: bool,

    /// Deadline for the poll loop
    pub timeout: Duration,

    /// Pause between poll ticks
    pub interval: Duration,

    /// Debug-level logging, including full requests and responses
    pub verbose: bool,
}

impl Config {
    /// Creates a configuration with default timing for a job URL
    pub fn new(job_url: impl Into<String>) -> Self {
        Self {
            job_url: job_url.into(),
            username: None,
            secret: None,
            params: Vec::new(),
            no_wait: false,
            timeout: Duration::from_secs(1800),
            interval: Duration::from_secs(10),
            verbose: false,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.job_url.is_empty() {
            anyhow::bail!("job URL cannot be empty");
        }

        if !self.job_url.starts_with("http://") && !self.job_url.starts_with("https://") {
            anyhow::bail!("job URL must start with http:// or https://");
        }

        if self.interval.is_zero() {
            anyhow::bail!("interval must be greater than 0");
        }

        if self.timeout.is_zero() {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }
}
