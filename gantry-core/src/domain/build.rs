//! Build domain types

use serde::{Deserialize, Serialize};

/// Identifier of a queue item created by a successful trigger
pub type QueueId = u64;

/// Snapshot of a build record fetched from the server
///
/// Always a fresh server-side snapshot; never mutated locally. Once a build
/// matching a queue item has been observed, its `result` is authoritative
/// and the queue id has served its purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Build {
    pub id: String,
    pub url: String,
    pub queue_id: QueueId,
    pub result: Option<BuildResult>,
}

/// Terminal result reported by the server for a finished build
///
/// A build record with no result at all is still running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildResult {
    Success,
    Failure,
    Aborted,
    /// Any other non-empty status string the server reports
    Other(String),
}

impl BuildResult {
    /// Classify a raw status string from the server
    pub fn from_status(status: &str) -> Self {
        match status {
            "SUCCESS" => BuildResult::Success,
            "FAILURE" => BuildResult::Failure,
            "ABORTED" => BuildResult::Aborted,
            other => BuildResult::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for BuildResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildResult::Success => write!(f, "SUCCESS"),
            BuildResult::Failure => write!(f, "FAILURE"),
            BuildResult::Aborted => write!(f, "ABORTED"),
            BuildResult::Other(status) => write!(f, "{}", status),
        }
    }
}
