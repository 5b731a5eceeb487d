//! Error types for the Gantry client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the CI server
///
/// Every variant is fatal for the run and maps to the generic error exit
/// code. Job-reported terminal states (failed, aborted, unknown) are normal
/// observations, not errors, and never appear here.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The target endpoint is not a buildable job descriptor
    #[error("endpoint validation failed: {message}")]
    Validation {
        /// What the validation probe observed
        message: String,
    },

    /// The server rejected the trigger request
    #[error("trigger rejected (status {status}): {body}")]
    TriggerRejected {
        /// HTTP status code
        status: u16,
        /// Response body returned by the server
        body: String,
    },

    /// The trigger call failed or its response lacked a queue reference
    #[error("trigger failed: {message}")]
    Trigger {
        /// What went wrong
        message: String,
    },

    /// A poll-time status query failed or returned an unexpected payload
    #[error("status fetch failed: {message}")]
    Fetch {
        /// What went wrong
        message: String,
    },
}

impl ClientError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a trigger error from a rejecting HTTP response
    pub fn rejected(status: u16, body: impl Into<String>) -> Self {
        Self::TriggerRejected {
            status,
            body: body.into(),
        }
    }

    /// Create a trigger error
    pub fn trigger(message: impl Into<String>) -> Self {
        Self::Trigger {
            message: message.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Check if this error came from the trigger step
    pub fn is_trigger(&self) -> bool {
        matches!(self, Self::Trigger { .. } | Self::TriggerRejected { .. })
    }

    /// Check if this error came from endpoint validation
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this error came from a poll-time status query
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_carries_status_and_body() {
        let err = ClientError::rejected(409, "job disabled");
        assert!(err.is_trigger());
        assert_eq!(
            err.to_string(),
            "trigger rejected (status 409): job disabled"
        );
    }

    #[test]
    fn test_kind_predicates() {
        assert!(ClientError::validation("not buildable").is_validation());
        assert!(ClientError::trigger("no Location header").is_trigger());
        assert!(ClientError::fetch("malformed listing").is_fetch());
        assert!(!ClientError::fetch("malformed listing").is_trigger());
    }
}
