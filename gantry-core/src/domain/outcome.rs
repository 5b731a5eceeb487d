//! Poll outcomes and the exit-code mapping

use crate::domain::build::BuildResult;

/// Exit code for a build that finished with SUCCESS, and for no-wait mode
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for validation, trigger, and fetch errors, and for a timeout
pub const EXIT_FATAL: i32 = 1;
/// Exit code for a build that finished with FAILURE
pub const EXIT_FAILURE: i32 = 100;
/// Exit code for a build that was aborted
pub const EXIT_ABORTED: i32 = 101;
/// Exit code for a build that finished with an unrecognized status
pub const EXIT_UNKNOWN_RESULT: i32 = 102;

/// What a single poll tick observed
///
/// Produced once per tick and consumed immediately by the poll loop; only
/// terminal variants escape the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// No build matching the queue item exists yet
    StillQueued,
    /// A matching build exists but has not finished; carries the build id
    StillRunning(String),
    Succeeded,
    Failed,
    Aborted,
    /// The build finished with a status outside the known terminal set
    UnknownResult(String),
    /// The deadline elapsed before a terminal result was observed
    TimedOut,
}

impl PollOutcome {
    /// Map a terminal build result to the outcome it ends the loop with
    pub fn from_result(result: &BuildResult) -> Self {
        match result {
            BuildResult::Success => PollOutcome::Succeeded,
            BuildResult::Failure => PollOutcome::Failed,
            BuildResult::Aborted => PollOutcome::Aborted,
            BuildResult::Other(status) => PollOutcome::UnknownResult(status.clone()),
        }
    }

    /// Whether this outcome ends the poll loop
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PollOutcome::StillQueued | PollOutcome::StillRunning(_))
    }

    /// Process exit code for a terminal outcome
    ///
    /// `None` while the build is still queued or running. A timeout maps to
    /// the generic fatal code: it is neither a clean success nor a result
    /// the job itself reported.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            PollOutcome::StillQueued | PollOutcome::StillRunning(_) => None,
            PollOutcome::Succeeded => Some(EXIT_SUCCESS),
            PollOutcome::Failed => Some(EXIT_FAILURE),
            PollOutcome::Aborted => Some(EXIT_ABORTED),
            PollOutcome::UnknownResult(_) => Some(EXIT_UNKNOWN_RESULT),
            PollOutcome::TimedOut => Some(EXIT_FATAL),
        }
    }
}

impl std::fmt::Display for PollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PollOutcome::StillQueued => write!(f, "still in queue"),
            PollOutcome::StillRunning(id) => write!(f, "build {} running", id),
            PollOutcome::Succeeded => write!(f, "succeeded"),
            PollOutcome::Failed => write!(f, "failed"),
            PollOutcome::Aborted => write!(f, "aborted"),
            PollOutcome::UnknownResult(status) => write!(f, "finished with status {}", status),
            PollOutcome::TimedOut => write!(f, "timed out"),
        }
    }
}
