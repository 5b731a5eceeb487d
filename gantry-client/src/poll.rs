//! Poll loop
//!
//! Drives repeated queue-to-build resolution until the build reaches a
//! terminal state or the deadline elapses.

use std::time::Duration;

use tokio::time::{Instant, sleep};
use tracing::{info, warn};

use crate::JobClient;
use crate::error::Result;
use gantry_core::domain::build::QueueId;
use gantry_core::domain::outcome::PollOutcome;

/// Poll the job until the build created from `queue_id` finishes
///
/// One resolve call per tick, a constant sleep in between: no jitter, no
/// backoff. The deadline is checked at the top of every tick, before the
/// resolve call, so an elapsed deadline wins over whatever the previous
/// tick observed.
///
/// # Returns
/// A terminal [`PollOutcome`], including [`PollOutcome::TimedOut`] when the
/// deadline elapses first. Transport and payload failures surface as fetch
/// errors.
pub async fn wait_for_outcome(
    client: &JobClient,
    queue_id: QueueId,
    interval: Duration,
    timeout: Duration,
) -> Result<PollOutcome> {
    let started = Instant::now();

    info!(
        "waiting for queue item {} (interval {:?}, timeout {:?})",
        queue_id, interval, timeout
    );

    loop {
        if started.elapsed() > timeout {
            warn!("no terminal build state within {:?}", timeout);
            return Ok(PollOutcome::TimedOut);
        }

        let outcome = match client.resolve(queue_id).await? {
            None => PollOutcome::StillQueued,
            Some(build) => match build.result {
                None => PollOutcome::StillRunning(build.id),
                Some(result) => PollOutcome::from_result(&result),
            },
        };

        info!("{}", outcome);

        if outcome.is_terminal() {
            return Ok(outcome);
        }

        sleep(interval).await;
    }
}
