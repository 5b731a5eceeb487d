//! Run orchestration
//!
//! Wires the pieces together: validate-and-connect, trigger, the no-wait
//! branch, the poll loop, and the exit-code mapping.

use colored::*;
use tracing::error;

use gantry_client::{JobClient, JobEndpoint, wait_for_outcome};
use gantry_core::domain::outcome::{EXIT_FATAL, EXIT_SUCCESS, PollOutcome};

use crate::config::Config;

/// Execute a full trigger-and-wait run
///
/// Returns the process exit code; every fatal condition has been logged
/// once at error severity by the time this returns.
pub async fn run(config: Config) -> i32 {
    match execute(&config).await {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            if !config.job_url.is_empty() {
                println!("{}", config.job_url.dimmed());
            }
            EXIT_FATAL
        }
    }
}

async fn execute(config: &Config) -> anyhow::Result<i32> {
    config.validate()?;

    let mut endpoint = JobEndpoint::new(&config.job_url);
    if let (Some(username), Some(secret)) = (&config.username, &config.secret) {
        endpoint = endpoint.with_credentials(username, secret);
    }

    let client = JobClient::connect(endpoint).await?;
    let queue_id = client.trigger(&config.params).await?;

    // The no-wait branch is taken before any poll state exists.
    if config.no_wait {
        println!("{}", "✓ build triggered".green());
        print_job_url(&client, config);
        return Ok(EXIT_SUCCESS);
    }

    let outcome = wait_for_outcome(&client, queue_id, config.interval, config.timeout).await?;
    let code = report(&outcome);
    print_job_url(&client, config);

    Ok(code)
}

/// Map the terminal outcome to an exit code and print the one-line verdict
fn report(outcome: &PollOutcome) -> i32 {
    match outcome {
        PollOutcome::Succeeded => println!("{}", "✓ build succeeded".green()),
        PollOutcome::Failed => println!("{}", "✗ build failed".red()),
        PollOutcome::Aborted => println!("{}", "✗ build aborted".yellow()),
        PollOutcome::UnknownResult(status) => {
            println!(
                "{}",
                format!("? build finished with status {}", status).yellow()
            )
        }
        PollOutcome::TimedOut => {
            error!("timeout: no terminal build state within the deadline")
        }
        // Non-terminal states never escape the poll loop.
        PollOutcome::StillQueued | PollOutcome::StillRunning(_) => {}
    }

    outcome.exit_code().unwrap_or(EXIT_FATAL)
}

/// Best-effort pointer to the job for humans; never fails the run
fn print_job_url(client: &JobClient, config: &Config) {
    let url = client.web_url().unwrap_or(&config.job_url);
    println!("{}", url.dimmed());
}
