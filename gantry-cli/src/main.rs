//! Gantry
//!
//! Trigger a Jenkins job and [optionally] wait for its result. Returns 0 on
//! success, 100/101/102 for a failed, aborted, or unrecognized build result,
//! and 1 on any error or timeout.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gantry_cli::app;
use gantry_cli::config::Config;
use gantry_cli::params;

#[derive(Parser)]
#[command(name = "gantry")]
#[command(about = "Trigger a Jenkins job and [optionally] wait for its result", long_about = None)]
struct Cli {
    /// Job URL, e.g. 'https://ci.example.net/job/test-folder/job/foo-job'
    #[arg(env = "JOB_URL")]
    job_url: String,

    /// User name, e.g. 'robocop'
    #[arg(long, env = "JOB_USER_NAME")]
    user: Option<String>,

    /// User token or password, e.g. 'secret'
    #[arg(long, visible_alias = "password", env = "JOB_USER_TOKEN")]
    token: Option<String>,

    /// Job parameter as key=value, e.g. 'color=purple'. Stackable
    #[arg(short = 'p', long = "param", value_name = "key=value", value_parser = params::parse_param)]
    params: Vec<(String, String)>,

    /// Return immediately after triggering, without waiting for the result
    #[arg(long)]
    no_wait: bool,

    /// Give up after this many seconds without a terminal build result
    #[arg(long, default_value_t = 1800, value_name = "SECONDS")]
    timeout: u64,

    /// Pause between status polls, in seconds
    #[arg(long, default_value_t = 10, value_name = "SECONDS")]
    interval: u64,

    /// Enable debug output, including full requests and responses
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "gantry=debug,gantry_cli=debug,gantry_client=debug"
    } else {
        "gantry=info,gantry_cli=info,gantry_client=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config {
        job_url: cli.job_url,
        username: cli.user,
        secret: cli.token,
        params: cli.params,
        no_wait: cli.no_wait,
        timeout: Duration::from_secs(cli.timeout),
        interval: Duration::from_secs(cli.interval),
        verbose: cli.verbose,
    };

    std::process::exit(app::run(config).await);
}
