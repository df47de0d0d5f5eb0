//! Slack Leave - Bulk Channel Leaver
//!
//! Leaves every Slack channel a user belongs to, except the channels listed
//! in an exclusion file.
//!
//! # Usage
//!
//! ```bash
//! # See what would be left
//! slack-leave --token-path token.txt --exclude-channels-path keep.txt \
//!     --user-id U012AB3CD --dry-run
//!
//! # Leave for real
//! slack-leave --token-path token.txt --exclude-channels-path keep.txt \
//!     --user-id U012AB3CD
//! ```
//!
//! SIGINT or SIGTERM exits immediately with status 0; a leave request in
//! flight is abandoned.

use std::fs::File;
use std::io::BufReader;

use clap::Parser;
use slack_leave::config::{Args, read_slack_token};
use slack_leave::{SlackClient, run};
use tokio::signal::unix::{SignalKind, signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    args.validate()?;

    let token = read_slack_token(&args.token_path)?;
    let exclusions = BufReader::new(File::open(&args.exclude_channels_path)?);
    let client = SlackClient::new(args.slack_config(token));

    // Set up SIGTERM handler; SIGINT comes from ctrl_c
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = run(&client, &args.user_id, Some(exclusions), args.dry_run) => {
            let summary = result?;
            tracing::info!(
                fetched = summary.fetched,
                excluded = summary.excluded,
                left = summary.left,
                dry_run = args.dry_run,
                "run complete"
            );
        }

        _ = sigterm.recv() => {
            tracing::info!("Received SIGTERM, exiting.");
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received SIGINT, exiting.");
        }
    }

    Ok(())
}
