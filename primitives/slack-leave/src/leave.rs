//! Channel filtering and the leave loop.

use std::collections::HashSet;
use std::io::BufRead;

use crate::error::RunError;
use crate::exclusions::parse_exclusions;
use crate::slack::{Channel, ChannelDirectory};

/// Counts reported at the end of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Channels the user belonged to.
    pub fetched: usize,
    /// Channels kept because they were named in the exclusion list.
    pub excluded: usize,
    /// Channels left, or that would have been left under dry-run.
    pub left: usize,
}

/// Keeps the channels whose name is not in `exclusions`, in their original
/// order. Names are compared exactly.
pub fn filter(channels: Vec<Channel>, exclusions: &[String]) -> Vec<Channel> {
    let excluded: HashSet<&str> = exclusions.iter().map(String::as_str).collect();

    channels
        .into_iter()
        .filter(|channel| !excluded.contains(channel.name.as_str()))
        .collect()
}

/// Leaves every channel `user_id` belongs to, except the excluded ones.
///
/// Stops at the first error. Channels after a failed leave are not
/// attempted. With `dry_run` set, nothing is left and the channels that
/// would have been left are logged instead.
pub async fn run<C, R>(
    client: &C,
    user_id: &str,
    exclusions: Option<R>,
    dry_run: bool,
) -> Result<RunSummary, RunError>
where
    C: ChannelDirectory,
    R: BufRead,
{
    let channels = client.fetch_user_channels(user_id).await?;
    let fetched = channels.len();

    let excluded_names = match exclusions {
        Some(reader) => parse_exclusions(reader)?,
        None => Vec::new(),
    };
    let to_leave = filter(channels, &excluded_names);

    tracing::debug!(
        user_id,
        fetched,
        to_leave = to_leave.len(),
        "computed channels to leave"
    );

    for channel in &to_leave {
        if dry_run {
            tracing::warn!(
                "Dry-run enabled. This command will NOT make the user leave any channel."
            );
        }
        tracing::info!(channel = %channel.name, "leaving channel {}...", channel.name);
        if !dry_run {
            client.leave_channel(&channel.id).await?;
        }
    }

    tracing::info!("Finished leaving slack channels for user {user_id}");

    Ok(RunSummary {
        fetched,
        excluded: fetched - to_leave.len(),
        left: to_leave.len(),
    })
}
