//! Slack Leave - Bulk Channel Leaver
//!
//! Removes a user from every Slack channel they belong to, except the
//! channels named in an exclusion file.
//!
//! - [`slack`] talks to the Slack Web API (paginated channel listing, leave).
//! - [`exclusions`] parses the exclusion file.
//! - [`leave`] filters the channel list and drives the leave loop.
//! - [`config`] holds the command-line arguments and pre-flight checks.

pub mod config;
pub mod error;
pub mod exclusions;
pub mod leave;
pub mod slack;

pub use error::{ConfigError, RunError, SlackError};
pub use leave::{RunSummary, filter, run};
pub use slack::{Channel, ChannelDirectory, SlackClient, SlackConfig};
