//! Command-line configuration.

use std::path::{Path, PathBuf};

use clap::Parser;
use secrecy::SecretString;

use crate::error::ConfigError;
use crate::slack::{DEFAULT_BASE_URL, SlackConfig};

/// Leaves Slack channels in bulk.
#[derive(Parser, Debug, Clone)]
#[command(name = "slack-leave")]
#[command(about = "A simple tool to leave slack channels in bulk")]
pub struct Args {
    /// Path to a file that contains your Slack token.
    #[arg(long, env = "SLACK_LEAVE_TOKEN_PATH")]
    pub token_path: PathBuf,

    /// Path to a file that lists the channels to keep, one per line.
    #[arg(long, env = "SLACK_LEAVE_EXCLUDE_CHANNELS_PATH")]
    pub exclude_channels_path: PathBuf,

    /// Slack user ID.
    #[arg(long, env = "SLACK_LEAVE_USER_ID")]
    pub user_id: String,

    /// Run without leaving any channel.
    #[arg(long, env = "SLACK_LEAVE_DRY_RUN")]
    pub dry_run: bool,

    /// Slack Web API base URL.
    #[arg(long, env = "SLACK_LEAVE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Number of channels requested per page.
    #[arg(long, env = "SLACK_LEAVE_PAGE_LIMIT")]
    pub page_limit: Option<u32>,
}

impl Args {
    /// Checks that both input files exist and the user ID is set.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.token_path.exists() {
            return Err(ConfigError::TokenFileNotFound);
        }

        if !self.exclude_channels_path.exists() {
            return Err(ConfigError::ExcludeFileNotFound);
        }

        if self.user_id.is_empty() {
            return Err(ConfigError::InvalidUserId(self.user_id.clone()));
        }

        Ok(())
    }

    /// Builds the client configuration around an already-read token.
    pub fn slack_config(&self, token: SecretString) -> SlackConfig {
        let config = SlackConfig::new(&self.base_url, token);
        match self.page_limit {
            Some(limit) => config.with_page_limit(limit),
            None => config,
        }
    }
}

/// Reads the token file. Surrounding whitespace is dropped; a blank file is
/// rejected.
pub fn read_slack_token(path: &Path) -> Result<SecretString, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    let token = contents.trim();
    if token.is_empty() {
        return Err(ConfigError::InvalidToken);
    }
    Ok(SecretString::from(token.to_string()))
}
