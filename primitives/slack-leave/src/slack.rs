//! Slack Web API client.
//!
//! Only the two calls the leaver needs are implemented:
//! `users.conversations` (paginated) and `conversations.leave`.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::SlackError;

/// Default Slack Web API base URL.
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// A channel the user belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Channel {
    pub id: String,
    pub name: String,
}

impl Channel {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The capabilities the leave loop needs from a Slack workspace.
pub trait ChannelDirectory {
    /// Returns every channel the user belongs to, following pagination.
    fn fetch_user_channels(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Channel>, SlackError>> + Send;

    /// Removes the authenticated user from a channel.
    fn leave_channel(
        &self,
        channel_id: &str,
    ) -> impl Future<Output = Result<(), SlackError>> + Send;
}

/// Client configuration.
#[derive(Debug)]
pub struct SlackConfig {
    /// Web API base URL, with or without a trailing slash.
    pub base_url: String,
    /// Bot or user token.
    pub token: SecretString,
    /// Page size sent as `limit`; the server default applies when unset.
    pub page_limit: Option<u32>,
}

impl SlackConfig {
    pub fn new(base_url: impl Into<String>, token: SecretString) -> Self {
        Self {
            base_url: base_url.into(),
            token,
            page_limit: None,
        }
    }

    pub fn with_page_limit(mut self, limit: u32) -> Self {
        self.page_limit = Some(limit);
        self
    }
}

#[derive(Debug, Deserialize)]
struct ConversationsPage {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    channels: Vec<Channel>,
    #[serde(default)]
    response_metadata: Option<ResponseMetadata>,
}

#[derive(Debug, Deserialize)]
struct ResponseMetadata {
    #[serde(default)]
    next_cursor: String,
}

#[derive(Debug, Deserialize)]
struct LeaveResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    not_in_channel: bool,
}

/// HTTP client for the Slack Web API.
pub struct SlackClient {
    client: Client,
    config: SlackConfig,
}

impl SlackClient {
    pub fn new(config: SlackConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn api_url(&self, method: &str) -> String {
        format!("{}/{method}", self.config.base_url.trim_end_matches('/'))
    }

    /// Posts a form to a Web API method and decodes the JSON response.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        form: &[(&str, &str)],
    ) -> Result<T, SlackError> {
        let response = self
            .client
            .post(self.api_url(method))
            .bearer_auth(self.config.token.expose_secret())
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SlackError::Status(status));
        }

        Ok(response.json::<T>().await?)
    }

    async fn fetch_page(
        &self,
        user_id: &str,
        cursor: &str,
    ) -> Result<ConversationsPage, SlackError> {
        let limit = self.config.page_limit.map(|l| l.to_string());

        let mut form = vec![("user", user_id)];
        if !cursor.is_empty() {
            form.push(("cursor", cursor));
        }
        if let Some(ref limit) = limit {
            form.push(("limit", limit.as_str()));
        }

        let page: ConversationsPage = self.call("users.conversations", &form).await?;
        if !page.ok {
            return Err(api_error(page.error));
        }
        Ok(page)
    }
}

fn api_error(error: Option<String>) -> SlackError {
    SlackError::Api(error.unwrap_or_else(|| "unknown_error".to_string()))
}

impl ChannelDirectory for SlackClient {
    async fn fetch_user_channels(&self, user_id: &str) -> Result<Vec<Channel>, SlackError> {
        let mut channels = Vec::new();
        let mut cursor = String::new();

        loop {
            let page = self.fetch_page(user_id, &cursor).await?;
            tracing::debug!(
                user_id,
                cursor = %cursor,
                count = page.channels.len(),
                "fetched channel page"
            );
            channels.extend(page.channels);

            match page.response_metadata {
                Some(meta) if !meta.next_cursor.is_empty() => cursor = meta.next_cursor,
                _ => break,
            }
        }

        Ok(channels)
    }

    async fn leave_channel(&self, channel_id: &str) -> Result<(), SlackError> {
        let response: LeaveResponse = self
            .call("conversations.leave", &[("channel", channel_id)])
            .await?;

        if !response.ok {
            return Err(api_error(response.error));
        }
        if response.not_in_channel {
            tracing::debug!(channel = channel_id, "user was not in channel");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    fn client(base_url: &str) -> SlackClient {
        SlackClient::new(SlackConfig::new(base_url, token("xoxb-test")))
    }

    #[test]
    fn api_url_without_trailing_slash() {
        assert_eq!(
            client("https://slack.com/api").api_url("users.conversations"),
            "https://slack.com/api/users.conversations"
        );
    }

    #[test]
    fn api_url_with_trailing_slash() {
        assert_eq!(
            client("http://127.0.0.1:9000/").api_url("conversations.leave"),
            "http://127.0.0.1:9000/conversations.leave"
        );
    }

    #[test]
    fn config_debug_redacts_token() {
        let config = SlackConfig::new(DEFAULT_BASE_URL, token("xoxb-secret"));
        assert!(!format!("{config:?}").contains("xoxb-secret"));
    }

    #[test]
    fn page_limit_is_optional() {
        let config = SlackConfig::new(DEFAULT_BASE_URL, token("t"));
        assert_eq!(config.page_limit, None);
        assert_eq!(config.with_page_limit(200).page_limit, Some(200));
    }
}
