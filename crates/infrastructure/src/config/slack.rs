//! Slack Web API configuration.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Slack Web API configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Bearer credential for the workspace (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_token: Option<SecretString>,

    /// Web API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field(
                "api_token",
                &if self.api_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://slack.com/api".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SlackConfig {
    /// Get the API token as a string reference (for API calls)
    #[must_use]
    pub fn api_token_str(&self) -> Option<&str> {
        self.api_token.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Build the client configuration for the integration crate
    #[must_use]
    pub fn to_client_config(&self) -> integration_slack::SlackClientConfig {
        integration_slack::SlackClientConfig {
            api_token: self.api_token_str().unwrap_or_default().to_string(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
