//! Error types for the Slack Web API client

use thiserror::Error;

/// Errors that can occur during Slack Web API operations
#[derive(Debug, Error)]
pub enum SlackError {
    /// HTTP/network-layer failure (connect, timeout, non-2xx status)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered but reported failure (`ok: false`)
    #[error("Slack API error: {message}")]
    Api {
        /// The `error` string from the response body
        message: String,
    },

    /// Missing or invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SlackError {
    /// Create an API error from an optional remote `error` string
    pub fn api(message: Option<String>) -> Self {
        Self::Api {
            message: message.unwrap_or_else(|| "unknown error".to_string()),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Check if this error happened below the API layer
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_))
    }
}
