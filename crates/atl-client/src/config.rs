//! Client configuration.

use std::time::Duration;

use reqwest::Url;

use crate::error::{ClientError, Result};

/// Environment variable holding the API endpoint.
pub const API_URL_ENV: &str = "ATL_API_URL";

/// Default HTTP request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Where and how to reach the record API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint every action is sent to.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Parses and validates the endpoint URL.
    pub fn new(url: &str) -> Result<Self> {
        let base_url = Url::parse(url.trim()).map_err(|e| ClientError::InvalidUrl {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl {
                url: url.to_string(),
                message: format!("unsupported scheme '{}'", base_url.scheme()),
            });
        }
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
