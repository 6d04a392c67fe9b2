use std::time::Duration;

use crate::error::ClientError;

const DEFAULT_API_URL: &str = "http://localhost:3000/api";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL without a trailing slash.
    pub api_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: normalize_url(api_url.into()),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                            | Default                     |
    /// |------------------------------------|-----------------------------|
    /// | `TALENTBOARD_API_URL`              | `http://localhost:3000/api` |
    /// | `TALENTBOARD_REQUEST_TIMEOUT_SECS` | `30`                        |
    pub fn from_env() -> Result<Self, ClientError> {
        let api_url =
            std::env::var("TALENTBOARD_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());

        let request_timeout_secs = match std::env::var("TALENTBOARD_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.trim().parse().map_err(|_| {
                ClientError::Config(format!(
                    "TALENTBOARD_REQUEST_TIMEOUT_SECS must be a valid u64, got {raw:?}"
                ))
            })?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            api_url: normalize_url(api_url),
            request_timeout_secs,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn normalize_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
