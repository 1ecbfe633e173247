//! Client configuration loaded from the environment

use std::env;
use std::time::Duration;

use url::Url;

/// Backend base URL, e.g. `http://localhost:8000`. Unset runs offline.
pub const API_URL_VAR: &str = "CHARSHEET_API_URL";

/// Per-lookup timeout in milliseconds
pub const REQUEST_TIMEOUT_VAR: &str = "CHARSHEET_REQUEST_TIMEOUT_MS";

/// Default request timeout in milliseconds (10 seconds)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Get the request timeout from environment variable or use default
pub fn get_request_timeout_ms() -> u64 {
    parse_timeout_ms(env::var(REQUEST_TIMEOUT_VAR).ok().as_deref())
}

fn parse_timeout_ms(raw: Option<&str>) -> u64 {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => DEFAULT_REQUEST_TIMEOUT_MS,
        Some(raw) => match raw.parse::<u64>() {
            Ok(ms) if ms > 0 => ms,
            _ => {
                tracing::warn!(
                    value = raw,
                    default_ms = DEFAULT_REQUEST_TIMEOUT_MS,
                    "Invalid {}, using default",
                    REQUEST_TIMEOUT_VAR
                );
                DEFAULT_REQUEST_TIMEOUT_MS
            }
        },
    }
}

fn parse_api_url(raw: Option<&str>) -> Option<Url> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match Url::parse(raw) {
        Ok(url) if !url.cannot_be_a_base() => Some(url),
        Ok(_) => {
            tracing::warn!(value = raw, "{} is not a base URL, running offline", API_URL_VAR);
            None
        }
        Err(e) => {
            tracing::warn!(value = raw, error = %e, "Invalid {}, running offline", API_URL_VAR);
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL; `None` selects the offline backend
    pub api_url: Option<Url>,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_url: parse_api_url(env::var(API_URL_VAR).ok().as_deref()),
            request_timeout: Duration::from_millis(get_request_timeout_ms()),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.api_url.is_none()
    }

    /// Request timeout in whole milliseconds, saturating at `u64::MAX`
    pub fn request_timeout_ms(&self) -> u64 {
        u64::try_from(self.request_timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}
