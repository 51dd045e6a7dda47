//! Client configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const SESSION_DIR: &str = ".yuksekolah";
const SESSION_FILE: &str = "session.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but its value cannot be used.
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API base, without trailing slash (e.g. `https://host/api`).
    pub api_url: String,
    /// Public site origin used to build shareable registration links.
    pub app_url: String,
    /// File holding the persisted session.
    pub session_path: PathBuf,
    pub timeouts: Timeouts,
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// All optional:
    /// - `YUKSEKOLAH_API_URL`: default `http://localhost:8000/api`
    /// - `YUKSEKOLAH_APP_URL`: default `http://localhost:3000`
    /// - `YUKSEKOLAH_SESSION_FILE`: default `$HOME/.yuksekolah/session.json`
    /// - `YUKSEKOLAH_REQUEST_TIMEOUT_SECS`: default 30
    /// - `YUKSEKOLAH_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a URL lacks an http(s) scheme or
    /// a timeout is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url = parse_url("YUKSEKOLAH_API_URL", std::env::var("YUKSEKOLAH_API_URL").ok(), DEFAULT_API_URL)?;
        let app_url = parse_url("YUKSEKOLAH_APP_URL", std::env::var("YUKSEKOLAH_APP_URL").ok(), DEFAULT_APP_URL)?;
        let session_path = std::env::var("YUKSEKOLAH_SESSION_FILE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(default_session_path, PathBuf::from);
        let timeouts = Timeouts {
            request_secs: parse_secs(
                "YUKSEKOLAH_REQUEST_TIMEOUT_SECS",
                std::env::var("YUKSEKOLAH_REQUEST_TIMEOUT_SECS").ok(),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_secs(
                "YUKSEKOLAH_CONNECT_TIMEOUT_SECS",
                std::env::var("YUKSEKOLAH_CONNECT_TIMEOUT_SECS").ok(),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };

        Ok(Self { api_url, app_url, session_path, timeouts })
    }

    /// Replace the API base URL, normalizing it the same way `from_env` does.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the URL lacks an http(s) scheme.
    pub fn with_api_url(mut self, raw: &str) -> Result<Self, ConfigError> {
        self.api_url = parse_url("api_url", Some(raw.to_owned()), DEFAULT_API_URL)?;
        Ok(self)
    }
}

fn parse_url(var: &'static str, raw: Option<String>, default: &str) -> Result<String, ConfigError> {
    let value = raw.filter(|v| !v.trim().is_empty()).unwrap_or_else(|| default.to_owned());
    let value = value.trim().trim_end_matches('/').to_owned();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value)
    } else {
        Err(ConfigError::Invalid { var, value })
    }
}

fn parse_secs(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::Invalid { var, value: raw }),
    }
}

fn default_session_path() -> PathBuf {
    let home = std::env::var_os("HOME").map_or_else(|| PathBuf::from("."), PathBuf::from);
    home.join(SESSION_DIR).join(SESSION_FILE)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
