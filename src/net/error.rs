//! Error taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is reduced to one user-facing string at the call site via
//! [`ApiError::user_message`]. The variants exist so callers can branch on
//! the few cases that matter (HTTP 404 on link lookup, HTTP 409 on
//! registration) and so logs carry the technical detail.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Shown for connectivity and decode failures.
pub const GENERIC_FAILURE_MESSAGE: &str = "Terjadi kesalahan. Silakan coba lagi.";
/// Shown when an authenticated call is attempted without a session.
pub const SESSION_REQUIRED_MESSAGE: &str = "Sesi tidak ditemukan. Silakan login kembali.";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network request failed: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    /// A 2xx body did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    Decode(String),

    /// No bearer token is held; nothing was sent.
    #[error("not authenticated")]
    Unauthenticated,

    /// A period link token with characters outside `[A-Za-z0-9_-]`; nothing was sent.
    #[error("malformed link token: {0:?}")]
    InvalidLinkToken(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    /// Build a status error, pulling the server message out of the body.
    #[must_use]
    pub fn from_status(status: u16, body: &Value) -> Self {
        Self::Status { status, message: server_message(body) }
    }

    /// HTTP status code, when the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }

    /// HTTP 404, or a link token the server could never have issued.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::InvalidLinkToken(_)) || self.status() == Some(404)
    }

    /// Reduce the error to the string shown inline.
    ///
    /// A server-supplied message wins; a bare non-2xx status falls back to
    /// `fallback`; transport and decode failures use a generic message.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            Self::Status { message: None, .. } | Self::InvalidLinkToken(_) => fallback.to_owned(),
            Self::Unauthenticated => SESSION_REQUIRED_MESSAGE.to_owned(),
            Self::Network(_) | Self::Decode(_) | Self::HttpClientBuild(_) => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

/// Extract `message`, then `error`, from a JSON error body.
pub(crate) fn server_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}
