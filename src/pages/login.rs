//! Login screen: credential check, one login call, role-based landing.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::ApiClient;
use crate::state::session::{Route, Session, SessionError};
use crate::util::storage::Storage;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Email dan password harus diisi";
pub const LOGIN_FAILED_MESSAGE: &str = "Email atau password salah";

/// Check both fields are present; returns the trimmed email.
///
/// # Errors
///
/// Returns [`MISSING_CREDENTIALS_MESSAGE`] when either field is empty.
pub fn validate_login_input<'a>(email: &'a str, password: &str) -> Result<&'a str, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS_MESSAGE);
    }
    Ok(email)
}

#[derive(Clone, Debug, Default)]
pub struct LoginPage {
    pub email: String,
    pub password: String,
    error: Option<String>,
}

impl LoginPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Log in and return where to navigate; `None` keeps the user here.
    pub async fn submit<S: Storage>(&mut self, session: &mut Session<S>, api: &ApiClient) -> Option<Route> {
        let email = match validate_login_input(&self.email, &self.password) {
            Ok(email) => email.to_owned(),
            Err(message) => {
                self.error = Some(message.to_owned());
                return None;
            }
        };
        self.error = None;

        match session.login(api, &email, &self.password).await {
            Ok(route) => {
                self.password.clear();
                Some(route)
            }
            // Logged in for this process even though it could not be saved.
            Err(SessionError::Storage(error)) => {
                tracing::warn!(%error, "session not persisted");
                self.password.clear();
                Some(session.user().map_or(Route::Home, |user| Route::for_role(user.role)))
            }
            Err(SessionError::Api(error)) => {
                self.error = Some(error.user_message(LOGIN_FAILED_MESSAGE));
                None
            }
        }
    }
}
