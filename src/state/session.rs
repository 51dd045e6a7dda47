//! Auth-session state: bearer token plus the signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated page action obtains its token through
//! [`Session::bearer`]. After [`Session::logout`] that call fails with
//! [`ApiError::Unauthenticated`], so no request can leave with a stale token.
//! The pair is mirrored into [`Storage`] under fixed keys so a later process
//! resumes the session. No refresh, expiry, or revocation handling exists.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Role, User};
use crate::util::storage::{Storage, StorageError, save_json};

pub const TOKEN_KEY: &str = "yuksekolah_token";
pub const USER_KEY: &str = "yuksekolah_user";

/// Landing destinations after login/logout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    SuperAdminDashboard,
    SchoolAdminDashboard,
    StudentDashboard,
}

impl Route {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SuperAdminDashboard => "/super-admin/dashboard",
            Self::SchoolAdminDashboard => "/admin/dashboard",
            Self::StudentDashboard => "/student/dashboard",
        }
    }

    /// Role-specific landing page; unknown roles go home.
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::SchoolAdmin => Self::SchoolAdminDashboard,
            Role::Student => Self::StudentDashboard,
            Role::SuperAdmin => Self::SuperAdminDashboard,
            Role::Other => Self::Home,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// In-memory session mirrored to durable storage.
#[derive(Debug)]
pub struct Session<S: Storage> {
    storage: S,
    token: Option<String>,
    user: Option<User>,
}

impl<S: Storage> Session<S> {
    /// Resume a previously stored token + user pair.
    ///
    /// Both keys must be present. A user record that fails to parse clears
    /// both keys and yields an empty session.
    pub fn restore(mut storage: S) -> Self {
        let (Some(token), Some(raw_user)) = (storage.get(TOKEN_KEY), storage.get(USER_KEY)) else {
            return Self { storage, token: None, user: None };
        };

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => {
                tracing::debug!(user_id = user.id, "session restored");
                Self { storage, token: Some(token), user: Some(user) }
            }
            Err(error) => {
                tracing::warn!(%error, "discarding unreadable stored session");
                if let Err(error) = clear_keys(&mut storage) {
                    tracing::warn!(%error, "failed to clear stored session");
                }
                Self { storage, token: None, user: None }
            }
        }
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Token for an authenticated request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthenticated`] when no session is held.
    pub fn bearer(&self) -> Result<&str, ApiError> {
        self.token.as_deref().ok_or(ApiError::Unauthenticated)
    }

    /// Exchange credentials for a session and return the landing route.
    ///
    /// # Errors
    ///
    /// Returns the API failure unchanged; on failure the previous session
    /// (if any) is left untouched. Storage failures are reported after the
    /// in-memory session is already set.
    pub async fn login(&mut self, api: &ApiClient, email: &str, password: &str) -> Result<Route, SessionError> {
        let data = api.login(email, password).await?;
        let route = Route::for_role(data.user.role);
        tracing::info!(user_id = data.user.id, role = data.user.role.as_str(), "logged in");

        self.token = Some(data.token);
        self.user = Some(data.user);
        self.persist()?;
        Ok(route)
    }

    /// Re-fetch the current user from `GET /me`.
    ///
    /// # Errors
    ///
    /// Unauthenticated when no session is held; otherwise the API failure.
    pub async fn refresh_user(&mut self, api: &ApiClient) -> Result<&User, SessionError> {
        let user = api.current_user(self.bearer()?).await?;
        self.user = Some(user);
        self.persist()?;
        self.user.as_ref().ok_or(SessionError::Api(ApiError::Unauthenticated))
    }

    /// Drop the session from memory and storage; navigation goes home.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the persisted pair cannot be removed; the
    /// in-memory session is cleared regardless.
    pub fn logout(&mut self) -> Result<Route, StorageError> {
        self.token = None;
        self.user = None;
        clear_keys(&mut self.storage)?;
        tracing::info!("logged out");
        Ok(Route::Home)
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        match (&self.token, &self.user) {
            (Some(token), Some(user)) => {
                self.storage.set(TOKEN_KEY, token)?;
                save_json(&mut self.storage, USER_KEY, user)
            }
            _ => clear_keys(&mut self.storage),
        }
    }
}

fn clear_keys(storage: &mut impl Storage) -> Result<(), StorageError> {
    storage.remove(TOKEN_KEY)?;
    storage.remove(USER_KEY)
}
