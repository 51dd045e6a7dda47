//! Headless page controllers, one per dashboard screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! A controller owns the data one screen shows (as [`Resource`]s) and the
//! actions the screen offers. Authenticated methods take a bearer token the
//! caller obtained from [`crate::state::session::Session::bearer`].
//!
//! DESIGN
//! ======
//! After a successful action the controller refetches its list. A failed
//! action or refetch becomes an inline [`Notice`]; data already loaded stays
//! in place. Nothing is retried.

pub mod dashboard;
pub mod login;
pub mod periods;
pub mod register;
pub mod schools;
pub mod settings;
pub mod students;
pub mod users;

use crate::net::error::ApiError;
use crate::state::resource::Resource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Inline banner shown above a page's content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    #[must_use]
    pub fn from_error(error: &ApiError, fallback: &str) -> Self {
        Self::error(error.user_message(fallback))
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Apply a (re)fetch result to `resource`.
///
/// A failure on a resource that already holds data keeps the data and
/// reports through `notice` instead.
pub(crate) fn apply_refresh<T>(
    resource: &mut Resource<T>,
    notice: &mut Option<Notice>,
    result: Result<T, ApiError>,
    fallback: &str,
) {
    match result {
        Ok(value) => *resource = Resource::Ready(value),
        Err(error) => {
            tracing::warn!(%error, "page refresh failed");
            if resource.ready().is_some() {
                *notice = Some(Notice::from_error(&error, fallback));
            } else {
                *resource = Resource::Error(error.user_message(fallback));
            }
        }
    }
}

/// Case-insensitive substring match against any of `fields`.
///
/// An empty (or whitespace) query matches everything.
pub(crate) fn matches_search(fields: &[&str], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || fields.iter().any(|field| field.to_lowercase().contains(&query))
}
