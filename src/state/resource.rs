//! Generic asynchronous resource: loading, failed, or ready.
//!
//! DESIGN
//! ======
//! Each page holds its fetched data as a `Resource<T>` instead of separate
//! loading/error/data fields. A failed refetch of an already-ready resource
//! is reported by the page as a notice; the old data stays in place.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::net::error::ApiError;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Resource<T> {
    #[default]
    Loading,
    Error(String),
    Ready(T),
}

impl<T> Resource<T> {
    /// Reduce a fetch result, using `fallback` when the server gave no message.
    pub fn from_result(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => {
                tracing::debug!(%error, "resource load failed");
                Self::Error(error.user_message(fallback))
            }
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Self::Loading => Resource::Loading,
            Self::Error(message) => Resource::Error(message),
            Self::Ready(value) => Resource::Ready(f(value)),
        }
    }
}

/// Await a fetch and reduce it to a resource.
pub async fn load<T, F>(fetch: F, fallback: &str) -> Resource<T>
where
    F: Future<Output = Result<T, ApiError>>,
{
    Resource::from_result(fetch.await, fallback)
}

/// Like [`load`], but yields `None` if `cancel` fires first.
///
/// The owner cancels when it is torn down, so a late response is dropped
/// instead of being applied to state that no longer exists.
pub async fn load_cancellable<T, F>(cancel: &CancellationToken, fetch: F, fallback: &str) -> Option<Resource<T>>
where
    F: Future<Output = Result<T, ApiError>>,
{
    let result = fetch_cancellable(cancel, fetch).await?;
    Some(Resource::from_result(result, fallback))
}

/// Race `fetch` against `cancel`, returning the raw result unless cancelled.
pub async fn fetch_cancellable<T, F>(cancel: &CancellationToken, fetch: F) -> Option<Result<T, ApiError>>
where
    F: Future<Output = Result<T, ApiError>>,
{
    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            tracing::debug!("resource load cancelled");
            None
        }
        result = fetch => Some(result),
    }
}
