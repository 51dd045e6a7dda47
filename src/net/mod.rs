//! Networking modules for the PPDB REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves requests over HTTP, `api` maps each endpoint to a typed
//! call, `types` defines the mirrored wire schema, and `error` is the shared
//! failure taxonomy.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;
