//! Shared helpers that are not tied to one page.

pub mod storage;
