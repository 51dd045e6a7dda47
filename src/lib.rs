//! Client library for the YukSekolah PPDB (new-student registration) API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns every entity and rule. This crate wraps its REST API
//! (`net`), keeps the signed-in session and form wizards (`state`), and
//! exposes one headless controller per dashboard screen (`pages`). The
//! `yuksekolah-cli` binary drives all of it from a terminal.

pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
