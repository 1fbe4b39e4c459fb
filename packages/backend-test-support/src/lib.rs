//! Shared helpers for the draft crate's integration tests.

pub mod logging;
