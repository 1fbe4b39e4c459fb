#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;

// Re-exports for public API
pub use config::DraftConfig;
pub use domain::{Action, DraftSnapshot, DraftState, DraftView, MonsterId, Phase, Player, RejectReason};
pub use error::{AppError, ProblemDetails};
pub use errors::ErrorCode;
pub use services::{DraftSession, InMemoryArchive, PoolOrderRecommender};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
