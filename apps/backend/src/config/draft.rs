//! Draft behaviour switches loaded from the environment.
//!
//! All flags default to on. Each accepts `1/0`, `true/false`, `yes/no` or
//! `on/off` (case-insensitive); anything else is a configuration error
//! rather than a silent default.

use std::env;

use crate::error::AppError;

/// Restrict player A's picks to the supplied collection.
pub const ENFORCE_COLLECTION_VAR: &str = "RTA_ENFORCE_COLLECTION";
/// Allow ban recommendations during the banning phase.
pub const BAN_RECOMMENDATIONS_VAR: &str = "RTA_BAN_RECOMMENDATIONS";
/// Archive finished drafts.
pub const ARCHIVE_ON_COMPLETE_VAR: &str = "RTA_ARCHIVE_ON_COMPLETE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftConfig {
    pub enforce_collection: bool,
    pub ban_recommendations: bool,
    pub archive_on_complete: bool,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            enforce_collection: true,
            ban_recommendations: true,
            archive_on_complete: true,
        }
    }
}

impl DraftConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            enforce_collection: flag(ENFORCE_COLLECTION_VAR, defaults.enforce_collection)?,
            ban_recommendations: flag(BAN_RECOMMENDATIONS_VAR, defaults.ban_recommendations)?,
            archive_on_complete: flag(ARCHIVE_ON_COMPLETE_VAR, defaults.archive_on_complete)?,
        })
    }
}

/// Read a boolean flag, falling back to `default` when unset or blank.
fn flag(name: &str, default: bool) -> Result<bool, AppError> {
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(default),
        Ok(raw) => parse_flag(&raw).ok_or_else(|| {
            AppError::config(format!(
                "Environment variable '{name}' must be a boolean, got '{raw}'"
            ))
        }),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(AppError::config(format!(
            "Environment variable '{name}' is not valid unicode: {e}"
        ))),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
