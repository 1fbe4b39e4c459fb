//! Error codes for the RTA draft backend.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in serialized responses.

use core::fmt;

use crate::domain::RejectReason;

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string. Engine
/// rejections have one code each so callers can branch on *why* an action
/// failed without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Engine rejections
    /// Action not allowed in the current phase
    WrongPhase,
    /// Player acted out of turn
    WrongTurn,
    /// Active turn has no picks left
    TurnExhausted,
    /// Monster already picked
    Duplicate,
    /// Monster is not in the operator's collection
    NotOwned,
    /// Player already has a full team
    Full,
    /// Player already banned
    AlreadyBanned,
    /// Ban target is not an opposing pick
    InvalidTarget,

    // Request Validation
    /// Snapshot violates draft invariants
    InconsistentDraft,
    /// Draft is not completed
    DraftNotCompleted,
    /// Request body is not valid JSON for the expected shape
    InvalidJson,

    // Collaborators
    /// Recommendation service failed
    RecommendationFailed,
    /// Draft archive failed
    ArchiveFailed,

    // System Errors
    /// Internal error
    InternalError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Engine rejections
            Self::WrongPhase => "WRONG_PHASE",
            Self::WrongTurn => "WRONG_TURN",
            Self::TurnExhausted => "TURN_EXHAUSTED",
            Self::Duplicate => "DUPLICATE",
            Self::NotOwned => "NOT_OWNED",
            Self::Full => "FULL",
            Self::AlreadyBanned => "ALREADY_BANNED",
            Self::InvalidTarget => "INVALID_TARGET",

            // Request Validation
            Self::InconsistentDraft => "INCONSISTENT_DRAFT",
            Self::DraftNotCompleted => "DRAFT_NOT_COMPLETED",
            Self::InvalidJson => "INVALID_JSON",

            // Collaborators
            Self::RecommendationFailed => "RECOMMENDATION_FAILED",
            Self::ArchiveFailed => "ARCHIVE_FAILED",

            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl From<RejectReason> for ErrorCode {
    fn from(reason: RejectReason) -> Self {
        match reason {
            RejectReason::WrongPhase => Self::WrongPhase,
            RejectReason::WrongTurn => Self::WrongTurn,
            RejectReason::TurnExhausted => Self::TurnExhausted,
            RejectReason::Duplicate => Self::Duplicate,
            RejectReason::NotOwned => Self::NotOwned,
            RejectReason::Full => Self::Full,
            RejectReason::AlreadyBanned => Self::AlreadyBanned,
            RejectReason::InvalidTarget => Self::InvalidTarget,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
