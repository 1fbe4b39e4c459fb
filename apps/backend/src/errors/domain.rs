//! Domain-level error type used across services and collaborators.
//!
//! This error type is transport-agnostic. Engine rejections are not errors
//! (see [`crate::domain::RejectReason`]); `DomainError` covers malformed
//! caller input and collaborator failures. Service entry points return
//! `Result<T, crate::error::AppError>` and convert via `From<DomainError>`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds for caller-side input checks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Snapshot violates a draft invariant (duplicates, lengths, ban targets, turn order).
    InconsistentDraft,
    /// Draft is not in the phase an operation requires (e.g. archiving an unfinished draft).
    DraftNotCompleted,
}

/// Collaborator failure kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Recommendation,
    Archive,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation outside the engine's rejection taxonomy
    Validation(ValidationKind, String),
    /// External collaborator failures
    Infra(InfraErrorKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Infra(kind, d) => write!(f, "infra {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra(kind, detail.into())
    }
}
