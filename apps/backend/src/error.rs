use serde::Serialize;
use thiserror::Error;

use crate::domain::RejectReason;
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::errors::ErrorCode;

/// Serializable error body shared by every response surface.
#[derive(Debug, Serialize)]
pub struct ProblemDetails {
    pub title: String,
    pub detail: String,
    pub code: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Rejected: {reason}")]
    Rejected { reason: RejectReason },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Collaborator error: {detail}")]
    Upstream { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Helper method to extract error code from any error variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::Rejected { reason } => ErrorCode::from(*reason),
            AppError::BadRequest { code, .. } => *code,
            AppError::Upstream { code, .. } => *code,
            AppError::Internal { .. } => ErrorCode::InternalError,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Helper method to extract error detail from any error variant
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::Rejected { reason } => reason.message().to_string(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::Upstream { detail, .. } => detail.clone(),
            AppError::Internal { detail } => detail.clone(),
            AppError::Config { detail } => detail.clone(),
        }
    }

    /// The engine rejection behind this error, if it is one.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            AppError::Rejected { reason } => Some(*reason),
            _ => None,
        }
    }

    pub fn problem_details(&self) -> ProblemDetails {
        let code = self.code();
        ProblemDetails {
            title: Self::humanize_code(code.as_str()),
            detail: self.detail(),
            code: code.as_str().to_string(),
        }
    }

    pub fn invalid(code: ErrorCode, detail: String) -> Self {
        Self::Validation { code, detail }
    }

    pub fn rejected(reason: RejectReason) -> Self {
        Self::Rejected { reason }
    }

    pub fn bad_request(code: ErrorCode, detail: String) -> Self {
        Self::BadRequest { code, detail }
    }

    pub fn upstream(code: ErrorCode, detail: String) -> Self {
        Self::Upstream { code, detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<RejectReason> for AppError {
    fn from(reason: RejectReason) -> Self {
        AppError::rejected(reason)
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(kind, detail) => {
                let code = match kind {
                    ValidationKind::InconsistentDraft => ErrorCode::InconsistentDraft,
                    ValidationKind::DraftNotCompleted => ErrorCode::DraftNotCompleted,
                };
                AppError::invalid(code, detail)
            }
            DomainError::Infra(kind, detail) => {
                let code = match kind {
                    InfraErrorKind::Recommendation => ErrorCode::RecommendationFailed,
                    InfraErrorKind::Archive => ErrorCode::ArchiveFailed,
                };
                AppError::upstream(code, detail)
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::bad_request(ErrorCode::InvalidJson, format!("invalid request body: {e}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::internal(format!("io error: {e}"))
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}
