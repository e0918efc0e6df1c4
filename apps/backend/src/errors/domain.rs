//! Domain-level error type used across services and repositories.
//!
//! This error type is transport- and store-agnostic. Services return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::ErrorCode;

/// Validation failure kinds. Each one is a caller error that is reported
/// back as a failed outcome, never as a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    MissingIdentity,
    InvalidFaction,
    InvalidAction,
    AlreadyInFaction,
    NotInFaction,
    AlreadyVoted,
    MissingAttackTarget,
    SelfTarget,
}

impl ValidationKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingIdentity => ErrorCode::MissingIdentity,
            Self::InvalidFaction => ErrorCode::InvalidFaction,
            Self::InvalidAction => ErrorCode::InvalidAction,
            Self::AlreadyInFaction => ErrorCode::AlreadyInFaction,
            Self::NotInFaction => ErrorCode::NotInFaction,
            Self::AlreadyVoted => ErrorCode::AlreadyVoted,
            Self::MissingAttackTarget => ErrorCode::MissingAttackTarget,
            Self::SelfTarget => ErrorCode::SelfTarget,
        }
    }
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    OptimisticLock,
}

impl ConflictKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::OptimisticLock => ErrorCode::OptimisticLock,
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    /// User-facing explanation carried by the error.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d) | DomainError::Conflict(_, d) => d,
        }
    }
}
