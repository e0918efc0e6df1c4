use std::error::Error as StdError;

use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::ErrorCode;
use crate::store::StoreError;

/// Application error surfaced by services and repositories.
///
/// Validation failures are normally folded into outcome values by the
/// service layer; `StoreUnavailable` is the one failure meant to reach the
/// caller as an error.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Store unavailable: {detail}")]
    StoreUnavailable {
        detail: String,
        #[source]
        source: StoreError,
    },
    #[error("Data corruption: {detail}")]
    DataCorruption {
        detail: String,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    /// Stable error code for this variant
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::StoreUnavailable { .. } => ErrorCode::StoreUnavailable,
            AppError::DataCorruption { .. } => ErrorCode::DataCorruption,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    /// Human-readable detail without the variant prefix
    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::StoreUnavailable { detail, .. }
            | AppError::DataCorruption { detail, .. }
            | AppError::Config { detail } => detail,
        }
    }

    /// Whether retrying the same request later can succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::StoreUnavailable { .. } | AppError::Conflict { .. }
        )
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn corrupted(
        detail: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::DataCorruption {
            detail: detail.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => AppError::Validation {
                code: kind.code(),
                detail,
            },
            DomainError::Conflict(kind, detail) => AppError::Conflict {
                code: kind.code(),
                detail,
            },
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::StoreUnavailable {
            detail: err.to_string(),
            source: err,
        }
    }
}
