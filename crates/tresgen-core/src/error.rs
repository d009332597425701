//! Unified error handling for tresgen Core.
//!
//! Wraps domain and application errors behind one type with
//! user-actionable suggestions and a category for display styling.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone)]
pub enum TresgenError {
    /// Errors from the domain layer (business logic violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (pipeline failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl TresgenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Whether this was the user backing out rather than a failure.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Cancelled))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type TresgenResult<T> = Result<T, TresgenError>;
