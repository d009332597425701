//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the materialization pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No template tree could be located for the requested kind.
    #[error("template '{kind}' not found (searched: {searched})")]
    TemplateNotFound { kind: String, searched: String },

    /// Filesystem operation failed. Steps commit directly to disk with no
    /// rollback, so the target may be left half-materialized.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The template's manifest could not be parsed as JSON.
    #[error("manifest error at {path}: {reason}")]
    ManifestError { path: PathBuf, reason: String },

    /// The user cancelled intent collection.
    #[error("operation cancelled")]
    Cancelled,

    /// An interactive prompt could not be driven.
    #[error("prompt failed: {reason}")]
    PromptFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { kind, searched } => vec![
                format!("No '{}' template directory was found", kind),
                format!("Locations searched: {}", searched),
                "Set TRESGEN_TEMPLATES_DIR to your template collection".into(),
                "Or run tresgen from the directory containing templates/".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
                "The target directory may be half-materialized; remove it and retry".into(),
            ],
            Self::ManifestError { path, .. } => vec![
                format!("Could not read the manifest at {}", path.display()),
                "The template's package.json may be corrupted".into(),
            ],
            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Interactive prompts need a terminal".into(),
                "Pass all options as flags together with --yes for headless use".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } => ErrorCategory::NotFound,
            Self::FilesystemError { .. } | Self::ManifestError { .. } => ErrorCategory::Internal,
            Self::Cancelled => ErrorCategory::Validation,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}
