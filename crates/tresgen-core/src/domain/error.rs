use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The proposed project name violates the package-naming rules.
    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// The template kind string did not match any known template.
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// The package-manager string did not match any known tool.
    #[error("unknown package manager: {0}")]
    UnknownPackageManager(String),

    /// A required intent field was never set.
    #[error("required field missing: {field}")]
    MissingRequiredField { field: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use lowercase letters, digits, hyphens, underscores and dots".into(),
                "Scoped names like @scope/name are allowed".into(),
                "Examples: my-tres-project, demo-app, @acme/scene".into(),
            ],
            Self::UnknownTemplate(t) => vec![
                format!("'{}' is not a known template", t),
                "Available templates:".into(),
                "  • vue  - Vue 3 with Vite build tool".into(),
                "  • nuxt - Nuxt 3 with TresJS module".into(),
            ],
            Self::UnknownPackageManager(pm) => vec![
                format!("'{}' is not a known package manager", pm),
                "Supported: npm, yarn, pnpm".into(),
            ],
            Self::MissingRequiredField { field } => {
                vec![format!("The '{}' field must be provided", field)]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::UnknownTemplate(_) => ErrorCategory::Validation,
            Self::UnknownPackageManager(_) => ErrorCategory::Validation,
            Self::MissingRequiredField { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
