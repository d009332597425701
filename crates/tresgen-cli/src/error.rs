//! Comprehensive error handling for the Tresgen CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use tresgen_core::error::TresgenError;

// Re-export so callers only need `use crate::error::*`.
pub use tresgen_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Comprehensive CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Target directory already exists and was not confirmed for overwrite.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `tresgen-core`.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("Scaffolding failed: {0}")]
    Core(#[from] TresgenError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectExists { path } => vec![
                format!("The directory '{}' already exists", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check your config file at ~/.config/tresgen/config.toml".into(),
                "Pass --config <FILE> to use a different file".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Get the error category for styling and log severity.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectExists { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every failure exits 1 regardless of category: wrapper scripts and CI
    /// check only success/failure, and the category distinction lives in the
    /// message, not the code.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// `true` for user-initiated cancellation, where the farewell message
    /// replaces the error display.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Core(core) if core.is_cancellation())
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {}\n", suggestion));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {}\n", self));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tresgen_core::application::ApplicationError;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn project_exists_suggests_force() {
        let err = CliError::ProjectExists {
            path: PathBuf::from("/tmp/test"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn invalid_name_suggestions_pass_through_from_core() {
        let err = CliError::Core(
            tresgen_core::domain::DomainError::InvalidName {
                name: ".hidden".into(),
                reason: "cannot start with '.'".into(),
            }
            .into(),
        );
        assert!(err.suggestions().iter().any(|s| s.contains("lowercase")));
    }

    #[test]
    fn core_errors_pass_suggestions_through() {
        let err = CliError::Core(
            ApplicationError::TemplateNotFound {
                kind: "vue".into(),
                searched: "templates".into(),
            }
            .into(),
        );
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("TRESGEN_TEMPLATES_DIR"))
        );
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn every_error_exits_one() {
        let errors = [
            CliError::Core(ApplicationError::Cancelled.into()),
            CliError::ProjectExists {
                path: PathBuf::from("/tmp/x"),
            },
            CliError::ConfigError {
                message: "bad toml".into(),
                source: None,
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "unexpected code for {err}");
        }
    }

    // ── cancellation ──────────────────────────────────────────────────────

    #[test]
    fn cancellation_detected_through_core_wrapper() {
        assert!(CliError::Core(ApplicationError::Cancelled.into()).is_cancellation());
        assert!(
            !CliError::ProjectExists {
                path: PathBuf::from("/x")
            }
            .is_cancellation()
        );
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let err = CliError::ProjectExists {
            path: PathBuf::from("/tmp/x"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let err = CliError::Core(ApplicationError::Cancelled.into());
        let s = err.format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
