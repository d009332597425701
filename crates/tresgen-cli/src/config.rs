//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, then `.tresgen.toml` in CWD, then the
//!    platform config dir)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default answers for the wizard.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Template to preselect (`vue` or `nuxt`).
    pub template: Option<String>,
    /// Default answer to the ESLint question.
    pub eslint: bool,
    /// Package manager for the printed install/run commands, overriding
    /// user-agent detection (`npm`, `yarn`, `pnpm`).
    pub package_manager: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            template: None,
            eslint: true,
            package_manager: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Root of the template collection, overriding the probe list.
    pub dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config`.  An explicit
    /// file that is missing or malformed is an error; an implicit one that is
    /// missing falls through to the next candidate.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        if let Some(path) = config_file {
            return Self::from_file(path);
        }

        for candidate in [PathBuf::from(".tresgen.toml"), Self::config_path()] {
            if candidate.is_file() {
                return Self::from_file(&candidate);
            }
        }

        Ok(Self::default())
    }

    fn from_file(path: &Path) -> CliResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            message: format!("cannot read {}", path.display()),
            source: Some(Box::new(e)),
        })?;
        toml::from_str(&text).map_err(|e| CliError::ConfigError {
            message: format!("cannot parse {}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.tresgen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "tresgen", "tresgen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".tresgen.toml"))
    }
}
