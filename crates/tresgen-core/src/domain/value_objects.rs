//! Domain value objects: TemplateKind and PackageManager.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers. The dependency tables
//! keyed on `TemplateKind` live in `merge.rs`, not here.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TemplateKind ──────────────────────────────────────────────────────────────

/// A supported template flavor.
///
/// Each variant maps to one read-only seed directory under `templates/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Vue,
    Nuxt,
}

impl TemplateKind {
    /// All variants, in prompt display order.
    pub const ALL: &'static [TemplateKind] = &[Self::Vue, Self::Nuxt];

    /// Directory name of the seed tree for this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vue => "vue",
            Self::Nuxt => "nuxt",
        }
    }

    /// Human title shown in the template picker.
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Vue => "Vue + Vite",
            Self::Nuxt => "Nuxt",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Vue => "Vue 3 with Vite build tool",
            Self::Nuxt => "Nuxt 3 with TresJS module",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vue" | "vite" => Ok(Self::Vue),
            "nuxt" => Ok(Self::Nuxt),
            other => Err(DomainError::UnknownTemplate(other.into())),
        }
    }
}

// ── PackageManager ────────────────────────────────────────────────────────────

/// The package manager that invoked the wizard.
///
/// Detection is advisory only: it selects which install/run command text is
/// printed at the end of a run, and never changes materialization behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
        }
    }

    /// Sniff the package manager from the `npm_config_user_agent` value
    /// npm-family tools export (e.g. `pnpm/9.12.0 npm/? node/v22.9.0`).
    ///
    /// Falls back to `Npm` when the hint is absent or unrecognized.
    pub fn from_user_agent(user_agent: Option<&str>) -> Self {
        let ua = user_agent.unwrap_or_default();
        if ua.contains("yarn") {
            Self::Yarn
        } else if ua.contains("pnpm") {
            Self::Pnpm
        } else {
            Self::Npm
        }
    }

    /// Command the user should run to install dependencies.
    pub const fn install_command(&self) -> &'static str {
        match self {
            Self::Npm => "npm install",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm install",
        }
    }

    /// Command the user should run to start the dev server.
    pub const fn run_command(&self) -> &'static str {
        match self {
            Self::Npm => "npm run dev",
            Self::Yarn => "yarn dev",
            Self::Pnpm => "pnpm dev",
        }
    }
}

impl Default for PackageManager {
    fn default() -> Self {
        Self::Npm
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageManager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "npm" => Ok(Self::Npm),
            "yarn" => Ok(Self::Yarn),
            "pnpm" => Ok(Self::Pnpm),
            other => Err(DomainError::UnknownPackageManager(other.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_kind_display_is_lowercase() {
        assert_eq!(TemplateKind::Vue.to_string(), "vue");
        assert_eq!(TemplateKind::Nuxt.to_string(), "nuxt");
    }

    #[test]
    fn template_kind_from_str_accepts_aliases() {
        assert_eq!("vue".parse::<TemplateKind>().unwrap(), TemplateKind::Vue);
        assert_eq!("VITE".parse::<TemplateKind>().unwrap(), TemplateKind::Vue);
        assert_eq!("Nuxt".parse::<TemplateKind>().unwrap(), TemplateKind::Nuxt);
    }

    #[test]
    fn template_kind_from_str_unknown_errors() {
        assert!("svelte".parse::<TemplateKind>().is_err());
        assert!("".parse::<TemplateKind>().is_err());
    }

    #[test]
    fn user_agent_detection() {
        assert_eq!(
            PackageManager::from_user_agent(Some("yarn/1.22.22 npm/? node/v20")),
            PackageManager::Yarn
        );
        assert_eq!(
            PackageManager::from_user_agent(Some("pnpm/9.12.0 npm/? node/v22")),
            PackageManager::Pnpm
        );
        assert_eq!(
            PackageManager::from_user_agent(Some("npm/10.8.2 node/v22")),
            PackageManager::Npm
        );
        assert_eq!(PackageManager::from_user_agent(None), PackageManager::Npm);
    }

    #[test]
    fn install_and_run_commands() {
        assert_eq!(PackageManager::Npm.install_command(), "npm install");
        assert_eq!(PackageManager::Yarn.install_command(), "yarn");
        assert_eq!(PackageManager::Pnpm.run_command(), "pnpm dev");
        assert_eq!(PackageManager::Npm.run_command(), "npm run dev");
    }
}
