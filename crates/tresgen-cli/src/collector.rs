//! Gathering a [`ProjectIntent`] from flags, config, and prompts.
//!
//! Every wizard question can be answered three ways, in priority order:
//! a command-line flag, `--yes` (take the default), or an interactive
//! prompt.  The prompts only exist with the `interactive` feature (on by
//! default); a build without it requires every answer up front.

use tracing::debug;

use tresgen_core::{
    application::ports::IntentCollector,
    domain::{PackageManager, ProjectIntent, TemplateKind},
    error::TresgenResult,
};

/// Name used when the user just presses enter (or passes `--yes`).
pub const DEFAULT_NAME: &str = "my-tres-project";

/// Answers already given on the command line; `None` means "ask".
#[derive(Debug, Default)]
pub struct PresetAnswers {
    pub name: Option<String>,
    pub template: Option<TemplateKind>,
    pub eslint: Option<bool>,
    /// `None` when `-p` was never passed; `Some` pins the selection even if
    /// the list is empty.
    pub packages: Option<Vec<String>>,
    /// `--yes`: fill every unanswered question from its default.
    pub accept_defaults: bool,
}

/// Defaults for unanswered questions, sourced from the config file.
#[derive(Debug, Clone)]
pub struct WizardDefaults {
    pub template: TemplateKind,
    pub eslint: bool,
}

impl Default for WizardDefaults {
    fn default() -> Self {
        Self {
            template: TemplateKind::Vue,
            eslint: true,
        }
    }
}

/// Collector that fills the gaps in [`PresetAnswers`] by prompting.
pub struct InteractiveCollector {
    presets: PresetAnswers,
    defaults: WizardDefaults,
    package_manager: PackageManager,
}

impl InteractiveCollector {
    pub fn new(
        presets: PresetAnswers,
        defaults: WizardDefaults,
        package_manager: PackageManager,
    ) -> Self {
        Self {
            presets,
            defaults,
            package_manager,
        }
    }

    /// The recommended catalog entries, used as the packages default.
    fn recommended_keys() -> Vec<String> {
        tresgen_core::domain::catalog::recommended()
            .map(|p| p.key.to_string())
            .collect()
    }

    fn resolve_name(&self) -> TresgenResult<String> {
        if let Some(name) = &self.presets.name {
            return Ok(name.clone());
        }
        if self.presets.accept_defaults {
            return Ok(DEFAULT_NAME.to_string());
        }
        prompts::ask_name()
    }

    fn resolve_template(&self) -> TresgenResult<TemplateKind> {
        if let Some(template) = self.presets.template {
            return Ok(template);
        }
        if self.presets.accept_defaults {
            return Ok(self.defaults.template);
        }
        prompts::ask_template(self.defaults.template)
    }

    fn resolve_eslint(&self) -> TresgenResult<bool> {
        if let Some(eslint) = self.presets.eslint {
            return Ok(eslint);
        }
        if self.presets.accept_defaults {
            return Ok(self.defaults.eslint);
        }
        prompts::ask_eslint(self.defaults.eslint)
    }

    fn resolve_packages(&self) -> TresgenResult<Vec<String>> {
        if let Some(packages) = &self.presets.packages {
            return Ok(packages.clone());
        }
        if self.presets.accept_defaults {
            return Ok(Self::recommended_keys());
        }
        prompts::ask_packages()
    }
}

impl IntentCollector for InteractiveCollector {
    fn collect(&self) -> TresgenResult<ProjectIntent> {
        let name = self.resolve_name()?;
        let template = self.resolve_template()?;
        let eslint = self.resolve_eslint()?;
        let packages = self.resolve_packages()?;

        debug!(%name, %template, eslint, ?packages, "intent collected");

        Ok(ProjectIntent::builder()
            .name(name)?
            .template(template)
            .eslint(eslint)
            .packages(packages)
            .package_manager(self.package_manager)
            .build()?)
    }
}

// ── prompt implementations ────────────────────────────────────────────────────

#[cfg(feature = "interactive")]
mod prompts {
    use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};

    use tresgen_core::{
        application::ApplicationError,
        domain::{ECOSYSTEM_REGISTRY, TemplateKind, validate_name},
        error::TresgenResult,
    };

    use super::DEFAULT_NAME;

    fn prompt_failed(e: dialoguer::Error) -> tresgen_core::error::TresgenError {
        match e {
            // Ctrl-C / Esc inside a prompt surfaces as an interrupted read.
            dialoguer::Error::IO(io) if io.kind() == std::io::ErrorKind::Interrupted => {
                ApplicationError::Cancelled.into()
            }
            e => ApplicationError::PromptFailed {
                reason: e.to_string(),
            }
            .into(),
        }
    }

    pub fn ask_name() -> TresgenResult<String> {
        Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Project name")
            .default(DEFAULT_NAME.to_string())
            .validate_with(|input: &String| validate_name(input))
            .interact_text()
            .map_err(prompt_failed)
    }

    pub fn ask_template(default: TemplateKind) -> TresgenResult<TemplateKind> {
        let default_index = TemplateKind::ALL
            .iter()
            .position(|k| *k == default)
            .unwrap_or(0);
        let labels: Vec<String> = TemplateKind::ALL
            .iter()
            .map(|k| format!("{} - {}", k.title(), k.description()))
            .collect();

        let index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a template")
            .items(&labels)
            .default(default_index)
            .interact()
            .map_err(prompt_failed)?;

        Ok(TemplateKind::ALL[index])
    }

    pub fn ask_eslint(default: bool) -> TresgenResult<bool> {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Add ESLint configuration?")
            .default(default)
            .interact()
            .map_err(prompt_failed)
    }

    pub fn ask_packages() -> TresgenResult<Vec<String>> {
        let labels: Vec<String> = ECOSYSTEM_REGISTRY
            .iter()
            .map(|p| format!("{} - {}", p.key, p.description))
            .collect();
        let defaults: Vec<bool> = ECOSYSTEM_REGISTRY.iter().map(|p| p.recommended).collect();

        let picked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Add ecosystem packages (space to toggle)")
            .items(&labels)
            .defaults(&defaults)
            .interact()
            .map_err(prompt_failed)?;

        Ok(picked
            .into_iter()
            .map(|i| ECOSYSTEM_REGISTRY[i].key.to_string())
            .collect())
    }

}

#[cfg(not(feature = "interactive"))]
mod prompts {
    use tresgen_core::{
        application::ApplicationError,
        domain::TemplateKind,
        error::{TresgenError, TresgenResult},
    };

    fn unavailable() -> TresgenError {
        ApplicationError::PromptFailed {
            reason: "interactive prompts are not compiled into this build".into(),
        }
        .into()
    }

    pub fn ask_name() -> TresgenResult<String> {
        Err(unavailable())
    }

    pub fn ask_template(_default: TemplateKind) -> TresgenResult<TemplateKind> {
        Err(unavailable())
    }

    pub fn ask_eslint(_default: bool) -> TresgenResult<bool> {
        Err(unavailable())
    }

    pub fn ask_packages() -> TresgenResult<Vec<String>> {
        Err(unavailable())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn collector(presets: PresetAnswers) -> InteractiveCollector {
        InteractiveCollector::new(presets, WizardDefaults::default(), PackageManager::Npm)
    }

    #[test]
    fn fully_preset_answers_never_prompt() {
        let intent = collector(PresetAnswers {
            name: Some("my-scene".into()),
            template: Some(TemplateKind::Nuxt),
            eslint: Some(false),
            packages: Some(vec!["cientos".into()]),
            accept_defaults: false,
        })
        .collect()
        .unwrap();

        assert_eq!(intent.name(), "my-scene");
        assert_eq!(intent.template(), TemplateKind::Nuxt);
        assert!(!intent.eslint_enabled());
        assert_eq!(intent.packages(), ["cientos".to_string()]);
    }

    #[test]
    fn accept_defaults_fills_every_gap() {
        let intent = collector(PresetAnswers {
            accept_defaults: true,
            ..PresetAnswers::default()
        })
        .collect()
        .unwrap();

        assert_eq!(intent.name(), DEFAULT_NAME);
        assert_eq!(intent.template(), TemplateKind::Vue);
        assert!(intent.eslint_enabled());
        // defaults mirror the prompt's pre-selection: recommended packages
        assert_eq!(intent.packages(), ["cientos".to_string()]);
    }

    #[test]
    fn explicit_empty_packages_stay_empty_under_yes() {
        let intent = collector(PresetAnswers {
            packages: Some(Vec::new()),
            accept_defaults: true,
            ..PresetAnswers::default()
        })
        .collect()
        .unwrap();

        assert!(intent.packages().is_empty());
    }

    #[test]
    fn preset_invalid_name_is_rejected_at_build() {
        let err = collector(PresetAnswers {
            name: Some("Bad Name".into()),
            template: Some(TemplateKind::Vue),
            eslint: Some(false),
            packages: Some(Vec::new()),
            accept_defaults: false,
        })
        .collect()
        .unwrap_err();

        assert!(err.to_string().contains("Bad Name"));
    }
}
