//! The project intent — the fully-resolved set of user choices driving one
//! materialization run.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::name::validate_name;
use crate::domain::value_objects::{PackageManager, TemplateKind};

/// Immutable description of what to materialize.
///
/// Built once by the collector (CLI layer) and consumed exactly once by the
/// materializer. The name is validated at construction; the pipeline
/// re-checks it before touching the filesystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectIntent {
    name: String,
    template: TemplateKind,
    eslint: bool,
    packages: Vec<String>,
    package_manager: PackageManager,
}

impl ProjectIntent {
    pub fn builder() -> ProjectIntentBuilder {
        ProjectIntentBuilder::default()
    }

    /// Validated package identifier; also the target directory name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn template(&self) -> TemplateKind {
        self.template
    }

    pub fn eslint_enabled(&self) -> bool {
        self.eslint
    }

    /// Ecosystem package keys (or literal dependency names for keys the
    /// catalog does not know).
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }
}

/// Fallible builder for [`ProjectIntent`].
#[derive(Debug, Default)]
pub struct ProjectIntentBuilder {
    name: Option<String>,
    template: Option<TemplateKind>,
    eslint: bool,
    packages: Vec<String>,
    package_manager: PackageManager,
}

impl ProjectIntentBuilder {
    /// Set the project name. Rejects anything that is not a legal package
    /// identifier.
    pub fn name(mut self, name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = Some(name);
        Ok(self)
    }

    pub fn template(mut self, template: TemplateKind) -> Self {
        self.template = Some(template);
        self
    }

    pub fn eslint(mut self, enabled: bool) -> Self {
        self.eslint = enabled;
        self
    }

    pub fn packages(mut self, packages: Vec<String>) -> Self {
        self.packages = packages;
        self
    }

    pub fn package_manager(mut self, pm: PackageManager) -> Self {
        self.package_manager = pm;
        self
    }

    pub fn build(self) -> Result<ProjectIntent, DomainError> {
        let name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "name" })?;
        let template = self
            .template
            .ok_or(DomainError::MissingRequiredField { field: "template" })?;

        Ok(ProjectIntent {
            name,
            template,
            eslint: self.eslint,
            packages: self.packages,
            package_manager: self.package_manager,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_full() {
        let intent = ProjectIntent::builder()
            .name("demo-app")
            .unwrap()
            .template(TemplateKind::Vue)
            .eslint(true)
            .packages(vec!["cientos".into()])
            .package_manager(PackageManager::Pnpm)
            .build()
            .unwrap();

        assert_eq!(intent.name(), "demo-app");
        assert_eq!(intent.template(), TemplateKind::Vue);
        assert!(intent.eslint_enabled());
        assert_eq!(intent.packages(), ["cientos".to_string()]);
        assert_eq!(intent.package_manager(), PackageManager::Pnpm);
    }

    #[test]
    fn builder_rejects_invalid_name() {
        assert!(ProjectIntent::builder().name("Bad Name").is_err());
        assert!(ProjectIntent::builder().name(".hidden").is_err());
    }

    #[test]
    fn builder_requires_name_and_template() {
        assert!(matches!(
            ProjectIntent::builder().template(TemplateKind::Vue).build(),
            Err(DomainError::MissingRequiredField { field: "name" })
        ));
        assert!(matches!(
            ProjectIntent::builder().name("ok").unwrap().build(),
            Err(DomainError::MissingRequiredField { field: "template" })
        ));
    }

    #[test]
    fn defaults_are_no_lint_no_packages_npm() {
        let intent = ProjectIntent::builder()
            .name("demo")
            .unwrap()
            .template(TemplateKind::Nuxt)
            .build()
            .unwrap();
        assert!(!intent.eslint_enabled());
        assert!(intent.packages().is_empty());
        assert_eq!(intent.package_manager(), PackageManager::Npm);
    }
}
