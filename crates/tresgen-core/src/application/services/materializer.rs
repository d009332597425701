//! Template materialization — the effectful pipeline.
//!
//! Takes a [`ProjectIntent`] and deterministically produces a consistent
//! on-disk project:
//!
//! 1. Re-validate the name, resolve the target directory
//! 2. Remove a pre-existing target (caller has already confirmed)
//! 3. Create the target directory
//! 4. Recursively copy the template tree
//! 5. Placeholder substitution over a fixed allow-list of text files
//! 6. Parse, merge, and rewrite the manifest
//! 7. Optionally write the linter configuration
//!
//! Every step is a commit point with no rollback of prior steps: a failure
//! partway through leaves a half-materialized directory, surfaced to the
//! user rather than silently cleaned up.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateSource},
    },
    domain::{Manifest, ProjectIntent, merge, validate_name},
    error::{TresgenError, TresgenResult},
};

/// Token replaced by the project name during the substitution pass.
pub const PLACEHOLDER: &str = "{{projectName}}";

/// The only files ever opened for text substitution. Binary template
/// assets and everything else are copied byte-for-byte.
pub const SUBSTITUTION_ALLOW_LIST: &[&str] = &["package.json", "README.md"];

const MANIFEST_FILE: &str = "package.json";
const ESLINT_CONFIG_FILE: &str = ".eslintrc.json";

/// What a successful materialization did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Absolute (caller-relative) path of the created project.
    pub target: PathBuf,
    /// Whether a pre-existing directory was destroyed first.
    pub replaced_existing: bool,
}

/// The materialization pipeline over its two driven ports.
pub struct Materializer {
    filesystem: Box<dyn Filesystem>,
    templates: Box<dyn TemplateSource>,
}

impl Materializer {
    pub fn new(filesystem: Box<dyn Filesystem>, templates: Box<dyn TemplateSource>) -> Self {
        Self {
            filesystem,
            templates,
        }
    }

    /// Materialize a project under `cwd`.
    ///
    /// The intent's name was validated at construction, but the pipeline
    /// re-checks it: an intent assembled by other means must not be able to
    /// escape `cwd` via a path-shaped name.
    #[instrument(
        skip_all,
        fields(project = %intent.name(), template = %intent.template())
    )]
    pub fn materialize(
        &self,
        intent: &ProjectIntent,
        cwd: &Path,
    ) -> TresgenResult<MaterializeReport> {
        validate_name(intent.name()).map_err(TresgenError::Domain)?;

        // 1. Resolve target.
        let target = cwd.join(intent.name());
        info!(target = %target.display(), "materializing project");

        // 2. Destroy-and-recreate: never merge into an existing directory.
        let replaced_existing = self.filesystem.exists(&target);
        if replaced_existing {
            debug!("target exists, removing");
            self.filesystem.remove_dir_all(&target)?;
        }

        // 3. Fresh target directory.
        self.filesystem.create_dir_all(&target)?;

        // 4. Copy the seed tree.
        let template_root = self.templates.resolve(intent.template())?;
        debug!(template_root = %template_root.display(), "copying template tree");
        self.filesystem.copy_dir_all(&template_root, &target)?;

        // 5. Placeholder substitution.
        self.substitute_placeholders(&target, intent.name())?;

        // 6. Manifest merge.
        self.patch_manifest(&target, intent)?;

        // 7. Linter config.
        if intent.eslint_enabled() {
            self.write_eslint_config(&target)?;
        }

        info!("materialization completed");
        Ok(MaterializeReport {
            target,
            replaced_existing,
        })
    }

    // -------------------------------------------------------------------------
    // Internal steps
    // -------------------------------------------------------------------------

    /// Replace every `{{projectName}}` occurrence in the allow-listed files.
    /// Files absent from the template are skipped, not errors.
    fn substitute_placeholders(&self, target: &Path, name: &str) -> TresgenResult<()> {
        for file in SUBSTITUTION_ALLOW_LIST {
            let path = target.join(file);
            if !self.filesystem.exists(&path) {
                continue;
            }
            let content = self.filesystem.read_to_string(&path)?;
            if content.contains(PLACEHOLDER) {
                debug!(file, "substituting placeholder");
                self.filesystem
                    .write_file(&path, &content.replace(PLACEHOLDER, name))?;
            }
        }
        Ok(())
    }

    /// Load `package.json`, run the merge, write it back pretty-printed.
    fn patch_manifest(&self, target: &Path, intent: &ProjectIntent) -> TresgenResult<()> {
        let path = target.join(MANIFEST_FILE);
        let text = self.filesystem.read_to_string(&path)?;

        let base = Manifest::from_json(&text).map_err(|e| ApplicationError::ManifestError {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let merged = merge::merge(&base, intent);
        self.filesystem.write_file(&path, &merged.to_json_pretty())
    }

    /// Fixed minimal ESLint config next to the manifest.
    fn write_eslint_config(&self, target: &Path) -> TresgenResult<()> {
        let config = serde_json::json!({
            "extends": ["@tresjs/eslint-config"],
            "rules": {}
        });
        let mut text = serde_json::to_string_pretty(&config)
            .unwrap_or_else(|_| String::from("{}"));
        text.push('\n');
        self.filesystem
            .write_file(&target.join(ESLINT_CONFIG_FILE), &text)
    }
}
