//! Template tree lookup over a probed list of candidate directories.

use std::path::{Path, PathBuf};

use tracing::debug;

use tresgen_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::TemplateKind,
    error::TresgenResult,
};

/// Environment variable overriding the template collection root.
pub const TEMPLATES_DIR_ENV: &str = "TRESGEN_TEMPLATES_DIR";

/// Locates template seed trees on the local disk.
///
/// Resolution order:
/// 1. An explicit root passed at construction (config file)
/// 2. `$TRESGEN_TEMPLATES_DIR`
/// 3. `./templates` relative to the working directory
/// 4. `templates/` next to the running executable
/// 5. `../templates` (running from a workspace sub-directory)
///
/// The first candidate containing a directory named after the template kind
/// wins; there is no merging across candidates.
#[derive(Debug, Clone, Default)]
pub struct DirTemplateSource {
    override_root: Option<PathBuf>,
}

impl DirTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the collection root, skipping all probing except the pin itself.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            override_root: Some(root.into()),
        }
    }

    fn candidate_roots(&self) -> Vec<PathBuf> {
        if let Some(root) = &self.override_root {
            return vec![root.clone()];
        }

        let mut candidates = Vec::new();
        if let Ok(env_root) = std::env::var(TEMPLATES_DIR_ENV) {
            if !env_root.trim().is_empty() {
                candidates.push(PathBuf::from(env_root));
            }
        }
        candidates.push(PathBuf::from("templates"));
        if let Ok(exe) = std::env::current_exe() {
            if let Some(dir) = exe.parent() {
                candidates.push(dir.join("templates"));
            }
        }
        candidates.push(Path::new("..").join("templates"));
        candidates
    }
}

impl TemplateSource for DirTemplateSource {
    fn resolve(&self, kind: TemplateKind) -> TresgenResult<PathBuf> {
        let candidates = self.candidate_roots();

        for root in &candidates {
            let tree = root.join(kind.as_str());
            if tree.is_dir() {
                debug!(tree = %tree.display(), "resolved template tree");
                return Ok(tree);
            }
        }

        let searched = candidates
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(ApplicationError::TemplateNotFound {
            kind: kind.as_str().to_string(),
            searched,
        }
        .into())
    }
}
