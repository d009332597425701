//! Manifest merge — the pure transformation at the heart of materialization.
//!
//! Given a template's base manifest and an intent, produce the final
//! manifest: name overwritten, selected ecosystem packages added, the
//! template's TypeScript toolchain added, and the ESLint set added when
//! requested. The merge is additive: keys the template already defines for
//! an unrelated purpose are preserved, new keys are added, and a same-key
//! conflict resolves in favor of the new entry — nothing is ever dropped.
//!
//! The devDependency sets are design tables, not runtime derivation, in the
//! same registry-as-data style as `catalog.rs`.

use crate::domain::catalog;
use crate::domain::intent::ProjectIntent;
use crate::domain::manifest::Manifest;
use crate::domain::value_objects::TemplateKind;

/// Sentinel version: track the newest release at install time. Templates
/// are meant to start from current releases.
pub const LATEST: &str = "latest";

/// Every template gets a TypeScript toolchain — there is no JS-only path.
static VUE_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("typescript", LATEST),
    ("@vitejs/plugin-vue", LATEST),
    ("vue-tsc", LATEST),
    ("@types/three", LATEST),
];

static NUXT_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("typescript", LATEST),
    ("@types/three", LATEST),
];

static ESLINT_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@tresjs/eslint-config", "^1.1.0"),
    ("eslint", "^9.16.0"),
];

/// Lint commands always target the project root. The upstream behavior left
/// the target argument blank, producing a degenerate command string; this
/// is the deliberate policy replacing it.
pub const LINT_TARGET: &str = ".";

/// Merge an intent into a base manifest, returning a new manifest.
///
/// Total and pure: no I/O, never fails on a well-formed base, input
/// untouched. Running it twice with the same intent yields the same final
/// key-value content.
pub fn merge(base: &Manifest, intent: &ProjectIntent) -> Manifest {
    let mut manifest = base.clone();

    // 1. Name always comes from the intent.
    manifest.set_name(intent.name());

    // 2. Ecosystem packages. Unknown keys fall through verbatim: they are
    //    still installed, just without a friendly description.
    for key in intent.packages() {
        let dependency = catalog::resolve(key).map_or(key.as_str(), |p| p.full_name);
        manifest.insert_dependency(dependency, LATEST);
    }

    // 3. Template toolchain.
    for (name, version) in dev_dependencies_for(intent.template()) {
        manifest.insert_dev_dependency(name, version);
    }

    // 4. Linter set.
    if intent.eslint_enabled() {
        for (name, version) in ESLINT_DEV_DEPENDENCIES {
            manifest.insert_dev_dependency(name, version);
        }
        manifest.insert_script("lint", &format!("eslint {LINT_TARGET}"));
        manifest.insert_script("lint:fix", &format!("eslint {LINT_TARGET} --fix"));
    }

    manifest
}

/// The fixed devDependency table for a template kind.
pub fn dev_dependencies_for(kind: TemplateKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        TemplateKind::Vue => VUE_DEV_DEPENDENCIES,
        TemplateKind::Nuxt => NUXT_DEV_DEPENDENCIES,
    }
}
