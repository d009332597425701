//! Ecosystem package registry.
//!
//! # Design Rationale
//!
//! The list of TresJS add-on packages is a fixed table, not code-dispatch:
//! each package is described exactly once by its [`EcosystemPackage`] entry,
//! and lookup, listing, and "recommended" filtering are all O(n) scans over
//! the same slice. Adding a package means adding one entry here — no other
//! files change.

/// One optional add-on library the generated project may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcosystemPackage {
    /// Short key the user selects by (unique across the registry).
    pub key: &'static str,

    /// Full package identifier written into `dependencies`.
    pub full_name: &'static str,

    /// Human description shown next to the key in the picker.
    pub description: &'static str,

    /// Whether the package is pre-selected in the multi-select prompt.
    pub recommended: bool,
}

/// Single source of truth for the ecosystem packages.
///
/// Ordering is the display order used by the interactive picker and by
/// `recommended()`.
pub static ECOSYSTEM_REGISTRY: &[EcosystemPackage] = &[
    EcosystemPackage {
        key: "cientos",
        full_name: "@tresjs/cientos",
        description: "Collection of useful helpers and ready-made abstractions",
        recommended: true,
    },
    EcosystemPackage {
        key: "post-processing",
        full_name: "@tresjs/post-processing",
        description: "Post-processing effects for TresJS",
        recommended: false,
    },
    EcosystemPackage {
        key: "leches",
        full_name: "@tresjs/leches",
        description: "Tasty GUI controls for development",
        recommended: false,
    },
];

/// Exact-match lookup by key.
pub fn resolve(key: &str) -> Option<&'static EcosystemPackage> {
    ECOSYSTEM_REGISTRY.iter().find(|p| p.key == key)
}

/// Registry entries marked recommended, in registry order.
pub fn recommended() -> impl Iterator<Item = &'static EcosystemPackage> {
    ECOSYSTEM_REGISTRY.iter().filter(|p| p.recommended)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn resolve_known_keys() {
        assert_eq!(resolve("cientos").unwrap().full_name, "@tresjs/cientos");
        assert_eq!(
            resolve("post-processing").unwrap().full_name,
            "@tresjs/post-processing"
        );
        assert_eq!(resolve("leches").unwrap().full_name, "@tresjs/leches");
    }

    #[test]
    fn resolve_unknown_key_is_none() {
        assert!(resolve("not-a-real-package").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn lookup_is_exact_match() {
        // No fuzzy or case-insensitive matching.
        assert!(resolve("Cientos").is_none());
        assert!(resolve("@tresjs/cientos").is_none());
    }

    #[test]
    fn every_recommended_entry_resolves() {
        for pkg in recommended() {
            assert_eq!(resolve(pkg.key), Some(pkg));
        }
    }

    #[test]
    fn registry_integrity() {
        // Keys are unique and non-empty; full names are scoped identifiers.
        let keys: HashSet<_> = ECOSYSTEM_REGISTRY.iter().map(|p| p.key).collect();
        assert_eq!(keys.len(), ECOSYSTEM_REGISTRY.len());
        for pkg in ECOSYSTEM_REGISTRY {
            assert!(!pkg.key.is_empty());
            assert!(pkg.full_name.starts_with("@tresjs/"));
            assert!(!pkg.description.is_empty());
        }
    }

    #[test]
    fn cientos_is_the_default_recommendation() {
        let rec: Vec<_> = recommended().map(|p| p.key).collect();
        assert_eq!(rec, vec!["cientos"]);
    }
}
