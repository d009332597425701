//! Project-name validation.
//!
//! Implements npm's rules for names that are valid *for new packages*:
//! lowercase, URL-safe characters, no leading dot or underscore, at most
//! 214 characters, with `@scope/name` allowed. Pure and deterministic —
//! the same input always yields the same verdict.

use crate::domain::error::DomainError;

/// Longest name npm accepts, scope included.
const MAX_NAME_LEN: usize = 214;

/// Names that would shadow well-known files or directories.
const BLOCKLIST: &[&str] = &["node_modules", "favicon.ico"];

/// Predicate form of [`validate_name`].
pub fn is_valid_name(candidate: &str) -> bool {
    validate_name(candidate).is_ok()
}

/// Check a proposed project name against the package-naming rules.
///
/// Returns the first rule violation found, phrased for display to the user.
pub fn validate_name(candidate: &str) -> Result<(), DomainError> {
    let fail = |reason: &str| {
        Err(DomainError::InvalidName {
            name: candidate.into(),
            reason: reason.into(),
        })
    };

    if candidate.trim().is_empty() {
        return fail("name is required");
    }
    if candidate.len() > MAX_NAME_LEN {
        return fail("name cannot contain more than 214 characters");
    }
    if BLOCKLIST.contains(&candidate.to_ascii_lowercase().as_str()) {
        return fail("name is reserved");
    }

    // Scoped names: exactly one '/', both halves follow the same rules.
    if let Some(scoped) = candidate.strip_prefix('@') {
        return match scoped.split_once('/') {
            Some((scope, name)) => {
                validate_part(candidate, scope, "scope")?;
                validate_part(candidate, name, "name")
            }
            None => fail("scoped name must look like @scope/name"),
        };
    }

    validate_part(candidate, candidate, "name")
}

fn validate_part(full: &str, part: &str, what: &str) -> Result<(), DomainError> {
    let fail = |reason: String| {
        Err(DomainError::InvalidName {
            name: full.into(),
            reason,
        })
    };

    if part.is_empty() {
        return fail(format!("{what} cannot be empty"));
    }
    if part.starts_with('.') {
        return fail(format!("{what} cannot start with a period"));
    }
    if part.starts_with('_') {
        return fail(format!("{what} cannot start with an underscore"));
    }
    if part.chars().any(|c| c.is_ascii_uppercase()) {
        return fail(format!("{what} cannot contain capital letters"));
    }
    if let Some(bad) = part
        .chars()
        .find(|c| !matches!(c, 'a'..='z' | '0'..='9' | '-' | '_' | '.'))
    {
        if bad == '/' || bad == '\\' {
            return fail(format!("{what} cannot contain path separators"));
        }
        return fail(format!("{what} cannot contain '{bad}'"));
    }

    Ok(())
}
