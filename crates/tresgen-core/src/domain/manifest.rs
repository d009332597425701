//! The project manifest (`package.json`) model.
//!
//! A manifest is kept as an ordered JSON object rather than a struct with
//! fixed fields: templates carry keys this tool knows nothing about
//! (`version`, `private`, `type`, ...) and those must round-trip untouched,
//! in their original position. serde_json is built with `preserve_order`
//! so the map is insertion-ordered.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level sections the merge writes into.
const DEPENDENCIES: &str = "dependencies";
const DEV_DEPENDENCIES: &str = "devDependencies";
const SCRIPTS: &str = "scripts";

/// A parsed `package.json`.
///
/// Invariant: the root is always a JSON object. Section accessors create
/// missing sections on first write; reads never mutate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    root: Map<String, Value>,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    ///
    /// Fails if the text is not valid JSON or the top level is not an object.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize with 2-space indentation and a trailing newline — the
    /// formatting npm itself writes, so generated manifests diff cleanly.
    pub fn to_json_pretty(&self) -> String {
        let mut out = serde_json::to_string_pretty(&self.root)
            .unwrap_or_else(|_| String::from("{}"));
        out.push('\n');
        out
    }

    // ── name ──────────────────────────────────────────────────────────────

    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    /// Overwrite the package name. If the key already exists it keeps its
    /// position; otherwise it is appended.
    pub fn set_name(&mut self, name: &str) {
        self.root.insert("name".into(), Value::String(name.into()));
    }

    // ── section writes ────────────────────────────────────────────────────

    pub fn insert_dependency(&mut self, name: &str, version: &str) {
        self.section_mut(DEPENDENCIES)
            .insert(name.into(), Value::String(version.into()));
    }

    pub fn insert_dev_dependency(&mut self, name: &str, version: &str) {
        self.section_mut(DEV_DEPENDENCIES)
            .insert(name.into(), Value::String(version.into()));
    }

    pub fn insert_script(&mut self, name: &str, command: &str) {
        self.section_mut(SCRIPTS)
            .insert(name.into(), Value::String(command.into()));
    }

    // ── section reads ─────────────────────────────────────────────────────

    pub fn dependency(&self, name: &str) -> Option<&str> {
        self.section_value(DEPENDENCIES, name)
    }

    pub fn dev_dependency(&self, name: &str) -> Option<&str> {
        self.section_value(DEV_DEPENDENCIES, name)
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.section_value(SCRIPTS, name)
    }

    /// Keys of a section, in order. Empty when the section is absent.
    pub fn section_keys(&self, section: &str) -> Vec<&str> {
        self.root
            .get(section)
            .and_then(Value::as_object)
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Raw access to an arbitrary top-level field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn section_mut(&mut self, section: &str) -> &mut Map<String, Value> {
        let entry = self
            .root
            .entry(section.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        // A template shipping e.g. `"dependencies": null` is malformed;
        // replace it rather than panic.
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        entry.as_object_mut().unwrap_or_else(|| unreachable!())
    }

    fn section_value(&self, section: &str, name: &str) -> Option<&str> {
        self.root
            .get(section)?
            .as_object()?
            .get(name)?
            .as_str()
    }
}
