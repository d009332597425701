//! Core domain layer for tresgen.
//!
//! Pure business logic with no I/O: name validation, the ecosystem
//! catalog, the manifest model and the merge transformation. Filesystem
//! and prompting concerns live behind ports in the application layer.

pub mod catalog;
pub mod error;
pub mod intent;
pub mod manifest;
pub mod merge;
pub mod name;
pub mod value_objects;

// Re-exports for convenience
pub use catalog::{ECOSYSTEM_REGISTRY, EcosystemPackage};
pub use error::{DomainError, ErrorCategory};
pub use intent::{ProjectIntent, ProjectIntentBuilder};
pub use manifest::Manifest;
pub use name::{is_valid_name, validate_name};
pub use value_objects::{PackageManager, TemplateKind};
