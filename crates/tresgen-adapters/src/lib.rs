//! Infrastructure adapters for Tresgen.
//!
//! This crate implements the ports defined in `tresgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod template_source;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_source::DirTemplateSource;
