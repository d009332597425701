//! Ports — trait seams between the pipeline and the outside world.
//!
//! Driven ports (`Filesystem`, `TemplateSource`) are implemented by the
//! `tresgen-adapters` crate. The driving port (`IntentCollector`) is
//! implemented by the CLI, so the pipeline can be tested headlessly with
//! synthetic intents and never drives a real prompt in tests.

use std::path::{Path, PathBuf};

use crate::domain::{ProjectIntent, TemplateKind};
use crate::error::TresgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tresgen_adapters::filesystem::LocalFilesystem` (production)
/// - `tresgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Every operation is a blocking call executed to completion; the pipeline
/// is strictly sequential.
pub trait Filesystem: Send + Sync {
    /// Check if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> TresgenResult<()>;

    /// Remove a directory and all its contents.
    fn remove_dir_all(&self, path: &Path) -> TresgenResult<()>;

    /// Recursively copy a directory tree, preserving relative structure and
    /// file executable bits where the platform supports them.
    fn copy_dir_all(&self, src: &Path, dst: &Path) -> TresgenResult<()>;

    /// Read a text file to a string.
    fn read_to_string(&self, path: &Path) -> TresgenResult<String>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> TresgenResult<()>;
}

/// Port for locating template trees.
///
/// Implemented by `tresgen_adapters::DirTemplateSource`, which probes a
/// fixed list of candidate directories.
pub trait TemplateSource: Send + Sync {
    /// Resolve the root directory of the seed tree for a template kind.
    fn resolve(&self, kind: TemplateKind) -> TresgenResult<PathBuf>;
}

/// Driving port: gather a fully-populated intent from the user.
///
/// The materializer performs no interactive prompting of its own; whatever
/// implements this trait owns the whole question flow, including the
/// destructive-overwrite confirmation.
pub trait IntentCollector {
    fn collect(&self) -> TresgenResult<ProjectIntent>;
}
