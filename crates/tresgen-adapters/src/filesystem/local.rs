//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use tresgen_core::{application::ports::Filesystem, error::TresgenResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> TresgenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn remove_dir_all(&self, path: &Path) -> TresgenResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }

    fn copy_dir_all(&self, src: &Path, dst: &Path) -> TresgenResult<()> {
        for entry in WalkDir::new(src).follow_links(false) {
            let entry = entry.map_err(|e| {
                let at = e.path().unwrap_or(src).to_path_buf();
                let io = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("walk interrupted"));
                map_io_error(&at, io, "walk template tree")
            })?;

            let relative = entry
                .path()
                .strip_prefix(src)
                .map_err(|e| map_io_error(entry.path(), io::Error::other(e), "resolve path"))?;
            let target = dst.join(relative);

            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&target)
                    .map_err(|e| map_io_error(&target, e, "create directory"))?;
            } else {
                // fs::copy carries mode bits on unix, so executable
                // template files stay executable.
                std::fs::copy(entry.path(), &target)
                    .map_err(|e| map_io_error(&target, e, "copy file"))?;
            }
        }
        debug!(src = %src.display(), dst = %dst.display(), "copied directory tree");
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> TresgenResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> TresgenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> tresgen_core::error::TresgenError {
    use tresgen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
