//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tresgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::TresgenResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Seed a file, creating parent directories (testing helper).
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();

        let mut current = PathBuf::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }

    fn lock_error(path: &Path) -> tresgen_core::error::TresgenError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "filesystem lock poisoned".into(),
        }
        .into()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        // A poisoned lock reads as "nothing there"; `exists` cannot fail.
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> TresgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> TresgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(path))?;

        inner.directories.retain(|d| !d.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));

        Ok(())
    }

    fn copy_dir_all(&self, src: &Path, dst: &Path) -> TresgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(src))?;

        let copies: Vec<(PathBuf, String)> = inner
            .files
            .iter()
            .filter_map(|(p, c)| {
                p.strip_prefix(src)
                    .ok()
                    .map(|rel| (dst.join(rel), c.clone()))
            })
            .collect();
        let dirs: Vec<PathBuf> = inner
            .directories
            .iter()
            .filter_map(|d| d.strip_prefix(src).ok().map(|rel| dst.join(rel)))
            .collect();

        inner.directories.extend(dirs);
        for (path, content) in copies {
            if let Some(parent) = path.parent() {
                let mut current = PathBuf::new();
                for component in parent.components() {
                    current.push(component);
                    inner.directories.insert(current.clone());
                }
            }
            inner.files.insert(path, content);
        }

        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> TresgenResult<String> {
        let inner = self.inner.read().map_err(|_| Self::lock_error(path))?;
        inner.files.get(path).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File not found".into(),
            }
            .into()
        })
    }

    fn write_file(&self, path: &Path, content: &str) -> TresgenResult<()> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_error(path))?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
