//! Filesystem abstraction.
//!
//! Commands touch the disk only through [`FileSystem`], so they can run
//! against [`MemFs`] in tests and [`OsFs`] in production.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{Error, Result};

/// The kind of backend behind a [`FileSystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsKind {
    /// The operating system's filesystem.
    Os,
    /// An in-memory filesystem.
    Memory,
}

/// Minimal filesystem operations used by devctl.
pub trait FileSystem: fmt::Debug {
    /// Whether `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Create `path` and all missing parents.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Read a whole file as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Write `contents` to a file, replacing it if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory is missing or the write fails.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;

    /// The backend kind.
    fn kind(&self) -> FsKind;
}

/// Whether `fs` is backed by the operating system.
#[must_use]
pub fn is_os_fs(fs: &dyn FileSystem) -> bool {
    fs.kind() == FsKind::Os
}

/// Whether `fs` is an in-memory filesystem.
#[must_use]
pub fn is_mem_fs(fs: &dyn FileSystem) -> bool {
    fs.kind() == FsKind::Memory
}

/// The operating system's filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl FileSystem for OsFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents)?;
        Ok(())
    }

    fn kind(&self) -> FsKind {
        FsKind::Os
    }
}

#[derive(Debug, Default)]
struct MemState {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, Vec<u8>>,
}

/// An in-memory filesystem.
///
/// The root directory always exists. Parents must exist before a file is
/// written, as on a real filesystem.
#[derive(Debug, Default)]
pub struct MemFs {
    state: Mutex<MemState>,
}

impl MemFs {
    /// Create an empty filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MemState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn has_dir(state: &MemState, path: &Path) -> bool {
        path.parent().is_none() || path.as_os_str().is_empty() || state.dirs.contains(path)
    }
}

impl FileSystem for MemFs {
    fn exists(&self, path: &Path) -> bool {
        let state = self.lock();
        Self::has_dir(&state, path) || state.files.contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        Self::has_dir(&self.lock(), path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut state = self.lock();
        for ancestor in path.ancestors() {
            if state.files.contains_key(ancestor) {
                return Err(Error::InvalidPath {
                    path: ancestor.to_path_buf(),
                    reason: "is a file".to_string(),
                });
            }
        }
        for ancestor in path.ancestors() {
            if ancestor.parent().is_some() && !ancestor.as_os_str().is_empty() {
                state.dirs.insert(ancestor.to_path_buf());
            }
        }
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let state = self.lock();
        let bytes = state.files.get(path).ok_or_else(|| Error::NotFound {
            resource: path.display().to_string(),
        })?;
        String::from_utf8(bytes.clone()).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let mut state = self.lock();
        if let Some(parent) = path.parent() {
            if !Self::has_dir(&state, parent) {
                return Err(Error::NotFound {
                    resource: parent.display().to_string(),
                });
            }
        }
        if state.dirs.contains(path) {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "is a directory".to_string(),
            });
        }
        state.files.insert(path.to_path_buf(), contents.to_vec());
        Ok(())
    }

    fn kind(&self) -> FsKind {
        FsKind::Memory
    }
}

/// Evaluate one level of symbolic link.
///
/// Returns the cleaned path when `path` is not a link, and the link target
/// when it is.
///
/// # Errors
///
/// Fails when `fs` is not the OS filesystem, when `path` cannot be
/// inspected, or when the link target is relative.
pub fn realpath(fs: &dyn FileSystem, path: &Path) -> Result<PathBuf> {
    if !is_os_fs(fs) {
        return Err(Error::UnsupportedFilesystem {
            operation: "realpath".to_string(),
        });
    }

    let meta = fs::symlink_metadata(path)?;
    if meta.file_type().is_symlink() {
        let target = fs::read_link(path)?;
        if !target.is_absolute() {
            return Err(Error::RelativeSymlink { path: target });
        }
        return Ok(clean(&target));
    }
    Ok(clean(path))
}

fn clean(path: &Path) -> PathBuf {
    path.components().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fs_kinds() {
        assert!(is_os_fs(&OsFs));
        assert!(!is_mem_fs(&OsFs));
        assert!(is_mem_fs(&MemFs::new()));
        assert!(!is_os_fs(&MemFs::new()));
    }

    #[test]
    fn test_mem_fs_directories() {
        let fs = MemFs::new();
        assert!(fs.is_dir(Path::new("/")));
        assert!(!fs.exists(Path::new("/a/b")));

        fs.create_dir_all(Path::new("/a/b/c")).unwrap();
        assert!(fs.is_dir(Path::new("/a")));
        assert!(fs.is_dir(Path::new("/a/b")));
        assert!(fs.is_dir(Path::new("/a/b/c")));
    }

    #[test]
    fn test_mem_fs_write_requires_parent() {
        let fs = MemFs::new();
        let err = fs.write(Path::new("/missing/file.yaml"), b"x").unwrap_err();
        assert!(err.is_not_found());

        fs.create_dir_all(Path::new("/present")).unwrap();
        fs.write(Path::new("/present/file.yaml"), b"hello").unwrap();
        assert_eq!(
            fs.read_to_string(Path::new("/present/file.yaml")).unwrap(),
            "hello"
        );
        assert!(fs.exists(Path::new("/present/file.yaml")));
        assert!(!fs.is_dir(Path::new("/present/file.yaml")));
    }

    #[test]
    fn test_mem_fs_read_missing_file() {
        let fs = MemFs::new();
        assert!(fs.read_to_string(Path::new("/nope")).unwrap_err().is_not_found());
    }

    #[test]
    fn test_mem_fs_create_dir_through_file_fails() {
        let fs = MemFs::new();
        fs.write(Path::new("/file"), b"x").unwrap();
        assert!(fs.create_dir_all(Path::new("/file/sub")).is_err());
    }

    #[test]
    fn test_os_fs_round_trip() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b");
        OsFs.create_dir_all(&nested).unwrap();
        assert!(OsFs.is_dir(&nested));

        let file = nested.join("config.yaml");
        OsFs.write(&file, b"index: {}").unwrap();
        assert_eq!(OsFs.read_to_string(&file).unwrap(), "index: {}");
    }

    #[test]
    fn test_realpath_rejects_mem_fs() {
        let err = realpath(&MemFs::new(), Path::new("/x")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFilesystem { .. }));
    }

    #[test]
    fn test_realpath_plain_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain");
        std::fs::write(&file, b"").unwrap();
        assert_eq!(realpath(&OsFs, &file).unwrap(), file);
    }

    #[cfg(unix)]
    #[test]
    fn test_realpath_follows_absolute_symlink() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");
        std::fs::write(&target, b"").unwrap();
        symlink(&target, &link).unwrap();

        assert_eq!(realpath(&OsFs, &link).unwrap(), target);
    }

    #[cfg(unix)]
    #[test]
    fn test_realpath_rejects_relative_symlink() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let link = dir.path().join("link");
        symlink("target", &link).unwrap();

        let err = realpath(&OsFs, &link).unwrap_err();
        assert!(matches!(err, Error::RelativeSymlink { .. }));
    }

    #[test]
    fn test_realpath_missing_path() {
        let dir = tempdir().unwrap();
        let err = realpath(&OsFs, &dir.path().join("missing")).unwrap_err();
        assert!(err.is_not_found());
    }
}
