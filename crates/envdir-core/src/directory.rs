//! Environments directory handle

use crate::error::ProjectError;
use std::fmt::{self, Display};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A path that was verified to be a readable directory when opened
///
/// Projects remember the directory they were read from and write back into
/// it. Nothing prevents the directory from disappearing later; writes then
/// fail with an I/O error.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnvironmentsDirectory {
    path: PathBuf,
}

impl EnvironmentsDirectory {
    /// Open an existing directory
    ///
    /// # Errors
    /// - `ProjectError::DirectoryNotFound` if nothing exists at `path`
    /// - `ProjectError::NotADirectory` if `path` is a file
    /// - `ProjectError::Io` if metadata cannot be read
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, ProjectError> {
        let path = path.into();
        match tokio::fs::metadata(&path).await {
            Ok(metadata) if metadata.is_dir() => Ok(Self { path }),
            Ok(_) => Err(ProjectError::NotADirectory { directory: path }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ProjectError::DirectoryNotFound { directory: path })
            }
            Err(e) => Err(ProjectError::io_error(&path, &path, e)),
        }
    }

    /// Wrap a path without checking the filesystem
    #[cfg(test)]
    #[must_use]
    pub(crate) fn from_path_unchecked(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Directory path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of `file_name` inside this directory
    #[inline]
    #[must_use]
    pub fn file(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }
}

impl Display for EnvironmentsDirectory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

impl AsRef<Path> for EnvironmentsDirectory {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn open_existing_directory() {
        let temp = tempfile::tempdir().unwrap();
        let directory = EnvironmentsDirectory::open(temp.path()).await.unwrap();

        assert_eq!(directory.path(), temp.path());
        assert_eq!(directory.file("schema.json"), temp.path().join("schema.json"));
    }

    #[tokio::test]
    async fn open_missing_directory() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("missing");

        let err = EnvironmentsDirectory::open(&missing).await.unwrap_err();
        assert!(matches!(err, ProjectError::DirectoryNotFound { .. }));
        assert_eq!(err.directory(), missing);
    }

    #[tokio::test]
    async fn open_file_is_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("schema.json");
        std::fs::write(&file, "{}").unwrap();

        let err = EnvironmentsDirectory::open(&file).await.unwrap_err();
        assert!(matches!(err, ProjectError::NotADirectory { .. }));
    }
}
