//! Project store - the filesystem boundary
//!
//! Provides:
//! - Directory → Project reading (ingress)
//! - Project → Directory writing (egress)
//! - Recursive discovery of environments directories
//!
//! Reads of the properties, schema and environment files run concurrently;
//! results are combined in a fixed order so the reported error does not
//! depend on which read finished first.

use crate::config::LoaderConfig;
use crate::directory::EnvironmentsDirectory;
use crate::error::{ProjectError, SerializeError};
use crate::project::{Environments, Project};
use envdir_codec::{
    decode_environment, decode_properties, decode_schema, encode_environment, encode_properties,
    encode_schema, CodecError,
};
use envdir_model::{Environment, Properties, Schema};
use envdir_primitives::{NonEmptyKeyedStore, NonEmptyString};
use futures::future::{join_all, try_join_all};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Reads and writes projects according to a [`LoaderConfig`]
#[derive(Debug, Clone, Default)]
pub struct ProjectStore {
    config: LoaderConfig,
}

impl ProjectStore {
    /// Create store with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create store with specific configuration
    #[inline]
    #[must_use]
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Read and validate the project in `directory` (Ingress)
    ///
    /// # Errors
    /// In order of precedence when several reads fail:
    /// - properties: `Decode`, `Io`, `FileTooLarge`
    /// - schema: `InvalidSchemaFile`, `EmptySchemaFile`, `Decode`, `Io`,
    ///   `FileTooLarge`
    /// - environments: `EmptyEnvironmentFile`, `Decode`, `Io`, `FileTooLarge`
    /// - `Validation` if the decoded files are inconsistent
    pub async fn process_project(
        &self,
        directory: &EnvironmentsDirectory,
    ) -> Result<Project, ProjectError> {
        tracing::debug!("Reading project in {}", directory);

        let (properties, schema, environments) = tokio::join!(
            self.read_properties(directory),
            self.read_schema(directory),
            self.read_environments(directory),
        );
        let properties = properties?;
        let schema = schema?;
        let environments = environments?;

        let project = Project::try_new(directory.clone(), schema, properties, environments)
            .map_err(|source| {
                tracing::warn!("Project in {} is invalid: {}", directory, source);
                ProjectError::Validation {
                    directory: directory.path().to_path_buf(),
                    source,
                }
            })?;

        tracing::info!(
            "Loaded project {} with {} environment(s)",
            directory,
            project.environment_names().len()
        );
        Ok(project)
    }

    /// Find every environments directory below `root` and read each one
    ///
    /// Hidden directories are skipped. One project failing does not stop the
    /// others; each gets its own result, ordered by path.
    ///
    /// # Errors
    /// - `DirectoryNotFound` / `NotADirectory` if `root` is unusable
    /// - `ScanAborted` if the directory walk itself fails
    pub async fn process_projects_recursively(
        &self,
        root: impl Into<PathBuf>,
    ) -> Result<Vec<Result<Project, ProjectError>>, ProjectError> {
        let root = EnvironmentsDirectory::open(root).await?;
        let directory_name = self.config.project_directory_name.clone();
        let walk_root = root.path().to_path_buf();

        let found = tokio::task::spawn_blocking(move || {
            find_project_directories(&walk_root, &directory_name)
        })
        .await
        .map_err(|e| ProjectError::ScanAborted {
            directory: root.path().to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::info!("Found {} project(s) under {}", found.len(), root);

        Ok(join_all(found.into_iter().map(|path| async move {
            let directory = EnvironmentsDirectory::open(path).await?;
            self.process_project(&directory).await
        }))
        .await)
    }

    /// Write every file of `project` into its directory (Egress)
    ///
    /// All documents are encoded before the first write. Writes then run
    /// concurrently; if one fails the others may already have landed and are
    /// not rolled back. Environment files present on disk but absent from
    /// the project are left alone.
    ///
    /// # Errors
    /// - `SerializeError::InvalidEnvironmentName` if a name cannot be a file
    ///   name
    /// - `SerializeError::Encode` if a document fails to encode
    /// - `SerializeError::Io` for the first failed write
    pub async fn serialize_project(&self, project: &Project) -> Result<(), SerializeError> {
        let directory = project.directory();
        let documents = self.encode_project(project)?;

        try_join_all(documents.iter().map(|(path, content)| write_document(path, content))).await?;

        tracing::info!("Wrote {} file(s) to {}", documents.len(), directory);
        Ok(())
    }

    fn encode_project(&self, project: &Project) -> Result<Vec<(PathBuf, String)>, SerializeError> {
        let directory = project.directory();
        let mut documents = Vec::new();

        let path = directory.file(&self.config.properties_file_name);
        let content = encode_properties(project.properties())
            .map_err(|e| SerializeError::encode_error(&path, e))?;
        documents.push((path, content));

        let path = directory.file(&self.config.schema_file_name);
        let content =
            encode_schema(project.schema()).map_err(|e| SerializeError::encode_error(&path, e))?;
        documents.push((path, content));

        for environment in project.environments().into_iter().flat_map(Environments::sorted_values) {
            let file_name = self.config.environment_file_name(&environment.name);
            if !is_file_name_safe(&environment.name) || self.config.is_reserved_file_name(&file_name) {
                return Err(SerializeError::InvalidEnvironmentName {
                    name: environment.name.to_string(),
                });
            }
            let path = directory.file(&file_name);
            let content =
                encode_environment(environment).map_err(|e| SerializeError::encode_error(&path, e))?;
            documents.push((path, content));
        }

        Ok(documents)
    }

    async fn read_properties(
        &self,
        directory: &EnvironmentsDirectory,
    ) -> Result<Properties, ProjectError> {
        let path = directory.file(&self.config.properties_file_name);
        tracing::debug!("Reading {}", path.display());
        let Some(content) = self.read_file(directory, &path).await? else {
            tracing::debug!("No properties file in {}, nothing selected", directory);
            return Ok(Properties::default());
        };
        decode_properties(&content).map_err(|e| ProjectError::decode_error(directory.path(), &path, e))
    }

    async fn read_schema(&self, directory: &EnvironmentsDirectory) -> Result<Schema, ProjectError> {
        let path = directory.file(&self.config.schema_file_name);
        tracing::debug!("Reading {}", path.display());
        let Some(content) = self.read_file(directory, &path).await? else {
            return Err(ProjectError::InvalidSchemaFile {
                directory: directory.path().to_path_buf(),
                path,
            });
        };
        decode_schema(&content).map_err(|e| match e {
            CodecError::EmptyDocument => ProjectError::EmptySchemaFile {
                directory: directory.path().to_path_buf(),
                path: path.clone(),
            },
            e => ProjectError::decode_error(directory.path(), &path, e),
        })
    }

    async fn read_environments(
        &self,
        directory: &EnvironmentsDirectory,
    ) -> Result<Option<Environments>, ProjectError> {
        tracing::debug!("Listing environment files in {}", directory);
        let files = self.environment_files(directory).await?;
        if files.is_empty() {
            tracing::debug!("No environment files in {}", directory);
            return Ok(None);
        }
        tracing::debug!("Found {} environment file(s) in {}", files.len(), directory);

        let environments = join_all(
            files
                .into_iter()
                .map(|(name, path)| self.read_environment(directory, name, path)),
        )
        .await
        .into_iter()
        .collect::<Result<Vec<Environment>, ProjectError>>()?;

        NonEmptyKeyedStore::try_from_values(environments)
            .map(Some)
            .map_err(|e| ProjectError::decode_error(directory.path(), directory.path(), e.into()))
    }

    async fn read_environment(
        &self,
        directory: &EnvironmentsDirectory,
        name: NonEmptyString,
        path: PathBuf,
    ) -> Result<Environment, ProjectError> {
        let Some(content) = self.read_file(directory, &path).await? else {
            // Listed a moment ago; deleted since
            return Err(ProjectError::io_error(
                directory.path(),
                &path,
                std::io::Error::from(ErrorKind::NotFound),
            ));
        };
        decode_environment(name, &content).map_err(|e| {
            tracing::debug!("Failed to decode {}: {}", path.display(), e);
            match e {
                CodecError::EmptyDocument => ProjectError::EmptyEnvironmentFile {
                    directory: directory.path().to_path_buf(),
                    path: path.clone(),
                },
                e => ProjectError::decode_error(directory.path(), &path, e),
            }
        })
    }

    /// Environment files in `directory`, sorted by environment name
    async fn environment_files(
        &self,
        directory: &EnvironmentsDirectory,
    ) -> Result<Vec<(NonEmptyString, PathBuf)>, ProjectError> {
        let io_error = |e| ProjectError::io_error(directory.path(), directory.path(), e);

        let mut entries = tokio::fs::read_dir(directory.path()).await.map_err(io_error)?;
        let mut files = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let Some(file_name) = entry.file_name().to_str().map(str::to_owned) else {
                tracing::warn!("Skipping non UTF-8 file name in {}", directory);
                continue;
            };
            let Some(name) = self.config.environment_name_from_file_name(&file_name) else {
                continue;
            };

            let path = entry.path();
            // Follows symlinks; only dangling links are skipped
            match tokio::fs::metadata(&path).await {
                Ok(metadata) if metadata.is_file() => files.push((name, path)),
                Ok(_) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!("Skipping dangling link {}", path.display());
                }
                Err(e) => return Err(ProjectError::io_error(directory.path(), &path, e)),
            }
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }

    /// Read a file if it exists, enforcing the size limit first
    async fn read_file(
        &self,
        directory: &EnvironmentsDirectory,
        path: &Path,
    ) -> Result<Option<String>, ProjectError> {
        let metadata = match tokio::fs::metadata(path).await {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ProjectError::io_error(directory.path(), path, e)),
        };

        if metadata.len() > self.config.max_file_size {
            return Err(ProjectError::FileTooLarge {
                directory: directory.path().to_path_buf(),
                path: path.to_path_buf(),
                size: metadata.len(),
                max: self.config.max_file_size,
            });
        }

        match tokio::fs::read_to_string(path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ProjectError::io_error(directory.path(), path, e)),
        }
    }
}

async fn write_document(path: &Path, content: &str) -> Result<(), SerializeError> {
    tokio::fs::write(path, content)
        .await
        .map_err(|e| SerializeError::io_error(path, e))?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}

/// Names usable as a single path component
fn is_file_name_safe(name: &str) -> bool {
    name != "." && name != ".." && !name.contains(['/', '\\', '\0'])
}

/// Directories named `directory_name` below `root`, sorted by path
///
/// Unreadable entries are logged and skipped.
fn find_project_directories(root: &Path, directory_name: &str) -> Vec<PathBuf> {
    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_dir() && entry.file_name() == directory_name)
        .map(walkdir::DirEntry::into_path)
        .collect();
    found.sort();
    found
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_creation() {
        let store = ProjectStore::new();
        assert_eq!(store.config().max_file_size, 10 * 1024 * 1024);
    }

    #[test]
    fn file_name_safety() {
        assert!(is_file_name_safe("local"));
        assert!(is_file_name_safe("feature.x"));
        assert!(!is_file_name_safe("../etc"));
        assert!(!is_file_name_safe("a/b"));
        assert!(!is_file_name_safe("a\\b"));
        assert!(!is_file_name_safe(".."));
    }

    #[test]
    fn finds_nested_directories_and_skips_hidden() {
        let temp = tempfile::tempdir().unwrap();
        for dir in ["app/environments", "lib/core/environments", ".git/environments", "other"] {
            std::fs::create_dir_all(temp.path().join(dir)).unwrap();
        }
        std::fs::write(temp.path().join("environments"), "not a directory").unwrap();

        let found = find_project_directories(temp.path(), "environments");
        assert_eq!(
            found,
            vec![
                temp.path().join("app/environments"),
                temp.path().join("lib/core/environments"),
            ]
        );
    }

    #[test]
    fn hidden_root_is_still_walked() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join(".config");
        std::fs::create_dir_all(root.join("environments")).unwrap();

        let found = find_project_directories(&root, "environments");
        assert_eq!(found, vec![root.join("environments")]);
    }
}
