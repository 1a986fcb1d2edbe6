//! Error types for envdir Core
//!
//! Provides error handling for:
//! - Reading a project (absence, emptiness, decode failures, validation)
//! - Writing a project (encode and I/O failures)
//!
//! Every `ProjectError` carries the environments directory it concerns.

use envdir_codec::CodecError;
use envdir_model::ValidationError;
use std::path::{Path, PathBuf};

/// Errors while reading and assembling a project
#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    /// Directory does not exist
    #[error("directory not found: {directory}")]
    DirectoryNotFound { directory: PathBuf },

    /// Path exists but is not a directory
    #[error("not a directory: {directory}")]
    NotADirectory { directory: PathBuf },

    /// Schema file is missing
    #[error("schema file not found in {directory}: {path}")]
    InvalidSchemaFile { directory: PathBuf, path: PathBuf },

    /// Schema file exists but is blank
    #[error("schema file is empty: {path}")]
    EmptySchemaFile { directory: PathBuf, path: PathBuf },

    /// Environment file exists but is blank
    #[error("environment file is empty: {path}")]
    EmptyEnvironmentFile { directory: PathBuf, path: PathBuf },

    /// File exceeds the configured size limit
    #[error("file too large: {path} ({size} bytes, max: {max})")]
    FileTooLarge {
        directory: PathBuf,
        path: PathBuf,
        size: u64,
        max: u64,
    },

    /// File content could not be decoded
    #[error("failed to decode {path}: {source}")]
    Decode {
        directory: PathBuf,
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// IO error during read
    #[error("io error reading {path}: {source}")]
    Io {
        directory: PathBuf,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decoded files are inconsistent with each other
    #[error("invalid project in {directory}: {source}")]
    Validation {
        directory: PathBuf,
        #[source]
        source: ValidationError,
    },

    /// Recursive directory scan could not complete
    #[error("scan of {directory} aborted: {message}")]
    ScanAborted { directory: PathBuf, message: String },
}

impl ProjectError {
    /// Create IO error for a file inside `directory`
    pub fn io_error(
        directory: impl Into<PathBuf>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            directory: directory.into(),
            path: path.into(),
            source,
        }
    }

    /// Create decode error for a file inside `directory`
    pub fn decode_error(
        directory: impl Into<PathBuf>,
        path: impl Into<PathBuf>,
        source: CodecError,
    ) -> Self {
        Self::Decode {
            directory: directory.into(),
            path: path.into(),
            source,
        }
    }

    /// Directory the failure concerns
    #[must_use]
    pub fn directory(&self) -> &Path {
        match self {
            Self::DirectoryNotFound { directory }
            | Self::NotADirectory { directory }
            | Self::InvalidSchemaFile { directory, .. }
            | Self::EmptySchemaFile { directory, .. }
            | Self::EmptyEnvironmentFile { directory, .. }
            | Self::FileTooLarge { directory, .. }
            | Self::Decode { directory, .. }
            | Self::Io { directory, .. }
            | Self::Validation { directory, .. }
            | Self::ScanAborted { directory, .. } => directory,
        }
    }

    /// Validation failure, if this is one
    #[inline]
    #[must_use]
    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors while writing a project
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// Environment name cannot be used as a file name
    #[error("environment name '{name}' cannot be used as a file name")]
    InvalidEnvironmentName { name: String },

    /// Model could not be encoded
    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    /// IO error during file write
    #[error("io error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SerializeError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create encode error for path
    pub fn encode_error(path: impl Into<PathBuf>, source: CodecError) -> Self {
        Self::Encode {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for project reads
pub type ProjectResult<T> = Result<T, ProjectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_is_always_available() {
        let err = ProjectError::io_error(
            "/tmp/env",
            "/tmp/env/schema.json",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.directory(), Path::new("/tmp/env"));
        assert!(err.to_string().starts_with("io error reading /tmp/env/schema.json"));
    }

    #[test]
    fn decode_error_display() {
        let err = ProjectError::decode_error("/e", "/e/local.env.json", CodecError::EmptyDocument);
        assert_eq!(err.to_string(), "failed to decode /e/local.env.json: document is empty");
        assert!(err.validation_error().is_none());
    }

    #[test]
    fn serialize_error_display() {
        let err = SerializeError::io_error(
            "/e/schema.json",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(err.to_string().contains("io error writing /e/schema.json"));
    }
}
