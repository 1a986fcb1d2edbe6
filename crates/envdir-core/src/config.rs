//! Loader configuration
//!
//! File naming conventions of an environments directory:
//!
//! ```text
//! environments/
//! ├── schema.json
//! ├── properties.json
//! ├── local.env.json
//! └── production.env.json
//! ```

use envdir_primitives::NonEmptyString;
use serde::{Deserialize, Serialize};

/// Default schema file name
pub const DEFAULT_SCHEMA_FILE_NAME: &str = "schema.json";
/// Default properties file name
pub const DEFAULT_PROPERTIES_FILE_NAME: &str = "properties.json";
/// Default environment file suffix
pub const DEFAULT_ENVIRONMENT_FILE_SUFFIX: &str = ".env.json";
/// Default name of directories found by the recursive scan
pub const DEFAULT_PROJECT_DIRECTORY_NAME: &str = "environments";

/// Naming conventions and limits for reading and writing projects
///
/// Deserializable so a caller can keep it in a TOML or JSON file; missing
/// keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Schema file name inside an environments directory
    pub schema_file_name: String,
    /// Properties file name inside an environments directory
    pub properties_file_name: String,
    /// Suffix appended to an environment name to form its file name
    pub environment_file_suffix: String,
    /// Directory name the recursive scan looks for
    pub project_directory_name: String,
    /// Largest file the loader will read (bytes)
    pub max_file_size: u64,
}

impl LoaderConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With schema file name
    #[inline]
    #[must_use]
    pub fn with_schema_file_name(mut self, name: impl Into<String>) -> Self {
        self.schema_file_name = name.into();
        self
    }

    /// With properties file name
    #[inline]
    #[must_use]
    pub fn with_properties_file_name(mut self, name: impl Into<String>) -> Self {
        self.properties_file_name = name.into();
        self
    }

    /// With environment file suffix
    #[inline]
    #[must_use]
    pub fn with_environment_file_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.environment_file_suffix = suffix.into();
        self
    }

    /// With project directory name
    #[inline]
    #[must_use]
    pub fn with_project_directory_name(mut self, name: impl Into<String>) -> Self {
        self.project_directory_name = name.into();
        self
    }

    /// With max file size
    #[inline]
    #[must_use]
    pub fn with_max_file_size(mut self, bytes: u64) -> Self {
        self.max_file_size = bytes;
        self
    }

    /// File name for the environment called `name`
    #[must_use]
    pub fn environment_file_name(&self, name: &str) -> String {
        format!("{name}{}", self.environment_file_suffix)
    }

    /// Whether `file_name` is the schema or properties file name
    #[inline]
    #[must_use]
    pub fn is_reserved_file_name(&self, file_name: &str) -> bool {
        file_name == self.schema_file_name || file_name == self.properties_file_name
    }

    /// Environment name encoded in `file_name`, if it follows the convention
    ///
    /// Inverse of [`Self::environment_file_name`]. The schema and properties
    /// files never match, even if they happen to carry the suffix.
    #[must_use]
    pub fn environment_name_from_file_name(&self, file_name: &str) -> Option<NonEmptyString> {
        if self.is_reserved_file_name(file_name) {
            return None;
        }
        file_name
            .strip_suffix(self.environment_file_suffix.as_str())
            .and_then(|stem| NonEmptyString::try_new(stem).ok())
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            schema_file_name: DEFAULT_SCHEMA_FILE_NAME.to_string(),
            properties_file_name: DEFAULT_PROPERTIES_FILE_NAME.to_string(),
            environment_file_suffix: DEFAULT_ENVIRONMENT_FILE_SUFFIX.to_string(),
            project_directory_name: DEFAULT_PROJECT_DIRECTORY_NAME.to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
        }
    }
}
