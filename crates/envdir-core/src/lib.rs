//! envdir Core - Project assembly and persistence
//!
//! Reads an environments directory into a validated [`Project`], lets callers
//! edit it through operations that re-validate, and writes it back.
//!
//! # Example
//!
//! ```rust,no_run
//! use envdir_core::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = ProjectStore::new();
//! let directory = EnvironmentsDirectory::open("environments").await?;
//! let project = store.process_project(&directory).await?;
//!
//! let project = project.update_selected_environment(Some("production".parse()?))?;
//! store.serialize_project(&project).await?;
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod config;
pub mod directory;
pub mod error;
pub mod project;
pub mod store;

pub use config::LoaderConfig;
pub use directory::EnvironmentsDirectory;
pub use error::{ProjectError, ProjectResult, SerializeError};
pub use project::{Environments, Project};
pub use store::ProjectStore;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        EnvironmentsDirectory, LoaderConfig, Project, ProjectError, ProjectStore, SerializeError,
    };
    pub use envdir_model::{Environment, PlatformType, Properties, Schema, ValidationError};
    pub use envdir_primitives::NonEmptyString;
}
