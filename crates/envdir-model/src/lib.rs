//! envdir data model
//!
//! Typed representation of an environments directory:
//!
//! - [`Schema`]: supported platforms and property definitions
//! - [`Environment`]: one named variant with a [`Platform`] per platform type
//! - [`Properties`]: which environment is selected
//!
//! and the pure validation that ties them together:
//!
//! - [`SchemaValidator`]: environments against a schema
//! - [`validate_selected_environment`]: selection against environments
//!
//! # Example
//!
//! ```rust
//! use envdir_model::{
//!     Environment, Platform, PlatformType, Property, PropertyDefinition, PropertyType, Schema,
//!     SchemaValidator,
//! };
//! use envdir_primitives::{NonEmptyKeyedStore, NonEmptySet, NonEmptyString};
//!
//! let host = NonEmptyString::new_unchecked("HOST");
//! let schema = Schema::try_new(
//!     NonEmptySet::singleton(PlatformType::Jvm),
//!     NonEmptyKeyedStore::single(
//!         PropertyDefinition::new(host.clone(), PropertyType::String).with_nullable(true),
//!     ),
//! )
//! .unwrap();
//!
//! let local = Environment::from_platforms(
//!     NonEmptyString::new_unchecked("local"),
//!     [Platform::new(PlatformType::Jvm, NonEmptyKeyedStore::single(Property::new(host, None)))],
//! )
//! .unwrap();
//!
//! assert!(SchemaValidator::new(&schema).validate_environment(&local).is_ok());
//! ```

#![warn(unreachable_pub)]

pub mod environment;
pub mod error;
pub mod properties;
pub mod schema;
pub mod types;
pub mod validation;

pub use environment::{Environment, Platform, Property, PropertyValue};
pub use error::ModelError;
pub use properties::Properties;
pub use schema::{PropertyDefinition, Schema};
pub use types::{PlatformType, PropertyType, UnknownTag};
pub use validation::{validate_selected_environment, SchemaValidator, ValidationError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
