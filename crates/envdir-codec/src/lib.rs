//! envdir JSON codec
//!
//! The boundary between files and the typed model. Every decoder enforces
//! the model's invariants itself instead of trusting the input:
//!
//! - Empty strings, sets and collections fail
//! - Property values are a non-empty string, a boolean, `null` or absent
//! - Platform tags must belong to the closed enumeration
//! - Unknown fields fail; missing required fields fail
//!
//! Encoders emit pretty JSON with keys in canonical order, so encoding the
//! same model twice yields identical bytes.
//!
//! # Example
//!
//! ```rust
//! use envdir_codec::{decode_environment, decode_schema};
//! use envdir_model::SchemaValidator;
//! use envdir_primitives::NonEmptyString;
//!
//! let schema = decode_schema(
//!     r#"{"supportedPlatforms": ["JVM"],
//!         "propertyDefinitions": [{"name": "HOST", "propertyType": "String", "nullable": true}]}"#,
//! )
//! .unwrap();
//! let local = decode_environment(
//!     NonEmptyString::new_unchecked("local"),
//!     r#"[{"platformType": "JVM", "properties": [{"name": "HOST", "value": null}]}]"#,
//! )
//! .unwrap();
//!
//! assert!(SchemaValidator::new(&schema).validate_environment(&local).is_ok());
//! ```

#![warn(unreachable_pub)]

mod document;
pub mod environment;
pub mod error;
pub mod properties;
pub mod schema;

pub use environment::{decode_environment, encode_environment};
pub use error::CodecError;
pub use properties::{decode_properties, encode_properties};
pub use schema::{decode_schema, encode_schema};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
