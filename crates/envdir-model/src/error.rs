//! Errors raised while constructing model values

use crate::types::PlatformType;
use envdir_primitives::{NonEmptySet, NonEmptyString, PrimitiveError};

/// Construction-time invariant violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A definition restricts itself to platforms the schema does not support
    #[error(
        "property definition '{property_name}' restricts to {unsupported_platforms}, \
         which the schema does not support"
    )]
    UnsupportedPlatformRestriction {
        property_name: NonEmptyString,
        unsupported_platforms: NonEmptySet<PlatformType>,
    },

    /// Primitive invariant failed (empty collection, duplicate key)
    #[error(transparent)]
    Primitive(#[from] PrimitiveError),
}
