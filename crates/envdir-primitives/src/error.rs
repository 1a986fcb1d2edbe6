//! Errors raised when a primitive invariant would be violated

/// Invariant violations for the non-empty wrappers
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrimitiveError {
    /// String had no characters
    #[error("string must not be empty")]
    EmptyString,

    /// Set had no elements
    #[error("set must contain at least one element")]
    EmptySet,

    /// Keyed store had no values
    #[error("collection must contain at least one entry")]
    EmptyStore,

    /// Two values derived the same key
    #[error("duplicate key: '{key}'")]
    DuplicateKey { key: String },
}

impl PrimitiveError {
    /// Create duplicate key error
    pub fn duplicate_key(key: impl ToString) -> Self {
        Self::DuplicateKey {
            key: key.to_string(),
        }
    }
}
