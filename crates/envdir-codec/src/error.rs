//! Codec errors
//!
//! Decoding fails on:
//! - Malformed JSON, unknown or missing fields, wrong value types
//! - Empty strings, sets or collections where non-empty is required
//! - Duplicate keys and schema platform-restriction violations

use envdir_model::ModelError;
use envdir_primitives::PrimitiveError;

/// Errors while decoding or encoding a document
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Document had no content
    #[error("document is empty")]
    EmptyDocument,

    /// JSON was malformed or did not match the expected shape
    #[error("malformed document: {0}")]
    Json(#[from] serde_json::Error),

    /// A non-empty or unique-key invariant failed
    #[error("invariant violated: {0}")]
    Invariant(#[from] PrimitiveError),

    /// The decoded schema is inconsistent
    #[error("invalid schema: {0}")]
    Schema(ModelError),

    /// Serialization to JSON failed
    #[error("failed to encode {document}: {source}")]
    Encode {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl From<ModelError> for CodecError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::Primitive(primitive) => Self::Invariant(primitive),
            other => Self::Schema(other),
        }
    }
}

impl CodecError {
    /// Create encode error for a document kind
    pub fn encode(document: &'static str, source: serde_json::Error) -> Self {
        Self::Encode { document, source }
    }

    /// Whether the input was empty or blank
    #[inline]
    #[must_use]
    pub fn is_empty_document(&self) -> bool {
        matches!(self, Self::EmptyDocument)
    }
}
