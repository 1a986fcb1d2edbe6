//! Properties file codec
//!
//! `{ "selectedEnvironmentName": "local" }`; an empty file means no
//! selection.

use crate::document::{non_blank, to_document};
use crate::error::CodecError;
use envdir_model::Properties;
use envdir_primitives::NonEmptyString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PropertiesDocument {
    #[serde(default)]
    selected_environment_name: Option<NonEmptyString>,
}

/// Decode a properties file; blank content yields default properties
///
/// # Errors
/// Returns `CodecError::Json` for malformed JSON, unknown fields or an empty
/// environment name
pub fn decode_properties(content: &str) -> Result<Properties, CodecError> {
    let Some(content) = non_blank(content) else {
        return Ok(Properties::default());
    };
    let document: PropertiesDocument = serde_json::from_str(content)?;
    Ok(Properties::new(document.selected_environment_name))
}

/// Encode a properties file
///
/// # Errors
/// Returns `CodecError::Encode` if serialization fails
pub fn encode_properties(properties: &Properties) -> Result<String, CodecError> {
    let document = PropertiesDocument {
        selected_environment_name: properties.selected_environment_name.clone(),
    };
    to_document("properties", &document)
}
