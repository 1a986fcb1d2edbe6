//! Environment file codec
//!
//! An environment file holds the platforms only; the environment name comes
//! from the file name and is passed in by the caller.
//!
//! ```json
//! [
//!   { "platformType": "JVM", "properties": [ { "name": "HOST", "value": "localhost" } ] }
//! ]
//! ```

use crate::document::{non_blank, to_document};
use crate::error::CodecError;
use envdir_model::{Environment, Platform, PlatformType, Property, PropertyValue};
use envdir_primitives::{NonEmptyKeyedStore, NonEmptyString};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PlatformEntry {
    platform_type: PlatformType,
    properties: Vec<PropertyEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct PropertyEntry {
    name: NonEmptyString,
    #[serde(default)]
    value: Option<ValueEntry>,
}

/// Wire value: a JSON boolean or a non-empty JSON string, nothing else
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum ValueEntry {
    Boolean(bool),
    String(NonEmptyString),
}

impl From<ValueEntry> for PropertyValue {
    fn from(entry: ValueEntry) -> Self {
        match entry {
            ValueEntry::Boolean(value) => Self::Boolean(value),
            ValueEntry::String(value) => Self::String(value),
        }
    }
}

impl From<&PropertyValue> for ValueEntry {
    fn from(value: &PropertyValue) -> Self {
        match value {
            PropertyValue::Boolean(value) => Self::Boolean(*value),
            PropertyValue::String(value) => Self::String(value.clone()),
        }
    }
}

impl TryFrom<PlatformEntry> for Platform {
    type Error = CodecError;

    fn try_from(entry: PlatformEntry) -> Result<Self, Self::Error> {
        let properties = NonEmptyKeyedStore::try_from_values(
            entry
                .properties
                .into_iter()
                .map(|property| Property::new(property.name, property.value.map(PropertyValue::from))),
        )?;
        Ok(Platform::new(entry.platform_type, properties))
    }
}

impl From<&Platform> for PlatformEntry {
    fn from(platform: &Platform) -> Self {
        Self {
            platform_type: platform.platform_type,
            properties: platform
                .properties
                .sorted_values()
                .into_iter()
                .map(|property| PropertyEntry {
                    name: property.name.clone(),
                    value: property.value.as_ref().map(ValueEntry::from),
                })
                .collect(),
        }
    }
}

/// Decode an environment file into the environment called `name`
///
/// # Errors
/// - `CodecError::EmptyDocument` for blank content
/// - `CodecError::Json` for malformed JSON, unknown platform tags, empty
///   names, empty string values or values that are neither string nor
///   boolean
/// - `CodecError::Invariant` for an empty platform or property list and for
///   repeated platform types or property names
pub fn decode_environment(name: NonEmptyString, content: &str) -> Result<Environment, CodecError> {
    let content = non_blank(content).ok_or(CodecError::EmptyDocument)?;
    let entries: Vec<PlatformEntry> = serde_json::from_str(content)?;

    let platforms = entries
        .into_iter()
        .map(Platform::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Environment::from_platforms(name, platforms)?)
}

/// Encode an environment file, platforms and properties sorted by key
///
/// # Errors
/// Returns `CodecError::Encode` if serialization fails
pub fn encode_environment(environment: &Environment) -> Result<String, CodecError> {
    let entries: Vec<PlatformEntry> = environment
        .platforms
        .sorted_values()
        .into_iter()
        .map(PlatformEntry::from)
        .collect();
    to_document("environment", &entries)
}
