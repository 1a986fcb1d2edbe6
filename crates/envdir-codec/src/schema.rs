//! Schema file codec
//!
//! ```json
//! {
//!   "supportedPlatforms": ["JVM", "ANDROID"],
//!   "propertyDefinitions": [
//!     { "name": "HOST", "propertyType": "String", "nullable": false, "supportedPlatforms": ["JVM"] }
//!   ]
//! }
//! ```

use crate::document::{non_blank, to_document};
use crate::error::CodecError;
use envdir_model::{PlatformType, PropertyDefinition, PropertyType, Schema};
use envdir_primitives::{NonEmptyKeyedStore, NonEmptySet, NonEmptyString};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SchemaDocument {
    supported_platforms: NonEmptySet<PlatformType>,
    property_definitions: Vec<PropertyDefinitionEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct PropertyDefinitionEntry {
    name: NonEmptyString,
    property_type: PropertyType,
    #[serde(default)]
    nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    supported_platforms: Option<NonEmptySet<PlatformType>>,
}

impl From<PropertyDefinitionEntry> for PropertyDefinition {
    fn from(entry: PropertyDefinitionEntry) -> Self {
        Self {
            name: entry.name,
            property_type: entry.property_type,
            nullable: entry.nullable,
            supported_platform_types: entry.supported_platforms,
        }
    }
}

impl From<&PropertyDefinition> for PropertyDefinitionEntry {
    fn from(definition: &PropertyDefinition) -> Self {
        Self {
            name: definition.name.clone(),
            property_type: definition.property_type,
            nullable: definition.nullable,
            supported_platforms: definition.supported_platform_types.clone(),
        }
    }
}

/// Decode a schema file
///
/// # Errors
/// - `CodecError::EmptyDocument` for blank content
/// - `CodecError::Json` for malformed JSON, unknown fields or tags, empty
///   names or empty platform lists
/// - `CodecError::Invariant` for an empty definition list or duplicate names
/// - `CodecError::Schema` if a definition restricts to unsupported platforms
pub fn decode_schema(content: &str) -> Result<Schema, CodecError> {
    let content = non_blank(content).ok_or(CodecError::EmptyDocument)?;
    let document: SchemaDocument = serde_json::from_str(content)?;

    let definitions = NonEmptyKeyedStore::try_from_values(
        document
            .property_definitions
            .into_iter()
            .map(PropertyDefinition::from),
    )?;

    Ok(Schema::try_new(document.supported_platforms, definitions)?)
}

/// Encode a schema file, definitions sorted by name
///
/// # Errors
/// Returns `CodecError::Encode` if serialization fails
pub fn encode_schema(schema: &Schema) -> Result<String, CodecError> {
    let document = SchemaDocument {
        supported_platforms: schema.supported_platforms().clone(),
        property_definitions: schema
            .property_definitions()
            .sorted_values()
            .into_iter()
            .map(PropertyDefinitionEntry::from)
            .collect(),
    };
    to_document("schema", &document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use envdir_model::ModelError;
    use envdir_primitives::PrimitiveError;
    use pretty_assertions::assert_eq;

    const SCHEMA: &str = r#"{
        "supportedPlatforms": ["JVM", "ANDROID"],
        "propertyDefinitions": [
            { "name": "HOST", "propertyType": "String", "supportedPlatforms": ["JVM"] },
            { "name": "DEBUG", "propertyType": "Boolean", "nullable": true }
        ]
    }"#;

    #[test]
    fn decode_valid_schema() {
        let schema = decode_schema(SCHEMA).unwrap();

        assert_eq!(schema.supported_platforms().len(), 2);
        let host = schema.property_definition("HOST").unwrap();
        assert_eq!(host.property_type, PropertyType::String);
        assert!(!host.nullable);
        assert_eq!(
            host.supported_platform_types,
            Some(NonEmptySet::singleton(PlatformType::Jvm))
        );
        let debug = schema.property_definition("DEBUG").unwrap();
        assert!(debug.nullable);
        assert_eq!(debug.supported_platform_types, None);
    }

    #[test]
    fn blank_schema_is_empty_document() {
        assert!(decode_schema("  \n").unwrap_err().is_empty_document());
    }

    #[test]
    fn empty_arrays_fail() {
        let no_platforms = r#"{"supportedPlatforms": [], "propertyDefinitions": [{"name": "A", "propertyType": "String"}]}"#;
        assert!(matches!(decode_schema(no_platforms), Err(CodecError::Json(_))));

        let no_definitions = r#"{"supportedPlatforms": ["JVM"], "propertyDefinitions": []}"#;
        assert!(matches!(
            decode_schema(no_definitions),
            Err(CodecError::Invariant(PrimitiveError::EmptyStore))
        ));

        let empty_restriction = r#"{"supportedPlatforms": ["JVM"], "propertyDefinitions": [
            {"name": "A", "propertyType": "String", "supportedPlatforms": []}]}"#;
        assert!(decode_schema(empty_restriction).is_err());
    }

    #[test]
    fn duplicate_definition_names_fail() {
        let content = r#"{"supportedPlatforms": ["JVM"], "propertyDefinitions": [
            {"name": "A", "propertyType": "String"},
            {"name": "A", "propertyType": "Boolean"}]}"#;
        assert!(matches!(
            decode_schema(content),
            Err(CodecError::Invariant(PrimitiveError::DuplicateKey { .. }))
        ));
    }

    #[test]
    fn restriction_outside_supported_platforms_fails() {
        let content = r#"{"supportedPlatforms": ["JVM"], "propertyDefinitions": [
            {"name": "A", "propertyType": "String", "supportedPlatforms": ["IOS"]}]}"#;
        assert!(matches!(
            decode_schema(content),
            Err(CodecError::Schema(ModelError::UnsupportedPlatformRestriction { .. }))
        ));
    }

    #[test]
    fn strict_shape() {
        let unknown_field = r#"{"supportedPlatforms": ["JVM"], "propertyDefinitions": [
            {"name": "A", "propertyType": "String"}], "version": 2}"#;
        assert!(decode_schema(unknown_field).is_err());

        let missing_type = r#"{"supportedPlatforms": ["JVM"], "propertyDefinitions": [{"name": "A"}]}"#;
        assert!(decode_schema(missing_type).is_err());

        let unknown_platform = r#"{"supportedPlatforms": ["PALM"], "propertyDefinitions": [
            {"name": "A", "propertyType": "String"}]}"#;
        assert!(decode_schema(unknown_platform).is_err());

        let empty_name = r#"{"supportedPlatforms": ["JVM"], "propertyDefinitions": [
            {"name": "", "propertyType": "String"}]}"#;
        assert!(decode_schema(empty_name).is_err());
    }

    #[test]
    fn encode_is_canonical() {
        let encoded = encode_schema(&decode_schema(SCHEMA).unwrap()).unwrap();

        let expected = r#"{
  "supportedPlatforms": [
    "JVM",
    "ANDROID"
  ],
  "propertyDefinitions": [
    {
      "name": "DEBUG",
      "propertyType": "Boolean",
      "nullable": true
    },
    {
      "name": "HOST",
      "propertyType": "String",
      "nullable": false,
      "supportedPlatforms": [
        "JVM"
      ]
    }
  ]
}
"#;
        assert_eq!(encoded, expected);
        assert_eq!(decode_schema(&encoded).unwrap(), decode_schema(SCHEMA).unwrap());
    }
}
