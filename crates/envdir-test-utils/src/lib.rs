//! Testing utilities for envdir workspace
//!
//! Shared test helpers, model builders, and on-disk fixtures.

#![allow(missing_docs)]

use envdir_model::{
    Environment, Platform, PlatformType, Property, PropertyDefinition, PropertyType,
    PropertyValue, Schema,
};
use envdir_primitives::{NonEmptyKeyedStore, NonEmptySet, NonEmptyString};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn name(value: &str) -> NonEmptyString {
    NonEmptyString::try_new(value).unwrap()
}

pub fn create_platform_set(platform_types: &[PlatformType]) -> NonEmptySet<PlatformType> {
    NonEmptySet::try_from_iter(platform_types.iter().copied()).unwrap()
}

pub fn create_string_definition(property_name: &str, nullable: bool) -> PropertyDefinition {
    PropertyDefinition::new(name(property_name), PropertyType::String).with_nullable(nullable)
}

pub fn create_boolean_definition(property_name: &str, nullable: bool) -> PropertyDefinition {
    PropertyDefinition::new(name(property_name), PropertyType::Boolean).with_nullable(nullable)
}

pub fn create_schema(
    supported_platforms: &[PlatformType],
    definitions: Vec<PropertyDefinition>,
) -> Schema {
    Schema::try_new(
        create_platform_set(supported_platforms),
        NonEmptyKeyedStore::try_from_values(definitions).unwrap(),
    )
    .unwrap()
}

pub fn string_property(property_name: &str, value: &str) -> Property {
    Property::new(name(property_name), Some(PropertyValue::String(name(value))))
}

pub fn boolean_property(property_name: &str, value: bool) -> Property {
    Property::new(name(property_name), Some(PropertyValue::Boolean(value)))
}

pub fn null_property(property_name: &str) -> Property {
    Property::new(name(property_name), None)
}

pub fn create_platform(platform_type: PlatformType, properties: Vec<Property>) -> Platform {
    Platform::new(
        platform_type,
        NonEmptyKeyedStore::try_from_values(properties).unwrap(),
    )
}

pub fn create_environment(environment_name: &str, platforms: Vec<Platform>) -> Environment {
    Environment::from_platforms(name(environment_name), platforms).unwrap()
}

pub fn create_environments(
    environments: Vec<Environment>,
) -> NonEmptyKeyedStore<String, Environment> {
    NonEmptyKeyedStore::try_from_values(environments).unwrap()
}

/// Schema for JVM and ANDROID with a required string and a nullable boolean
pub const SCHEMA_JSON: &str = r#"{
  "supportedPlatforms": ["JVM", "ANDROID"],
  "propertyDefinitions": [
    { "name": "HOST", "propertyType": "String" },
    { "name": "DEBUG", "propertyType": "Boolean", "nullable": true }
  ]
}
"#;

pub const LOCAL_ENVIRONMENT_JSON: &str = r#"[
  { "platformType": "JVM", "properties": [
      { "name": "HOST", "value": "localhost" },
      { "name": "DEBUG", "value": true } ] },
  { "platformType": "ANDROID", "properties": [
      { "name": "HOST", "value": "10.0.2.2" },
      { "name": "DEBUG", "value": null } ] }
]
"#;

pub const PRODUCTION_ENVIRONMENT_JSON: &str = r#"[
  { "platformType": "JVM", "properties": [
      { "name": "HOST", "value": "example.com" },
      { "name": "DEBUG", "value": false } ] },
  { "platformType": "ANDROID", "properties": [
      { "name": "HOST", "value": "example.com" },
      { "name": "DEBUG" } ] }
]
"#;

pub const LOCAL_SELECTED_JSON: &str = r#"{ "selectedEnvironmentName": "local" }
"#;

/// Model equivalent of [`SCHEMA_JSON`]
pub fn create_sample_schema() -> Schema {
    create_schema(
        &[PlatformType::Jvm, PlatformType::Android],
        vec![
            create_string_definition("HOST", false),
            create_boolean_definition("DEBUG", true),
        ],
    )
}

/// Temporary directory tree removed on drop
#[derive(Debug)]
pub struct TestDirectory {
    temp: TempDir,
}

impl TestDirectory {
    pub fn new() -> Self {
        Self {
            temp: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Create `relative` (and parents) and return its path
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.temp.path().join(relative);
        std::fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write `content` to `relative`, creating parents
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.temp.path().join(relative)).unwrap()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.temp.path().join(relative).exists()
    }

    /// Write the sample project (schema, local and production, local
    /// selected) into `relative` and return its path
    pub fn write_sample_project(&self, relative: &str) -> PathBuf {
        let directory = self.create_dir(relative);
        self.write(&format!("{relative}/schema.json"), SCHEMA_JSON);
        self.write(&format!("{relative}/properties.json"), LOCAL_SELECTED_JSON);
        self.write(&format!("{relative}/local.env.json"), LOCAL_ENVIRONMENT_JSON);
        self.write(&format!("{relative}/production.env.json"), PRODUCTION_ENVIRONMENT_JSON);
        directory
    }
}

impl Default for TestDirectory {
    fn default() -> Self {
        Self::new()
    }
}

pub fn setup_test_directory() -> TestDirectory {
    TestDirectory::new()
}
