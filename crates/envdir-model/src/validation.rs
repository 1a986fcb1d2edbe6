//! Schema conformance and selection validation
//!
//! Pure, fail-fast checks: the first violation found is returned and the
//! remaining environments, platforms and properties are not visited.
//!
//! # Order
//! Environments are visited in the order given, platforms and properties in
//! their store's iteration order. The order only decides *which* violation
//! is reported when there are several, never *whether* validation fails.

use crate::environment::{Environment, Platform};
use crate::properties::Properties;
use crate::schema::{PropertyDefinition, Schema};
use crate::types::{PlatformType, PropertyType};
use envdir_primitives::{NonEmptyKeyedStore, NonEmptySet, NonEmptyString};
use std::collections::BTreeSet;

/// Cross-referential inconsistencies between environments, schema and
/// properties
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Environment platforms differ from the schema's supported platforms
    #[error(
        "environment '{environment_name}' has platforms {environment_platform_types}, \
         schema requires {schema_platform_types}"
    )]
    EnvironmentMissingPlatforms {
        environment_name: NonEmptyString,
        schema_platform_types: NonEmptySet<PlatformType>,
        environment_platform_types: NonEmptySet<PlatformType>,
    },

    /// Platform properties differ from the applicable definitions
    #[error(
        "platform {platform_type} of environment '{environment_name}' has properties \
         {platform_properties:?}, schema requires {schema_property_definitions:?}"
    )]
    PlatformMissingProperties {
        environment_name: NonEmptyString,
        platform_type: PlatformType,
        schema_property_definitions: BTreeSet<String>,
        platform_properties: BTreeSet<String>,
    },

    /// Property without a value whose definition is not nullable
    #[error(
        "property '{property_name}' on platform {platform_type} of environment \
         '{environment_name}' is null but its definition is not nullable"
    )]
    NullPropertyValueIsNotNullable {
        environment_name: NonEmptyString,
        property_name: NonEmptyString,
        platform_type: PlatformType,
    },

    /// Property value type differs from its definition
    #[error(
        "property '{property_name}' on platform {platform_type} of environment \
         '{environment_name}' is {property_type}, definition requires {}",
        .property_definition.property_type
    )]
    PropertyTypeNotEqualToPropertyDefinition {
        environment_name: NonEmptyString,
        platform_type: PlatformType,
        property_name: NonEmptyString,
        property_type: PropertyType,
        property_definition: PropertyDefinition,
    },

    /// Selected environment is not among the environments
    #[error(
        "selected environment '{selected_environment_name}' not found, \
         existing environments: {existing_environment_names:?}"
    )]
    SelectedEnvironmentNotFound {
        selected_environment_name: NonEmptyString,
        existing_environment_names: BTreeSet<String>,
    },
}

/// Checks environments against one schema
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator<'a> {
    schema: &'a Schema,
}

impl<'a> SchemaValidator<'a> {
    /// Create validator for `schema`
    #[inline]
    #[must_use]
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validate every environment, stopping at the first violation
    ///
    /// # Errors
    /// The first `ValidationError` found
    pub fn validate_environments<'e>(
        &self,
        environments: impl IntoIterator<Item = &'e Environment>,
    ) -> Result<(), ValidationError> {
        environments
            .into_iter()
            .try_for_each(|environment| self.validate_environment(environment))
    }

    /// Validate a single environment
    ///
    /// # Errors
    /// - `EnvironmentMissingPlatforms` if the platform set differs
    /// - `PlatformMissingProperties` if a platform's property names differ
    ///   from its applicable definitions
    /// - `NullPropertyValueIsNotNullable` / `PropertyTypeNotEqualToPropertyDefinition`
    ///   for the first ill-typed property
    pub fn validate_environment(&self, environment: &Environment) -> Result<(), ValidationError> {
        let environment_platform_types: BTreeSet<PlatformType> =
            environment.platforms.keys().copied().collect();

        if &environment_platform_types != self.schema.supported_platforms().as_set() {
            return Err(ValidationError::EnvironmentMissingPlatforms {
                environment_name: environment.name.clone(),
                schema_platform_types: self.schema.supported_platforms().clone(),
                environment_platform_types: NonEmptySet::new_unchecked(environment_platform_types),
            });
        }

        for platform in environment.platforms.values() {
            self.validate_platform(&environment.name, platform)?;
        }

        Ok(())
    }

    fn validate_platform(
        &self,
        environment_name: &NonEmptyString,
        platform: &Platform,
    ) -> Result<(), ValidationError> {
        let schema_property_definitions: BTreeSet<String> = self
            .schema
            .applicable_definitions(platform.platform_type)
            .map(|definition| definition.name.to_string())
            .collect();
        let platform_properties: BTreeSet<String> = platform.properties.keys().cloned().collect();

        if schema_property_definitions != platform_properties {
            return Err(ValidationError::PlatformMissingProperties {
                environment_name: environment_name.clone(),
                platform_type: platform.platform_type,
                schema_property_definitions,
                platform_properties,
            });
        }

        for property in platform.properties.values() {
            let Some(definition) = self.schema.property_definition(&property.name) else {
                unreachable!("property names were checked against the schema above");
            };

            match &property.value {
                None if !definition.nullable => {
                    return Err(ValidationError::NullPropertyValueIsNotNullable {
                        environment_name: environment_name.clone(),
                        property_name: property.name.clone(),
                        platform_type: platform.platform_type,
                    });
                }
                Some(value) if value.property_type() != definition.property_type => {
                    return Err(ValidationError::PropertyTypeNotEqualToPropertyDefinition {
                        environment_name: environment_name.clone(),
                        platform_type: platform.platform_type,
                        property_name: property.name.clone(),
                        property_type: value.property_type(),
                        property_definition: definition.clone(),
                    });
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// Check that the selected environment, if any, exists
///
/// # Errors
/// Returns `SelectedEnvironmentNotFound` if a name is selected and
/// `environments` is absent or lacks that key
pub fn validate_selected_environment(
    properties: &Properties,
    environments: Option<&NonEmptyKeyedStore<String, Environment>>,
) -> Result<(), ValidationError> {
    let Some(selected) = properties.selected_environment_name() else {
        return Ok(());
    };

    if environments.is_some_and(|store| store.contains_key(selected.as_str())) {
        return Ok(());
    }

    Err(ValidationError::SelectedEnvironmentNotFound {
        selected_environment_name: selected.clone(),
        existing_environment_names: environments
            .map(|store| store.keys().cloned().collect())
            .unwrap_or_default(),
    })
}
