//! Project schema
//!
//! A [`Schema`] declares the platforms a project supports and the typed
//! properties every environment must provide. A definition may restrict
//! itself to a subset of the supported platforms.

use crate::error::ModelError;
use crate::types::{PlatformType, PropertyType};
use envdir_primitives::{Keyed, NonEmptyKeyedStore, NonEmptySet, NonEmptyString};

/// Declaration of one property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyDefinition {
    /// Property name, unique within the schema
    pub name: NonEmptyString,
    /// Required value type
    pub property_type: PropertyType,
    /// Whether the value may be absent
    pub nullable: bool,
    /// Platforms the property applies to; `None` means all supported ones
    pub supported_platform_types: Option<NonEmptySet<PlatformType>>,
}

impl PropertyDefinition {
    /// Non-nullable definition for every platform
    #[inline]
    #[must_use]
    pub fn new(name: NonEmptyString, property_type: PropertyType) -> Self {
        Self {
            name,
            property_type,
            nullable: false,
            supported_platform_types: None,
        }
    }

    /// Set nullability
    #[inline]
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Restrict to a subset of platforms
    #[inline]
    #[must_use]
    pub fn restricted_to(mut self, platforms: NonEmptySet<PlatformType>) -> Self {
        self.supported_platform_types = Some(platforms);
        self
    }

    /// Whether this definition applies to `platform_type`
    ///
    /// Unrestricted definitions apply to every platform the schema supports;
    /// the schema checks that membership separately.
    #[inline]
    #[must_use]
    pub fn applies_to(&self, platform_type: PlatformType) -> bool {
        self.supported_platform_types
            .as_ref()
            .map_or(true, |platforms| platforms.contains(&platform_type))
    }
}

impl Keyed for PropertyDefinition {
    type Key = String;

    fn key(&self) -> String {
        self.name.to_string()
    }
}

/// Supported platforms plus property definitions
///
/// # Invariants
/// - Every definition's restriction is a subset of `supported_platforms`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Schema {
    supported_platforms: NonEmptySet<PlatformType>,
    property_definitions: NonEmptyKeyedStore<String, PropertyDefinition>,
}

impl Schema {
    /// Create a schema, checking platform restrictions
    ///
    /// # Errors
    /// Returns `ModelError::UnsupportedPlatformRestriction` for the first
    /// definition restricted to a platform outside `supported_platforms`
    pub fn try_new(
        supported_platforms: NonEmptySet<PlatformType>,
        property_definitions: NonEmptyKeyedStore<String, PropertyDefinition>,
    ) -> Result<Self, ModelError> {
        for definition in property_definitions.values() {
            if let Some(restriction) = &definition.supported_platform_types {
                if let Some(unsupported) = restriction.difference(&supported_platforms) {
                    return Err(ModelError::UnsupportedPlatformRestriction {
                        property_name: definition.name.clone(),
                        unsupported_platforms: unsupported,
                    });
                }
            }
        }

        Ok(Self {
            supported_platforms,
            property_definitions,
        })
    }

    /// Platforms every environment must provide
    #[inline]
    #[must_use]
    pub fn supported_platforms(&self) -> &NonEmptySet<PlatformType> {
        &self.supported_platforms
    }

    /// All property definitions
    #[inline]
    #[must_use]
    pub fn property_definitions(&self) -> &NonEmptyKeyedStore<String, PropertyDefinition> {
        &self.property_definitions
    }

    /// Look up a definition by name
    #[inline]
    #[must_use]
    pub fn property_definition(&self, name: &str) -> Option<&PropertyDefinition> {
        self.property_definitions.get(name)
    }

    /// Definitions a platform of `platform_type` must provide
    ///
    /// Empty when the schema does not support `platform_type`.
    pub fn applicable_definitions(
        &self,
        platform_type: PlatformType,
    ) -> impl Iterator<Item = &PropertyDefinition> {
        let supported = self.supported_platforms.contains(&platform_type);
        self.property_definitions
            .values()
            .filter(move |definition| supported && definition.applies_to(platform_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> NonEmptyString {
        NonEmptyString::new_unchecked(s)
    }

    fn platforms(values: &[PlatformType]) -> NonEmptySet<PlatformType> {
        NonEmptySet::try_from_iter(values.iter().copied()).unwrap()
    }

    fn definitions(
        values: Vec<PropertyDefinition>,
    ) -> NonEmptyKeyedStore<String, PropertyDefinition> {
        NonEmptyKeyedStore::try_from_values(values).unwrap()
    }

    #[test]
    fn restriction_outside_supported_platforms_is_rejected() {
        let host = PropertyDefinition::new(name("HOST"), PropertyType::String)
            .restricted_to(platforms(&[PlatformType::Jvm, PlatformType::Ios]));

        let err = Schema::try_new(platforms(&[PlatformType::Jvm]), definitions(vec![host]))
            .unwrap_err();

        assert_eq!(
            err,
            ModelError::UnsupportedPlatformRestriction {
                property_name: name("HOST"),
                unsupported_platforms: platforms(&[PlatformType::Ios]),
            }
        );
    }

    #[test]
    fn applicable_definitions_honour_restrictions() {
        let host = PropertyDefinition::new(name("HOST"), PropertyType::String)
            .restricted_to(platforms(&[PlatformType::Jvm]));
        let debug = PropertyDefinition::new(name("DEBUG"), PropertyType::Boolean);
        let schema = Schema::try_new(
            platforms(&[PlatformType::Jvm, PlatformType::Android]),
            definitions(vec![host, debug]),
        )
        .unwrap();

        let jvm: Vec<_> = schema
            .applicable_definitions(PlatformType::Jvm)
            .map(|d| d.name.as_str())
            .collect();
        let android: Vec<_> = schema
            .applicable_definitions(PlatformType::Android)
            .map(|d| d.name.as_str())
            .collect();

        assert_eq!(jvm, vec!["HOST", "DEBUG"]);
        assert_eq!(android, vec!["DEBUG"]);
        assert_eq!(schema.applicable_definitions(PlatformType::Js).count(), 0);
    }

    #[test]
    fn property_definition_lookup() {
        let schema = Schema::try_new(
            platforms(&[PlatformType::Jvm]),
            definitions(vec![
                PropertyDefinition::new(name("HOST"), PropertyType::String).with_nullable(true)
            ]),
        )
        .unwrap();

        assert!(schema.property_definition("HOST").unwrap().nullable);
        assert!(schema.property_definition("PORT").is_none());
    }
}
