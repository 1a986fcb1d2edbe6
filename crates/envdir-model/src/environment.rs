//! Environments, platforms and property values

use crate::error::ModelError;
use crate::types::{PlatformType, PropertyType};
use envdir_primitives::{Keyed, NonEmptyKeyedStore, NonEmptyString};
use std::fmt::{self, Display, Formatter};

/// Concrete property value
///
/// Closed sum: JSON values other than a non-empty string or a boolean are
/// rejected at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    /// Non-empty string
    String(NonEmptyString),
    /// Boolean
    Boolean(bool),
}

impl PropertyValue {
    /// Type tag of this value
    #[inline]
    #[must_use]
    pub fn property_type(&self) -> PropertyType {
        match self {
            Self::String(_) => PropertyType::String,
            Self::Boolean(_) => PropertyType::Boolean,
        }
    }
}

impl Display for PropertyValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Boolean(value) => write!(f, "{value}"),
        }
    }
}

/// Named, optionally valued property
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    /// Property name, matching a schema definition
    pub name: NonEmptyString,
    /// Value; `None` is only valid for nullable definitions
    pub value: Option<PropertyValue>,
}

impl Property {
    /// Create a property
    #[inline]
    #[must_use]
    pub fn new(name: NonEmptyString, value: Option<PropertyValue>) -> Self {
        Self { name, value }
    }
}

impl Keyed for Property {
    type Key = String;

    fn key(&self) -> String {
        self.name.to_string()
    }
}

/// Property values for one platform type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    /// Platform this entry configures
    pub platform_type: PlatformType,
    /// Properties keyed by name
    pub properties: NonEmptyKeyedStore<String, Property>,
}

impl Platform {
    /// Create a platform entry
    #[inline]
    #[must_use]
    pub fn new(platform_type: PlatformType, properties: NonEmptyKeyedStore<String, Property>) -> Self {
        Self {
            platform_type,
            properties,
        }
    }

    /// Look up a property by name
    #[inline]
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }
}

impl Keyed for Platform {
    type Key = PlatformType;

    fn key(&self) -> PlatformType {
        self.platform_type
    }
}

/// One named configuration variant
///
/// The name is not stored in the environment file; it is derived from the
/// file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Environment {
    /// Environment name, unique within a project
    pub name: NonEmptyString,
    /// One entry per platform type
    pub platforms: NonEmptyKeyedStore<PlatformType, Platform>,
}

impl Environment {
    /// Create an environment
    #[inline]
    #[must_use]
    pub fn new(name: NonEmptyString, platforms: NonEmptyKeyedStore<PlatformType, Platform>) -> Self {
        Self { name, platforms }
    }

    /// Create from an iterator of platforms
    ///
    /// # Errors
    /// Fails if `platforms` is empty or repeats a platform type
    pub fn from_platforms(
        name: NonEmptyString,
        platforms: impl IntoIterator<Item = Platform>,
    ) -> Result<Self, ModelError> {
        let platforms = NonEmptyKeyedStore::try_from_values(platforms)?;
        Ok(Self { name, platforms })
    }

    /// Look up a platform entry
    #[inline]
    #[must_use]
    pub fn platform(&self, platform_type: PlatformType) -> Option<&Platform> {
        self.platforms.get(&platform_type)
    }
}

impl Keyed for Environment {
    type Key = String;

    fn key(&self) -> String {
        self.name.to_string()
    }
}
