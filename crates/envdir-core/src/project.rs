//! Validated project
//!
//! A [`Project`] can only be constructed through [`Project::try_new`], so
//! every value in circulation satisfies:
//!
//! 1. The selected environment, if any, exists
//! 2. Every environment conforms to the schema
//!
//! Edit operations never mutate; they return a new project that passed the
//! same checks, or the first violation.

use crate::directory::EnvironmentsDirectory;
use envdir_model::{
    validate_selected_environment, Environment, PlatformType, Properties, PropertyValue, Schema,
    SchemaValidator, ValidationError,
};
use envdir_primitives::{NonEmptyKeyedStore, NonEmptyString};
use std::collections::BTreeMap;

/// Environments keyed by name
pub type Environments = NonEmptyKeyedStore<String, Environment>;

/// Schema, selection and environments of one environments directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    directory: EnvironmentsDirectory,
    schema: Schema,
    properties: Properties,
    environments: Option<Environments>,
}

impl Project {
    /// Assemble a project, checking selection first, then schema conformance
    ///
    /// # Errors
    /// - `ValidationError::SelectedEnvironmentNotFound`
    /// - any error of [`SchemaValidator::validate_environments`]
    pub fn try_new(
        directory: EnvironmentsDirectory,
        schema: Schema,
        properties: Properties,
        environments: Option<Environments>,
    ) -> Result<Self, ValidationError> {
        validate_selected_environment(&properties, environments.as_ref())?;
        if let Some(environments) = &environments {
            SchemaValidator::new(&schema).validate_environments(environments.values())?;
        }

        Ok(Self {
            directory,
            schema,
            properties,
            environments,
        })
    }

    /// Directory the project belongs to
    #[inline]
    #[must_use]
    pub fn directory(&self) -> &EnvironmentsDirectory {
        &self.directory
    }

    /// Project schema
    #[inline]
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Project properties
    #[inline]
    #[must_use]
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// All environments, absent if the directory has none
    #[inline]
    #[must_use]
    pub fn environments(&self) -> Option<&Environments> {
        self.environments.as_ref()
    }

    /// Environment by name
    #[must_use]
    pub fn environment(&self, name: &str) -> Option<&Environment> {
        self.environments.as_ref()?.get(name)
    }

    /// Environment names in sorted order
    #[must_use]
    pub fn environment_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .environments
            .iter()
            .flat_map(|environments| environments.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names
    }

    /// The selected environment
    #[must_use]
    pub fn selected_environment(&self) -> Option<&Environment> {
        let name = self.properties.selected_environment_name()?;
        self.environment(name.as_str())
    }

    /// Property values of the selected environment on one platform
    ///
    /// `None` if nothing is selected or the schema does not support
    /// `platform_type`.
    #[must_use]
    pub fn resolved_properties(
        &self,
        platform_type: PlatformType,
    ) -> Option<BTreeMap<&str, Option<&PropertyValue>>> {
        let platform = self.selected_environment()?.platform(platform_type)?;
        Some(
            platform
                .properties
                .values()
                .map(|property| (property.name.as_str(), property.value.as_ref()))
                .collect(),
        )
    }

    /// Replace the selection
    ///
    /// # Errors
    /// `ValidationError::SelectedEnvironmentNotFound` if `name` is not an
    /// existing environment
    pub fn update_selected_environment(
        &self,
        name: Option<NonEmptyString>,
    ) -> Result<Self, ValidationError> {
        Self::try_new(
            self.directory.clone(),
            self.schema.clone(),
            Properties::new(name),
            self.environments.clone(),
        )
    }

    /// Add environments; same-named ones replace the existing ones
    ///
    /// # Errors
    /// The first schema violation among the merged environments
    pub fn add_environments(&self, environments: &Environments) -> Result<Self, ValidationError> {
        let merged = match &self.environments {
            Some(existing) => existing.add_values(environments),
            None => environments.clone(),
        };
        Self::try_new(
            self.directory.clone(),
            self.schema.clone(),
            self.properties.clone(),
            Some(merged),
        )
    }

    /// Add or replace a single environment
    ///
    /// # Errors
    /// The schema violation of `environment`, if any
    pub fn add_environment(&self, environment: Environment) -> Result<Self, ValidationError> {
        self.add_environments(&NonEmptyKeyedStore::single(environment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use envdir_test_utils::{
        boolean_property, create_boolean_definition, create_environment, create_environments,
        create_platform, create_schema, create_string_definition, name, null_property,
        string_property,
    };
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    fn directory() -> EnvironmentsDirectory {
        EnvironmentsDirectory::from_path_unchecked(PathBuf::from("/tmp/environments"))
    }

    fn schema() -> Schema {
        create_schema(
            &[PlatformType::Jvm, PlatformType::Android],
            vec![
                create_string_definition("HOST", false),
                create_boolean_definition("DEBUG", true),
            ],
        )
    }

    fn valid_environment(env_name: &str, host: &str) -> Environment {
        create_environment(
            env_name,
            vec![
                create_platform(
                    PlatformType::Jvm,
                    vec![string_property("HOST", host), null_property("DEBUG")],
                ),
                create_platform(
                    PlatformType::Android,
                    vec![string_property("HOST", host), boolean_property("DEBUG", true)],
                ),
            ],
        )
    }

    fn project() -> Project {
        Project::try_new(
            directory(),
            schema(),
            Properties::selecting(name("local")),
            Some(create_environments(vec![
                valid_environment("local", "localhost"),
                valid_environment("production", "example.com"),
            ])),
        )
        .unwrap()
    }

    #[test]
    fn project_without_environments_or_selection() {
        let project = Project::try_new(directory(), schema(), Properties::default(), None).unwrap();
        assert!(project.environments().is_none());
        assert!(project.selected_environment().is_none());
        assert!(project.environment_names().is_empty());
    }

    #[test]
    fn selection_without_environments_fails() {
        let err = Project::try_new(
            directory(),
            schema(),
            Properties::selecting(name("local")),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::SelectedEnvironmentNotFound { .. }));
    }

    #[test]
    fn selection_is_checked_before_conformance() {
        let broken = create_environment(
            "broken",
            vec![create_platform(PlatformType::Jvm, vec![string_property("HOST", "x")])],
        );
        let err = Project::try_new(
            directory(),
            schema(),
            Properties::selecting(name("missing")),
            Some(create_environments(vec![broken])),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::SelectedEnvironmentNotFound { .. }));
    }

    #[test]
    fn nonconforming_environment_fails() {
        let broken = create_environment(
            "broken",
            vec![create_platform(PlatformType::Jvm, vec![string_property("HOST", "x")])],
        );
        let err = Project::try_new(
            directory(),
            schema(),
            Properties::default(),
            Some(create_environments(vec![broken])),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::EnvironmentMissingPlatforms { .. }));
    }

    #[test]
    fn selected_environment_and_resolution() {
        let project = project();
        assert_eq!(project.selected_environment().unwrap().name, "local");
        assert_eq!(project.environment_names(), vec!["local", "production"]);

        let resolved = project.resolved_properties(PlatformType::Jvm).unwrap();
        assert_eq!(resolved.get("HOST").unwrap().unwrap().to_string(), "localhost");
        assert_eq!(resolved.get("DEBUG"), Some(&None));

        assert!(project.resolved_properties(PlatformType::Ios).is_none());
    }

    #[test]
    fn update_selection() {
        let project = project();

        let updated = project.update_selected_environment(Some(name("production"))).unwrap();
        assert_eq!(updated.selected_environment().unwrap().name, "production");
        assert_eq!(project.selected_environment().unwrap().name, "local");

        let cleared = project.update_selected_environment(None).unwrap();
        assert!(cleared.selected_environment().is_none());

        assert!(project.update_selected_environment(Some(name("staging"))).is_err());
    }

    #[test]
    fn add_environment_replaces_same_name() {
        let project = project();
        let updated = project
            .add_environment(valid_environment("local", "127.0.0.1"))
            .unwrap();

        assert_eq!(updated.environment_names(), vec!["local", "production"]);
        let resolved = updated.resolved_properties(PlatformType::Android).unwrap();
        assert_eq!(resolved.get("HOST").unwrap().unwrap().to_string(), "127.0.0.1");
    }

    #[test]
    fn add_environments_to_empty_project() {
        let project = Project::try_new(directory(), schema(), Properties::default(), None).unwrap();
        let updated = project
            .add_environments(&create_environments(vec![valid_environment("staging", "s")]))
            .unwrap();
        assert_eq!(updated.environment_names(), vec!["staging"]);
    }

    #[test]
    fn add_nonconforming_environment_fails() {
        let broken = create_environment(
            "broken",
            vec![
                create_platform(PlatformType::Jvm, vec![string_property("HOST", "x")]),
                create_platform(PlatformType::Android, vec![string_property("HOST", "x")]),
            ],
        );
        let err = project().add_environment(broken).unwrap_err();
        assert!(matches!(err, ValidationError::PlatformMissingProperties { .. }));
    }
}
