//! Project-level properties

use envdir_primitives::NonEmptyString;

/// Per-project settings stored next to the schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Properties {
    /// Name of the currently selected environment, if any
    pub selected_environment_name: Option<NonEmptyString>,
}

impl Properties {
    /// Create properties
    #[inline]
    #[must_use]
    pub fn new(selected_environment_name: Option<NonEmptyString>) -> Self {
        Self {
            selected_environment_name,
        }
    }

    /// Properties selecting `name`
    #[inline]
    #[must_use]
    pub fn selecting(name: NonEmptyString) -> Self {
        Self::new(Some(name))
    }

    /// Selected environment name
    #[inline]
    #[must_use]
    pub fn selected_environment_name(&self) -> Option<&NonEmptyString> {
        self.selected_environment_name.as_ref()
    }
}
