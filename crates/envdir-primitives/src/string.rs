//! Non-empty strings
//!
//! Provides [`NonEmptyString`], used for every name in the data model.

use crate::error::PrimitiveError;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

/// String guaranteed to hold at least one character
///
/// Decoding an empty JSON string fails instead of producing a value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Create from untrusted input
    ///
    /// # Errors
    /// Returns `PrimitiveError::EmptyString` if `value` is empty
    pub fn try_new(value: impl Into<String>) -> Result<Self, PrimitiveError> {
        let value = value.into();
        if value.is_empty() {
            return Err(PrimitiveError::EmptyString);
        }
        Ok(Self(value))
    }

    /// Create without checking
    ///
    /// Reserved for literals and enum tags. Never call this on input read
    /// from disk or from a user.
    #[inline]
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        let value = value.into();
        debug_assert!(!value.is_empty(), "NonEmptyString::new_unchecked on empty input");
        Self(value)
    }

    /// Borrow as `&str`
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned `String`
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for NonEmptyString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for NonEmptyString {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NonEmptyString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NonEmptyString {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for NonEmptyString {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = PrimitiveError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl TryFrom<&str> for NonEmptyString {
    type Error = PrimitiveError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

impl PartialEq<str> for NonEmptyString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NonEmptyString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn try_new_rejects_empty() {
        assert_eq!(NonEmptyString::try_new(""), Err(PrimitiveError::EmptyString));
    }

    #[test]
    fn try_new_keeps_whitespace() {
        // Only emptiness is an invariant; blank names are the caller's concern
        let s = NonEmptyString::try_new(" ").unwrap();
        assert_eq!(s.as_str(), " ");
    }

    #[test]
    fn from_str_and_display() {
        let s: NonEmptyString = "production".parse().unwrap();
        assert_eq!(s.to_string(), "production");
        assert_eq!(s, "production");
    }

    #[test]
    fn deserialize_rejects_empty_string() {
        let result: Result<NonEmptyString, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err());
    }

    #[test]
    fn serde_is_transparent() {
        let s = NonEmptyString::new_unchecked("HOST");
        assert_eq!(serde_json::to_string(&s).unwrap(), r#""HOST""#);

        let back: NonEmptyString = serde_json::from_str(r#""HOST""#).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn borrow_allows_str_lookup() {
        let mut set = std::collections::HashSet::new();
        set.insert(NonEmptyString::new_unchecked("a"));
        assert!(set.contains("a"));
    }

    proptest! {
        #[test]
        fn prop_try_new_accepts_iff_non_empty(value in ".*") {
            let result = NonEmptyString::try_new(value.clone());
            prop_assert_eq!(result.is_ok(), !value.is_empty());
            if let Ok(s) = result {
                prop_assert_eq!(s.into_inner(), value);
            }
        }
    }
}
