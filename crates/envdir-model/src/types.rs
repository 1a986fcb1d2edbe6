//! Closed tag enumerations shared by schema and environments

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Target platforms a project can declare
///
/// Wire tags are the upper-case names (`"JVM"`, `"WASM_JS"`); any other tag
/// fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlatformType {
    /// Java virtual machine
    Jvm,
    /// Android
    Android,
    /// iOS
    Ios,
    /// macOS native
    Macos,
    /// Linux native
    Linux,
    /// Windows native
    Windows,
    /// JavaScript
    Js,
    /// WebAssembly with JavaScript interop
    WasmJs,
}

impl PlatformType {
    /// Every platform type, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Jvm,
        Self::Android,
        Self::Ios,
        Self::Macos,
        Self::Linux,
        Self::Windows,
        Self::Js,
        Self::WasmJs,
    ];

    /// Wire tag
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Jvm => "JVM",
            Self::Android => "ANDROID",
            Self::Ios => "IOS",
            Self::Macos => "MACOS",
            Self::Linux => "LINUX",
            Self::Windows => "WINDOWS",
            Self::Js => "JS",
            Self::WasmJs => "WASM_JS",
        }
    }
}

impl Display for PlatformType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for PlatformType {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|platform| platform.tag() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

/// Value type a property definition requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    /// Non-empty string value
    String,
    /// Boolean value
    Boolean,
}

impl Display for PropertyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("String"),
            Self::Boolean => f.write_str("Boolean"),
        }
    }
}

/// Tag that names no known variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag: '{0}'")]
pub struct UnknownTag(pub String);
