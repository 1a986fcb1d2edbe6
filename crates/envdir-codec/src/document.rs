//! Shared document helpers

use crate::error::CodecError;
use serde::Serialize;

/// `None` for empty or whitespace-only content
#[inline]
pub(crate) fn non_blank(content: &str) -> Option<&str> {
    if content.trim().is_empty() {
        None
    } else {
        Some(content)
    }
}

/// Pretty JSON with a trailing newline
///
/// Callers pass values in canonical (key-sorted) order, so equal models
/// always produce identical bytes.
pub(crate) fn to_document<T: Serialize>(document: &'static str, value: &T) -> Result<String, CodecError> {
    let mut out =
        serde_json::to_string_pretty(value).map_err(|source| CodecError::encode(document, source))?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_content_is_none() {
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank(" \n\t"), None);
        assert_eq!(non_blank("{}"), Some("{}"));
    }

    #[test]
    fn documents_end_with_newline() {
        let out = to_document("test", &serde_json::json!({"a": 1})).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}\n");
    }
}
