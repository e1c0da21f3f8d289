//! Snippet definitions and loading.
//!
//! Snippet files are the VS Code user-snippets format: a JSONC document
//! (comments and trailing commas allowed) mapping snippet name to
//! `{ prefix, body, description }`, where `prefix` and `body` may each be
//! either a single string or an array of strings.

use std::collections::BTreeMap;
use std::path::Path;

use serde::de::{Deserializer, Error as DeError};
use serde::Deserialize;

use crate::error::SnippetError;

/// All snippets from one file, keyed by snippet name.
///
/// A `BTreeMap` so that iteration (and therefore the emitted completion
/// item order) is deterministic across runs.
pub type SnippetSet = BTreeMap<String, Snippet>;

/// A single snippet definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    /// Trigger prefix(es) the user types to select the snippet.
    pub prefix: StringOrList,
    /// The text inserted when the snippet is selected.
    pub body: StringOrList,
    /// Human-readable description. Often omitted in real snippet files.
    #[serde(default)]
    pub description: String,
}

/// A field that is either a single string or an ordered list of strings.
///
/// VS Code accepts both shapes for `prefix` and `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StringOrList {
    Single(String),
    Multiple(Vec<String>),
}

impl StringOrList {
    /// View the value as an ordered sequence of strings.
    ///
    /// A single string is a one-element sequence.
    pub fn as_slice(&self) -> &[String] {
        match self {
            StringOrList::Single(s) => std::slice::from_ref(s),
            StringOrList::Multiple(v) => v.as_slice(),
        }
    }

    /// Render the value as one string.
    ///
    /// A list is joined with newlines, order preserved, no trailing
    /// newline. A single string is returned verbatim.
    pub fn render(&self) -> String {
        match self {
            StringOrList::Single(s) => s.clone(),
            StringOrList::Multiple(lines) => lines.join("\n"),
        }
    }
}

impl<'de> Deserialize<'de> for StringOrList {
    /// Try the single-string shape first, then the string-list shape.
    ///
    /// The order matters: a JSON array containing one string must decode
    /// as `Multiple`, which the string attempt cannot match, while a bare
    /// string must never be wrapped into a list.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        if let Ok(single) = serde_json::from_value::<String>(value.clone()) {
            return Ok(StringOrList::Single(single));
        }

        if let Ok(multiple) = serde_json::from_value::<Vec<String>>(value.clone()) {
            return Ok(StringOrList::Multiple(multiple));
        }

        Err(D::Error::custom(format!(
            "expected a string or an array of strings, got: {value}"
        )))
    }
}

/// Decode a snippets document.
///
/// The whole load fails if any snippet fails to decode; there is no
/// partial result.
pub fn load_snippets(text: &str) -> Result<SnippetSet, SnippetError> {
    let value = jsonc_parser::parse_to_serde_value(text, &Default::default())
        .map_err(|e| SnippetError::Decode(e.to_string()))?
        .ok_or_else(|| SnippetError::Decode("snippets file is empty".to_string()))?;

    serde_json::from_value(value).map_err(|e| SnippetError::Decode(e.to_string()))
}

/// Read and decode a snippets file from disk.
pub fn load_snippets_file(path: &Path) -> Result<SnippetSet, SnippetError> {
    let text = std::fs::read_to_string(path).map_err(|source| SnippetError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;

    load_snippets(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_single_string() {
        let set = load_snippets(r#"{"s": {"prefix": "hi", "body": "x"}}"#).unwrap();
        assert_eq!(set["s"].prefix, StringOrList::Single("hi".to_string()));
        assert_eq!(set["s"].prefix.as_slice(), &["hi".to_string()]);
    }

    #[test]
    fn test_prefix_list_order_preserved() {
        let set = load_snippets(r#"{"s": {"prefix": ["b", "a", "c"], "body": "x"}}"#).unwrap();
        assert_eq!(
            set["s"].prefix.as_slice(),
            &["b".to_string(), "a".to_string(), "c".to_string()]
        );
    }

    #[test]
    fn test_single_element_array_is_multiple() {
        // An array with one string must not collapse into Single.
        let set = load_snippets(r#"{"s": {"prefix": ["hi"], "body": "x"}}"#).unwrap();
        assert_eq!(
            set["s"].prefix,
            StringOrList::Multiple(vec!["hi".to_string()])
        );
    }

    #[test]
    fn test_body_list_joined_with_newlines() {
        let set =
            load_snippets(r#"{"s": {"prefix": "p", "body": ["l1", "l2", "l3"]}}"#).unwrap();
        assert_eq!(set["s"].body.render(), "l1\nl2\nl3");
    }

    #[test]
    fn test_body_single_string_verbatim() {
        let set = load_snippets(r#"{"s": {"prefix": "p", "body": "one line"}}"#).unwrap();
        assert_eq!(set["s"].body.render(), "one line");
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let set = load_snippets(r#"{"s": {"prefix": "p", "body": "b"}}"#).unwrap();
        assert_eq!(set["s"].description, "");
    }

    #[test]
    fn test_comments_and_trailing_commas_accepted() {
        let text = r#"{
            // a line comment
            "greet": {
                "prefix": "hi",
                /* a block comment */
                "body": ["hello", "world",],
                "description": "greeting",
            },
        }"#;
        let set = load_snippets(text).unwrap();
        assert_eq!(set["greet"].body.render(), "hello\nworld");
        assert_eq!(set["greet"].description, "greeting");
    }

    #[test]
    fn test_numeric_prefix_fails_whole_load() {
        let text = r#"{
            "ok": {"prefix": "p", "body": "b"},
            "bad": {"prefix": 42, "body": "b"}
        }"#;
        let err = load_snippets(text).unwrap_err();
        assert!(matches!(err, SnippetError::Decode(_)));
    }

    #[test]
    fn test_object_body_fails_whole_load() {
        let err = load_snippets(r#"{"s": {"prefix": "p", "body": {"x": 1}}}"#).unwrap_err();
        assert!(matches!(err, SnippetError::Decode(_)));
    }

    #[test]
    fn test_mixed_type_array_fails() {
        let err = load_snippets(r#"{"s": {"prefix": ["p", 1], "body": "b"}}"#).unwrap_err();
        assert!(matches!(err, SnippetError::Decode(_)));
    }

    #[test]
    fn test_invalid_json_fails() {
        let err = load_snippets("not json at all {").unwrap_err();
        assert!(matches!(err, SnippetError::Decode(_)));
    }

    #[test]
    fn test_empty_document_fails() {
        let err = load_snippets("").unwrap_err();
        assert!(matches!(err, SnippetError::Decode(_)));
    }
}
