//! YAML file reading
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Only the plain data subset is accepted. `serde_yaml` never runs
//! constructors, and explicit tags (`!foo`, `!!python/object`) are refused
//! outright so a tagged document cannot slip through as data.

use std::path::Path;

use serde_yaml::Value;

use super::YamlDocument;
use crate::error::{Error, Result};
use crate::formats::{Format, INLINE_SOURCE, read_text};

/// Read a YAML file from disk
///
/// # Errors
/// Returns an error if the file cannot be read, has invalid YAML, or uses tags.
pub fn read_yaml<P: AsRef<Path>>(path: P) -> Result<YamlDocument> {
    let path = path.as_ref();
    let content = read_text(Format::Yaml, path)?;
    parse_yaml_from(&content, path)
}

/// Parse YAML from a string
///
/// # Errors
/// Returns [`Error::Parse`] if the YAML is malformed or carries an explicit tag.
pub fn parse_yaml(content: &str) -> Result<YamlDocument> {
    parse_yaml_from(content, Path::new(INLINE_SOURCE))
}

fn parse_yaml_from(content: &str, path: &Path) -> Result<YamlDocument> {
    // A stream with no document in it loads as null
    if is_blank(content) {
        return Ok(Value::Null);
    }

    let value: Value = serde_yaml::from_str(content)
        .map_err(|e| Error::parse(Format::Yaml, path, e.to_string()))?;
    reject_tags(&value).map_err(|message| Error::parse(Format::Yaml, path, message))?;
    Ok(value)
}

fn is_blank(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn reject_tags(value: &Value) -> std::result::Result<(), String> {
    match value {
        Value::Tagged(tagged) => Err(format!("unsafe YAML tag {}", tagged.tag)),
        Value::Sequence(items) => items.iter().try_for_each(reject_tags),
        Value::Mapping(map) => map.iter().try_for_each(|(key, value)| {
            reject_tags(key)?;
            reject_tags(value)
        }),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mapping() {
        let doc = parse_yaml("name: x\ntags:\n  - a\n  - b\ncount: 3\n").unwrap();
        assert_eq!(doc["name"], Value::String("x".into()));
        assert_eq!(doc["tags"][1], Value::String("b".into()));
        assert_eq!(doc["count"].as_u64(), Some(3));
    }

    #[test]
    fn test_blank_document_is_null() {
        assert_eq!(parse_yaml("").unwrap(), Value::Null);
        assert_eq!(parse_yaml("# only a comment\n\n").unwrap(), Value::Null);
    }

    #[test]
    fn test_custom_tag_is_rejected() {
        let err = parse_yaml("value: !custom 5\n").unwrap_err();
        match err {
            Error::Parse { format, message, .. } => {
                assert_eq!(format, Format::Yaml);
                assert!(message.contains("unsafe YAML tag"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_python_object_tag_is_rejected() {
        let result = parse_yaml("cmd: !!python/object/apply:os.system [\"echo hi\"]\n");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = parse_yaml("key: [unclosed\n");
        assert!(matches!(result, Err(Error::Parse { .. })));
    }
}
