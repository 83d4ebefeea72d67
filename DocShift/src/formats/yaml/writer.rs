//! YAML file writing

use std::fs;
use std::path::Path;

use super::YamlDocument;
use crate::error::{Error, Result};
use crate::formats::Format;

/// Write a YAML document to disk, replacing any existing file
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_yaml<P: AsRef<Path>>(doc: &YamlDocument, path: P) -> Result<()> {
    let path = path.as_ref();
    let yaml = serialize_yaml(doc)?;
    fs::write(path, yaml).map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Serialize a YAML document in the default block style
///
/// # Errors
/// Returns an error if YAML serialization fails.
pub fn serialize_yaml(doc: &YamlDocument) -> Result<String> {
    serde_yaml::to_string(doc).map_err(|e| Error::Serialize {
        format: Format::Yaml,
        message: e.to_string(),
    })
}
