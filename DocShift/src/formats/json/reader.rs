//! JSON file reading

use std::path::Path;

use super::JsonDocument;
use crate::error::{Error, Result};
use crate::formats::{Format, INLINE_SOURCE, read_text};

/// Read a JSON file from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid JSON.
pub fn read_json<P: AsRef<Path>>(path: P) -> Result<JsonDocument> {
    let path = path.as_ref();
    let content = read_text(Format::Json, path)?;
    parse_json_from(&content, path)
}

/// Parse JSON from a string
///
/// # Errors
/// Returns [`Error::Parse`] if the JSON is malformed.
pub fn parse_json(content: &str) -> Result<JsonDocument> {
    parse_json_from(content, Path::new(INLINE_SOURCE))
}

fn parse_json_from(content: &str, path: &Path) -> Result<JsonDocument> {
    serde_json::from_str(content).map_err(|e| Error::parse(Format::Json, path, e.to_string()))
}
