//! JSON file writing
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use super::JsonDocument;
use crate::error::{Error, Result};
use crate::formats::Format;

const INDENT: &[u8] = b"    ";

/// Write a JSON document to disk, replacing any existing file
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_json<P: AsRef<Path>>(doc: &JsonDocument, path: P) -> Result<()> {
    let path = path.as_ref();
    let json = serialize_json(doc)?;
    fs::write(path, json).map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Serialize a JSON document with 4-space indentation
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn serialize_json(doc: &JsonDocument) -> Result<String> {
    let mut output = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut output, PrettyFormatter::with_indent(INDENT));
    doc.serialize(&mut serializer).map_err(|e| Error::Serialize {
        format: Format::Json,
        message: e.to_string(),
    })?;

    String::from_utf8(output).map_err(|e| Error::Serialize {
        format: Format::Json,
        message: e.to_string(),
    })
}
