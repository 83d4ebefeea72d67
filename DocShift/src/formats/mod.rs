//! Document formats and their codecs
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Each format owns a reader/writer pair and keeps its native in-memory
//! shape. There is no shared tree: a [`Document`] is one of
//! the three native values, tagged with the format that produced it.

pub mod json;
pub mod xml;
pub mod yaml;

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

pub use json::JsonDocument;
pub use xml::XmlElement;
pub use yaml::YamlDocument;

/// Source name recorded in parse errors for content that did not come from a file.
pub(crate) const INLINE_SOURCE: &str = "<inline>";

/// Load a file as UTF-8 text for the reader of `format`.
///
/// Filesystem failures are I/O errors; bytes that are not UTF-8 are a
/// content problem and surface as a parse error.
pub(crate) fn read_text(format: Format, path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
    String::from_utf8(bytes).map_err(|e| Error::parse(format, path, e.to_string()))
}

/// A supported serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Xml,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Xml => "XML",
        };
        f.write_str(name)
    }
}

/// An in-memory document, native to the format it was read from.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Json(JsonDocument),
    Yaml(YamlDocument),
    Xml(XmlElement),
}

impl Document {
    /// The format whose writer can reproduce this document.
    #[must_use]
    pub fn format(&self) -> Format {
        match self {
            Document::Json(_) => Format::Json,
            Document::Yaml(_) => Format::Yaml,
            Document::Xml(_) => Format::Xml,
        }
    }
}

/// Read `path` with the codec for `format`.
///
/// # Errors
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read and
/// [`Error::Parse`](crate::Error::Parse) if its content is malformed.
pub fn read_document<P: AsRef<Path>>(format: Format, path: P) -> Result<Document> {
    let path = path.as_ref();
    tracing::debug!("Reading {} document from {}", format, path.display());

    let doc = match format {
        Format::Json => Document::Json(json::read_json(path)?),
        Format::Yaml => Document::Yaml(yaml::read_yaml(path)?),
        Format::Xml => Document::Xml(xml::read_xml(path)?),
    };
    Ok(doc)
}

/// Write `doc` to `path` with the codec of the document's own format,
/// replacing whatever the file held before.
///
/// # Errors
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be written.
pub fn write_document<P: AsRef<Path>>(doc: &Document, path: P) -> Result<()> {
    let path = path.as_ref();
    tracing::debug!("Writing {} document to {}", doc.format(), path.display());

    match doc {
        Document::Json(value) => json::write_json(value, path),
        Document::Yaml(value) => yaml::write_yaml(value, path),
        Document::Xml(element) => xml::write_xml(element, path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_reports_its_format() {
        let doc = Document::Json(serde_json::json!({"a": 1}));
        assert_eq!(doc.format(), Format::Json);

        let doc = Document::Xml(XmlElement::new("data"));
        assert_eq!(doc.format(), Format::Xml);
    }

    #[test]
    fn test_format_display() {
        assert_eq!(Format::Json.to_string(), "JSON");
        assert_eq!(Format::Xml.to_string(), "XML");
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin.json");
        fs::write(&path, b"{\"name\": \"caf\xe9\"}").unwrap();

        for format in [Format::Json, Format::Yaml, Format::Xml] {
            let err = read_document(format, &path).unwrap_err();
            assert!(matches!(err, Error::Parse { format: f, .. } if f == format), "{err:?}");
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_text(Format::Json, Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
