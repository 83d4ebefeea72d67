//! Codec selection by file extension
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::formats::{Document, Format};

/// Classification of a path by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Yaml,
    Xml,
    Unsupported,
}

impl FileFormat {
    /// Classify `path` by suffix: `.json`, then `.yml`/`.yaml`, then `.xml`.
    ///
    /// The check is case-sensitive, so `DATA.JSON` is unsupported.
    pub fn classify<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_string_lossy();
        if path.ends_with(".json") {
            FileFormat::Json
        } else if path.ends_with(".yml") || path.ends_with(".yaml") {
            FileFormat::Yaml
        } else if path.ends_with(".xml") {
            FileFormat::Xml
        } else {
            FileFormat::Unsupported
        }
    }

    /// The codec format, if this classification has one.
    #[must_use]
    pub fn format(self) -> Option<Format> {
        match self {
            FileFormat::Json => Some(Format::Json),
            FileFormat::Yaml => Some(Format::Yaml),
            FileFormat::Xml => Some(Format::Xml),
            FileFormat::Unsupported => None,
        }
    }
}

/// How the writer codec is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputPolicy {
    /// Writer codec comes from the input path too, so output format always
    /// equals input format whatever the output path is called.
    #[default]
    MatchInput,
    /// Writer codec comes from the output path's extension.
    ByOutputExtension,
}

/// One conversion: the file to read and the file to (over)write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionRequest {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        ConversionRequest {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// The codecs picked for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionPlan {
    pub reader: Format,
    pub writer: Format,
}

impl ConversionPlan {
    #[must_use]
    pub fn is_cross_format(&self) -> bool {
        self.reader != self.writer
    }
}

/// Select the reader and writer codecs for `request`.
///
/// Nothing is read or written here; every failure is decided from the
/// paths alone.
///
/// # Errors
/// Returns [`Error::UnsupportedFormat`] for an unrecognized extension and
/// [`Error::UnsupportedConversion`] for a pair of formats the documents
/// cannot move between.
pub fn dispatch(request: &ConversionRequest, policy: OutputPolicy) -> Result<ConversionPlan> {
    let reader = FileFormat::classify(&request.input)
        .format()
        .ok_or_else(|| Error::UnsupportedFormat {
            path: request.input.clone(),
        })?;

    let writer = match policy {
        OutputPolicy::MatchInput => reader,
        OutputPolicy::ByOutputExtension => FileFormat::classify(&request.output)
            .format()
            .ok_or_else(|| Error::UnsupportedFormat {
                path: request.output.clone(),
            })?,
    };

    if !can_transcode(reader, writer) {
        return Err(Error::UnsupportedConversion {
            from: reader,
            to: writer,
        });
    }

    tracing::debug!("Dispatch: read {reader}, write {writer} ({policy:?})");
    Ok(ConversionPlan { reader, writer })
}

/// JSON and YAML share the serde data model; XML trees only go back to XML.
fn can_transcode(from: Format, to: Format) -> bool {
    match (from, to) {
        (a, b) if a == b => true,
        (Format::Json, Format::Yaml) | (Format::Yaml, Format::Json) => true,
        _ => false,
    }
}

/// Turn `doc` into the native document of `target`.
///
/// # Errors
/// Returns [`Error::Serialize`] when the value has no representation in
/// `target` (a YAML mapping with non-string keys, for instance) and
/// [`Error::UnsupportedConversion`] for pairings involving XML.
pub fn transcode(doc: Document, target: Format) -> Result<Document> {
    match (doc, target) {
        (doc, target) if doc.format() == target => Ok(doc),
        (Document::Json(value), Format::Yaml) => json_to_yaml(&value)
            .map(Document::Yaml)
            .map_err(|message| Error::Serialize {
                format: Format::Yaml,
                message,
            }),
        (Document::Yaml(value), Format::Json) => serde_json::to_value(&value)
            .map(Document::Json)
            .map_err(|e| Error::Serialize {
                format: Format::Json,
                message: e.to_string(),
            }),
        (doc, target) => Err(Error::UnsupportedConversion {
            from: doc.format(),
            to: target,
        }),
    }
}

/// JSON numbers keep their literal text, so they are rebuilt as YAML
/// numbers explicitly rather than through serde.
fn json_to_yaml(value: &serde_json::Value) -> std::result::Result<serde_yaml::Value, String> {
    use serde_json::Value as Json;
    use serde_yaml::Value as Yaml;

    Ok(match value {
        Json::Null => Yaml::Null,
        Json::Bool(b) => Yaml::Bool(*b),
        Json::Number(n) => Yaml::Number(json_number_to_yaml(n)?),
        Json::String(s) => Yaml::String(s.clone()),
        Json::Array(items) => Yaml::Sequence(
            items
                .iter()
                .map(json_to_yaml)
                .collect::<std::result::Result<_, _>>()?,
        ),
        Json::Object(map) => {
            let mut mapping = serde_yaml::Mapping::with_capacity(map.len());
            for (key, value) in map {
                mapping.insert(Yaml::String(key.clone()), json_to_yaml(value)?);
            }
            Yaml::Mapping(mapping)
        }
    })
}

fn json_number_to_yaml(n: &serde_json::Number) -> std::result::Result<serde_yaml::Number, String> {
    if let Some(i) = n.as_i64() {
        return Ok(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Ok(u.into());
    }
    let literal = n.to_string();
    let is_integer = !literal.contains(['.', 'e', 'E']);
    match n.as_f64() {
        Some(f) if f.is_finite() && !is_integer => Ok(f.into()),
        _ => Err(format!("number {literal} is out of range for YAML")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::yaml::parse_yaml;
    use serde_json::json;

    #[test]
    fn test_classify_suffixes() {
        assert_eq!(FileFormat::classify("a.json"), FileFormat::Json);
        assert_eq!(FileFormat::classify("conf.yml"), FileFormat::Yaml);
        assert_eq!(FileFormat::classify("dir/conf.yaml"), FileFormat::Yaml);
        assert_eq!(FileFormat::classify("feed.xml"), FileFormat::Xml);
        assert_eq!(FileFormat::classify("data.txt"), FileFormat::Unsupported);
        assert_eq!(FileFormat::classify(""), FileFormat::Unsupported);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(FileFormat::classify("DATA.JSON"), FileFormat::Unsupported);
        assert_eq!(FileFormat::classify("conf.Yaml"), FileFormat::Unsupported);
    }

    #[test]
    fn test_match_input_ignores_output_extension() {
        let plan = dispatch(&ConversionRequest::new("a.json", "a.xml"), OutputPolicy::MatchInput).unwrap();
        assert_eq!(
            plan,
            ConversionPlan {
                reader: Format::Json,
                writer: Format::Json
            }
        );
        assert!(!plan.is_cross_format());
    }

    #[test]
    fn test_match_input_accepts_any_output_name() {
        let plan = dispatch(&ConversionRequest::new("in.yaml", "out.txt"), OutputPolicy::MatchInput).unwrap();
        assert_eq!(plan.writer, Format::Yaml);
    }

    #[test]
    fn test_unsupported_input() {
        let err = dispatch(&ConversionRequest::new("data.txt", "out.json"), OutputPolicy::MatchInput).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { ref path } if path == Path::new("data.txt")));
    }

    #[test]
    fn test_by_output_extension() {
        let request = ConversionRequest::new("a.json", "b.yml");
        let plan = dispatch(&request, OutputPolicy::ByOutputExtension).unwrap();
        assert_eq!(plan.writer, Format::Yaml);
        assert!(plan.is_cross_format());

        let err = dispatch(&ConversionRequest::new("a.json", "b.txt"), OutputPolicy::ByOutputExtension)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat { ref path } if path == Path::new("b.txt")));
    }

    #[test]
    fn test_xml_pairs_are_rejected_up_front() {
        let err = dispatch(&ConversionRequest::new("a.json", "a.xml"), OutputPolicy::ByOutputExtension)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedConversion {
                from: Format::Json,
                to: Format::Xml
            }
        ));
    }

    #[test]
    fn test_transcode_json_to_yaml() {
        let doc = transcode(Document::Json(json!({"a": [1, "two"]})), Format::Yaml).unwrap();
        assert_eq!(doc, Document::Yaml(parse_yaml("a: [1, two]").unwrap()));
    }

    #[test]
    fn test_transcode_keeps_number_kinds() {
        let value = json!({"i": -3, "u": u64::MAX, "f": 0.5});
        let doc = transcode(Document::Json(value), Format::Yaml).unwrap();
        assert_eq!(doc, Document::Yaml(parse_yaml("i: -3\nu: 18446744073709551615\nf: 0.5\n").unwrap()));
    }

    #[test]
    fn test_transcode_huge_integer_to_yaml_fails() {
        let value = crate::formats::json::parse_json(r#"{"id": 123456789012345678901234567890}"#).unwrap();
        let err = transcode(Document::Json(value), Format::Yaml).unwrap_err();
        assert!(matches!(err, Error::Serialize { format: Format::Yaml, .. }));
    }

    #[test]
    fn test_transcode_yaml_with_complex_keys_fails() {
        let doc = Document::Yaml(parse_yaml("? [1, 2]\n: pair\n").unwrap());
        let err = transcode(doc, Format::Json).unwrap_err();
        assert!(matches!(err, Error::Serialize { format: Format::Json, .. }));
    }
}
