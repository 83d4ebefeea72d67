//! Error types for `DocShift`
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::formats::Format;

/// The error type for `DocShift` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// Filesystem failure while reading or writing a document.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    // ==================== Parsing Errors ====================
    /// The input content is malformed (or, for YAML, uses unsafe tags).
    #[error("{format} parse error in {}: {message}", path.display())]
    Parse {
        /// The codec that rejected the content.
        format: Format,
        /// The file that was being parsed.
        path: PathBuf,
        /// The parser's description of the failure, including its location.
        message: String,
    },

    /// Serializing a document failed before anything reached disk.
    #[error("{format} serialization error: {message}")]
    Serialize {
        /// The codec that was writing.
        format: Format,
        /// The serializer's description of the failure.
        message: String,
    },

    // ==================== Dispatch Errors ====================
    /// The path's extension is not one of `.json`, `.yml`, `.yaml`, `.xml`.
    #[error("unsupported file format: {}", path.display())]
    UnsupportedFormat {
        /// The path whose extension was not recognized.
        path: PathBuf,
    },

    /// Both formats are known, but a document cannot move between them.
    #[error("unsupported conversion: {from} -> {to}")]
    UnsupportedConversion {
        /// The format being read.
        from: Format,
        /// The format that was requested for writing.
        to: Format,
    },

    // ==================== Setup Errors ====================
    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The worker pool could not be started.
    #[error("worker pool error: {0}")]
    WorkerPool(String),
}

/// Coarse classification of an [`Error`], as surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or unsafe input content.
    Parse,
    /// Extension outside the recognized set (or an impossible pairing).
    UnsupportedFormat,
    /// Filesystem failure.
    Io,
    /// Serialization, configuration, or pool setup failure.
    Other,
}

impl Error {
    /// Wrap an IO error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build a parse error for `path`.
    pub fn parse(format: Format, path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Error::Parse {
            format,
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Which of the broad failure families this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } => ErrorKind::Io,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::UnsupportedFormat { .. } | Error::UnsupportedConversion { .. } => {
                ErrorKind::UnsupportedFormat
            }
            Error::Serialize { .. } | Error::Config(_) | Error::WorkerPool(_) => ErrorKind::Other,
        }
    }
}

/// Result type alias for `DocShift` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = Error::parse(Format::Json, "a.json", "expected value at line 1 column 7");
        assert_eq!(err.kind(), ErrorKind::Parse);

        let err = Error::UnsupportedFormat {
            path: PathBuf::from("data.txt"),
        };
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);

        let err = Error::io("out.json", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_error_messages_name_the_path() {
        let err = Error::parse(Format::Yaml, "conf.yaml", "did not find expected key");
        assert_eq!(
            err.to_string(),
            "YAML parse error in conf.yaml: did not find expected key"
        );

        let err = Error::UnsupportedConversion {
            from: Format::Xml,
            to: Format::Json,
        };
        assert_eq!(err.to_string(), "unsupported conversion: XML -> JSON");
    }
}
