//! # DocShift
//!
//! A pure-Rust library for moving structured data between JSON, YAML, and XML.
//!
//! ## Supported Formats
//!
//! - **JSON** - `.json`, written with 4-space indentation
//! - **YAML** - `.yml` / `.yaml`, plain data only (tagged nodes are refused)
//! - **XML** - `.xml`, written under a synthetic `<root>` element
//!
//! Each format keeps its own in-memory shape; see [`formats::Document`].
//!
//! ## Quick Start
//!
//! ### One-off conversion
//!
//! ```no_run
//! use docshift::converter::{convert_file, OutputPolicy};
//!
//! // Output format follows the input extension
//! convert_file("settings.yaml", "settings.out.yaml", OutputPolicy::MatchInput)?;
//! # Ok::<(), docshift::Error>(())
//! ```
//!
//! ### Using the worker pool
//!
//! ```no_run
//! use docshift::prelude::*;
//!
//! let pipeline = ConversionPipeline::with_defaults()?;
//! let report = pipeline.convert(&ConversionRequest::new("in.json", "out.json"));
//! println!("{}", report.notice());
//! # Ok::<(), docshift::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `docshift` command-line binary

pub mod config;
pub mod converter;
pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, ErrorKind, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::ConverterConfig;
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::formats::{Document, Format, JsonDocument, XmlElement, YamlDocument};
    pub use crate::formats::{read_document, write_document};

    pub use crate::converter::{
        ConversionPipeline, ConversionPlan, ConversionReport, ConversionRequest, FileFormat,
        OutputPolicy, Stage, convert_file, dispatch,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
