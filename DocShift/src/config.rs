//! Converter configuration
//!
//! Loaded from a TOML file, e.g.
//!
//! ```toml
//! worker_threads = 4
//! output_policy = "by-output-extension"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::converter::OutputPolicy;
use crate::error::{Error, Result};

/// Settings for a [`ConversionPipeline`](crate::converter::ConversionPipeline).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Worker pool size. `None` (or 0) uses one thread per available core.
    pub worker_threads: Option<usize>,
    /// How the writer codec is chosen.
    pub output_policy: OutputPolicy,
}

impl ConverterConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Config`] if it is not valid configuration.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the text is not valid configuration.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }
}
