//! YAML format module
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod reader;
mod writer;

pub use reader::{parse_yaml, read_yaml};
pub use writer::{serialize_yaml, write_yaml};

/// A parsed YAML document. Same mapping/sequence/scalar shape as JSON,
/// except that mapping keys may be any scalar or collection.
pub type YamlDocument = serde_yaml::Value;
