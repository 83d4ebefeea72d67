//! JSON format module
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod reader;
mod writer;

pub use reader::{parse_json, read_json};
pub use writer::{serialize_json, write_json};

/// A parsed JSON document. Object keys keep their source order.
pub type JsonDocument = serde_json::Value;
