//! XML file writing
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Output always sits under a synthetic `<root>` element, so a document
//! read from `<data>...</data>` comes back as `<root><data>...</data></root>`.

use std::fmt::Display;
use std::fs;
use std::io::Write;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::document::XmlElement;
use super::reader::MAX_DEPTH;
use crate::error::{Error, Result};
use crate::formats::Format;

/// Name of the element every written document is wrapped in.
pub const WRAPPER_ELEMENT: &str = "root";

/// Write an XML element to disk under the `<root>` wrapper, replacing any existing file
///
/// # Errors
/// Returns an error if serialization or file writing fails.
pub fn write_xml<P: AsRef<Path>>(element: &XmlElement, path: P) -> Result<()> {
    let path = path.as_ref();
    let xml = serialize_xml(element)?;
    fs::write(path, xml).map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Serialize an XML element, wrapped in `<root>`, with a UTF-8 declaration
///
/// # Errors
/// Returns an error if XML serialization fails.
pub fn serialize_xml(element: &XmlElement) -> Result<String> {
    let mut writer = Writer::new(Vec::new());

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(serialize_failure)?;
    writer.get_mut().write_all(b"\n").map_err(serialize_failure)?;

    writer
        .write_event(Event::Start(BytesStart::new(WRAPPER_ELEMENT)))
        .map_err(serialize_failure)?;
    write_element(&mut writer, element, 1)?;
    writer
        .write_event(Event::End(BytesEnd::new(WRAPPER_ELEMENT)))
        .map_err(serialize_failure)?;

    String::from_utf8(writer.into_inner()).map_err(serialize_failure)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement, depth: usize) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(serialize_failure(format!(
            "maximum nesting depth of {MAX_DEPTH} exceeded"
        )));
    }

    let mut start = BytesStart::new(element.name.as_str());
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.is_empty() {
        writer.write_event(Event::Empty(start)).map_err(serialize_failure)?;
    } else {
        writer
            .write_event(Event::Start(start.borrow()))
            .map_err(serialize_failure)?;
        if let Some(ref text) = element.text {
            writer
                .write_event(Event::Text(BytesText::new(text)))
                .map_err(serialize_failure)?;
        }
        for child in &element.children {
            write_element(writer, child, depth + 1)?;
        }
        writer
            .write_event(Event::End(BytesEnd::new(element.name.as_str())))
            .map_err(serialize_failure)?;
    }

    if let Some(ref tail) = element.tail {
        writer
            .write_event(Event::Text(BytesText::new(tail)))
            .map_err(serialize_failure)?;
    }
    Ok(())
}

fn serialize_failure(err: impl Display) -> Error {
    Error::Serialize {
        format: Format::Xml,
        message: err.to_string(),
    }
}
