//! XML file reading
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::document::XmlElement;
use crate::error::{Error, Result};
use crate::formats::{Format, INLINE_SOURCE, read_text};

/// Deepest element nesting the reader accepts.
pub const MAX_DEPTH: usize = 512;

/// Read an XML file from disk and return its root element
///
/// # Errors
/// Returns an error if the file cannot be read or is not well-formed XML.
pub fn read_xml<P: AsRef<Path>>(path: P) -> Result<XmlElement> {
    let path = path.as_ref();
    let content = read_text(Format::Xml, path)?;
    parse_xml_from(&content, path)
}

/// Parse XML from a string and return its root element
///
/// # Errors
/// Returns [`Error::Parse`] if the XML is not well-formed.
pub fn parse_xml(content: &str) -> Result<XmlElement> {
    parse_xml_from(content, Path::new(INLINE_SOURCE))
}

fn parse_xml_from(content: &str, path: &Path) -> Result<XmlElement> {
    let mut reader = Reader::from_str(content);

    let fail = |message: String, position: usize| {
        Error::parse(Format::Xml, path, format!("{message} (at byte {position})"))
    };

    let mut buf = Vec::new();
    let mut root: Option<XmlElement> = None;
    let mut stack: Vec<XmlElement> = Vec::new();

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| fail(e.to_string(), reader.buffer_position()))?;

        match event {
            Event::Start(e) => {
                if stack.is_empty() && root.is_some() {
                    return Err(fail("junk after document element".into(), reader.buffer_position()));
                }
                if stack.len() >= MAX_DEPTH {
                    return Err(fail(
                        format!("maximum nesting depth of {MAX_DEPTH} exceeded"),
                        reader.buffer_position(),
                    ));
                }
                let element = start_element(&e)
                    .map_err(|message| fail(message, reader.buffer_position()))?;
                stack.push(element);
            }
            Event::Empty(e) => {
                if stack.len() >= MAX_DEPTH {
                    return Err(fail(
                        format!("maximum nesting depth of {MAX_DEPTH} exceeded"),
                        reader.buffer_position(),
                    ));
                }
                let element = start_element(&e)
                    .map_err(|message| fail(message, reader.buffer_position()))?;
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(element);
                } else if root.is_none() {
                    root = Some(element);
                } else {
                    return Err(fail("junk after document element".into(), reader.buffer_position()));
                }
            }
            Event::End(e) => {
                let Some(completed) = stack.pop() else {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    return Err(fail(format!("unexpected end tag </{name}>"), reader.buffer_position()));
                };
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(completed);
                } else {
                    root = Some(completed);
                }
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|err| fail(err.to_string(), reader.buffer_position()))?;
                push_text(&mut stack, &text)
                    .map_err(|message| fail(message, reader.buffer_position()))?;
            }
            Event::CData(e) => {
                let raw = e.into_inner();
                let text = String::from_utf8_lossy(&raw);
                push_text(&mut stack, &text)
                    .map_err(|message| fail(message, reader.buffer_position()))?;
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, DOCTYPE
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(fail(
            format!("unclosed element <{}>", open.name),
            reader.buffer_position(),
        ));
    }

    root.ok_or_else(|| fail("no element found".into(), reader.buffer_position()))
}

fn start_element(start: &BytesStart<'_>) -> std::result::Result<XmlElement, String> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = XmlElement::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value().map_err(|e| e.to_string())?;
        element.attributes.insert(key, value.into_owned());
    }

    Ok(element)
}

/// Attach character data to the open element: as its text if no child has
/// been seen yet, otherwise as the tail of the latest child. Runs are kept
/// verbatim; whitespace-only runs are indentation and are dropped.
fn push_text(stack: &mut [XmlElement], text: &str) -> std::result::Result<(), String> {
    if text.trim().is_empty() {
        return Ok(());
    }
    let Some(parent) = stack.last_mut() else {
        return Err("text outside of the document element".into());
    };
    match parent.children.last_mut() {
        Some(previous) => previous.append_tail(text),
        None => parent.append_text(text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_returns_unwrapped_root() {
        let root = parse_xml(
            r#"<?xml version="1.0" encoding="utf-8"?>
<data version="2">
    <item id="a">first</item>
    <item id="b"/>
</data>"#,
        )
        .unwrap();

        assert_eq!(root.name, "data");
        assert_eq!(root.attributes.get("version").map(String::as_str), Some("2"));
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].text.as_deref(), Some("first"));
        assert!(root.children[1].is_empty());
        assert!(root.text.is_none());
    }

    #[test]
    fn test_mixed_content_uses_tail() {
        let root = parse_xml("<p>Hello <b>bold</b> world</p>").unwrap();
        assert_eq!(root.text.as_deref(), Some("Hello "));
        assert_eq!(root.children[0].text.as_deref(), Some("bold"));
        assert_eq!(root.children[0].tail.as_deref(), Some(" world"));
    }

    #[test]
    fn test_indentation_is_dropped_but_inner_spaces_kept() {
        let root = parse_xml("<list>\n  <item>  padded  </item>\n</list>\n").unwrap();
        assert!(root.text.is_none());
        assert!(root.children[0].tail.is_none());
        assert_eq!(root.children[0].text.as_deref(), Some("  padded  "));
    }

    #[test]
    fn test_deep_nesting_is_parse_error() {
        let depth = MAX_DEPTH + 1;
        let content = format!("{}{}", "<a>".repeat(depth), "</a>".repeat(depth));
        let err = parse_xml(&content).unwrap_err();
        match err {
            Error::Parse { message, .. } => assert!(message.contains("maximum nesting depth"), "{message}"),
            other => panic!("expected parse error, got {other:?}"),
        }

        let leaf = format!("{}<b/>{}", "<a>".repeat(MAX_DEPTH), "</a>".repeat(MAX_DEPTH));
        assert!(matches!(parse_xml(&leaf), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_nesting_at_limit_is_accepted() {
        let content = format!("{}{}", "<a>".repeat(MAX_DEPTH), "</a>".repeat(MAX_DEPTH));
        let mut element = &parse_xml(&content).unwrap();
        let mut depth = 1;
        while let Some(child) = element.children.first() {
            element = child;
            depth += 1;
        }
        assert_eq!(depth, MAX_DEPTH);
    }

    #[test]
    fn test_entities_and_cdata() {
        let root = parse_xml(r#"<a note="x &amp; y">1 &lt; 2<![CDATA[<raw>]]></a>"#).unwrap();
        assert_eq!(root.attributes["note"], "x & y");
        assert_eq!(root.text.as_deref(), Some("1 < 2<raw>"));
    }

    #[test]
    fn test_comments_are_ignored() {
        let root = parse_xml("<!-- header --><a><!-- inner --><b/></a>").unwrap();
        assert_eq!(root.children.len(), 1);
    }

    #[test]
    fn test_no_root_is_error() {
        assert!(matches!(parse_xml(""), Err(Error::Parse { .. })));
        assert!(matches!(
            parse_xml("<?xml version=\"1.0\"?>"),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_unclosed_element_is_error() {
        assert!(matches!(parse_xml("<a><b></b>"), Err(Error::Parse { .. })));
        assert!(matches!(parse_xml("<a>text"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_mismatched_end_tag_is_error() {
        assert!(matches!(parse_xml("<a><b></a>"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_second_root_is_error() {
        let err = parse_xml("<a/><b/>").unwrap_err();
        match err {
            Error::Parse { message, .. } => assert!(message.contains("junk after document element")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_text_outside_root_is_error() {
        assert!(matches!(parse_xml("<a/>trailing"), Err(Error::Parse { .. })));
    }
}
