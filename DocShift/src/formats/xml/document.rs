//! XML element tree
//!
//!

use indexmap::IndexMap;

/// An XML element node.
///
/// Text follows the `ElementTree` model: `text` is the character data
/// between the start tag and the first child, `tail` is the character data
/// after this element's end tag and before its next sibling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Tag name, including any namespace prefix.
    pub name: String,
    /// Attributes in document order.
    pub attributes: IndexMap<String, String>,
    /// Leading text content.
    pub text: Option<String>,
    /// Text trailing this element inside its parent.
    pub tail: Option<String>,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Creates an empty element with the given tag name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds an attribute, replacing any earlier value for the same name.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Sets the leading text content.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// First direct child with the given tag name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Element has no text, no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }

    pub(crate) fn append_text(&mut self, text: &str) {
        self.text.get_or_insert_with(String::new).push_str(text);
    }

    pub(crate) fn append_tail(&mut self, text: &str) {
        self.tail.get_or_insert_with(String::new).push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let el = XmlElement::new("item")
            .with_attribute("id", "1")
            .with_child(XmlElement::new("name").with_text("first"));

        assert_eq!(el.attributes.get("id").map(String::as_str), Some("1"));
        assert_eq!(el.child("name").and_then(|c| c.text.as_deref()), Some("first"));
        assert!(el.child("missing").is_none());
        assert!(!el.is_empty());
        assert!(XmlElement::new("leaf").is_empty());
    }
}
