//! XML format module

mod document;
mod reader;
mod writer;

pub use document::XmlElement;
pub use reader::{MAX_DEPTH, parse_xml, read_xml};
pub use writer::{serialize_xml, write_xml, WRAPPER_ELEMENT};
