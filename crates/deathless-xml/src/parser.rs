//! Parse XML text into an [`XmlElement`] tree.

use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{Error, XmlElement, Result};

/// Parse XML text and return the root element.
///
/// # Example
///
/// ```
/// use deathless_xml::parse_str;
///
/// let root = parse_str(r#"<?xml version="1.0"?>
/// <locale>
///     <string key="RELIC_AXE_NAME">Axe</string>
/// </locale>"#).unwrap();
///
/// assert_eq!(root.children[0].get_attr("key"), Some("RELIC_AXE_NAME"));
/// ```
pub fn parse_str(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(start_element(&e));
            }
            Ok(Event::Empty(e)) => {
                let node = start_element(&e);
                attach(&mut stack, &mut root, node);
            }
            Ok(Event::End(_)) => {
                if let Some(mut node) = stack.pop() {
                    node.text = node
                        .text
                        .take()
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty());
                    attach(&mut stack, &mut root, node);
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(node) = stack.last_mut() {
                    let text = e.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                    node.text.get_or_insert_with(String::new).push_str(&text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(node) = stack.last_mut() {
                    let text = std::str::from_utf8(&e)?;
                    node.text.get_or_insert_with(String::new).push_str(text);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {} // Declarations, comments, processing instructions
            Err(e) => {
                return Err(Error::Xml(format!(
                    "parse error at position {}: {}",
                    reader.error_position(),
                    e
                )))
            }
        }
    }

    if !stack.is_empty() {
        return Err(Error::Xml("unexpected end of document".to_string()));
    }

    root.ok_or_else(|| Error::Xml("no root element found".to_string()))
}

/// Parse XML bytes and return the root element.
pub fn parse_bytes(xml: &[u8]) -> Result<XmlElement> {
    let xml = std::str::from_utf8(xml)?;
    // Editors on Windows like to leave a byte order mark behind.
    parse_str(xml.trim_start_matches('\u{feff}'))
}

/// Read and parse an XML file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<XmlElement> {
    let data = std::fs::read(path)?;
    parse_bytes(&data)
}

fn start_element(e: &BytesStart<'_>) -> XmlElement {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut node = XmlElement::new(tag);

    for attr in e.attributes().flatten() {
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| String::from_utf8_lossy(&attr.value).into_owned());
        node.attributes.push((key, value));
    }

    node
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, node: XmlElement) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else if root.is_none() {
        *root = Some(node);
    }
}
