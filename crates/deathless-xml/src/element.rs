//! Owned XML element tree.

use crate::{Error, Result};

/// An element of a parsed XML document.
///
/// Text content is the unescaped character data directly inside the element,
/// with surrounding whitespace trimmed. Mixed content is concatenated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    /// Tag name of the element.
    pub tag: String,
    /// Attributes as key-value pairs, in document order.
    pub attributes: Vec<(String, String)>,
    /// Text content, `None` when the element has no non-blank text.
    pub text: Option<String>,
    /// Child elements, in document order.
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an empty element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set the text content of this element.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add an attribute to this element.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Add a child element.
    pub fn child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    /// Add multiple children.
    pub fn children(mut self, children: impl IntoIterator<Item = XmlElement>) -> Self {
        self.children.extend(children);
        self
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Get an attribute value that must be present.
    pub fn require_attr(&self, name: &str) -> Result<&str> {
        self.get_attr(name).ok_or_else(|| Error::MissingAttribute {
            tag: self.tag.clone(),
            attribute: name.to_string(),
        })
    }

    /// Text content, or `""` when there is none.
    #[inline]
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Iterate over all descendants in document order (excluding `self`).
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Pre-order iterator over the descendants of an element.
pub struct Descendants<'a> {
    stack: Vec<&'a XmlElement>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElement;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}
