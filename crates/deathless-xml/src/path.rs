//! ElementTree-style relative path expressions.

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result, XmlElement};

/// How a path step relates to its context element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    /// Direct children only (`a/b`).
    Child,
    /// Any depth below the context (`a//b`).
    Descendant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    axis: Axis,
    tag: String,
}

/// A parsed relative path such as `.//visual//name` or `type/hero`.
///
/// Steps separated by `/` select children, `//` selects descendants at any
/// depth. A leading `.` refers to the context element and may be omitted, so
/// `hidden_flag` and `./hidden_flag` are equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementPath {
    source: String,
    steps: Vec<Step>,
}

impl ElementPath {
    /// Parse a path expression.
    pub fn parse(path: &str) -> Result<Self> {
        let invalid = || Error::InvalidPath(path.to_string());

        let mut rest = path.strip_prefix('.').unwrap_or(path);
        let mut steps = Vec::new();
        let mut axis = Axis::Child;

        // "." alone, or "./" followed by nothing, selects nothing useful.
        if rest.is_empty() {
            return Err(invalid());
        }

        while !rest.is_empty() {
            if let Some(r) = rest.strip_prefix("//") {
                axis = Axis::Descendant;
                rest = r;
            } else if let Some(r) = rest.strip_prefix('/') {
                rest = r;
            }

            let end = rest.find('/').unwrap_or(rest.len());
            let tag = &rest[..end];
            if tag.is_empty() || tag == "." {
                return Err(invalid());
            }

            steps.push(Step {
                axis,
                tag: tag.to_string(),
            });
            axis = Axis::Child;
            rest = &rest[end..];
        }

        Ok(Self {
            source: path.to_string(),
            steps,
        })
    }

    /// The expression this path was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Find the first matching element in document order.
    pub fn find<'a>(&self, element: &'a XmlElement) -> Option<&'a XmlElement> {
        find_from(element, &self.steps)
    }

    /// Check whether any element matches.
    pub fn matches(&self, element: &XmlElement) -> bool {
        self.find(element).is_some()
    }
}

fn find_from<'a>(element: &'a XmlElement, steps: &[Step]) -> Option<&'a XmlElement> {
    let Some((step, rest)) = steps.split_first() else {
        return Some(element);
    };

    let mut candidates: Box<dyn Iterator<Item = &'a XmlElement>> = match step.axis {
        Axis::Child => Box::new(element.children.iter()),
        Axis::Descendant => Box::new(element.descendants()),
    };

    candidates.find_map(|candidate| {
        if candidate.tag == step.tag {
            find_from(candidate, rest)
        } else {
            None
        }
    })
}

impl FromStr for ElementPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> XmlElement {
        XmlElement::new("card")
            .attr("key", "CARD_STRIKE")
            .child(
                XmlElement::new("data")
                    .child(XmlElement::new("type").text("1"))
                    .child(
                        XmlElement::new("visual")
                            .child(XmlElement::new("icons").child(XmlElement::new("name").text("ICON")))
                            .child(XmlElement::new("name").text("CARD_STRIKE_NAME")),
                    ),
            )
            .child(XmlElement::new("hidden_flag"))
    }

    #[test]
    fn test_parse_steps() {
        let path = ElementPath::parse(".//visual//name").unwrap();
        assert_eq!(
            path.steps,
            vec![
                Step { axis: Axis::Descendant, tag: "visual".into() },
                Step { axis: Axis::Descendant, tag: "name".into() },
            ]
        );

        let path = ElementPath::parse("type/hero").unwrap();
        assert_eq!(path.steps[0].axis, Axis::Child);
        assert_eq!(path.steps[1].axis, Axis::Child);
        assert_eq!(ElementPath::parse("./x").unwrap().steps[0].axis, Axis::Child);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(ElementPath::parse("").is_err());
        assert!(ElementPath::parse(".").is_err());
        assert!(ElementPath::parse("a//").is_err());
        assert!(ElementPath::parse("a/./b").is_err());
    }

    #[test]
    fn test_descendant_search_document_order() {
        let card = card();
        let path = ElementPath::parse(".//visual//name").unwrap();
        // The icon's name comes first in document order.
        assert_eq!(path.find(&card).unwrap().text.as_deref(), Some("ICON"));

        let path = ElementPath::parse(".//visual/name").unwrap();
        assert_eq!(path.find(&card).unwrap().text.as_deref(), Some("CARD_STRIKE_NAME"));
    }

    #[test]
    fn test_child_only() {
        let card = card();
        assert!(ElementPath::parse("hidden_flag").unwrap().matches(&card));
        assert!(!ElementPath::parse("type").unwrap().matches(&card));
        assert!(ElementPath::parse(".//type").unwrap().matches(&card));
        assert!(ElementPath::parse("data/type").unwrap().matches(&card));
    }

    #[test]
    fn test_backtracks_across_candidates() {
        let root = XmlElement::new("unit")
            .child(XmlElement::new("type").child(XmlElement::new("monster")))
            .child(XmlElement::new("stats").child(XmlElement::new("type").child(XmlElement::new("hero"))));

        assert!(ElementPath::parse(".//type//hero").unwrap().matches(&root));
        assert!(!ElementPath::parse("type/hero").unwrap().matches(&root));
    }
}
