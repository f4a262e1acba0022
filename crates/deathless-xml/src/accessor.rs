//! Optional-field extraction from an element tree.
//!
//! All lookups use [`ElementPath`] semantics. Absence is never an error; only
//! present-but-malformed data is.

use crate::{ElementPath, Error, Result, XmlElement};

/// Text of the first element matching `path`.
///
/// Returns `None` when nothing matches, when the match has no text, or when
/// `path` is not a valid expression.
pub fn get_text<'a>(element: &'a XmlElement, path: &str) -> Option<&'a str> {
    ElementPath::parse(path)
        .ok()?
        .find(element)?
        .text
        .as_deref()
}

/// Base-10 integer value of the first element matching `path`.
///
/// Returns `Ok(None)` when nothing matches or the match is empty, and
/// [`Error::InvalidInteger`] when the text is not a number.
pub fn get_int(element: &XmlElement, path: &str) -> Result<Option<i32>> {
    let path = ElementPath::parse(path)?;
    let Some(text) = path.find(element).and_then(|e| e.text.as_deref()) else {
        return Ok(None);
    };

    text.trim()
        .parse::<i32>()
        .map(Some)
        .map_err(|_| Error::InvalidInteger {
            path: path.to_string(),
            value: text.to_string(),
        })
}

/// Check whether any element matches `path`.
pub fn has(element: &XmlElement, path: &str) -> bool {
    ElementPath::parse(path)
        .map(|p| p.matches(element))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relic() -> XmlElement {
        XmlElement::new("relic")
            .attr("key", "RELIC_AXE")
            .child(
                XmlElement::new("data")
                    .child(XmlElement::new("quality").text(" 4 "))
                    .child(XmlElement::new("source").text("one"))
                    .child(XmlElement::new("flags")),
            )
    }

    #[test]
    fn test_get_text() {
        let relic = relic();
        assert_eq!(get_text(&relic, ".//quality"), Some(" 4 "));
        assert_eq!(get_text(&relic, ".//related_hero"), None);
        // Present but empty.
        assert_eq!(get_text(&relic, ".//flags"), None);
        assert_eq!(get_text(&relic, ""), None);
    }

    #[test]
    fn test_get_int() {
        let relic = relic();
        assert_eq!(get_int(&relic, ".//quality").unwrap(), Some(4));
        assert_eq!(get_int(&relic, ".//cost").unwrap(), None);
        assert_eq!(get_int(&relic, ".//flags").unwrap(), None);
    }

    #[test]
    fn test_get_int_malformed() {
        let err = get_int(&relic(), ".//source").unwrap_err();
        match err {
            Error::InvalidInteger { path, value } => {
                assert_eq!(path, ".//source");
                assert_eq!(value, "one");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_has() {
        let relic = relic();
        assert!(has(&relic, ".//flags"));
        assert!(has(&relic, "data/flags"));
        assert!(!has(&relic, "flags"));
        assert!(!has(&relic, ".//hidden_flag"));
    }
}
