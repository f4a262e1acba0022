//! Locale key to text mapping.

use std::borrow::Cow;
use std::path::Path;
use std::sync::LazyLock;

use deathless_xml::XmlElement;
use regex::Regex;
use rustc_hash::FxHashMap;

use crate::{Language, Result, ICON_ENERGY, NBSP};

/// `[TERM_ETHER:Spectral]` style annotations. Matches one tag at a time so
/// several tags on a line are rewritten independently.
static INLINE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\[\]:]+):([^\[\]]+)\]").expect("valid inline tag regex"));

/// Rewrite every `[TAG:display]` annotation into `<display>`.
pub fn rewrite_inline_tags(text: &str) -> Cow<'_, str> {
    INLINE_TAG.replace_all(text, "<$2>")
}

/// Localized strings plus the substitution rules applied by [`Locale::process`].
#[derive(Debug, Clone, Default)]
pub struct Locale {
    strings: FxHashMap<String, String>,
    rules: Vec<(String, String)>,
}

impl Locale {
    /// Create an empty locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a locale seeded with the built-in labels of `language`.
    pub fn with_base(language: Language) -> Self {
        let mut locale = Self::new();
        locale.extend(
            language
                .labels()
                .iter()
                .map(|&(k, v)| (k.to_string(), v.to_string())),
        );
        locale
    }

    /// Number of mapped keys.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether no keys are mapped.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Whether `key` has a mapping.
    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    /// Map `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Add many entries. Later entries win.
    pub fn extend<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.strings.extend(entries);
    }

    /// Add every entry of a locale document.
    ///
    /// Each child of `root` contributes its `key` attribute and its text.
    /// Children without a key are skipped. Returns the number of entries read.
    pub fn append_xml(&mut self, root: &XmlElement) -> usize {
        let mut count = 0;
        for child in &root.children {
            let Some(key) = child.get_attr("key") else {
                tracing::debug!(tag = %child.tag, "skipping locale entry without a key");
                continue;
            };
            self.insert(key, child.text_or_empty());
            count += 1;
        }
        count
    }

    /// Read and add a locale XML file.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let root = deathless_xml::parse_file(path)?;
        Ok(self.append_xml(&root))
    }

    /// Register a literal substring replacement. Rules run in the order added.
    pub fn add_rule(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.rules.push((from.into(), to.into()));
    }

    /// Register the rules every game text needs: plain spaces instead of
    /// non-breaking ones, and the localized energy word instead of its icon.
    pub fn add_default_rules(&mut self) {
        let energy = self.lookup(Some("_nrg_")).to_string();
        self.add_rule(NBSP, " ");
        self.add_rule(ICON_ENERGY, energy);
    }

    /// Text for `key`.
    ///
    /// `None` gives `""`; an unmapped key is returned as-is.
    pub fn lookup<'a>(&'a self, key: Option<&'a str>) -> &'a str {
        match key {
            None => "",
            Some(key) => self.strings.get(key).map(String::as_str).unwrap_or(key),
        }
    }

    /// Text for `key` with substitution rules and inline tag rewriting applied.
    ///
    /// Unmapped keys are returned raw, without processing.
    pub fn process(&self, key: Option<&str>) -> String {
        let Some(key) = key else {
            return String::new();
        };
        match self.strings.get(key) {
            Some(value) => self.process_text(value),
            None => key.to_string(),
        }
    }

    /// Apply substitution rules and inline tag rewriting to `text`.
    pub fn process_text(&self, text: &str) -> String {
        let mut value = text.to_string();
        for (from, to) in &self.rules {
            if value.contains(from.as_str()) {
                value = value.replace(from.as_str(), to);
            }
        }
        rewrite_inline_tags(&value).into_owned()
    }
}
