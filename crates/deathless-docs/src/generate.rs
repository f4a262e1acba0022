//! Turning filtered game data into documents.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use deathless_data::{Card, Config, PlayableItem};
use deathless_locale::Locale;

use crate::markdown::markdown_table;
use crate::wiki::wiki_table;
use crate::Result;

pub const RELICS_MARKDOWN: &str = "relics.md";
pub const RELICS_WIKI: &str = "relics_wiki.txt";
pub const CONSUMABLES_MARKDOWN: &str = "consumables.md";
pub const CONSUMABLES_WIKI: &str = "consumables_wiki.txt";

/// Prefix stripped from hero keys when naming card files.
pub const HERO_PREFIX: &str = "HERO_";

/// Card file slug for cards that no hero owns.
pub const COMMON_SLUG: &str = "common";

/// A rendered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub text: String,
}

impl Document {
    fn from_lines(file_name: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            file_name: file_name.into(),
            text: lines.join("\n"),
        }
    }
}

/// Renders the documents of one config in one locale.
pub struct Generator<'a> {
    config: &'a Config,
    locale: Locale,
}

impl<'a> Generator<'a> {
    /// Create a generator.
    ///
    /// Real heroes are added to `locale` under their unit key, so hero
    /// columns can look up `related_hero` directly. A hero without a name
    /// is not added and shows up as its raw key.
    pub fn new(config: &'a Config, mut locale: Locale) -> Self {
        for hero in config.only_real_heroes() {
            let Some(name_key) = hero.name() else {
                tracing::debug!(hero = hero.key(), "hero has no name");
                continue;
            };
            let name = locale.lookup(Some(name_key)).to_string();
            locale.insert(hero.key(), name);
        }
        Self { config, locale }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Render every document, in a stable order.
    pub fn generate_all(&self) -> Result<Vec<Document>> {
        let mut documents = Vec::new();

        let relics = self.config.visible_relics();
        documents.push(self.items_markdown(RELICS_MARKDOWN, "_relics_", &relics));
        documents.push(self.items_wiki(RELICS_WIKI, &relics));

        let consumables = self.config.visible_consumables();
        documents.push(self.items_markdown(CONSUMABLES_MARKDOWN, "_consumables_", &consumables));
        documents.push(self.items_wiki(CONSUMABLES_WIKI, &consumables));

        documents.extend(self.cards_wiki()?);

        Ok(documents)
    }

    /// Markdown with one section per quality tier, in list order.
    pub fn items_markdown(
        &self,
        file_name: &str,
        title_key: &str,
        items: &[&PlayableItem],
    ) -> Document {
        let loc = &self.locale;
        let mut lines = vec![format!("# {}", loc.lookup(Some(title_key)))];

        for group in items.chunk_by(|a, b| a.quality == b.quality) {
            lines.push(format!("## {}", loc.lookup(Some(&group[0].quality_str()))));

            let mut rows = vec![self.header(&["_name_", "_func_", "_src_", "_hero_"])];
            rows.extend(group.iter().map(|item| {
                vec![
                    loc.lookup(item.name()).to_string(),
                    loc.process(item.descr()),
                    self.source(item),
                    loc.lookup(item.related_hero()).to_string(),
                ]
            }));

            lines.extend(markdown_table(&rows, &[], true));
            lines.push(String::new());
        }

        Document::from_lines(file_name, lines)
    }

    /// A single wiki table with a numeric quality column.
    pub fn items_wiki(&self, file_name: &str, items: &[&PlayableItem]) -> Document {
        let loc = &self.locale;
        let mut rows = vec![self.header(&["_name_", "_func_", "_qty_", "_src_", "_hero_"])];
        rows.extend(items.iter().map(|item| {
            vec![
                loc.lookup(item.name()).to_string(),
                loc.process(item.descr()),
                format!("{} {}", item.quality, loc.lookup(Some(&item.quality_str()))),
                self.source(item),
                loc.lookup(item.related_hero()).to_string(),
            ]
        }));

        Document::from_lines(file_name, wiki_table(&rows, true))
    }

    /// One wiki table per hero, shared cards first.
    pub fn cards_wiki(&self) -> Result<Vec<Document>> {
        let mut common: Vec<&Card> = Vec::new();
        let mut by_hero: BTreeMap<String, Vec<&Card>> = BTreeMap::new();

        for card in self.config.playable_cards() {
            match card.item.related_hero() {
                None => common.push(card),
                Some(hero) => by_hero.entry(card_file_slug(Some(hero))).or_default().push(card),
            }
        }

        let mut groups = Vec::with_capacity(by_hero.len() + 1);
        if !common.is_empty() {
            groups.push((COMMON_SLUG.to_string(), common));
        }
        groups.extend(by_hero);

        let mut documents = Vec::with_capacity(groups.len());
        for (slug, cards) in groups {
            let mut rows =
                vec![self.header(&["_name_", "_cost_", "_func_", "_qty_", "_type_", "_src_"])];
            for card in cards {
                rows.push(self.card_row(card)?);
            }
            documents.push(Document::from_lines(card_file_name(&slug), wiki_table(&rows, true)));
        }

        Ok(documents)
    }

    fn card_row(&self, card: &Card) -> Result<Vec<String>> {
        let loc = &self.locale;
        let type_label = card
            .card_type_name()?
            .map(|key| loc.lookup(Some(&key)).to_string())
            .unwrap_or_default();

        Ok(vec![
            loc.lookup(card.item.name()).to_string(),
            card.cost.map(|c| c.to_string()).unwrap_or_default(),
            card_effect(loc, card),
            card.item.quality.to_string(),
            type_label,
            self.source(&card.item),
        ])
    }

    fn header(&self, keys: &[&str]) -> Vec<String> {
        keys.iter()
            .map(|&key| self.locale.lookup(Some(key)).to_string())
            .collect()
    }

    fn source(&self, item: &PlayableItem) -> String {
        let key = item.source_loc_key();
        if key.is_empty() {
            return String::new();
        }
        self.locale.lookup(Some(&key)).to_string()
    }
}

/// Card description with its damage and armor values filled in.
pub fn card_effect(locale: &Locale, card: &Card) -> String {
    let mut text = locale.process(card.item.descr());
    if let Some(damage) = &card.damage {
        text = text.replace("[DAMAGE]", damage);
    }
    if let Some(armor) = &card.armor {
        text = text.replace("[ARMOR]", armor);
    }
    text
}

/// `HERO_KNIGHT` becomes `knight`; cards without a hero are `common`.
pub fn card_file_slug(hero: Option<&str>) -> String {
    match hero {
        None => COMMON_SLUG.to_string(),
        Some(key) => key.strip_prefix(HERO_PREFIX).unwrap_or(key).to_lowercase(),
    }
}

pub fn card_file_name(slug: &str) -> String {
    format!("cards_{slug}_wiki.txt")
}

/// Write each document as a whole file under `dir`, creating it if needed.
pub fn write_documents<P: AsRef<Path>>(dir: P, documents: &[Document]) -> Result<()> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    for document in documents {
        let path = dir.join(&document.file_name);
        fs::write(&path, &document.text)?;
        tracing::debug!(path = %path.display(), bytes = document.text.len(), "wrote document");
    }

    Ok(())
}
