//! Loading the game config and deriving the visible item lists.

use std::cmp::Reverse;
use std::path::Path;

use deathless_xml::XmlElement;
use rustc_hash::FxHashSet;

use crate::card::Card;
use crate::item::{Consumable, ItemKind, Playable, PlayableItem, Relic};
use crate::unit::Unit;
use crate::{Error, Result};

/// Key marker the game uses for items that should not be listed.
pub const HIDDEN_MARKER: &str = "_HIDDEN_";

/// All records of a config document, in document order.
#[derive(Debug, Clone, Default)]
pub struct Config {
    relics: Vec<Relic>,
    consumables: Vec<Consumable>,
    cards: Vec<Card>,
    units: Vec<Unit>,
}

impl Config {
    /// Build a config from the root element of `config.xml`.
    ///
    /// Top-level elements other than `relic`, `consumable`, `card` and `unit`
    /// are ignored. Any malformed record aborts the load.
    pub fn from_element(root: &XmlElement) -> Result<Self> {
        let mut config = Self::default();

        for element in &root.children {
            let loaded = match element.tag.as_str() {
                "relic" => PlayableItem::from_element(ItemKind::Relic, element)
                    .map(|r| config.relics.push(r)),
                "consumable" => PlayableItem::from_element(ItemKind::Consumable, element)
                    .map(|c| config.consumables.push(c)),
                "card" => Card::from_element(element).map(|c| config.cards.push(c)),
                "unit" => Unit::from_element(element).map(|u| config.units.push(u)),
                other => {
                    tracing::trace!(tag = other, "ignoring unknown config element");
                    Ok(())
                }
            };

            loaded.map_err(|source| Error::Element {
                tag: element.tag.clone(),
                key: element.get_attr("key").unwrap_or_default().to_string(),
                source: Box::new(source),
            })?;
        }

        tracing::debug!(
            relics = config.relics.len(),
            consumables = config.consumables.len(),
            cards = config.cards.len(),
            units = config.units.len(),
            "loaded config"
        );

        Ok(config)
    }

    /// Parse a config document from text.
    pub fn parse(xml: &str) -> Result<Self> {
        Self::from_element(&deathless_xml::parse_str(xml)?)
    }

    /// Read and parse a config file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_element(&deathless_xml::parse_file(path)?)
    }

    pub fn relics(&self) -> &[Relic] {
        &self.relics
    }

    pub fn consumables(&self) -> &[Consumable] {
        &self.consumables
    }

    /// All cards, including monster and hidden cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Heroes that players can pick, in document order.
    pub fn only_real_heroes(&self) -> Vec<&Unit> {
        self.units.iter().filter(|u| u.is_real_hero()).collect()
    }

    /// Keys of [`Config::only_real_heroes`].
    pub fn real_hero_keys(&self) -> FxHashSet<&str> {
        self.units
            .iter()
            .filter(|u| u.is_real_hero())
            .map(Unit::key)
            .collect()
    }

    /// Relics that belong in the docs, best first.
    pub fn visible_relics(&self) -> Vec<&Relic> {
        visible_items(&self.relics, &self.real_hero_keys())
    }

    /// Consumables that belong in the docs, best first.
    pub fn visible_consumables(&self) -> Vec<&Consumable> {
        visible_items(&self.consumables, &self.real_hero_keys())
    }

    /// Player cards of real heroes and shared cards, best first.
    ///
    /// Monster cards and hidden cards are left out.
    pub fn playable_cards(&self) -> Vec<&Card> {
        let heroes = self.real_hero_keys();
        let mut cards: Vec<&Card> = self
            .cards
            .iter()
            .filter(|c| !c.is_mob && !c.item.hidden)
            .filter(|c| belongs_to_real_hero(*c, &heroes))
            .collect();
        sort_by_quality(&mut cards);
        cards
    }
}

/// Drop hidden items and items of dummy or test heroes, then sort.
///
/// The `hidden_flag` child decides visibility. Disagreements between the flag
/// and the [`HIDDEN_MARKER`] in the key are reported, never acted on.
pub fn visible_items<'a, T: Playable>(items: &'a [T], real_heroes: &FxHashSet<&str>) -> Vec<&'a T> {
    let (marked_shown, flagged_unmarked) = hidden_marker_mismatches(items);
    if !marked_shown.is_empty() {
        tracing::warn!(
            keys = ?marked_shown,
            "keys marked _HIDDEN_ lack a hidden_flag; keeping them visible"
        );
    }
    if !flagged_unmarked.is_empty() {
        tracing::warn!(
            keys = ?flagged_unmarked,
            "items with a hidden_flag lack the _HIDDEN_ key marker; hiding them"
        );
    }

    let mut visible: Vec<&T> = items
        .iter()
        .filter(|i| !i.playable().hidden)
        .filter(|i| belongs_to_real_hero(*i, real_heroes))
        .collect();
    sort_by_quality(&mut visible);
    visible
}

/// Keys whose [`HIDDEN_MARKER`] disagrees with the `hidden_flag`.
///
/// Returns the marked keys without the flag and the flagged keys without the
/// marker, each sorted ascending.
pub(crate) fn hidden_marker_mismatches<T: Playable>(items: &[T]) -> (Vec<&str>, Vec<&str>) {
    let (mut marked_shown, mut flagged_unmarked) = (Vec::new(), Vec::new());
    for item in items.iter().map(Playable::playable) {
        match (item.key().contains(HIDDEN_MARKER), item.hidden) {
            (true, false) => marked_shown.push(item.key()),
            (false, true) => flagged_unmarked.push(item.key()),
            _ => {}
        }
    }
    marked_shown.sort_unstable();
    flagged_unmarked.sort_unstable();
    (marked_shown, flagged_unmarked)
}

/// Sort by descending quality, then ascending key.
pub fn sort_by_quality<T: Playable>(items: &mut [&T]) {
    items.sort_by(|a, b| {
        let (a, b) = (a.playable(), b.playable());
        (Reverse(a.quality), a.key()).cmp(&(Reverse(b.quality), b.key()))
    });
}

fn belongs_to_real_hero<T: Playable>(item: &T, real_heroes: &FxHashSet<&str>) -> bool {
    item.playable()
        .related_hero()
        .map_or(true, |hero| real_heroes.contains(hero))
}
