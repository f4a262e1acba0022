//! Common item records: relics and consumables, plus the fields cards share.

use std::fmt;

use deathless_xml::{get_int, get_text, has, XmlElement};

use crate::Result;

/// Quality of an item whose config has no `quality` node.
pub const QUALITY_UNSET: i32 = -1;

pub(crate) const NAME_PATH: &str = ".//visual//name";
pub(crate) const DESC_PATH: &str = ".//visual//desc";

/// The kinds of playable items, each with its own locale key namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemKind {
    Relic,
    Consumable,
    Card,
}

impl ItemKind {
    /// Prefix of the locale keys for this kind, e.g. `RELIC_TYPE_4`.
    pub fn type_tag(self) -> &'static str {
        match self {
            ItemKind::Relic => "RELIC_TYPE",
            ItemKind::Consumable => "CONSUMABLE_TYPE",
            ItemKind::Card => "CARD_TYPE",
        }
    }

    /// Tag of the top-level config element holding this kind.
    pub fn element_tag(self) -> &'static str {
        match self {
            ItemKind::Relic => "relic",
            ItemKind::Consumable => "consumable",
            ItemKind::Card => "card",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_tag())
    }
}

/// Rarity tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum ItemQuality {
    Normal = 0,
    Unusual = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
    Set = 6,
    Fable = 7,
    Unique = 8,
    Hidden = 9,
}

impl ItemQuality {
    /// All tiers in ordinal order.
    pub const ALL: [ItemQuality; 10] = [
        ItemQuality::Normal,
        ItemQuality::Unusual,
        ItemQuality::Rare,
        ItemQuality::Epic,
        ItemQuality::Legendary,
        ItemQuality::Mythic,
        ItemQuality::Set,
        ItemQuality::Fable,
        ItemQuality::Unique,
        ItemQuality::Hidden,
    ];

    pub fn from_ordinal(value: i32) -> Option<Self> {
        usize::try_from(value).ok().and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn name(self) -> &'static str {
        match self {
            ItemQuality::Normal => "NORMAL",
            ItemQuality::Unusual => "UNUSUAL",
            ItemQuality::Rare => "RARE",
            ItemQuality::Epic => "EPIC",
            ItemQuality::Legendary => "LEGENDARY",
            ItemQuality::Mythic => "MYTHIC",
            ItemQuality::Set => "SET",
            ItemQuality::Fable => "FABLE",
            ItemQuality::Unique => "UNIQUE",
            ItemQuality::Hidden => "HIDDEN",
        }
    }
}

/// Fields every config record has.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BaseItem {
    /// Stable identifier from the `key` attribute.
    pub key: String,
    /// Locale key of the display name.
    pub name: Option<String>,
    /// Locale key of the description.
    pub descr: Option<String>,
}

impl BaseItem {
    pub fn from_element(element: &XmlElement) -> Result<Self> {
        Ok(Self {
            key: element.require_attr("key")?.to_string(),
            name: get_text(element, NAME_PATH).map(str::to_string),
            descr: get_text(element, DESC_PATH).map(str::to_string),
        })
    }
}

/// A relic, consumable, or the shared part of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlayableItem {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub base: BaseItem,
    pub kind: ItemKind,
    /// Rarity ordinal, [`QUALITY_UNSET`] when missing.
    pub quality: i32,
    /// Key of the hero this item belongs to, `None` for shared items.
    pub related_hero: Option<String>,
    /// How the item is obtained, see [`PlayableItem::source_label`].
    pub source: Option<i32>,
    /// Set when a `flags` node is present; turns a reward into an event item.
    pub flag: bool,
    /// Set when the item carries a `hidden_flag` child.
    pub hidden: bool,
}

/// Relics and consumables only differ in their [`ItemKind`].
pub type Relic = PlayableItem;
pub type Consumable = PlayableItem;

impl PlayableItem {
    pub fn from_element(kind: ItemKind, element: &XmlElement) -> Result<Self> {
        Ok(Self {
            base: BaseItem::from_element(element)?,
            kind,
            quality: get_int(element, ".//quality")?.unwrap_or(QUALITY_UNSET),
            related_hero: get_text(element, ".//related_hero").map(str::to_string),
            source: get_int(element, ".//source")?,
            flag: has(element, ".//flags"),
            hidden: has(element, "hidden_flag"),
        })
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.base.key
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.base.name.as_deref()
    }

    #[inline]
    pub fn descr(&self) -> Option<&str> {
        self.base.descr.as_deref()
    }

    #[inline]
    pub fn related_hero(&self) -> Option<&str> {
        self.related_hero.as_deref()
    }

    pub fn quality_tier(&self) -> Option<ItemQuality> {
        ItemQuality::from_ordinal(self.quality)
    }

    /// Locale key of the quality label, e.g. `RELIC_TYPE_4`.
    pub fn quality_str(&self) -> String {
        format!("{}_{}", self.kind.type_tag(), self.quality)
    }

    /// Where the item comes from: `event`, `reward`, `shop` or `boss`.
    pub fn source_label(&self) -> Option<&'static str> {
        match self.source? {
            0 if self.flag => Some("event"),
            0 => Some("reward"),
            1 => Some("shop"),
            2 => Some("event"),
            3 => Some("boss"),
            _ => None,
        }
    }

    /// Locale key of the source label, `""` when the item has no source.
    ///
    /// An unknown source ordinal yields `__`, which no locale maps, so the
    /// gap shows up in the output instead of an empty cell.
    pub fn source_loc_key(&self) -> String {
        if self.source.is_none() {
            return String::new();
        }
        format!("_{}_", self.source_label().unwrap_or_default())
    }
}

/// Access to the playable part of a record, so filtering and sorting can
/// treat relics, consumables and cards alike.
pub trait Playable {
    fn playable(&self) -> &PlayableItem;
}

impl Playable for PlayableItem {
    #[inline]
    fn playable(&self) -> &PlayableItem {
        self
    }
}
