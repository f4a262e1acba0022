//! Item model and config loader for Deathless game data.
//!
//! The game's `config.xml` holds every relic, consumable, card and unit as a
//! top-level element. This crate turns those elements into typed records and
//! derives the lists that belong in player-facing documentation.
//!
//! # Quick Start
//!
//! ```no_run
//! use deathless_data::Config;
//!
//! let config = Config::open("config.xml")?;
//!
//! for relic in config.visible_relics() {
//!     println!("{} ({}): {:?}", relic.key(), relic.quality, relic.source_label());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Visibility
//!
//! - An item is hidden when it has a `hidden_flag` child. Nothing else hides it.
//! - Items tied to a hero are only listed when that hero is real: a hero unit
//!   that is neither [`DUMMY_HERO_KEY`] nor a `_TEST` unit.
//! - Visible lists are ordered by descending quality, then by key.

mod card;
mod config;
mod error;
mod item;
mod unit;

#[cfg(feature = "json-export")]
pub mod export;

pub use card::{Card, CardType, MOB_MARKER};
pub use config::{sort_by_quality, visible_items, Config, HIDDEN_MARKER};
pub use error::{Error, Result};
pub use item::{
    BaseItem, Consumable, ItemKind, ItemQuality, Playable, PlayableItem, Relic, QUALITY_UNSET,
};
pub use unit::{Unit, DUMMY_HERO_KEY, TEST_MARKER};
