//! Localization tables and text post-processing.
//!
//! A [`Locale`] maps locale keys to display text. It is layered from a
//! built-in dictionary of UI labels ([`base`]), the game's locale XML, and
//! entries added at runtime. Keys that are not mapped come back unchanged so
//! that missing translations stay visible in the generated docs.
//!
//! # Example
//!
//! ```
//! use deathless_locale::{Language, Locale};
//!
//! let mut locale = Locale::with_base(Language::Russian);
//! locale.insert("RELIC_AXE_DESC", "Gain 1 [ICON_ENERGY]. [TERM_ETHER:Spectral].");
//! locale.add_default_rules();
//!
//! assert_eq!(locale.lookup(Some("_shop_")), "Магазин");
//! assert_eq!(locale.lookup(Some("MISSING_KEY")), "MISSING_KEY");
//! assert_eq!(locale.process(Some("RELIC_AXE_DESC")), "Gain 1 энергии. <Spectral>.");
//! ```

pub mod base;
mod error;
mod store;

pub use base::Language;
pub use error::{Error, Result};
pub use store::{rewrite_inline_tags, Locale};

/// Non-breaking space, used by the game's texts between numbers and words.
pub const NBSP: &str = "\u{a0}";

/// Placeholder for the energy icon in card and relic descriptions.
pub const ICON_ENERGY: &str = "[ICON_ENERGY]";
