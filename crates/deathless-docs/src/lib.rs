//! Markdown and wiki documents for Deathless items.
//!
//! [`Generator`] maps the visible records of a [`deathless_data::Config`]
//! through a [`deathless_locale::Locale`] into table rows, and the renderers
//! in [`markdown`] and [`wiki`] turn those rows into text.
//!
//! # Example
//!
//! ```no_run
//! use deathless_data::Config;
//! use deathless_docs::{write_documents, Generator};
//! use deathless_locale::{Language, Locale};
//!
//! let config = Config::open("config.xml")?;
//! let mut locale = Locale::with_base(Language::Russian);
//! locale.load_file("locale_ru.xml")?;
//! locale.add_default_rules();
//!
//! let documents = Generator::new(&config, locale).generate_all()?;
//! write_documents("output", &documents)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod generate;
pub mod markdown;
pub mod table;
pub mod wiki;

pub use error::{Error, Result};
pub use generate::{
    card_effect, card_file_name, card_file_slug, write_documents, Document, Generator,
    COMMON_SLUG, CONSUMABLES_MARKDOWN, CONSUMABLES_WIKI, HERO_PREFIX, RELICS_MARKDOWN,
    RELICS_WIKI,
};
pub use markdown::{markdown_table, Alignment};
pub use wiki::wiki_table;
