//! Deathless - item documentation generator for Deathless game data.
//!
//! This crate provides a unified interface to the Deathless library crates.
//!
//! # Crates
//!
//! - [`deathless_xml`] - XML element tree and path queries
//! - [`deathless_locale`] - Localization tables and text post-processing
//! - [`deathless_data`] - Item model, config loading and visibility filtering
//! - [`deathless_docs`] - Markdown and wiki table generation
//!
//! # Example
//!
//! ```no_run
//! use deathless::prelude::*;
//!
//! let config = Config::open("config.xml")?;
//! let mut locale = Locale::with_base(Language::Russian);
//! locale.load_file("locale_ru.xml")?;
//! locale.add_default_rules();
//!
//! for document in Generator::new(&config, locale).generate_all()? {
//!     println!("{}: {} bytes", document.file_name, document.text.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export all sub-crates
pub use deathless_data as data;
pub use deathless_docs as docs;
pub use deathless_locale as locale;
pub use deathless_xml as xml;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use deathless_data::{Card, CardType, Config, ItemKind, ItemQuality, PlayableItem, Unit};
    pub use deathless_docs::{write_documents, Document, Generator};
    pub use deathless_locale::{Language, Locale};
    pub use deathless_xml::XmlElement;
}

/// Name of the game's item config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.xml";

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
