//! XML element tree and path queries for Deathless game configs.
//!
//! The game ships its item definitions and localization tables as plain XML.
//! This crate loads a document into an owned [`XmlElement`] tree and offers
//! ElementTree-style path lookups that tolerate missing nodes.
//!
//! # Example
//!
//! ```
//! use deathless_xml::{get_int, get_text, parse_str};
//!
//! let root = parse_str(r#"<relic key="RELIC_AXE">
//!     <visual><name>RELIC_AXE_NAME</name></visual>
//!     <quality>3</quality>
//! </relic>"#)?;
//!
//! assert_eq!(get_text(&root, ".//visual//name"), Some("RELIC_AXE_NAME"));
//! assert_eq!(get_int(&root, ".//quality")?, Some(3));
//! assert_eq!(get_int(&root, ".//cost")?, None);
//! # Ok::<(), deathless_xml::Error>(())
//! ```

mod accessor;
mod element;
mod error;
mod parser;
mod path;

pub use accessor::{get_int, get_text, has};
pub use element::XmlElement;
pub use error::{Error, Result};
pub use parser::{parse_bytes, parse_file, parse_str};
pub use path::ElementPath;
