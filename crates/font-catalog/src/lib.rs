//! Font catalog provider for fontpair.
//!
//! Fetches the list of available font families once, in the background, and
//! answers substring suggestion queries against it. The catalog only powers
//! suggestions; it never validates font assignments.

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod parse;
pub mod provider;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use loader::CatalogLoader;
pub use parse::parse_catalog;
pub use provider::{CatalogProvider, FileCatalog, HttpCatalog, StaticCatalog};
