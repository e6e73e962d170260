//! Catalog body parsing.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::Result;

#[derive(Deserialize)]
struct FamilyEntry {
    family: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogBody {
    Names(Vec<String>),
    Entries(Vec<FamilyEntry>),
    /// Google Fonts Developer API `webfonts` response.
    WebFonts { items: Vec<FamilyEntry> },
}

/// Parse a catalog body into family names.
///
/// JSON bodies may be an array of names, an array of `{"family": ..}` objects,
/// or an object with such an `items` array. Anything not starting with `[` or
/// `{` is read as plain text, one family per line. Blank names are dropped and
/// duplicates keep their first position.
pub fn parse_catalog(body: &str) -> Result<Vec<String>> {
    let trimmed = body.trim_start();
    let names = if trimmed.starts_with('[') || trimmed.starts_with('{') {
        match serde_json::from_str::<CatalogBody>(trimmed)? {
            CatalogBody::Names(names) => names,
            CatalogBody::Entries(entries) | CatalogBody::WebFonts { items: entries } => {
                entries.into_iter().map(|entry| entry.family).collect()
            }
        }
    } else {
        trimmed.lines().map(str::to_string).collect()
    };

    let mut seen = HashSet::new();
    Ok(names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty() && seen.insert(name.clone()))
        .collect())
}
