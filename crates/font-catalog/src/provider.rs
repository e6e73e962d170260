//! Sources of font family names.

use std::{fs, path::PathBuf};

use log::debug;

use crate::{
    error::{Error, Result},
    parse::parse_catalog,
};

/// Produces the list of available font families.
pub trait CatalogProvider {
    fn fetch(&self) -> Result<Vec<String>>;
}

/// Catalog served over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl CatalogProvider for HttpCatalog {
    fn fetch(&self) -> Result<Vec<String>> {
        debug!("Fetching catalog from {}", self.url);
        let http = |source: reqwest::Error| Error::Http { url: self.url.clone(), source };

        let response = reqwest::blocking::get(&self.url).map_err(http)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status { url: self.url.clone(), status });
        }

        let body = response.text().map_err(http)?;
        parse_catalog(&body)
    }
}

/// Catalog stored in a local file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogProvider for FileCatalog {
    fn fetch(&self) -> Result<Vec<String>> {
        debug!("Reading catalog from {}", self.path.display());
        let body = fs::read_to_string(&self.path)
            .map_err(|source| Error::Io { path: self.path.clone(), source })?;
        parse_catalog(&body)
    }
}

/// Fixed in-memory catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog(pub Vec<String>);

impl CatalogProvider for StaticCatalog {
    fn fetch(&self) -> Result<Vec<String>> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.txt");
        fs::write(&path, "Roboto\nLora\n").unwrap();
        let names = FileCatalog::new(&path).fetch().unwrap();
        assert_eq!(names, ["Roboto", "Lora"]);
    }

    #[test]
    fn test_missing_file() {
        let err = FileCatalog::new("/nonexistent/fontpair/catalog.json").fetch().unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_static_catalog() {
        let provider = StaticCatalog(vec!["Inter".to_string()]);
        assert_eq!(provider.fetch().unwrap(), ["Inter"]);
    }
}
