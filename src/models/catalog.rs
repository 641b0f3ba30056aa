//! Named description catalogs.
//!
//! Keeps description text out of screen setup code. A catalog maps a
//! stable name (`"buttons.submit"`) to a [`Description`] and can be loaded
//! from JSON:
//!
//! ```json
//! {
//!   "labels.user_name": { "text": "The currently signed in user" },
//!   "buttons.submit": { "text": "Tap to submit", "gesture": "double_tap" }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::description::Description;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Collection of descriptions keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionCatalog {
    entries: BTreeMap<String, Description>,
}

impl DescriptionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let entries: BTreeMap<String, Description> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(
            target: "viewdesc::catalog",
            "Loaded {} descriptions from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Add or replace an entry.
    pub fn insert(&mut self, name: impl Into<String>, description: impl Into<Description>) {
        self.entries.insert(name.into(), description.into());
    }

    pub fn get(&self, name: &str) -> Option<&Description> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Serialize back to pretty JSON.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}
