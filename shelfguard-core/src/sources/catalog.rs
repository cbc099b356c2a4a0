//! JSON product catalog.
//!
//! A barcode-keyed fixture in the shape the external product database
//! returns: display name plus a free-text ingredient statement that may be
//! null.
//!
//! ```json
//! {
//!   "5000159484695": {
//!     "name": "Chocolate bar",
//!     "ingredients": "Sugar, cocoa butter, peanuts"
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{Product, ProductSource, SourceError};

#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    name: String,
    #[serde(default)]
    ingredients: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct JsonCatalog {
    entries: HashMap<String, CatalogEntry>,
}

impl JsonCatalog {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading product catalog {}", path.display()))?;
        let entries: HashMap<String, CatalogEntry> = serde_json::from_str(&text)
            .with_context(|| format!("parsing product catalog {}", path.display()))?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProductSource for JsonCatalog {
    fn product_by_barcode(&self, barcode: &str) -> Result<Option<Product>, SourceError> {
        Ok(self.entries.get(barcode).map(|e| Product {
            name: e.name.clone(),
            ingredients: e.ingredients.clone(),
        }))
    }
}
