//! TOML synonym dictionary.
//!
//! Format:
//!
//! ```toml
//! [[entry]]
//! value = "palm oil"
//! synonyms = ["palm kernel oil", "sodium palmate"]
//! ```

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use screening::normalize;

use super::{SourceError, SynonymSource};

#[derive(Debug, Deserialize)]
struct DictionaryFile {
    #[serde(default, rename = "entry")]
    entries: Vec<DictionaryEntry>,
}

#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    value: String,
    #[serde(default)]
    synonyms: Vec<String>,
}

/// Synonym dictionary loaded once from a TOML file. Keys are normalized so
/// lookup is case-insensitive; synonym order follows the file.
///
/// `TomlDictionary::default()` is the empty dictionary — handy as a degraded
/// stand-in when the file cannot be loaded, since an empty batch response
/// means "no synonyms" rather than an error.
#[derive(Debug, Clone, Default)]
pub struct TomlDictionary {
    entries: HashMap<String, Vec<String>>,
}

impl TomlDictionary {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading synonym dictionary {}", path.display()))?;
        let file: DictionaryFile = toml::from_str(&text)
            .with_context(|| format!("parsing synonym dictionary {}", path.display()))?;
        let mut entries = HashMap::new();
        for entry in file.entries {
            entries.insert(normalize::for_matching(&entry.value), entry.synonyms);
        }
        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SynonymSource for TomlDictionary {
    fn synonyms_for(
        &self,
        canonical: &BTreeSet<String>,
    ) -> Result<HashMap<String, Vec<String>>, SourceError> {
        let mut out = HashMap::new();
        for value in canonical {
            if let Some(synonyms) = self.entries.get(&normalize::for_matching(value)) {
                out.insert(value.clone(), synonyms.clone());
            }
        }
        Ok(out)
    }
}
