//! Synonym expansion: the textual variants that count as a match for a rule.

use std::collections::HashMap;

use crate::normalize;
use crate::types::Rule;

/// Normalized canonical value → normalized synonyms, in source order.
///
/// Built once per check request from a batched synonym-store fetch. When that
/// fetch fails, [`SynonymTable::empty`] keeps the check alive: every rule then
/// expands to just its literal value (fail-open on expansion, fail-closed on
/// the literal term).
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from (canonical value, synonyms) pairs. Keys and synonyms are
    /// normalized here so lookups are case-insensitive regardless of how the
    /// store spelled them.
    pub fn from_pairs<I, K, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<S>)>,
        K: AsRef<str>,
        S: AsRef<str>,
    {
        let mut entries = HashMap::new();
        for (value, synonyms) in pairs {
            entries.insert(
                normalize::for_matching(value.as_ref()),
                synonyms
                    .iter()
                    .map(|s| normalize::for_matching(s.as_ref()))
                    .collect(),
            );
        }
        Self { entries }
    }

    /// Synonyms registered for a canonical value. Absence means no synonyms:
    /// only the literal value is checked.
    pub fn synonyms_of(&self, canonical: &str) -> &[String] {
        self.entries
            .get(&normalize::for_matching(canonical))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Expand a rule into the ordered term list the matcher tests: the rule's own
/// normalized value first, then its registered synonyms in table order. Never
/// empty.
pub fn expand(rule: &Rule, table: &SynonymTable) -> Vec<String> {
    let value = normalize::for_matching(&rule.value);
    let synonyms = table.synonyms_of(&value);
    let mut terms = Vec::with_capacity(1 + synonyms.len());
    terms.push(value);
    terms.extend(synonyms.iter().cloned());
    terms
}
