//! Collaborator interfaces around the screening engine.
//!
//! The engine itself is pure; everything external — the user's rule set, the
//! synonym dictionary, the product database — is reached through these traits
//! so the check pass can be driven by in-memory fakes in tests. All traits
//! are `Send + Sync` and consumed as `Arc<dyn …>` because fetches run on
//! worker threads with a deadline (see `services::checker`).

pub mod catalog;
pub mod dictionary;
pub mod profile;

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use screening::Rule;

pub use catalog::JsonCatalog;
pub use dictionary::TomlDictionary;
pub use profile::ProfileRules;

/// Failure of an external source. `Timeout` is produced by the fetch boundary
/// in the checker, not by the sources themselves.
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("{source_name} unavailable: {reason}")]
    Unavailable {
        source_name: &'static str,
        reason: String,
    },
    #[error("{source_name} timed out")]
    Timeout { source_name: &'static str },
}

impl SourceError {
    pub fn unavailable(source_name: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            source_name,
            reason: reason.into(),
        }
    }
}

pub trait RuleSource: Send + Sync {
    /// Ordered rule set for one user. A user with no configured rules is an
    /// empty vec, not an error.
    fn rules_for_user(&self, user_id: &str) -> Result<Vec<Rule>, SourceError>;
}

pub trait SynonymSource: Send + Sync {
    /// Batched lookup: one call per check request covering every distinct
    /// canonical value in the rule set. Missing keys mean "no synonyms".
    fn synonyms_for(
        &self,
        canonical: &BTreeSet<String>,
    ) -> Result<HashMap<String, Vec<String>>, SourceError>;
}

/// Pass-through product metadata from the external product database. The
/// ingredient statement is opaque free text and may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub ingredients: Option<String>,
}

pub trait ProductSource: Send + Sync {
    /// `Ok(None)` is "no record for this barcode", distinct from the source
    /// being unreachable.
    fn product_by_barcode(&self, barcode: &str) -> Result<Option<Product>, SourceError>;
}
