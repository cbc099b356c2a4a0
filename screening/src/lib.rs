//! Screening engine: decide whether a product's ingredient statement violates
//! a user's dietary/ethical/health rules.
//!
//! The engine is pure and synchronous. Callers hand it the raw ingredient
//! text, the user's ordered rule set, and an already-fetched [`SynonymTable`];
//! it returns the triggered rule values and an overall clear/flagged status.
//! Fetching those inputs (and every other ambient concern) lives in
//! `shelfguard-core`.

pub mod matcher;
pub mod normalize;
pub mod synonyms;
pub mod types;

pub use matcher::scan;
pub use synonyms::{expand, SynonymTable};
pub use types::{Rule, RuleKind, ScanStatus, ViolationReport};
