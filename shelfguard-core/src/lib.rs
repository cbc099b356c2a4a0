//! Shelfguard core: everything around the pure screening engine.
//!
//! - [`sources`] — injected collaborator interfaces (rule store, synonym
//!   store, product source) plus the file-backed implementations the binary
//!   ships with.
//! - [`services::checker`] — the per-request orchestration: input/auth
//!   validation, timed parallel fetches, synonym degradation, the matching
//!   pass, and the scan audit record.
//! - [`config`] — `config.toml` loading with per-field defaults.

pub mod config;
pub mod error;
pub mod services;
pub mod sources;

pub use config::CoreConfig;
pub use error::CheckError;
pub use services::audit::ScanLog;
pub use services::checker::{CheckPolicy, CheckReport, Checker};
pub use sources::{Product, ProductSource, RuleSource, SourceError, SynonymSource};
