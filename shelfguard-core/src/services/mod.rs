// src/services/mod.rs

pub mod audit; // JSONL record of completed checks
pub mod checker; // per-request orchestration around the engine

pub use audit::ScanLog;
pub use checker::{CheckPolicy, CheckReport, Checker};
