//! services/audit.rs
//! Append-only JSONL record of completed checks.
//!
//! One line per check that reached a verdict. Errors never make it here; they
//! surface to the caller instead. Writes are best effort: an unwritable
//! logbook must not fail the check that produced the record.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use screening::{ScanStatus, ViolationReport};

#[derive(Debug, Clone)]
pub struct ScanLog {
    path: PathBuf,
}

#[derive(Serialize)]
struct ScanRecord<'a> {
    id: String,
    ts: String,
    user: &'a str,
    barcode: &'a str,
    product_name: &'a str,
    status: ScanStatus,
    violations: &'a [String],
}

impl ScanLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record; failures are logged and swallowed.
    pub fn record(&self, user: &str, barcode: &str, product_name: &str, report: &ViolationReport) {
        if let Err(err) = self.append(user, barcode, product_name, report) {
            tracing::warn!(%err, path = %self.path.display(), "scan log write failed");
        }
    }

    fn append(
        &self,
        user: &str,
        barcode: &str,
        product_name: &str,
        report: &ViolationReport,
    ) -> anyhow::Result<()> {
        let record = ScanRecord {
            id: Uuid::new_v4().to_string(),
            ts: Utc::now().to_rfc3339(),
            user,
            barcode,
            product_name,
            status: report.status,
            violations: &report.violations,
        };
        let line = serde_json::to_string(&record)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut f = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(f, "{line}")?;
        Ok(())
    }
}
