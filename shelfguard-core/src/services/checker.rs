//! services/checker.rs
//! Check orchestration: validate the request, fetch collaborators under a
//! deadline, degrade where policy allows, then run the pure matching pass.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, Receiver};
use serde::Serialize;

use screening::{matcher, normalize, Rule, ScanStatus, SynonymTable};

use crate::error::CheckError;
use crate::services::audit::ScanLog;
use crate::sources::{ProductSource, RuleSource, SourceError, SynonymSource};

/// Knobs for the fetch boundary.
#[derive(Debug, Clone)]
pub struct CheckPolicy {
    /// Upper bound on each external fetch. A fetch past the deadline is
    /// treated as "source unavailable" for that source.
    pub fetch_timeout: Duration,
}

impl Default for CheckPolicy {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_millis(1500),
        }
    }
}

/// Response shape handed back to the caller: the engine's verdict plus
/// pass-through product metadata.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub status: ScanStatus,
    pub violations: Vec<String>,
    #[serde(rename = "productName")]
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<String>,
}

/// One checker per set of collaborators. Each `check` call is independent:
/// no shared mutable state, no cross-request ordering.
pub struct Checker {
    rules: Arc<dyn RuleSource>,
    synonyms: Arc<dyn SynonymSource>,
    products: Arc<dyn ProductSource>,
    policy: CheckPolicy,
    scan_log: Option<ScanLog>,
}

impl Checker {
    pub fn new(
        rules: Arc<dyn RuleSource>,
        synonyms: Arc<dyn SynonymSource>,
        products: Arc<dyn ProductSource>,
    ) -> Self {
        Self {
            rules,
            synonyms,
            products,
            policy: CheckPolicy::default(),
            scan_log: None,
        }
    }

    pub fn with_policy(mut self, policy: CheckPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_scan_log(mut self, log: ScanLog) -> Self {
        self.scan_log = Some(log);
        self
    }

    /// Run one check: barcode → product, user → rules, rules → synonym
    /// expansions, then the substring scan.
    ///
    /// Failure policy (see [`CheckError`]): blank barcode and missing caller
    /// identity fail before any fetch; product-not-found and rule-store
    /// failure are fatal; synonym-store failure degrades to literal-term
    /// matching. An error is never reported as a clear result.
    pub fn check(&self, user_id: Option<&str>, barcode: &str) -> Result<CheckReport, CheckError> {
        let barcode = barcode.trim();
        if barcode.is_empty() {
            return Err(CheckError::BarcodeRequired);
        }
        let user = match user_id.map(str::trim) {
            Some(u) if !u.is_empty() => u.to_string(),
            _ => return Err(CheckError::NotAuthenticated),
        };

        // Product and rule reads are independent; run both at once, each with
        // its own deadline.
        let product_rx = spawn_fetch({
            let products = Arc::clone(&self.products);
            let barcode = barcode.to_string();
            move || products.product_by_barcode(&barcode)
        });
        let rules_rx = spawn_fetch({
            let rules = Arc::clone(&self.rules);
            let user = user.clone();
            move || rules.rules_for_user(&user)
        });

        let product = recv_fetch(product_rx, self.policy.fetch_timeout, "product source")
            .map_err(CheckError::ProductUnavailable)?
            .ok_or_else(|| CheckError::ProductNotFound {
                barcode: barcode.to_string(),
            })?;
        let rules = recv_fetch(rules_rx, self.policy.fetch_timeout, "rule store")
            .map_err(CheckError::RuleStore)?;

        let table = self.expansion_table(&rules);
        let report = matcher::scan(product.ingredients.as_deref(), &rules, &table);

        tracing::debug!(
            barcode,
            user = %user,
            status = ?report.status,
            violations = report.violations.len(),
            "check complete"
        );
        if let Some(log) = &self.scan_log {
            log.record(&user, barcode, &product.name, &report);
        }

        Ok(CheckReport {
            status: report.status,
            violations: report.violations,
            product_name: product.name,
            ingredients: product.ingredients,
        })
    }

    /// One batched synonym fetch per check, covering every distinct canonical
    /// value in the rule set. On failure the table degrades to empty:
    /// expansion is fail-open, the literal rule terms still match.
    fn expansion_table(&self, rules: &[Rule]) -> SynonymTable {
        let canonical: BTreeSet<String> = rules
            .iter()
            .map(|r| normalize::for_matching(&r.value))
            .filter(|v| !v.trim().is_empty())
            .collect();
        if canonical.is_empty() {
            return SynonymTable::empty();
        }

        let rx = spawn_fetch({
            let synonyms = Arc::clone(&self.synonyms);
            move || synonyms.synonyms_for(&canonical)
        });
        match recv_fetch(rx, self.policy.fetch_timeout, "synonym store") {
            Ok(map) => SynonymTable::from_pairs(map),
            Err(err) => {
                tracing::warn!(%err, "synonym store degraded; matching literal terms only");
                SynonymTable::empty()
            }
        }
    }
}

// ---------------- fetch boundary ----------------

/// Run a source call on a detached worker thread. Detached on purpose: a hung
/// source must not pin the request past its deadline, and the worker's send
/// fails harmlessly once the receiver is dropped.
fn spawn_fetch<T, F>(fetch: F) -> Receiver<Result<T, SourceError>>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, SourceError> + Send + 'static,
{
    let (tx, rx) = bounded(1);
    thread::spawn(move || {
        let _ = tx.send(fetch());
    });
    rx
}

fn recv_fetch<T>(
    rx: Receiver<Result<T, SourceError>>,
    timeout: Duration,
    label: &'static str,
) -> Result<T, SourceError> {
    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(_) => Err(SourceError::Timeout { source_name: label }),
    }
}
