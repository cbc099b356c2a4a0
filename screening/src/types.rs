use serde::{Deserialize, Serialize};

/// Category of a screening rule. Purely descriptive: matching treats all
/// kinds the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Allergy,
    Ethics,
    Health,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Allergy => "allergy",
            RuleKind::Ethics => "ethics",
            RuleKind::Health => "health",
        }
    }
}

/// One user-supplied restriction: a textual term to flag when it occurs in an
/// ingredient statement. `value` is free text ("peanuts", "palm oil");
/// uniqueness and persistence are owned by the rule store, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "type")]
    pub kind: RuleKind,
    pub value: String,
}

impl Rule {
    pub fn new(kind: RuleKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStatus {
    Clear,
    Flagged,
}

/// Outcome of one matching pass. `violations` holds the original rule values
/// (never synonyms), each at most once, in rule-input order.
///
/// Computed fresh per request and never persisted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViolationReport {
    pub status: ScanStatus,
    pub violations: Vec<String>,
}

impl ViolationReport {
    /// Status is derived, not caller-supplied: flagged iff the list is
    /// non-empty.
    pub fn from_violations(violations: Vec<String>) -> Self {
        let status = if violations.is_empty() {
            ScanStatus::Clear
        } else {
            ScanStatus::Flagged
        };
        Self { status, violations }
    }

    pub fn clear() -> Self {
        Self::from_violations(Vec::new())
    }

    pub fn is_clear(&self) -> bool {
        self.status == ScanStatus::Clear
    }
}
