//! Violation matcher: literal case-insensitive substring scan.

use std::collections::HashSet;

use crate::normalize;
use crate::synonyms::{expand, SynonymTable};
use crate::types::{Rule, ViolationReport};

/// Scan an ingredient statement against the user's rules.
///
/// Per rule, in input order: the rule's own value is tested first; only if it
/// does not occur are its synonyms consulted, in table order. The first hit
/// records the rule's original `value` and stops the search for that rule, so
/// a rule contributes at most one entry no matter how many of its variants
/// occur. Rules sharing a case-insensitively equal value are reported once.
///
/// Matching is a naive substring test by contract: a "egg" rule will match
/// "eggplant". Word-boundary awareness is a deliberate non-feature. Rules
/// whose value is blank are skipped rather than matched — the empty string
/// occurs in every haystack, so a blank rule would flag every product.
///
/// Empty or absent ingredient text, and an empty rule set, are clear results,
/// not errors.
pub fn scan(ingredients: Option<&str>, rules: &[Rule], table: &SynonymTable) -> ViolationReport {
    let haystack = normalize::for_matching_opt(ingredients);
    if haystack.is_empty() || rules.is_empty() {
        return ViolationReport::clear();
    }

    let mut violations: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for rule in rules {
        let key = normalize::for_matching(&rule.value);
        // A blank rule value would substring-match everything; skip it.
        if key.trim().is_empty() || seen.contains(&key) {
            continue;
        }
        let hit = expand(rule, table)
            .iter()
            .any(|term| !term.is_empty() && haystack.contains(term.as_str()));
        if hit {
            seen.insert(key);
            violations.push(rule.value.clone());
        }
    }

    ViolationReport::from_violations(violations)
}
