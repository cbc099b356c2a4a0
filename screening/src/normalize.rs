//! Text normalization for ingredient matching.
//!
//! Policy: Unicode lowercasing and nothing else. The matcher is a literal
//! case-insensitive substring test, so normalization must not add or remove
//! substrings — no punctuation stripping, no stemming, no whitespace
//! collapsing.
//!
//! Applied once to the ingredient text and once to every candidate term
//! (rule value and each synonym) before comparison. Keep this single-sourced
//! so the haystack and the needles cannot drift.

/// Normalize text for case-insensitive substring matching.
pub fn for_matching(s: &str) -> String {
    s.to_lowercase()
}

/// Absent ingredient text normalizes to the empty string, which matches
/// nothing.
pub fn for_matching_opt(s: Option<&str>) -> String {
    s.map(for_matching).unwrap_or_default()
}
