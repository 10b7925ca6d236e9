//! Cell reference extraction
//!
//! Scans formula text for reference-shaped tokens (one column letter A–T,
//! case-insensitive, followed by 1–2 digits) and resolves the in-bounds
//! ones to addresses.

use gridnote_core::CellAddress;
use regex::Regex;
use std::sync::OnceLock;

static REFERENCE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// The compiled reference token pattern (lazily initialized)
pub(crate) fn reference_pattern() -> &'static Regex {
    REFERENCE_PATTERN
        .get_or_init(|| Regex::new("[A-Ta-t][0-9]{1,2}").expect("reference pattern is valid"))
}

/// Extract the cell addresses referenced by a formula expression
///
/// Returns addresses in first-occurrence order, duplicates preserved: a
/// formula may legitimately reference the same cell twice, and callers that
/// need a set deduplicate themselves. Reference-shaped tokens outside the
/// grid (row 0, row > 50) are silently dropped.
pub fn extract_references(expr: &str) -> Vec<CellAddress> {
    reference_pattern()
        .find_iter(expr)
        .filter_map(|m| CellAddress::parse(m.as_str()).ok())
        .collect()
}
