//! Deterministic ordering helpers.
//!
//! Candidate lists are deduplicated and walked in a fixed order so that
//! identical trees always produce identical output.

use std::collections::HashSet;
use std::path::PathBuf;

/// Drop repeated paths, keeping the first occurrence of each.
pub fn dedup_preserving_order(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::with_capacity(paths.len());
    paths.into_iter().filter(|p| seen.insert(p.clone())).collect()
}
