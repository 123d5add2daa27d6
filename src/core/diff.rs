//! core::diff
//!
//! Structural diff between two flat lists of file paths.
//!
//! # Invariants
//!
//! - Exact string equality is the identity relation; no path normalization.
//! - `added` and `removed` are sorted and duplicate-free.
//! - Stable: identical inputs always produce identical output.
//! - An empty `previous` means "no prior snapshot": everything in `current`
//!   is added, nothing is removed.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Paths that appeared or disappeared between two tree snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralDiff {
    /// Paths in `current` but not `previous`, sorted.
    pub added: Vec<String>,
    /// Paths in `previous` but not `current`, sorted.
    pub removed: Vec<String>,
}

impl StructuralDiff {
    /// Compute the diff of `current` against `previous`.
    pub fn compute(previous: &[String], current: &[String]) -> Self {
        let previous: BTreeSet<&str> = previous.iter().map(String::as_str).collect();
        let current: BTreeSet<&str> = current.iter().map(String::as_str).collect();

        // BTreeSet iteration is ordered, so the output is sorted for free.
        Self {
            added: current
                .difference(&previous)
                .map(|p| p.to_string())
                .collect(),
            removed: previous
                .difference(&current)
                .map(|p| p.to_string())
                .collect(),
        }
    }

    /// Whether nothing was added or removed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
