//! Cross-reference engine.
//!
//! Folds a collection of repository signals into a concept index (keyword
//! to repository membership), then derives the three cross-reference views
//! emitted into the synthesis manifest.
//!
//! # Determinism
//!
//! The whole pass is a pure function of the ordered signal collection.
//! `pattern_signals` sorts by descending membership size with a
//! lexicographic tie-break; `shared_concepts` keys serialize sorted via
//! `BTreeMap`; membership lists keep fold order.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::signal::RepositorySignal;

/// Headings carried per repository into `harmonic_mappings`.
const HEADING_PREVIEW: usize = 6;

/// Keywords carried per repository into `harmonic_mappings`.
const DOMINANT_SIGNALS: usize = 8;

/// One repository's view of the cross-reference results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HarmonicMapping {
    /// The repository's strongest keywords (first 8).
    pub dominant_signals: Vec<String>,
    /// The repository's leading headings (first 6).
    pub harmonic_headings: Vec<String>,
    /// Repository name.
    pub repository: String,
    /// The subset of this repository's keywords shared with other
    /// repositories.
    pub shared: Vec<String>,
}

/// The aggregated cross-reference output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossReferences {
    /// Per-repository mappings, in signal fold order.
    pub harmonic_mappings: Vec<HarmonicMapping>,
    /// All concepts, strongest membership first.
    pub pattern_signals: Vec<String>,
    /// Concepts claimed by two or more repositories, with their members.
    pub shared_concepts: BTreeMap<String, Vec<String>>,
}

/// Cross-reference an ordered collection of repository signals.
///
/// Repeated keywords within one signal count once toward that concept's
/// membership. Signals with no keywords contribute nothing.
pub fn cross_reference(signals: &[RepositorySignal]) -> CrossReferences {
    // concept -> (membership in fold order, membership set for dedup)
    let mut index: HashMap<&str, (Vec<&str>, HashSet<&str>)> = HashMap::new();

    for signal in signals {
        let name = signal.name.as_str();
        for keyword in &signal.keywords {
            let entry = index.entry(keyword.as_str()).or_default();
            if entry.1.insert(name) {
                entry.0.push(name);
            }
        }
    }

    let mut pattern_signals: Vec<(&str, usize)> = index
        .iter()
        .map(|(concept, (members, _))| (*concept, members.len()))
        .collect();
    pattern_signals.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    let pattern_signals: Vec<String> = pattern_signals
        .into_iter()
        .map(|(concept, _)| concept.to_string())
        .collect();

    let shared_concepts: BTreeMap<String, Vec<String>> = index
        .iter()
        .filter(|(_, (members, _))| members.len() >= 2)
        .map(|(concept, (members, _))| {
            (
                concept.to_string(),
                members.iter().map(|m| m.to_string()).collect(),
            )
        })
        .collect();

    let harmonic_mappings = signals
        .iter()
        .map(|signal| HarmonicMapping {
            dominant_signals: signal
                .keywords
                .iter()
                .take(DOMINANT_SIGNALS)
                .cloned()
                .collect(),
            harmonic_headings: signal
                .headings
                .iter()
                .take(HEADING_PREVIEW)
                .cloned()
                .collect(),
            repository: signal.name.to_string(),
            shared: signal
                .keywords
                .iter()
                .filter(|k| shared_concepts.contains_key(k.as_str()))
                .cloned()
                .collect(),
        })
        .collect();

    CrossReferences {
        harmonic_mappings,
        pattern_signals,
        shared_concepts,
    }
}
