//! chronicle::manifest
//!
//! The synthesis and expansion manifest records.
//!
//! # Determinism
//!
//! Fields are declared in sorted key order and mappings are `BTreeMap`s, so
//! repeated runs over identical input serialize to identical bytes except
//! for `generated_at`. The timestamp is injected by the caller, which keeps
//! these builders pure.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::lattice::ConceptLattice;
use crate::signal::RepositorySignal;
use crate::xref::CrossReferences;

/// Pattern signals carried into `harmonic_overlays`.
const OVERLAY_LIMIT: usize = 10;

/// Render a timestamp the way every manifest embeds it.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// The intelligence-lattice manifest: signals, cross-references, and the
/// static lattice for one synthesis pass.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisManifest {
    pub cross_references: CrossReferences,
    pub generated_at: String,
    pub lattice: ConceptLattice,
    pub phase: &'static str,
    pub repositories: Vec<RepositorySignal>,
}

/// A shared concept threaded through the lattice.
#[derive(Debug, Clone, Serialize)]
pub struct QuantumThread {
    pub channel: &'static str,
    pub concept: String,
    pub repositories: Vec<String>,
}

/// One pattern signal bound across the harmonic and quantum layers.
#[derive(Debug, Clone, Serialize)]
pub struct HarmonicOverlay {
    pub binds: Vec<&'static str>,
    pub resonance: &'static str,
    pub signal: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExpansionSummary {
    pub pattern_signal_count: usize,
    pub shared_concept_count: usize,
}

/// The expansion body embedded in the expansion manifest.
#[derive(Debug, Clone, Serialize)]
pub struct Expansion {
    pub expansion_summary: ExpansionSummary,
    pub harmonic_overlays: Vec<HarmonicOverlay>,
    pub lattice: ConceptLattice,
    pub quantum_threads: Vec<QuantumThread>,
}

/// The engine-expansion manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ExpansionManifest {
    pub engine: &'static str,
    pub expansion: Expansion,
    pub generated_at: String,
}

/// Build the synthesis manifest for one pass.
pub fn synthesis_manifest(
    repositories: Vec<RepositorySignal>,
    cross_references: CrossReferences,
    lattice: ConceptLattice,
    generated_at: DateTime<Utc>,
) -> SynthesisManifest {
    SynthesisManifest {
        cross_references,
        generated_at: format_timestamp(generated_at),
        lattice,
        phase: "Synthesis",
        repositories,
    }
}

/// Expand the lattice definition with the cross-reference results.
pub fn expansion_manifest(
    cross_references: &CrossReferences,
    lattice: ConceptLattice,
    generated_at: DateTime<Utc>,
) -> ExpansionManifest {
    let quantum_threads = cross_references
        .shared_concepts
        .iter()
        .map(|(concept, repositories)| QuantumThread {
            channel: "conceptual-thread",
            concept: concept.clone(),
            repositories: repositories.clone(),
        })
        .collect();

    let harmonic_overlays = cross_references
        .pattern_signals
        .iter()
        .take(OVERLAY_LIMIT)
        .map(|signal| HarmonicOverlay {
            binds: vec!["harmonic", "quantum"],
            resonance: "pattern-recognition",
            signal: signal.clone(),
        })
        .collect();

    ExpansionManifest {
        engine: "Quill-core",
        expansion: Expansion {
            expansion_summary: ExpansionSummary {
                pattern_signal_count: cross_references.pattern_signals.len(),
                shared_concept_count: cross_references.shared_concepts.len(),
            },
            harmonic_overlays,
            lattice,
            quantum_threads,
        },
        generated_at: format_timestamp(generated_at),
    }
}
