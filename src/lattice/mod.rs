//! The static concept lattice.
//!
//! A hand-authored description of the four layers (harmonic, quantum,
//! conceptual, computational) and the bridges between adjacent layers. This
//! data is merged into emitted manifests verbatim; nothing here is computed
//! from scanned input.

use serde::Serialize;

/// A bridge between two adjacent layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerBridge {
    /// Named transfer channels across the bridge.
    pub channels: Vec<&'static str>,
    /// Checks a transfer must pass.
    pub integrity_checks: Vec<&'static str>,
    /// Source layer name.
    pub source: &'static str,
    /// Target layer name.
    pub target: &'static str,
}

/// The full layer/bridge description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptLattice {
    pub bridges: Vec<LayerBridge>,
    pub computational: Vec<&'static str>,
    pub conceptual: Vec<&'static str>,
    pub harmonic: Vec<&'static str>,
    pub quantum: Vec<&'static str>,
}

/// The default lattice spanning the harmonic through computational layers.
pub fn concept_lattice() -> ConceptLattice {
    ConceptLattice {
        bridges: vec![
            LayerBridge {
                channels: vec!["resonance-scan", "phase-lock", "tone-to-waveform"],
                integrity_checks: vec!["coherence-check", "resonance-alignment"],
                source: "harmonic",
                target: "quantum",
            },
            LayerBridge {
                channels: vec!["state-sampling", "superposition-decay", "pattern-collapse"],
                integrity_checks: vec!["signal-to-intent", "lineage-preserve"],
                source: "quantum",
                target: "conceptual",
            },
            LayerBridge {
                channels: vec!["schema-cast", "constraint-weave", "execution-shape"],
                integrity_checks: vec!["harmonic-safety", "guardrail-bind"],
                source: "conceptual",
                target: "computational",
            },
        ],
        computational: vec!["pipeline-graph", "simulation-kernel", "codex-adapter"],
        conceptual: vec!["concept-node", "lineage-link", "sovereign-intent"],
        harmonic: vec!["breath-rhythm", "harmonic-carrier", "garden-flame-safety"],
        quantum: vec!["qubit-lattice", "tone-wavefield", "phase-memory"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bridges_connect_adjacent_layers() {
        let lattice = concept_lattice();
        assert_eq!(lattice.bridges.len(), 3);
        assert_eq!(lattice.bridges[0].source, "harmonic");
        assert_eq!(lattice.bridges[0].target, "quantum");
        assert_eq!(lattice.bridges[2].target, "computational");
    }

    #[test]
    fn every_layer_has_three_entries() {
        let lattice = concept_lattice();
        for layer in [
            &lattice.harmonic,
            &lattice.quantum,
            &lattice.conceptual,
            &lattice.computational,
        ] {
            assert_eq!(layer.len(), 3);
        }
    }

    #[test]
    fn every_bridge_carries_integrity_checks() {
        for bridge in concept_lattice().bridges {
            assert!(!bridge.channels.is_empty());
            assert!(!bridge.integrity_checks.is_empty());
        }
    }

    #[test]
    fn serializes_with_sorted_keys() {
        let json = serde_json::to_string(&concept_lattice()).unwrap();
        let bridges_at = json.find("\"bridges\"").unwrap();
        let quantum_at = json.find("\"quantum\"").unwrap();
        assert!(bridges_at < quantum_at);
    }
}
