//! Codexweave - a CLI for assimilating repository signals into the Living
//! Codex chronicle
//!
//! Codexweave is a single-binary tool that scans repository documentation,
//! extracts lightweight semantic signals (Markdown headings and ranked
//! keywords), cross-references them into shared concepts, diffs repository
//! trees across runs, and emits deterministic chronicle artifacts: the
//! intelligence-lattice and engine-expansion manifests, the archivist
//! timeline, and the codex kernel report.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to handlers)
//! - [`core`] - Domain types, configuration, path routing, structural diff
//! - [`signal`] - Signal extraction and repository scanning
//! - [`xref`] - Cross-reference engine over scanned signals
//! - [`lattice`] - The static layer/bridge lattice description
//! - [`chronicle`] - Artifact reading, rendering, and atomic emission
//! - [`ui`] - Output utilities
//!
//! # Correctness Invariants
//!
//! Codexweave maintains the following invariants:
//!
//! 1. Extraction and cross-referencing are pure functions of their inputs
//! 2. Emitted artifacts are byte-identical across runs over identical input,
//!    apart from the embedded `generated_at` timestamp
//! 3. Missing inputs degrade to empty values; malformed inputs and failed
//!    writes abort the pass
//! 4. All artifact writes are atomic (temp file, then rename)

pub mod chronicle;
pub mod cli;
pub mod core;
pub mod lattice;
pub mod signal;
pub mod ui;
pub mod xref;
