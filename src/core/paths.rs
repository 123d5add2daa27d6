//! core::paths
//!
//! Centralized path routing for chronicle artifacts.
//!
//! # Architecture
//!
//! Every artifact location is computed here from the workspace root, the
//! configured chronicle directory, and the configured file name overrides.
//!
//! **Hard rule:** no code outside this module may join `"chronicle"` paths
//! by hand. All artifact paths go through `ChroniclePaths`.
//!
//! # Layout
//!
//! All artifacts live under `<workspace_root>/<chronicle_dir>/`:
//! - `intelligence_lattice.json` - Synthesis manifest
//! - `engine_expansion.json` - Engine expansion manifest
//! - `archivist_timeline.json` - Archivist timeline and snapshot
//! - `codex_kernel.md` - Kernel report
//! - `repo_records.json` - Records artifact (input)

use std::path::{Path, PathBuf};

use crate::core::config::{Config, OutputNames};

const DEFAULT_LATTICE: &str = "intelligence_lattice.json";
const DEFAULT_EXPANSION: &str = "engine_expansion.json";
const DEFAULT_TIMELINE: &str = "archivist_timeline.json";
const DEFAULT_KERNEL: &str = "codex_kernel.md";
const DEFAULT_RECORDS: &str = "repo_records.json";

/// Centralized path routing for chronicle artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChroniclePaths {
    workspace_root: PathBuf,
    chronicle_dir: PathBuf,
    names: OutputNames,
}

impl ChroniclePaths {
    /// Create paths from a workspace root and loaded configuration.
    pub fn from_config(workspace_root: &Path, config: &Config) -> Self {
        Self::new(
            workspace_root,
            config.chronicle_dir(),
            config.outputs().cloned().unwrap_or_default(),
        )
    }

    /// Create paths with an explicit chronicle directory.
    pub fn new(workspace_root: &Path, chronicle_dir: &str, names: OutputNames) -> Self {
        Self {
            workspace_root: workspace_root.to_path_buf(),
            chronicle_dir: workspace_root.join(chronicle_dir),
            names,
        }
    }

    /// The workspace root.
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// The chronicle directory.
    pub fn chronicle_dir(&self) -> &Path {
        &self.chronicle_dir
    }

    /// Path of the synthesis (intelligence lattice) manifest.
    pub fn lattice_manifest_path(&self) -> PathBuf {
        self.artifact(self.names.lattice.as_deref(), DEFAULT_LATTICE)
    }

    /// Path of the engine expansion manifest.
    pub fn expansion_manifest_path(&self) -> PathBuf {
        self.artifact(self.names.expansion.as_deref(), DEFAULT_EXPANSION)
    }

    /// Path of the archivist timeline artifact.
    pub fn timeline_path(&self) -> PathBuf {
        self.artifact(self.names.timeline.as_deref(), DEFAULT_TIMELINE)
    }

    /// Path of the kernel report.
    pub fn kernel_path(&self) -> PathBuf {
        self.artifact(self.names.kernel.as_deref(), DEFAULT_KERNEL)
    }

    /// Path of the records artifact consumed by the assimilation pass.
    pub fn records_path(&self) -> PathBuf {
        self.artifact(self.names.records.as_deref(), DEFAULT_RECORDS)
    }

    fn artifact(&self, name: Option<&str>, default: &str) -> PathBuf {
        self.chronicle_dir.join(name.unwrap_or(default))
    }
}
