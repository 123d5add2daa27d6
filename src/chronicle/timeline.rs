//! chronicle::timeline
//!
//! The archivist timeline: per-run lineage entries plus the tree snapshot
//! the next run diffs against.
//!
//! # Recovery
//!
//! A missing timeline means "no prior snapshot". A malformed timeline is
//! recovered the same way so one corrupted artifact cannot wedge every
//! future pass; the caller is told so it can warn.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::records::CommitInfo;
use super::ChronicleError;

/// One repository's state captured for the next run's diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    #[serde(default)]
    pub commit: Option<String>,
    #[serde(default)]
    pub tree_paths: Vec<String>,
}

/// Keyed by repository name.
pub type Snapshot = BTreeMap<String, SnapshotEntry>;

/// One repository's lineage entry for this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub added_files: Vec<String>,
    pub latest_commit: Option<CommitInfo>,
    pub name: String,
    pub new_commit: bool,
    pub removed_files: Vec<String>,
}

/// The emitted timeline artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub generated_at: String,
    pub org: String,
    pub repositories: Vec<TimelineEntry>,
    pub snapshot: Snapshot,
}

/// Where a loaded snapshot came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotSource {
    /// Parsed from an existing timeline artifact.
    Loaded,
    /// No timeline artifact exists yet.
    Missing,
    /// The artifact exists but could not be parsed; treated as empty.
    Malformed,
}

/// Load the snapshot from a previous timeline artifact.
///
/// Never fails: missing and malformed artifacts both degrade to an empty
/// snapshot, distinguished by the returned [`SnapshotSource`].
pub fn load_snapshot(path: &Path) -> (Snapshot, SnapshotSource) {
    if !path.exists() {
        return (Snapshot::new(), SnapshotSource::Missing);
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return (Snapshot::new(), SnapshotSource::Malformed),
    };

    match serde_json::from_str::<Timeline>(&contents) {
        Ok(timeline) => (timeline.snapshot, SnapshotSource::Loaded),
        Err(_) => (Snapshot::new(), SnapshotSource::Malformed),
    }
}

/// Persist the timeline artifact.
///
/// # Errors
///
/// Returns `ChronicleError::WriteError` on any filesystem failure.
pub fn save_timeline(path: &Path, timeline: &Timeline) -> Result<(), ChronicleError> {
    super::write_json(path, timeline)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_timeline() -> Timeline {
        let mut snapshot = Snapshot::new();
        snapshot.insert(
            "tyme-core".to_string(),
            SnapshotEntry {
                commit: Some("abc1234".to_string()),
                tree_paths: vec!["README.md".to_string(), "src/lib.rs".to_string()],
            },
        );
        Timeline {
            generated_at: "2025-06-01T12:00:00Z".to_string(),
            org: "sovereign-codex".to_string(),
            repositories: vec![TimelineEntry {
                added_files: vec!["src/lib.rs".to_string()],
                latest_commit: Some(CommitInfo {
                    sha: Some("abc1234".to_string()),
                    ..Default::default()
                }),
                name: "tyme-core".to_string(),
                new_commit: true,
                removed_files: vec![],
            }],
            snapshot,
        }
    }

    #[test]
    fn missing_timeline_is_empty_snapshot() {
        let temp = TempDir::new().unwrap();
        let (snapshot, source) = load_snapshot(&temp.path().join("absent.json"));
        assert!(snapshot.is_empty());
        assert_eq!(source, SnapshotSource::Missing);
    }

    #[test]
    fn malformed_timeline_degrades_to_empty() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("timeline.json");
        std::fs::write(&path, "not even close to json").unwrap();

        let (snapshot, source) = load_snapshot(&path);
        assert!(snapshot.is_empty());
        assert_eq!(source, SnapshotSource::Malformed);
    }

    #[test]
    fn save_then_load_round_trips_snapshot() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("chronicle/timeline.json");
        let timeline = sample_timeline();

        save_timeline(&path, &timeline).unwrap();
        let (snapshot, source) = load_snapshot(&path);

        assert_eq!(source, SnapshotSource::Loaded);
        assert_eq!(snapshot, timeline.snapshot);
    }
}
