//! chronicle::records
//!
//! The records artifact: already-fetched repository records handed to the
//! assimilation pass by an external fetcher. The fetcher owns network I/O;
//! this side only parses its file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ChronicleError;
use crate::core::types::RepoName;

/// Commit metadata carried with a repository record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub sha: Option<String>,
    #[serde(default)]
    pub tree_sha: Option<String>,
}

impl CommitInfo {
    /// Short display label: abbreviated sha and commit date.
    pub fn label(&self) -> String {
        match &self.sha {
            Some(sha) => {
                // Truncate on chars; the artifact does not guarantee ASCII.
                let short: String = sha.chars().take(7).collect();
                let date = self.date.as_deref().unwrap_or("n/a");
                format!("{short} @ {date}")
            }
            None => "unresolved".to_string(),
        }
    }
}

/// One fetched repository record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoRecord {
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub latest_commit: Option<CommitInfo>,
    pub name: RepoName,
    #[serde(default)]
    pub pushed_at: Option<String>,
    #[serde(default)]
    pub readme: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub tree_paths: Vec<String>,
    #[serde(default)]
    pub workflows: Vec<String>,
}

/// The full records artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsArtifact {
    #[serde(default)]
    pub fetched_at: Option<String>,
    pub org: String,
    #[serde(default)]
    pub repositories: Vec<RepoRecord>,
}

impl RecordsArtifact {
    /// An artifact with no repositories for the given organization.
    pub fn empty(org: impl Into<String>) -> Self {
        Self {
            fetched_at: None,
            org: org.into(),
            repositories: Vec::new(),
        }
    }
}

/// Load a records artifact.
///
/// A missing file is `Ok(None)`; the caller substitutes an empty artifact
/// and warns. A present but malformed file is fatal.
///
/// # Errors
///
/// Returns `ChronicleError::ReadError` if the file exists but cannot be
/// read, or `ChronicleError::ParseError` if it is not a valid artifact.
pub fn load_records(path: &Path) -> Result<Option<RecordsArtifact>, ChronicleError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ChronicleError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let artifact =
        serde_json::from_str(&contents).map_err(|e| ChronicleError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    Ok(Some(artifact))
}
