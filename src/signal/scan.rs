//! signal::scan
//!
//! Repository scanning: turn one repository's documentation (and optional
//! metadata) into a [`RepositorySignal`].
//!
//! # Degradation
//!
//! Scanning never fails for a missing or unreadable document. The signal
//! still exists with empty headings and keywords, and contributes nothing
//! to downstream cross-referencing.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use super::extract;
use super::stopwords::Stopwords;
use crate::core::types::{RepoName, TypeError};

/// Errors from scanning operations.
///
/// Note that a missing document is not an error; only an unusable
/// repository identity is.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The repository directory name is not a usable repository name.
    #[error(transparent)]
    InvalidName(#[from] TypeError),
}

/// Semantic signals harvested from a single repository.
///
/// Immutable after construction. `headings` preserve document order;
/// `keywords` are ranked by descending frequency with first-occurrence
/// tie-break, deduplicated, and capped at the scan's keyword limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySignal {
    /// Repository name.
    pub name: RepoName,
    /// Root identifier (directory path or symbolic origin).
    pub root: String,
    /// Markdown headings in document order.
    pub headings: Vec<String>,
    /// Ranked keyword signals.
    pub keywords: Vec<String>,
}

impl RepositorySignal {
    /// A signal with no extracted content.
    pub fn empty(name: RepoName, root: impl Into<String>) -> Self {
        Self {
            name,
            root: root.into(),
            headings: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Whether the signal carries no headings and no keywords.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty() && self.keywords.is_empty()
    }
}

/// Optional repository metadata merged into the keyword candidates.
#[derive(Debug, Clone, Default)]
pub struct RepoMetadata<'a> {
    /// One-line repository description.
    pub description: Option<&'a str>,
    /// Topic labels.
    pub topics: &'a [String],
    /// Primary language tag.
    pub language: Option<&'a str>,
}

/// Scan an already-fetched repository record.
///
/// Metadata fields are appended to the keyword candidate fragments after
/// the documentation text, so documentation frequency dominates ranking.
pub fn scan_record(
    name: RepoName,
    root: impl Into<String>,
    doc_text: Option<&str>,
    metadata: &RepoMetadata<'_>,
    stopwords: &Stopwords,
    limit: usize,
) -> RepositorySignal {
    let doc = doc_text.unwrap_or("");

    let mut fragments: Vec<&str> = vec![doc];
    if let Some(description) = metadata.description {
        fragments.push(description);
    }
    if let Some(language) = metadata.language {
        fragments.push(language);
    }
    fragments.extend(metadata.topics.iter().map(String::as_str));

    RepositorySignal {
        name,
        root: root.into(),
        headings: extract::headings(doc),
        keywords: extract::keywords(fragments, stopwords, limit),
    }
}

/// Scan a repository root on the filesystem.
///
/// Looks for `README.md`, falling back to the lexicographically first
/// `README*.md` in the root. A missing or unreadable README degrades to an
/// empty signal.
///
/// # Errors
///
/// Returns `ScanError::InvalidName` if the root's directory name cannot be
/// used as a repository name.
pub fn scan_root(
    root: &Path,
    stopwords: &Stopwords,
    limit: usize,
) -> Result<RepositorySignal, ScanError> {
    let name = RepoName::new(root_name(root))?;
    let root_display = root.display().to_string();

    let doc = find_readme(root).and_then(|path| std::fs::read_to_string(path).ok());

    Ok(match doc {
        Some(text) => scan_record(
            name,
            root_display,
            Some(&text),
            &RepoMetadata::default(),
            stopwords,
            limit,
        ),
        None => RepositorySignal::empty(name, root_display),
    })
}

/// The repository name for a root path: its final component, or the whole
/// path rendered as a string when there is none (e.g. `/`).
fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string())
}

/// Locate the README for a repository root.
fn find_readme(root: &Path) -> Option<std::path::PathBuf> {
    let canonical = root.join("README.md");
    if canonical.is_file() {
        return Some(canonical);
    }

    let mut candidates: Vec<std::path::PathBuf> = std::fs::read_dir(root)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(|n| n.starts_with("README") && n.ends_with(".md"))
                    .unwrap_or(false)
        })
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}
