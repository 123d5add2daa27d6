//! Chronicle emission.
//!
//! Everything that reads and writes chronicle artifacts: the records
//! artifact consumed by the assimilation pass, the archivist timeline
//! snapshot, the synthesis and expansion manifests, and the kernel report.
//!
//! # Write discipline
//!
//! Every artifact write creates parent directories, writes to a temp file
//! in the destination directory, syncs, and renames. A failed write is
//! fatal and surfaced; nothing is retried. Each run fully overwrites the
//! prior artifact.
//!
//! # Error taxonomy
//!
//! - Missing input artifacts degrade to empty values at the call site;
//!   they are never an `Err` here.
//! - A present but unparseable artifact is [`ChronicleError::ParseError`].
//! - A failed write is [`ChronicleError::WriteError`].

pub mod assimilate;
pub mod manifest;
pub mod records;
pub mod report;
pub mod timeline;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from chronicle artifact operations.
#[derive(Debug, Error)]
pub enum ChronicleError {
    #[error("failed to read artifact '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse artifact '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to serialize artifact '{path}': {message}")]
    SerializeError { path: PathBuf, message: String },

    #[error("failed to write artifact '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Write a JSON artifact atomically (pretty-printed, trailing newline).
///
/// # Errors
///
/// Returns `ChronicleError::SerializeError` or `ChronicleError::WriteError`.
pub fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), ChronicleError> {
    let mut contents =
        serde_json::to_string_pretty(value).map_err(|e| ChronicleError::SerializeError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    contents.push('\n');
    write_text(path, &contents)
}

/// Write a text artifact atomically.
///
/// Creates parent directories if needed. Uses atomic write (write to temp
/// file, then rename) to prevent corruption.
///
/// # Errors
///
/// Returns `ChronicleError::WriteError` if any filesystem step fails.
pub fn write_text(path: &Path, contents: &str) -> Result<(), ChronicleError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ChronicleError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    // Temp file in the same directory, so the rename stays on one filesystem.
    let temp_path = temp_path_for(path);
    let mut file = fs::File::create(&temp_path).map_err(|e| ChronicleError::WriteError {
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(contents.as_bytes())
        .map_err(|e| ChronicleError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

    file.sync_all().map_err(|e| ChronicleError::WriteError {
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| ChronicleError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
