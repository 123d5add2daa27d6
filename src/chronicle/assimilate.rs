//! chronicle::assimilate
//!
//! The assimilation pass: fold a records artifact and the prior snapshot
//! into the new timeline and kernel report. Pure with respect to the
//! filesystem; the command layer loads inputs and writes outputs.

use chrono::{DateTime, Utc};

use super::manifest::format_timestamp;
use super::records::RecordsArtifact;
use super::report;
use super::timeline::{Snapshot, SnapshotEntry, Timeline, TimelineEntry};
use crate::core::diff::StructuralDiff;
use crate::signal::extract::RECORD_KEYWORD_LIMIT;
use crate::signal::{scan, RepoMetadata, Stopwords};

/// Everything one assimilation pass produces.
#[derive(Debug, Clone)]
pub struct AssimilationOutcome {
    /// The timeline artifact, including the snapshot for the next run.
    pub timeline: Timeline,
    /// The rendered kernel report.
    pub kernel: String,
}

/// Run one assimilation pass.
///
/// `prior_kernel` is the previous report's text, used to carry the
/// hand-maintained lineage section forward. `keyword_limit` defaults to
/// [`RECORD_KEYWORD_LIMIT`] when `None`.
pub fn run_pass(
    records: &RecordsArtifact,
    prior_snapshot: &Snapshot,
    prior_kernel: Option<&str>,
    stopwords: &Stopwords,
    keyword_limit: Option<usize>,
    generated_at: DateTime<Utc>,
) -> AssimilationOutcome {
    let limit = keyword_limit.unwrap_or(RECORD_KEYWORD_LIMIT);
    let timestamp = format_timestamp(generated_at);

    let mut sections: Vec<String> = Vec::new();
    let mut entries: Vec<TimelineEntry> = Vec::new();
    let mut snapshot = Snapshot::new();

    for record in &records.repositories {
        let metadata = RepoMetadata {
            description: record.description.as_deref(),
            topics: &record.topics,
            language: record.language.as_deref(),
        };
        let signal = scan::scan_record(
            record.name.clone(),
            record.name.as_str(),
            record.readme.as_deref(),
            &metadata,
            stopwords,
            limit,
        );

        let previous = prior_snapshot.get(record.name.as_str());
        let previous_paths: &[String] = previous.map(|p| p.tree_paths.as_slice()).unwrap_or(&[]);
        let diff = StructuralDiff::compute(previous_paths, &record.tree_paths);

        let latest_sha = record
            .latest_commit
            .as_ref()
            .and_then(|c| c.sha.as_deref());
        let previous_sha = previous.and_then(|p| p.commit.as_deref());
        let new_commit = matches!(latest_sha, Some(sha) if Some(sha) != previous_sha);

        sections.push(report::render_repo_section(record, &signal, &diff));

        snapshot.insert(
            record.name.to_string(),
            SnapshotEntry {
                commit: latest_sha.map(str::to_string),
                tree_paths: record.tree_paths.clone(),
            },
        );
        entries.push(TimelineEntry {
            added_files: diff.added,
            latest_commit: record.latest_commit.clone(),
            name: record.name.to_string(),
            new_commit,
            removed_files: diff.removed,
        });
    }

    let header = report::render_header(&records.org, records.repositories.len(), &timestamp);
    let timeline_section = report::render_timeline_section(&entries, &timestamp);
    let body = if sections.is_empty() {
        "No repositories discovered.".to_string()
    } else {
        sections.join("\n\n")
    };

    let mut kernel = format!("{header}\n\n{timeline_section}\n\n{body}");
    if let Some(prior) = prior_kernel {
        let preserved = report::extract_section(prior, report::CURIOUS_LINEAGE_HEADING);
        if !preserved.is_empty() {
            kernel = report::inject_section(&kernel, &preserved, report::CURIOUS_LINEAGE_HEADING);
        }
    }
    if !kernel.ends_with('\n') {
        kernel.push('\n');
    }

    AssimilationOutcome {
        timeline: Timeline {
            generated_at: timestamp,
            org: records.org.clone(),
            repositories: entries,
            snapshot,
        },
        kernel,
    }
}
