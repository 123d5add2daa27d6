//! chronicle::report
//!
//! The codex kernel report: Markdown rendering for the assimilation pass,
//! plus the section surgery that preserves hand-maintained sections across
//! regenerations.

use super::records::RepoRecord;
use super::timeline::TimelineEntry;
use crate::core::diff::StructuralDiff;
use crate::signal::RepositorySignal;

/// The hand-maintained section carried forward from the prior report.
pub const CURIOUS_LINEAGE_HEADING: &str = "## Curious Agent Lineage";

/// Heading substrings that mark architecture-flavored scrolls.
const ARCHITECTURE_TERMS: &[&str] = &["architecture", "pattern", "design"];

/// Structural drift paths shown per repository section.
const DRIFT_PREVIEW: usize = 8;

/// Drift paths shown inline per timeline entry.
const TIMELINE_DRIFT_PREVIEW: usize = 5;

/// Render the report header.
pub fn render_header(org: &str, repo_count: usize, generated_at: &str) -> String {
    format!(
        "# Living Codex Kernel\n\
         *Assimilation pass for `{org}`*\n\
         \n\
         - **Generated**: {generated_at}\n\
         - **Repositories scanned**: {repo_count}\n\
         \n\
         The kernel captures surface semantics from scanned repositories: \
         descriptions, topics, scroll headings, and workflow rituals."
    )
}

/// Render one repository's section.
pub fn render_repo_section(
    record: &RepoRecord,
    signal: &RepositorySignal,
    diff: &StructuralDiff,
) -> String {
    let description = record
        .description
        .as_deref()
        .unwrap_or("No description provided.");

    let concepts = if signal.keywords.is_empty() {
        "No dominant signals detected.".to_string()
    } else {
        signal.keywords.join(", ")
    };

    let architecture: Vec<&String> = signal
        .headings
        .iter()
        .filter(|h| {
            let lowered = h.to_lowercase();
            ARCHITECTURE_TERMS.iter().any(|term| lowered.contains(term))
        })
        .collect();
    let architecture = if architecture.is_empty() {
        "Implicit or undocumented.".to_string()
    } else {
        architecture
            .iter()
            .map(|h| h.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let scrolls = bullet_list(&signal.headings, "None captured");
    let workflows = bullet_list(&record.workflows, "None detected");

    let lineage = format!(
        "Origin: {}; Last pulse: {}",
        record.created_at.as_deref().unwrap_or("unknown"),
        record.pushed_at.as_deref().unwrap_or("unknown"),
    );

    let (commit_label, commit_message) = match &record.latest_commit {
        Some(commit) => (
            commit.label(),
            commit.message.as_deref().unwrap_or("Unknown").to_string(),
        ),
        None => ("unresolved".to_string(), "Unknown".to_string()),
    };

    let added = drift_list(&diff.added);
    let removed = drift_list(&diff.removed);

    format!(
        "## {name}\n\
         - **Description**: {description}\n\
         - **Concepts & Patterns**: {concepts}\n\
         - **Architectures & Lineage**: {architecture}\n\
         - **Scrolls (Headings)**:\n{scrolls}\n\
         - **Workflows & Rituals**:\n{workflows}\n\
         - **Design Lineage**: {lineage}\n\
         - **Latest Commit**: {commit_label}\n\
         - **Commit Message**: {commit_message}\n\
         - **Structural Drift**:\n\
         \x20 - Added:\n{added}\n\
         \x20 - Removed:\n{removed}",
        name = record.name,
    )
}

fn bullet_list(items: &[String], empty_label: &str) -> String {
    if items.is_empty() {
        return format!("  - {empty_label}");
    }
    items
        .iter()
        .map(|item| format!("  - {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn drift_list(paths: &[String]) -> String {
    if paths.is_empty() {
        return "    - None".to_string();
    }
    paths
        .iter()
        .take(DRIFT_PREVIEW)
        .map(|path| format!("    - {path}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the archivist timeline section.
pub fn render_timeline_section(entries: &[TimelineEntry], generated_at: &str) -> String {
    let mut lines = vec![
        "## Archivist Timeline".to_string(),
        format!("- **Generated**: {generated_at}"),
        format!("- **Repositories Scanned**: {}", entries.len()),
        "- **Lineage Updates**:".to_string(),
    ];

    if entries.is_empty() {
        lines.push("  - None captured.".to_string());
        return lines.join("\n");
    }

    for entry in entries {
        let commit_line = entry
            .latest_commit
            .as_ref()
            .map(|c| c.label())
            .unwrap_or_else(|| "unresolved".to_string());
        let status = if entry.new_commit {
            "new commit"
        } else {
            "no change"
        };
        lines.push(format!("  - **{}** -> {status} ({commit_line})", entry.name));

        if let Some(message) = entry
            .latest_commit
            .as_ref()
            .and_then(|c| c.message.as_deref())
        {
            lines.push(format!("    - commit: {message}"));
        }

        let added = preview(&entry.added_files);
        let removed = preview(&entry.removed_files);
        lines.push(format!(
            "    - structural: +{} / -{} (added: {added}; removed: {removed})",
            entry.added_files.len(),
            entry.removed_files.len(),
        ));
    }

    lines.join("\n")
}

fn preview(paths: &[String]) -> String {
    if paths.is_empty() {
        return "none".to_string();
    }
    paths
        .iter()
        .take(TIMELINE_DRIFT_PREVIEW)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Extract an existing section under a given heading.
///
/// Captures from the heading line until the next `## ` heading (exclusive).
/// Returns an empty string when the heading is absent.
pub fn extract_section(content: &str, heading: &str) -> String {
    let mut captured: Vec<&str> = Vec::new();
    let mut recording = false;
    for line in content.lines() {
        if line.starts_with(heading) {
            recording = true;
        } else if recording && line.starts_with("## ") {
            break;
        }
        if recording {
            captured.push(line);
        }
    }
    captured.join("\n").trim().to_string()
}

/// Replace or append a section headed by `heading`.
///
/// Any existing section under the heading is removed, then the new section
/// is appended at the end of the document.
pub fn inject_section(content: &str, section: &str, heading: &str) -> String {
    let mut filtered: Vec<&str> = Vec::new();
    let mut skip = false;
    for line in content.lines() {
        if line.starts_with(heading) {
            skip = true;
        }
        if skip && line.starts_with("## ") && !line.starts_with(heading) {
            skip = false;
        }
        if !skip {
            filtered.push(line);
        }
    }

    let mut out: Vec<String> = filtered.iter().map(|l| l.to_string()).collect();
    if out.last().map(|l| !l.trim().is_empty()).unwrap_or(false) {
        out.push(String::new());
    }
    out.push(section.trim().to_string());
    out.push(String::new());
    out.join("\n")
}
