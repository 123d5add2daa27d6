//! diff command - Structural diff between two path-list files

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::diff::StructuralDiff;
use crate::ui::output;

/// Diff two path-list files and print added/removed.
pub fn diff(ctx: &Context, previous: &Path, current: &Path, json: bool) -> Result<()> {
    let verbosity = ctx.verbosity();
    let previous_paths = read_path_list(previous)?;
    let current_paths = read_path_list(current)?;

    let diff = StructuralDiff::compute(&previous_paths, &current_paths);

    if json {
        let rendered = serde_json::to_string_pretty(&diff).context("Failed to serialize diff")?;
        println!("{rendered}");
        return Ok(());
    }

    if diff.is_empty() {
        output::print("No structural drift.", verbosity);
        return Ok(());
    }

    output::print(format!("Added ({}):", diff.added.len()), verbosity);
    if diff.added.is_empty() {
        output::print("  (none)", verbosity);
    } else {
        output::print(output::format_list(&diff.added, "  + "), verbosity);
    }
    output::print(format!("Removed ({}):", diff.removed.len()), verbosity);
    if diff.removed.is_empty() {
        output::print("  (none)", verbosity);
    } else {
        output::print(output::format_list(&diff.removed, "  - "), verbosity);
    }
    Ok(())
}

/// Read a path list: a JSON array when the file name ends in `.json`,
/// otherwise one path per line (blank lines skipped).
fn read_path_list(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read path list '{}'", path.display()))?;

    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_str(&contents)
            .with_context(|| format!("'{}' is not a JSON array of strings", path.display()))
    } else {
        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reads_line_lists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tree.txt");
        std::fs::write(&path, "a.rs\n\n  b.rs  \n").unwrap();
        assert_eq!(read_path_list(&path).unwrap(), vec!["a.rs", "b.rs"]);
    }

    #[test]
    fn reads_json_lists() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tree.json");
        std::fs::write(&path, r#"["x.md", "y.md"]"#).unwrap();
        assert_eq!(read_path_list(&path).unwrap(), vec!["x.md", "y.md"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tree.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(read_path_list(&path).is_err());
    }
}
