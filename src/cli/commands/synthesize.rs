//! synthesize command - Scan roots and emit the synthesis manifests

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use chrono::Utc;

use crate::chronicle::manifest;
use crate::cli::Context;
use crate::core::config::Config;
use crate::core::paths::ChroniclePaths;
use crate::lattice::concept_lattice;
use crate::signal::extract::DOC_KEYWORD_LIMIT;
use crate::signal::{scan, RepositorySignal, Stopwords};
use crate::ui::output;
use crate::xref::cross_reference;

/// Run the synthesis pass.
pub fn synthesize(ctx: &Context, roots: &[PathBuf], chronicle_dir: Option<&str>) -> Result<()> {
    let verbosity = ctx.verbosity();
    let workspace_root = ctx.workspace_root()?;
    let config = Config::load(&workspace_root).context("Failed to load configuration")?;

    let paths = match chronicle_dir {
        Some(dir) => ChroniclePaths::new(
            &workspace_root,
            dir,
            config.outputs().cloned().unwrap_or_default(),
        ),
        None => ChroniclePaths::from_config(&workspace_root, &config),
    };

    let stopwords = config.stopwords();
    let limit = config.keyword_limit().unwrap_or(DOC_KEYWORD_LIMIT);
    let roots = resolve_roots(roots, &workspace_root, &config);

    let signals = scan_roots(&roots, &stopwords, limit, ctx)?;
    output::debug(
        format!("scanned {} root(s)", signals.len()),
        verbosity,
    );

    let cross_references = cross_reference(&signals);
    let generated_at = Utc::now();

    let synthesis = manifest::synthesis_manifest(
        signals,
        cross_references.clone(),
        concept_lattice(),
        generated_at,
    );
    let expansion =
        manifest::expansion_manifest(&cross_references, concept_lattice(), generated_at);

    let lattice_path = paths.lattice_manifest_path();
    crate::chronicle::write_json(&lattice_path, &synthesis)
        .context("Failed to write intelligence lattice manifest")?;
    let expansion_path = paths.expansion_manifest_path();
    crate::chronicle::write_json(&expansion_path, &expansion)
        .context("Failed to write engine expansion manifest")?;

    output::print(
        format!("Intelligence lattice written to {}", lattice_path.display()),
        verbosity,
    );
    output::print(
        format!("Engine expansion written to {}", expansion_path.display()),
        verbosity,
    );
    Ok(())
}

/// Resolve the roots to scan: the flag, else config, else the workspace
/// root plus each directory under `branches/`.
pub fn resolve_roots(flag_roots: &[PathBuf], workspace_root: &Path, config: &Config) -> Vec<PathBuf> {
    if !flag_roots.is_empty() {
        return flag_roots
            .iter()
            .map(|r| absolutize(r, workspace_root))
            .collect();
    }

    if let Some(configured) = config.roots() {
        return configured
            .iter()
            .map(|r| absolutize(Path::new(r), workspace_root))
            .collect();
    }

    let mut roots = vec![workspace_root.to_path_buf()];
    let branches = workspace_root.join("branches");
    if let Ok(entries) = std::fs::read_dir(&branches) {
        let mut found: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        found.sort();
        roots.extend(found);
    }
    roots
}

fn absolutize(root: &Path, workspace_root: &Path) -> PathBuf {
    if root.is_absolute() {
        root.to_path_buf()
    } else {
        workspace_root.join(root)
    }
}

/// Scan each root into a signal, in root order.
pub fn scan_roots(
    roots: &[PathBuf],
    stopwords: &Stopwords,
    limit: usize,
    ctx: &Context,
) -> Result<Vec<RepositorySignal>> {
    let mut signals = Vec::with_capacity(roots.len());
    for root in roots {
        let signal = scan::scan_root(root, stopwords, limit)
            .with_context(|| format!("Failed to scan root '{}'", root.display()))?;
        output::debug(
            format!(
                "{}: {} heading(s), {} keyword(s)",
                signal.name,
                signal.headings.len(),
                signal.keywords.len()
            ),
            ctx.verbosity(),
        );
        signals.push(signal);
    }
    Ok(signals)
}
