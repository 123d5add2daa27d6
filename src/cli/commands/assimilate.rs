//! assimilate command - Fold a records artifact into the timeline and kernel

use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::Utc;

use crate::chronicle::assimilate::run_pass;
use crate::chronicle::records::{self, RecordsArtifact};
use crate::chronicle::timeline::{self, SnapshotSource};
use crate::cli::Context;
use crate::core::config::Config;
use crate::core::paths::ChroniclePaths;
use crate::ui::output;

/// Run the assimilation pass.
pub fn assimilate(
    ctx: &Context,
    records_path: Option<&Path>,
    org: Option<&str>,
    limit: Option<usize>,
    chronicle_dir: Option<&str>,
) -> Result<()> {
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

    let records_path = records_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| paths.records_path());

    // A malformed records artifact is fatal; a missing one degrades to an
    // empty pass against the configured organization.
    let records = match records::load_records(&records_path)
        .context("Failed to load records artifact")?
    {
        Some(records) => records,
        None => {
            output::warn(
                format!(
                    "records artifact '{}' not found; assimilating an empty set",
                    records_path.display()
                ),
                verbosity,
            );
            RecordsArtifact::empty(org.unwrap_or_else(|| config.org()))
        }
    };

    let timeline_path = paths.timeline_path();
    let (prior_snapshot, snapshot_source) = timeline::load_snapshot(&timeline_path);
    if snapshot_source == SnapshotSource::Malformed {
        output::warn(
            format!(
                "previous timeline '{}' could not be parsed; treating as empty",
                timeline_path.display()
            ),
            verbosity,
        );
    }

    let kernel_path = paths.kernel_path();
    let prior_kernel = std::fs::read_to_string(&kernel_path).ok();

    let outcome = run_pass(
        &records,
        &prior_snapshot,
        prior_kernel.as_deref(),
        &config.stopwords(),
        limit.or(config.keyword_limit()),
        Utc::now(),
    );

    crate::chronicle::write_text(&kernel_path, &outcome.kernel)
        .context("Failed to write kernel report")?;
    timeline::save_timeline(&timeline_path, &outcome.timeline)
        .context("Failed to write archivist timeline")?;

    output::print(
        format!("Codex kernel written to {}", kernel_path.display()),
        verbosity,
    );
    output::print(
        format!("Archivist timeline written to {}", timeline_path.display()),
        verbosity,
    );
    Ok(())
}
