//! signals command - Show extracted signals without writing anything

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use super::synthesize::{resolve_roots, scan_roots};
use crate::cli::Context;
use crate::core::config::Config;
use crate::signal::extract::DOC_KEYWORD_LIMIT;
use crate::ui::output;

/// Print each root's headings and keywords. Read-only.
pub fn signals(ctx: &Context, roots: &[PathBuf], json: bool) -> Result<()> {
    let verbosity = ctx.verbosity();
    let workspace_root = ctx.workspace_root()?;
    let config = Config::load(&workspace_root).context("Failed to load configuration")?;

    let stopwords = config.stopwords();
    let limit = config.keyword_limit().unwrap_or(DOC_KEYWORD_LIMIT);
    let roots = resolve_roots(roots, &workspace_root, &config);
    let signals = scan_roots(&roots, &stopwords, limit, ctx)?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&signals).context("Failed to serialize signals")?;
        println!("{rendered}");
        return Ok(());
    }

    for signal in &signals {
        output::print(format!("{}", signal.name), verbosity);
        if signal.is_empty() {
            output::print("  (no signals)", verbosity);
            continue;
        }
        if !signal.headings.is_empty() {
            output::print("  headings:", verbosity);
            output::print(output::format_list(&signal.headings, "    - "), verbosity);
        }
        if !signal.keywords.is_empty() {
            output::print("  keywords:", verbosity);
            output::print(output::format_list(&signal.keywords, "    - "), verbosity);
        }
    }
    Ok(())
}
