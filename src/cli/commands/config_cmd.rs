//! config command - Get, set, or list configuration values

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::config::{Config, OutputNames};

/// Get a configuration value.
pub fn get(ctx: &Context, key: &str) -> Result<()> {
    let workspace_root = ctx.workspace_root()?;
    let config = Config::load(&workspace_root).context("Failed to load configuration")?;

    let value = match key {
        "org" => config.org().to_string(),
        "chronicle_dir" => config.chronicle_dir().to_string(),
        "keyword_limit" => config
            .keyword_limit()
            .map(|l| l.to_string())
            .unwrap_or_default(),
        "roots" => config
            .roots()
            .map(|r| r.join(", "))
            .unwrap_or_default(),
        "extra_stopwords" => config.extra_stopwords().join(", "),
        _ if key.starts_with("outputs.") => {
            let names = OutputNames::default();
            let names = config.outputs().unwrap_or(&names);
            output_name(names, key)?.clone().unwrap_or_default()
        }
        _ => bail!("Unknown configuration key: {}", key),
    };

    if value.is_empty() {
        // Key exists but has no value - exit silently
        Ok(())
    } else {
        println!("{}", value);
        Ok(())
    }
}

/// Set a configuration value in the workspace config.
pub fn set(ctx: &Context, key: &str, value: &str) -> Result<()> {
    let workspace_root = ctx.workspace_root()?;
    let config = Config::load(&workspace_root).context("Failed to load configuration")?;

    let mut workspace = config.workspace.clone().unwrap_or_default();

    match key {
        "org" => workspace.org = Some(value.to_string()),
        "chronicle_dir" => workspace.chronicle_dir = Some(value.to_string()),
        "keyword_limit" => {
            let limit: usize = value
                .parse()
                .with_context(|| format!("'{value}' is not a valid keyword limit"))?;
            workspace.keyword_limit = Some(limit);
        }
        "extra_stopwords" => {
            let words: Vec<String> = value
                .split(',')
                .map(|w| w.trim().to_string())
                .filter(|w| !w.is_empty())
                .collect();
            workspace.extra_stopwords = Some(words);
        }
        _ if key.starts_with("outputs.") => {
            let mut outputs = workspace.outputs.take().unwrap_or_default();
            *output_name_mut(&mut outputs, key)? = Some(value.to_string());
            workspace.outputs = Some(outputs);
        }
        _ => bail!("Unknown configuration key: {}", key),
    }

    workspace.validate()?;
    Config::write_workspace(&workspace_root, &workspace)
        .context("Failed to write workspace config")?;

    if !ctx.quiet {
        println!("Set {} = {}", key, value);
    }

    Ok(())
}

/// List all effective configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let workspace_root = ctx.workspace_root()?;
    let config = Config::load(&workspace_root).context("Failed to load configuration")?;

    println!("# Effective Configuration");
    println!("org = {}", config.org());
    println!("chronicle_dir = {}", config.chronicle_dir());
    match config.keyword_limit() {
        Some(limit) => println!("keyword_limit = {}", limit),
        None => println!("keyword_limit = (per-command default)"),
    }
    match config.roots() {
        Some(roots) => println!("roots = [{}]", roots.join(", ")),
        None => println!("roots = (workspace root + branches/*)"),
    }
    let extras = config.extra_stopwords();
    if !extras.is_empty() {
        println!("extra_stopwords = [{}]", extras.join(", "));
    }
    if let Some(outputs) = config.outputs() {
        for (key, value) in [
            ("outputs.expansion", &outputs.expansion),
            ("outputs.kernel", &outputs.kernel),
            ("outputs.lattice", &outputs.lattice),
            ("outputs.records", &outputs.records),
            ("outputs.timeline", &outputs.timeline),
        ] {
            if let Some(name) = value {
                println!("{} = {}", key, name);
            }
        }
    }

    if let Some(path) = config.workspace_config_loaded_from() {
        println!("# workspace config: {}", path.display());
    }
    if let Some(path) = config.global_config_loaded_from() {
        println!("# global config: {}", path.display());
    }

    Ok(())
}

fn output_name<'a>(outputs: &'a OutputNames, key: &str) -> Result<&'a Option<String>> {
    match key {
        "outputs.expansion" => Ok(&outputs.expansion),
        "outputs.kernel" => Ok(&outputs.kernel),
        "outputs.lattice" => Ok(&outputs.lattice),
        "outputs.records" => Ok(&outputs.records),
        "outputs.timeline" => Ok(&outputs.timeline),
        _ => bail!("Unknown configuration key: {}", key),
    }
}

fn output_name_mut<'a>(outputs: &'a mut OutputNames, key: &str) -> Result<&'a mut Option<String>> {
    match key {
        "outputs.expansion" => Ok(&mut outputs.expansion),
        "outputs.kernel" => Ok(&mut outputs.kernel),
        "outputs.lattice" => Ok(&mut outputs.lattice),
        "outputs.records" => Ok(&mut outputs.records),
        "outputs.timeline" => Ok(&mut outputs.timeline),
        _ => bail!("Unknown configuration key: {}", key),
    }
}
