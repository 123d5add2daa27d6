//! cli
//!
//! Command-line interface layer for Codexweave.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT own algorithmic logic
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers in [`commands`], which load configuration, resolve paths, call
//! the core, and format output.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::ui::output::Verbosity;

/// Shared execution context derived from global flags.
#[derive(Debug, Clone)]
pub struct Context {
    /// Working directory override (`--cwd`)
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled
    pub debug: bool,
    /// Minimal output
    pub quiet: bool,
}

impl Context {
    /// The output verbosity for this invocation.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Resolve the workspace root: `--cwd` or the current directory.
    pub fn workspace_root(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(path) => Ok(path.clone()),
            None => std::env::current_dir().context("Failed to resolve current directory"),
        }
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}
