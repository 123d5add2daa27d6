//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads configuration and resolves artifact paths
//! 2. Calls the core to execute the pass
//! 3. Formats and displays output
//!
//! Handlers do NOT own algorithmic logic.

mod assimilate;
mod completion;
mod config_cmd;
mod diff_cmd;
mod signals;
mod synthesize;

// Re-export command functions for testing and direct invocation
pub use assimilate::assimilate;
pub use completion::completion;
pub use config_cmd::{get as config_get, list as config_list, set as config_set};
pub use diff_cmd::diff;
pub use signals::signals;
pub use synthesize::synthesize;

use anyhow::Result;

use crate::cli::args::{Command, ConfigAction};
use crate::cli::Context;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Synthesize {
            roots,
            chronicle_dir,
        } => synthesize(ctx, &roots, chronicle_dir.as_deref()),
        Command::Assimilate {
            records,
            org,
            limit,
            chronicle_dir,
        } => assimilate(
            ctx,
            records.as_deref(),
            org.as_deref(),
            limit,
            chronicle_dir.as_deref(),
        ),
        Command::Signals { roots, json } => signals(ctx, &roots, json),
        Command::Diff {
            previous,
            current,
            json,
        } => diff(ctx, &previous, &current, json),
        Command::Config { action } => match action {
            ConfigAction::Get { key } => config_get(ctx, &key),
            ConfigAction::Set { key, value } => config_set(ctx, &key, &value),
            ConfigAction::List => config_list(ctx),
        },
        Command::Completion { shell } => completion(shell),
    }
}
