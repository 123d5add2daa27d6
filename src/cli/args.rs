//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Codexweave - assimilate repository signals into the Living Codex chronicle
#[derive(Parser, Debug)]
#[command(name = "cxw")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if cxw was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan repository roots and emit the synthesis manifests
    #[command(
        name = "synthesize",
        long_about = "Scan repository roots and emit the synthesis manifests.\n\n\
            Each root's README is scanned for headings and keyword signals. The \
            signals are cross-referenced into shared concepts and written to the \
            chronicle directory as the intelligence-lattice and engine-expansion \
            manifests. Repeated runs over identical input produce identical \
            manifests apart from the generated_at timestamp.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Scan the workspace root plus every directory under branches/
    cxw synthesize

    # Scan an explicit set of roots
    cxw synthesize --roots branches/garden-flame --roots branches/tyme-core

    # Write artifacts somewhere other than chronicle/
    cxw synthesize --chronicle-dir weave"
    )]
    Synthesize {
        /// Repository roots to scan (repeatable; default: workspace root
        /// plus each directory under branches/)
        #[arg(long = "roots", value_name = "PATH")]
        roots: Vec<PathBuf>,

        /// Override the chronicle output directory
        #[arg(long, value_name = "DIR")]
        chronicle_dir: Option<String>,
    },

    /// Fold a records artifact into the timeline and kernel report
    #[command(
        name = "assimilate",
        long_about = "Fold a records artifact into the archivist timeline and the \
            codex kernel report.\n\n\
            The records artifact is a JSON file of already-fetched repository \
            records (readme text, topics, workflows, latest commit, tree paths). \
            Each repository's tree is diffed against the snapshot stored in the \
            previous timeline, and the kernel report is regenerated with the \
            hand-maintained 'Curious Agent Lineage' section carried forward.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Assimilate chronicle/repo_records.json
    cxw assimilate

    # Assimilate a records artifact from elsewhere
    cxw assimilate --records /tmp/fetched.json

    # Tighten the per-repository keyword limit
    cxw assimilate --limit 5"
    )]
    Assimilate {
        /// Records artifact to read (default: chronicle/repo_records.json)
        #[arg(long, value_name = "PATH")]
        records: Option<PathBuf>,

        /// Organization label when the records artifact is missing
        #[arg(long, value_name = "ORG")]
        org: Option<String>,

        /// Keyword limit per repository
        #[arg(long, value_name = "N")]
        limit: Option<usize>,

        /// Override the chronicle output directory
        #[arg(long, value_name = "DIR")]
        chronicle_dir: Option<String>,
    },

    /// Show extracted signals without writing anything
    #[command(
        name = "signals",
        long_about = "Scan repository roots and print each repository's headings \
            and keyword signals.\n\n\
            Read-only: nothing is written to the chronicle directory. Useful for \
            checking what a synthesize run would see.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Inspect the default roots
    cxw signals

    # Machine-readable output
    cxw signals --json"
    )]
    Signals {
        /// Repository roots to scan (repeatable)
        #[arg(long = "roots", value_name = "PATH")]
        roots: Vec<PathBuf>,

        /// Emit JSON instead of the human-readable listing
        #[arg(long)]
        json: bool,
    },

    /// Diff two path-list files
    #[command(
        name = "diff",
        long_about = "Compute the structural diff between two path-list files.\n\n\
            Each file is either a JSON array of path strings (when the file name \
            ends in .json) or a plain list with one path per line. Output is the \
            sorted added and removed sets.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Compare two tree listings
    cxw diff old_tree.txt new_tree.txt

    # JSON output for scripting
    cxw diff old.json new.json --json"
    )]
    Diff {
        /// Previous path list
        previous: PathBuf,

        /// Current path list
        current: PathBuf,

        /// Emit JSON instead of the human-readable listing
        #[arg(long)]
        json: bool,
    },

    /// Get, set, or list configuration values
    #[command(
        name = "config",
        long_about = "Get, set, or list configuration values.\n\n\
            Settings live in codexweave.toml at the workspace root, with \
            user-level defaults in ~/.codexweave/config.toml. Workspace values \
            override user values.\n\n\
            Keys: org, chronicle_dir, keyword_limit, extra_stopwords \
            (comma-separated on set), outputs.expansion, outputs.kernel, \
            outputs.lattice, outputs.records, outputs.timeline. The roots \
            list is get-only; edit it in codexweave.toml.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Show the effective organization
    cxw config get org

    # Point the chronicle somewhere else for this workspace
    cxw config set chronicle_dir weave

    # Exclude extra words from keyword extraction
    cxw config set extra_stopwords \"harmonic, sovereign\"

    # Rename the kernel artifact
    cxw config set outputs.kernel kernel.md

    # See every effective value
    cxw config list"
    )]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for cxw \
            commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    cxw completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    cxw completion zsh >> ~/.zshrc

    # Fish
    cxw completion fish > ~/.config/fish/completions/cxw.fish

    # PowerShell
    cxw completion powershell >> $PROFILE"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
