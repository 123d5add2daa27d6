//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Codexweave has two configuration scopes:
//! - **Global**: User-level settings
//! - **Workspace**: Per-workspace overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Workspace config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$CODEXWEAVE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/codexweave/config.toml`
//! 3. `~/.codexweave/config.toml` (canonical write location)
//!
//! # Workspace Config Location
//!
//! `codexweave.toml` at the workspace root.

pub mod schema;

pub use schema::{GlobalConfig, OutputNames, WorkspaceConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::signal::Stopwords;

/// Default organization when none is configured.
pub const DEFAULT_ORG: &str = "sovereign-codex";

/// Default chronicle directory name.
pub const DEFAULT_CHRONICLE_DIR: &str = "chronicle";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Merged configuration from all sources.
///
/// This struct provides accessor methods that apply precedence rules
/// automatically. Workspace config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Workspace configuration (if a workspace config file exists)
    pub workspace: Option<WorkspaceConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the workspace config file (if loaded)
    workspace_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or are
    /// invalid. Missing config files are not an error (defaults are used).
    pub fn load(workspace_root: &Path) -> Result<Config, ConfigError> {
        let (global, global_path) = Self::load_global()?;

        let workspace_file = Self::workspace_config_path(workspace_root);
        let (workspace, workspace_path) = if workspace_file.exists() {
            let parsed: WorkspaceConfig = Self::read_toml(&workspace_file)?;
            (Some(parsed), Some(workspace_file))
        } else {
            (None, None)
        };

        global.validate()?;
        if let Some(ref w) = workspace {
            w.validate()?;
        }

        Ok(Config {
            global,
            workspace,
            global_path,
            workspace_path,
        })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<(GlobalConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $CODEXWEAVE_CONFIG
        if let Ok(path) = std::env::var("CODEXWEAVE_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_toml(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 2. Check $XDG_CONFIG_HOME/codexweave/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("codexweave/config.toml");
            if path.exists() {
                let config = Self::read_toml(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.codexweave/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".codexweave/config.toml");
            if path.exists() {
                let config = Self::read_toml(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((GlobalConfig::default(), None))
    }

    /// Read and parse a TOML config file.
    fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for global config.
    ///
    /// Returns `~/.codexweave/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".codexweave/config.toml"))
    }

    /// Get the path for workspace config.
    pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
        workspace_root.join("codexweave.toml")
    }

    /// Write global config atomically.
    pub fn write_global(config: &GlobalConfig) -> Result<PathBuf, ConfigError> {
        let path = Self::global_config_path()?;
        Self::write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write workspace config atomically.
    pub fn write_workspace(
        workspace_root: &Path,
        config: &WorkspaceConfig,
    ) -> Result<PathBuf, ConfigError> {
        let path = Self::workspace_config_path(workspace_root);
        Self::write_config_atomic(&path, config)?;
        Ok(path)
    }

    /// Write a config file atomically (temp file, then rename).
    fn write_config_atomic<T: serde::Serialize>(
        path: &Path,
        config: &T,
    ) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the organization name.
    ///
    /// Defaults to "sovereign-codex" if not configured.
    pub fn org(&self) -> &str {
        self.workspace
            .as_ref()
            .and_then(|w| w.org.as_deref())
            .or(self.global.org.as_deref())
            .unwrap_or(DEFAULT_ORG)
    }

    /// Get the chronicle directory name.
    ///
    /// Defaults to "chronicle" if not configured.
    pub fn chronicle_dir(&self) -> &str {
        self.workspace
            .as_ref()
            .and_then(|w| w.chronicle_dir.as_deref())
            .unwrap_or(DEFAULT_CHRONICLE_DIR)
    }

    /// Get the keyword limit override, if any.
    ///
    /// `None` means each call site uses its own default.
    pub fn keyword_limit(&self) -> Option<usize> {
        self.workspace
            .as_ref()
            .and_then(|w| w.keyword_limit)
            .or(self.global.keyword_limit)
    }

    /// Get the configured repository roots, if any.
    pub fn roots(&self) -> Option<&[String]> {
        self.workspace
            .as_ref()
            .and_then(|w| w.roots.as_deref())
            .filter(|r| !r.is_empty())
    }

    /// Get the artifact file name overrides.
    pub fn outputs(&self) -> Option<&OutputNames> {
        self.workspace.as_ref().and_then(|w| w.outputs.as_ref())
    }

    /// Get the configured extra stopwords, global extras first.
    pub fn extra_stopwords(&self) -> Vec<String> {
        let mut extras = Vec::new();
        if let Some(global) = &self.global.extra_stopwords {
            extras.extend(global.iter().cloned());
        }
        if let Some(ws) = self
            .workspace
            .as_ref()
            .and_then(|w| w.extra_stopwords.as_ref())
        {
            extras.extend(ws.iter().cloned());
        }
        extras
    }

    /// Build the stopword set: the standard set plus extras from both
    /// scopes.
    pub fn stopwords(&self) -> Stopwords {
        let mut stopwords = Stopwords::standard();
        if let Some(extra) = &self.global.extra_stopwords {
            stopwords.extend(extra);
        }
        if let Some(extra) = self.workspace.as_ref().and_then(|w| w.extra_stopwords.as_ref()) {
            stopwords.extend(extra);
        }
        stopwords
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded workspace config file.
    pub fn workspace_config_loaded_from(&self) -> Option<&Path> {
        self.workspace_path.as_deref()
    }
}
