//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$CODEXWEAVE_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/codexweave/config.toml`
//! 3. `~/.codexweave/config.toml` (canonical write location)
//!
//! # Workspace Config
//!
//! Located at `codexweave.toml` in the workspace root.
//!
//! # Validation
//!
//! Config values are validated after parsing to ensure they conform to
//! expected formats (e.g., a keyword limit of zero is rejected).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// org = "sovereign-codex"
/// keyword_limit = 12
/// extra_stopwords = ["harmonic", "sovereign"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Extra words excluded from keyword extraction
    pub extra_stopwords: Option<Vec<String>>,

    /// Keyword limit override for scans
    pub keyword_limit: Option<usize>,

    /// Default organization name
    pub org: Option<String>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_keyword_limit(self.keyword_limit)?;
        validate_org(self.org.as_deref())?;
        Ok(())
    }
}

/// Workspace configuration.
///
/// # Example
///
/// ```toml
/// org = "sovereign-codex"
/// chronicle_dir = "chronicle"
/// roots = ["branches/garden-flame", "branches/tyme-core"]
///
/// [outputs]
/// kernel = "codex_kernel.md"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct WorkspaceConfig {
    /// Output directory for chronicle artifacts (default: "chronicle")
    pub chronicle_dir: Option<String>,

    /// Extra words excluded from keyword extraction
    pub extra_stopwords: Option<Vec<String>>,

    /// Keyword limit override for scans
    pub keyword_limit: Option<usize>,

    /// Organization name override
    pub org: Option<String>,

    /// Artifact file name overrides
    pub outputs: Option<OutputNames>,

    /// Repository roots to scan (relative to the workspace root)
    pub roots: Option<Vec<String>>,
}

impl WorkspaceConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_keyword_limit(self.keyword_limit)?;
        validate_org(self.org.as_deref())?;

        if let Some(dir) = &self.chronicle_dir {
            if dir.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "chronicle_dir cannot be empty".to_string(),
                ));
            }
        }

        if let Some(outputs) = &self.outputs {
            outputs.validate()?;
        }

        Ok(())
    }
}

/// Artifact file names within the chronicle directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputNames {
    /// Engine expansion manifest (default: "engine_expansion.json")
    pub expansion: Option<String>,

    /// Kernel report (default: "codex_kernel.md")
    pub kernel: Option<String>,

    /// Intelligence lattice manifest (default: "intelligence_lattice.json")
    pub lattice: Option<String>,

    /// Records artifact input (default: "repo_records.json")
    pub records: Option<String>,

    /// Archivist timeline (default: "archivist_timeline.json")
    pub timeline: Option<String>,
}

impl OutputNames {
    /// Validate the output file names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("outputs.expansion", &self.expansion),
            ("outputs.kernel", &self.kernel),
            ("outputs.lattice", &self.lattice),
            ("outputs.records", &self.records),
            ("outputs.timeline", &self.timeline),
        ] {
            if let Some(name) = value {
                if name.is_empty() || name.contains('/') || name.contains('\\') {
                    return Err(ConfigError::InvalidValue(format!(
                        "{field} must be a bare file name, got '{name}'"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn validate_keyword_limit(limit: Option<usize>) -> Result<(), ConfigError> {
    if limit == Some(0) {
        return Err(ConfigError::InvalidValue(
            "keyword_limit must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_org(org: Option<&str>) -> Result<(), ConfigError> {
    if let Some(org) = org {
        if org.is_empty() {
            return Err(ConfigError::InvalidValue("org cannot be empty".to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod global_config {
        use super::*;

        #[test]
        fn defaults() {
            let config = GlobalConfig::default();
            assert!(config.org.is_none());
            assert!(config.keyword_limit.is_none());
            assert!(config.extra_stopwords.is_none());
        }

        #[test]
        fn zero_keyword_limit_rejected() {
            let config = GlobalConfig {
                keyword_limit: Some(0),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn empty_org_rejected() {
            let config = GlobalConfig {
                org: Some(String::new()),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn roundtrip() {
            let config = GlobalConfig {
                extra_stopwords: Some(vec!["harmonic".to_string()]),
                keyword_limit: Some(10),
                org: Some("sovereign-codex".to_string()),
            };

            let toml = toml::to_string_pretty(&config).unwrap();
            let parsed: GlobalConfig = toml::from_str(&toml).unwrap();
            assert_eq!(config, parsed);
        }
    }

    mod workspace_config {
        use super::*;

        #[test]
        fn empty_chronicle_dir_rejected() {
            let config = WorkspaceConfig {
                chronicle_dir: Some(String::new()),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn output_name_with_separator_rejected() {
            let config = WorkspaceConfig {
                outputs: Some(OutputNames {
                    kernel: Some("nested/kernel.md".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn roundtrip() {
            let config = WorkspaceConfig {
                chronicle_dir: Some("chronicle".to_string()),
                extra_stopwords: None,
                keyword_limit: Some(8),
                org: Some("sovereign-codex".to_string()),
                outputs: Some(OutputNames {
                    kernel: Some("kernel.md".to_string()),
                    ..Default::default()
                }),
                roots: Some(vec!["branches/garden".to_string()]),
            };

            let toml = toml::to_string_pretty(&config).unwrap();
            let parsed: WorkspaceConfig = toml::from_str(&toml).unwrap();
            assert_eq!(config, parsed);
        }

        #[test]
        fn reject_unknown_fields() {
            let toml = r#"
                org = "x"
                unknown_field = true
            "#;

            let result: Result<WorkspaceConfig, _> = toml::from_str(toml);
            assert!(result.is_err());
        }
    }
}
