//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`RepoName`] - Validated repository name
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use codexweave::core::types::RepoName;
//!
//! let name = RepoName::new("garden-flame-kodex").unwrap();
//! assert_eq!(name.as_str(), "garden-flame-kodex");
//!
//! assert!(RepoName::new("").is_err());
//! assert!(RepoName::new("a/b").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid repository name: {0}")]
    InvalidRepoName(String),
}

/// A validated repository name.
///
/// Repository names identify one scanned repository in signals, the concept
/// index, and emitted manifests. Rules:
/// - Cannot be empty
/// - Cannot start with `.`
/// - Cannot contain path separators (`/` or `\`)
/// - Cannot contain whitespace or ASCII control characters
///
/// # Example
///
/// ```
/// use codexweave::core::types::RepoName;
///
/// let name = RepoName::new("tyme-core").unwrap();
/// assert_eq!(name.as_str(), "tyme-core");
///
/// assert!(RepoName::new(".hidden").is_err());
/// assert!(RepoName::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepoName(String);

impl RepoName {
    /// Create a new validated repository name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidRepoName` if the name violates the rules above.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// Validate a repository name.
    fn validate(name: &str) -> Result<(), TypeError> {
        if name.is_empty() {
            return Err(TypeError::InvalidRepoName(
                "repository name cannot be empty".into(),
            ));
        }

        if name.starts_with('.') {
            return Err(TypeError::InvalidRepoName(
                "repository name cannot start with '.'".into(),
            ));
        }

        for c in name.chars() {
            if c == '/' || c == '\\' {
                return Err(TypeError::InvalidRepoName(
                    "repository name cannot contain path separators".into(),
                ));
            }
            if c.is_whitespace() {
                return Err(TypeError::InvalidRepoName(
                    "repository name cannot contain whitespace".into(),
                ));
            }
            if c.is_ascii_control() {
                return Err(TypeError::InvalidRepoName(
                    "repository name cannot contain control characters".into(),
                ));
            }
        }

        Ok(())
    }

    /// Get the repository name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RepoName {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepoName> for String {
    fn from(value: RepoName) -> Self {
        value.0
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
