//! Signal harvesting.
//!
//! Everything that turns repository documentation and metadata into
//! [`RepositorySignal`] values: heading extraction, keyword ranking, the
//! shared stopword set, and the scanners that walk records or filesystem
//! roots.

pub mod extract;
pub mod scan;
pub mod stopwords;

pub use scan::{RepoMetadata, RepositorySignal, ScanError};
pub use stopwords::Stopwords;
