//! signal::stopwords
//!
//! The shared stopword set applied during keyword extraction.
//!
//! One set serves every call site. Callers that need domain-specific
//! additions extend it from configuration rather than declaring their own.

use std::collections::BTreeSet;

/// Connective English words plus domain-generic terms that carry no signal.
///
/// The exact membership is a tuning constant, not a semantic contract.
const STANDARD_STOPWORDS: &[&str] = &[
    "the",
    "and",
    "with",
    "from",
    "that",
    "this",
    "into",
    "for",
    "your",
    "repos",
    "repo",
    "code",
    "data",
    "github",
    "readme",
    "docs",
    "scrolls",
    "workflow",
    "workflows",
    "design",
    "lineage",
    "architecture",
    "patterns",
    "concepts",
    "scroll",
    "living",
    "kernel",
    "tyme",
    "core",
];

/// A set of tokens excluded from keyword extraction.
///
/// Membership tests are case-sensitive against already-lowercased tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwords {
    words: BTreeSet<String>,
}

impl Stopwords {
    /// The standard stopword set.
    pub fn standard() -> Self {
        Self {
            words: STANDARD_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// An empty stopword set (mostly useful in tests).
    pub fn empty() -> Self {
        Self {
            words: BTreeSet::new(),
        }
    }

    /// Add extra words to the set, lowercasing each.
    pub fn extend<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in extra {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Check whether a (lowercased) token is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_contains_connectives_and_domain_terms() {
        let stopwords = Stopwords::standard();
        assert!(stopwords.contains("with"));
        assert!(stopwords.contains("readme"));
        assert!(stopwords.contains("architecture"));
        assert!(!stopwords.contains("coherence"));
    }

    #[test]
    fn extend_lowercases() {
        let mut stopwords = Stopwords::empty();
        stopwords.extend(["Garden", "FLAME"]);
        assert!(stopwords.contains("garden"));
        assert!(stopwords.contains("flame"));
        assert!(!stopwords.contains("Garden"));
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(Stopwords::default(), Stopwords::standard());
    }
}
