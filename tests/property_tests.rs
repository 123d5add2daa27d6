//! Property-based tests for the extraction and diff core.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use std::collections::BTreeSet;

use proptest::prelude::*;

use codexweave::core::diff::StructuralDiff;
use codexweave::core::types::RepoName;
use codexweave::signal::extract::{headings, keywords, MIN_TOKEN_LEN};
use codexweave::signal::{RepositorySignal, Stopwords};
use codexweave::xref::cross_reference;

/// Strategy for generating flat path lists.
fn path_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,6}(/[a-z]{1,6}){0,2}", 0..20)
}

/// Strategy for generating arbitrary document text.
fn document_text() -> impl Strategy<Value = String> {
    "[ -~\n]{0,400}"
}

/// Strategy for generating valid repository names.
fn repo_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,20}"
}

/// Strategy for generating a signal collection.
fn signal_collection() -> impl Strategy<Value = Vec<RepositorySignal>> {
    prop::collection::vec(
        (
            repo_name(),
            prop::collection::vec("[A-Z][a-z]{1,8}", 0..5),
            prop::collection::vec("[a-z]{4,10}", 0..10),
        ),
        0..6,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .map(|(name, headings, keywords)| RepositorySignal {
                name: RepoName::new(name).unwrap(),
                root: "root".to_string(),
                headings,
                keywords,
            })
            .collect()
    })
}

proptest! {
    /// Diff round-trip: applying added/removed to the previous set yields
    /// the current set, and symmetrically.
    #[test]
    fn diff_round_trips(previous in path_list(), current in path_list()) {
        let diff = StructuralDiff::compute(&previous, &current);

        let previous_set: BTreeSet<String> = previous.iter().cloned().collect();
        let current_set: BTreeSet<String> = current.iter().cloned().collect();

        let mut rebuilt: BTreeSet<String> = previous_set.clone();
        for removed in &diff.removed {
            rebuilt.remove(removed);
        }
        rebuilt.extend(diff.added.iter().cloned());
        prop_assert_eq!(&rebuilt, &current_set);

        let mut reverted: BTreeSet<String> = current_set.clone();
        for added in &diff.added {
            reverted.remove(added);
        }
        reverted.extend(diff.removed.iter().cloned());
        prop_assert_eq!(&reverted, &previous_set);
    }

    /// Diff output is sorted and duplicate-free.
    #[test]
    fn diff_output_sorted(previous in path_list(), current in path_list()) {
        let diff = StructuralDiff::compute(&previous, &current);
        for list in [&diff.added, &diff.removed] {
            let mut sorted = list.clone();
            sorted.sort();
            sorted.dedup();
            prop_assert_eq!(&sorted, list);
        }
    }

    /// Identical inputs always yield identical output.
    #[test]
    fn diff_is_stable(previous in path_list(), current in path_list()) {
        let first = StructuralDiff::compute(&previous, &current);
        let second = StructuralDiff::compute(&previous, &current);
        prop_assert_eq!(first, second);
    }

    /// Headings never keep a leading '#'.
    #[test]
    fn headings_never_start_with_hash(text in document_text()) {
        for heading in headings(&text) {
            prop_assert!(!heading.starts_with('#'));
            prop_assert!(!heading.is_empty());
        }
    }

    /// Keywords are never short or stopworded, and never exceed the limit.
    #[test]
    fn keywords_respect_token_rules(text in document_text(), limit in 1usize..16) {
        let stopwords = Stopwords::standard();
        let result = keywords([text.as_str()], &stopwords, limit);
        prop_assert!(result.len() <= limit);
        for keyword in &result {
            prop_assert!(keyword.len() >= MIN_TOKEN_LEN);
            prop_assert!(!stopwords.contains(keyword));
            prop_assert_eq!(keyword.to_lowercase(), keyword.clone());
        }
    }

    /// Keyword lists are deduplicated.
    #[test]
    fn keywords_are_distinct(text in document_text()) {
        let result = keywords([text.as_str()], &Stopwords::standard(), 32);
        let unique: BTreeSet<&String> = result.iter().collect();
        prop_assert_eq!(unique.len(), result.len());
    }

    /// Cross-referencing the same ordered collection twice is idempotent.
    #[test]
    fn cross_reference_idempotent(signals in signal_collection()) {
        let first = cross_reference(&signals);
        let second = cross_reference(&signals);
        prop_assert_eq!(first, second);
    }

    /// Every shared concept names at least two distinct repositories.
    #[test]
    fn shared_concepts_have_two_members(signals in signal_collection()) {
        let refs = cross_reference(&signals);
        for members in refs.shared_concepts.values() {
            let distinct: BTreeSet<&String> = members.iter().collect();
            prop_assert!(distinct.len() >= 2);
        }
    }

    /// Valid repository names round-trip through serde.
    #[test]
    fn repo_name_serde_roundtrip(name in repo_name()) {
        let repo = RepoName::new(&name).unwrap();
        let json = serde_json::to_string(&repo).unwrap();
        let parsed: RepoName = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(repo, parsed);
    }
}
