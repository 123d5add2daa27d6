//! signal::extract
//!
//! Text signal extraction: Markdown headings and frequency-ranked keywords.
//!
//! # Contract
//!
//! - Heading extraction preserves document order and never errors; empty or
//!   missing text yields an empty list.
//! - Keyword extraction tokenizes each fragment, lowercases tokens, drops
//!   stopwords, and ranks the remainder by descending frequency. Ties break
//!   by first occurrence across the fragment sequence. The result is
//!   deduplicated and capped at the caller's limit.
//!
//! # Token rule
//!
//! A token is a maximal run that starts with an ASCII letter and continues
//! with ASCII letters, digits, or hyphens. Runs shorter than
//! [`MIN_TOKEN_LEN`] are discarded.

use std::collections::HashMap;

use super::stopwords::Stopwords;

/// Minimum token length for keyword candidates.
pub const MIN_TOKEN_LEN: usize = 4;

/// Default keyword limit when scanning documentation text alone.
pub const DOC_KEYWORD_LIMIT: usize = 12;

/// Default keyword limit when metadata fragments are merged in.
pub const RECORD_KEYWORD_LIMIT: usize = 8;

/// Extract Markdown headings from a block of text.
///
/// A heading is any line whose left-trimmed form starts with `#`. The
/// leading run of `#` markers and whitespace, in any interleaving, is
/// stripped along with trailing whitespace; lines that become empty are
/// discarded.
///
/// # Example
///
/// ```
/// use codexweave::signal::extract::headings;
///
/// let text = "# Title\nbody\n  ## Sub ##ok\n#\n";
/// assert_eq!(headings(text), vec!["Title", "Sub ##ok"]);
/// ```
pub fn headings(text: &str) -> Vec<String> {
    let mut result = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        if !trimmed.starts_with('#') {
            continue;
        }
        let title = trimmed
            .trim_start_matches(|c: char| c == '#' || c.is_whitespace())
            .trim_end();
        if !title.is_empty() {
            result.push(title.to_string());
        }
    }
    result
}

/// Extract the `limit` highest-frequency keywords from a sequence of text
/// fragments.
///
/// Frequency counts span all fragments. Ties break by first occurrence, so
/// the result is deterministic for a given fragment order.
pub fn keywords<'a, I>(fragments: I, stopwords: &Stopwords, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    // token -> (count, index of first occurrence)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut next_index = 0usize;

    for fragment in fragments {
        for token in tokenize(fragment) {
            if stopwords.contains(&token) {
                continue;
            }
            let entry = counts.entry(token).or_insert_with(|| {
                let index = next_index;
                next_index += 1;
                (0, index)
            });
            entry.0 += 1;
        }
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked.truncate(limit);
    ranked.into_iter().map(|(token, _)| token).collect()
}

/// Tokenize a fragment into lowercased keyword candidates.
///
/// Candidates shorter than [`MIN_TOKEN_LEN`] are dropped here; stopword
/// filtering is the caller's concern.
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if current.is_empty() {
            if c.is_ascii_alphabetic() {
                current.push(c.to_ascii_lowercase());
            }
        } else if c.is_ascii_alphanumeric() || c == '-' {
            current.push(c.to_ascii_lowercase());
        } else {
            if current.len() >= MIN_TOKEN_LEN {
                tokens.push(std::mem::take(&mut current));
            } else {
                current.clear();
            }
        }
    }
    if current.len() >= MIN_TOKEN_LEN {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    mod headings_tests {
        use super::*;

        #[test]
        fn extracts_in_document_order() {
            let text = "# First\ntext\n## Second\n### Third\n";
            assert_eq!(headings(text), vec!["First", "Second", "Third"]);
        }

        #[test]
        fn strips_markers_and_whitespace() {
            assert_eq!(headings("   ##   Indented   "), vec!["Indented"]);
        }

        #[test]
        fn discards_empty_headings() {
            assert_eq!(headings("#\n##   \n# Real"), vec!["Real"]);
        }

        #[test]
        fn empty_text_yields_empty() {
            assert!(headings("").is_empty());
        }

        #[test]
        fn strips_interleaved_marker_runs() {
            assert_eq!(headings("# # Title\n"), vec!["Title"]);
            assert_eq!(headings("## # ## Deep"), vec!["Deep"]);
        }

        #[test]
        fn never_returns_leading_hash() {
            let text = "# One\n#### Deep\n#Tight";
            for heading in headings(text) {
                assert!(!heading.starts_with('#'), "heading kept a '#': {heading}");
            }
        }
    }

    mod keyword_tests {
        use super::*;

        #[test]
        fn ranks_by_frequency() {
            let text = "lattice lattice lattice quill quill garden";
            let result = keywords([text], &Stopwords::standard(), 10);
            assert_eq!(result, vec!["lattice", "quill", "garden"]);
        }

        #[test]
        fn ties_break_by_first_occurrence() {
            let text = "zebra apple zebra apple mango";
            let result = keywords([text], &Stopwords::empty(), 10);
            assert_eq!(result, vec!["zebra", "apple", "mango"]);
        }

        #[test]
        fn drops_short_tokens() {
            let result = keywords(["ab abc abcd"], &Stopwords::empty(), 10);
            assert_eq!(result, vec!["abcd"]);
        }

        #[test]
        fn drops_stopwords() {
            let result = keywords(
                ["readme workflow coherence"],
                &Stopwords::standard(),
                10,
            );
            assert_eq!(result, vec!["coherence"]);
        }

        #[test]
        fn lowercases_tokens() {
            let result = keywords(["Garden GARDEN garden"], &Stopwords::empty(), 10);
            assert_eq!(result, vec!["garden"]);
        }

        #[test]
        fn respects_limit() {
            let result = keywords(["alfa bravo charlie delta"], &Stopwords::empty(), 2);
            assert_eq!(result, vec!["alfa", "bravo"]);
        }

        #[test]
        fn counts_span_fragments() {
            let result = keywords(["quill garden", "garden"], &Stopwords::empty(), 10);
            assert_eq!(result, vec!["garden", "quill"]);
        }

        #[test]
        fn tokens_keep_hyphens_and_digits() {
            let result = keywords(["garden-flame kodex21"], &Stopwords::empty(), 10);
            assert_eq!(result, vec!["garden-flame", "kodex21"]);
        }

        #[test]
        fn token_must_start_with_letter() {
            // The leading digit is skipped; the run restarts at the letter.
            let result = keywords(["9abcd 42"], &Stopwords::empty(), 10);
            assert_eq!(result, vec!["abcd"]);
        }

        #[test]
        fn empty_input_yields_empty() {
            assert!(keywords([""], &Stopwords::standard(), 10).is_empty());
            assert!(keywords([], &Stopwords::standard(), 10).is_empty());
        }

        #[test]
        fn scenario_garden_flame() {
            let text = "# Title\nSome garden-flame text about coherence.";
            let result = keywords([text], &Stopwords::standard(), 10);
            assert!(result.contains(&"garden-flame".to_string()));
            assert!(result.contains(&"coherence".to_string()));
            assert!(!result.contains(&"with".to_string()));
        }
    }
}
