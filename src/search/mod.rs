//! Phrase search with flexible separators
//!
//! Finds occurrences of a phrase in a text where any run of separator
//! characters (space, tab, newline, carriage return) in the phrase matches
//! any run of separators in the text. Matches are prefix-only: whatever
//! follows a match is not inspected, so partial word matches are allowed.
//! Every match start is marked with a `'@'` in the output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Separator characters that collapse into each other during matching
fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// Check whether `phrase` matches a prefix of `text`, collapsing separator
/// runs on both sides. Matching is byte-wise; a separator in the phrase
/// requires a separator in the text at the same point.
fn matches_at(text: &[u8], phrase: &[u8]) -> bool {
    let mut t = 0;
    let mut p = 0;

    while p < phrase.len() {
        if t >= text.len() {
            return false;
        }

        if is_separator(phrase[p]) {
            if !is_separator(text[t]) {
                return false;
            }
            // A separator run on one side equals any separator run on the other
            while p < phrase.len() && is_separator(phrase[p]) {
                p += 1;
            }
            while t < text.len() && is_separator(text[t]) {
                t += 1;
            }
        } else {
            if phrase[p] != text[t] {
                return false;
            }
            p += 1;
            t += 1;
        }
    }

    true
}

/// Annotate `text` with a `'@'` before every position where `phrase`
/// matches. An empty phrase yields the text unchanged.
///
/// Matching works on bytes, so multi-byte characters compare exactly; a
/// match always begins with the phrase's own first byte, which keeps every
/// insertion point on a character boundary.
pub fn annotate(phrase: &str, text: &str) -> String {
    let phrase = phrase.as_bytes();
    if phrase.is_empty() {
        return text.to_string();
    }

    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if matches_at(&bytes[i..], phrase) {
            out.push('@');
        }
        out.push(c);
    }
    out
}

/// Read an input file whose first line is the phrase and whose remainder is
/// the text; write the annotated text to `output`.
pub fn process_file(input: &Path, output: &Path) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("failed to read input '{}'", input.display()))?;

    let (phrase, text) = match content.split_once('\n') {
        Some((first, rest)) => (first.strip_suffix('\r').unwrap_or(first), rest),
        // No newline: the whole file is the phrase, there is no text
        None => (content.as_str(), ""),
    };
    log::debug!("searching for phrase of {} bytes", phrase.len());

    fs::write(output, annotate(phrase, text))
        .with_context(|| format!("failed to write output '{}'", output.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_match() {
        assert_eq!(annotate("cat", "the cat sat"), "the @cat sat");
    }

    #[test]
    fn test_multiple_matches() {
        assert_eq!(annotate("a", "banana"), "b@an@an@a");
    }

    #[test]
    fn test_partial_word_match_allowed() {
        // The match is prefix-only; "cat" matches inside "catalog"
        assert_eq!(annotate("cat", "catalog"), "@catalog");
    }

    #[test]
    fn test_phrase_spanning_separators() {
        assert_eq!(annotate("big dog", "a big dog ran"), "a @big dog ran");
    }

    #[test]
    fn test_separator_runs_collapse() {
        // One space in the phrase matches a tab plus spaces in the text
        assert_eq!(annotate("big dog", "a big \t dog ran"), "a @big \t dog ran");
        // And a multi-separator phrase matches a single space
        assert_eq!(annotate("big  \t dog", "a big dog ran"), "a @big dog ran");
    }

    #[test]
    fn test_separator_required_where_phrase_has_one() {
        // "A B" must not match "AB"
        assert_eq!(annotate("a b", "ab"), "ab");
    }

    #[test]
    fn test_no_separator_where_phrase_has_none() {
        // "AB" must not match "A B"
        assert_eq!(annotate("ab", "a b"), "a b");
    }

    #[test]
    fn test_phrase_across_newline() {
        assert_eq!(annotate("big dog", "a big\ndog ran"), "a @big\ndog ran");
    }

    #[test]
    fn test_empty_phrase_no_matches() {
        assert_eq!(annotate("", "some text"), "some text");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(annotate("cat", ""), "");
    }

    #[test]
    fn test_phrase_longer_than_text() {
        assert_eq!(annotate("catalog", "cat"), "cat");
    }

    #[test]
    fn test_match_at_end_of_text() {
        assert_eq!(annotate("sat", "the cat sat"), "the cat @sat");
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(annotate("кот", "кот и пёс"), "@кот и пёс");
    }
}
