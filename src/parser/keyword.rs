// file: src/parser/keyword.rs
// description: case-insensitive keyword filtering and occurrence scanning
// reference: internal search semantics

use crate::parser::paragraphs::split_paragraphs;
use std::ops::Range;

/// Full-string lowercase, shared by filtering and highlighting.
///
/// Context-sensitive mappings apply, so a word-final capital sigma folds to `ς`.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

pub fn contains_keyword(paragraph: &str, keyword: &str) -> bool {
    fold_case(paragraph).contains(&fold_case(keyword))
}

/// Returns, in document order, every paragraph containing the keyword.
///
/// An empty keyword is contained in every paragraph and therefore matches all
/// of them; callers that want to reject it must do so before calling.
pub fn find_paragraphs_with_keyword(text: &str, keyword: &str) -> Vec<String> {
    let needle = fold_case(keyword);

    split_paragraphs(text)
        .into_iter()
        .filter(|paragraph| fold_case(paragraph).contains(&needle))
        .map(str::to_string)
        .collect()
}

/// Byte ranges of case-insensitive keyword occurrences in `text`.
///
/// Scans left to right; after each hit the search resumes at the end of the
/// found span, so occurrences never overlap. An empty keyword has none.
pub fn find_occurrences(text: &str, keyword: &str) -> Vec<Range<usize>> {
    let needle = fold_case(keyword);
    if needle.is_empty() {
        return Vec::new();
    }

    let (folded, origins) = fold_with_origins(text);
    let mut occurrences = Vec::new();
    let mut pos = 0;

    while let Some(found) = folded[pos..].find(&needle) {
        let start = pos + found;
        let end = start + needle.len();

        let original_start = origins[start];
        let original_end = origins[end].max(original_start);
        if original_end > original_start {
            occurrences.push(original_start..original_end);
        }

        pos = end;
    }

    occurrences
}

// origins[i] is the byte offset in `text` of the character that produced byte i
// of the folded string; the trailing entry maps the end of both strings.
// Per-char lowering yields the same byte lengths as `fold_case`: its only
// contextual rule picks between `σ` and `ς`, both two bytes.
fn fold_with_origins(text: &str) -> (String, Vec<usize>) {
    let folded = fold_case(text);
    let mut origins = Vec::with_capacity(folded.len() + 1);

    for (offset, ch) in text.char_indices() {
        let len: usize = ch.to_lowercase().map(char::len_utf8).sum();
        origins.extend(std::iter::repeat_n(offset, len));
    }
    origins.push(text.len());
    debug_assert_eq!(origins.len(), folded.len() + 1);

    (folded, origins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filters_paragraphs_case_insensitively() {
        let text = "Hello world\n\nfoo BAR baz";
        assert_eq!(
            find_paragraphs_with_keyword(text, "bar"),
            vec!["foo BAR baz".to_string()]
        );
    }

    #[test]
    fn test_upper_keyword_matches_all_casings() {
        let text = "a bar\n\nA Bar\n\nA BAR\n\nnone";
        assert_eq!(
            find_paragraphs_with_keyword(text, "BAR"),
            vec!["a bar", "A Bar", "A BAR"]
        );
    }

    #[test]
    fn test_preserves_document_order_without_dedup() {
        let text = "key one\n\nother\n\nkey one\n\nkey two";
        assert_eq!(
            find_paragraphs_with_keyword(text, "key"),
            vec!["key one", "key one", "key two"]
        );
    }

    #[test]
    fn test_inclusion_matches_lowercase_containment() {
        let text = "Straße\n\nSTRASSE\n\nÜber alles\n\nplain";
        for keyword in ["straße", "über", "ÜBER", "plain", "xyz", "e"] {
            let matched = find_paragraphs_with_keyword(text, keyword);
            for paragraph in split_paragraphs(text) {
                let expected = paragraph.to_lowercase().contains(&keyword.to_lowercase());
                assert_eq!(matched.iter().any(|m| m == paragraph), expected);
            }
        }
    }

    #[test]
    fn test_empty_keyword_matches_every_paragraph() {
        let text = "one\n\ntwo\n\n\n\nthree";
        assert_eq!(
            find_paragraphs_with_keyword(text, ""),
            vec!["one", "two", "three"]
        );
        assert!(find_paragraphs_with_keyword("   ", "").is_empty());
    }

    #[test]
    fn test_contains_keyword() {
        assert!(contains_keyword("foo BAR baz", "bar"));
        assert!(contains_keyword("foo bar baz", "BaR"));
        assert!(!contains_keyword("foo baz", "bar"));
    }

    #[test]
    fn test_occurrences_are_non_overlapping() {
        let text = "aaaa";
        assert_eq!(find_occurrences(text, "aa"), vec![0..2, 2..4]);

        let text = "ababab";
        assert_eq!(find_occurrences(text, "aba"), vec![0..3]);
    }

    #[test]
    fn test_occurrences_offsets_and_lengths() {
        let text = "Bar at start, middle bAr, end BAR";
        let spans = find_occurrences(text, "bar");
        assert_eq!(spans.len(), 3);
        for span in &spans {
            assert_eq!(span.len(), 3);
            assert_eq!(text[span.clone()].to_lowercase(), "bar");
        }
        assert_eq!(spans[0], 0..3);
        assert_eq!(spans[2], 30..33);
    }

    #[test]
    fn test_occurrences_map_back_to_original_bytes() {
        let text = "Ünïcode ÜBER über";
        let spans = find_occurrences(text, "über");
        let found: Vec<&str> = spans.iter().map(|s| &text[s.clone()]).collect();
        assert_eq!(found, vec!["ÜBER", "über"]);
    }

    #[test]
    fn test_final_sigma_matches_and_highlights() {
        assert_eq!(find_paragraphs_with_keyword("ΟΔΟΣ", "οδος"), vec!["ΟΔΟΣ"]);
        assert!(contains_keyword("ΟΔΟΣ ΚΑΙ", "οδος"));

        let text = "η ΟΔΟΣ εδώ";
        let found: Vec<&str> = find_occurrences(text, "ΟΔΟΣ")
            .into_iter()
            .map(|s| &text[s])
            .collect();
        assert_eq!(found, vec!["ΟΔΟΣ"]);
    }

    #[test]
    fn test_empty_keyword_has_no_occurrences() {
        assert!(find_occurrences("anything", "").is_empty());
    }

    #[test]
    fn test_no_occurrences() {
        assert!(find_occurrences("nothing here", "bar").is_empty());
    }
}
