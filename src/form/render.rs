// file: src/form/render.rs
// description: styled text segments describing the results pane
// reference: adapters draw these; the concatenated text equals the saved file

use crate::models::SearchResults;
use crate::parser::find_occurrences;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStyle {
    Plain,
    /// Document header line (`PDF: <name>`).
    Header,
    /// A keyword occurrence inside a paragraph.
    Highlight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSegment {
    pub text: String,
    pub style: SegmentStyle,
}

impl StyledSegment {
    pub fn new(text: impl Into<String>, style: SegmentStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SegmentStyle::Plain)
    }
}

pub fn render_results(results: &SearchResults, keyword: &str) -> Vec<StyledSegment> {
    let mut segments = Vec::new();

    for document in results {
        segments.push(StyledSegment::new(
            format!("\nPDF: {}\n", document.file_name),
            SegmentStyle::Header,
        ));

        for paragraph in &document.paragraphs {
            segments.push(StyledSegment::plain("\n"));
            segments.extend(highlight_paragraph(paragraph, keyword));
            segments.push(StyledSegment::plain("\n"));
        }
    }

    merge_adjacent(segments)
}

/// Splits a paragraph into plain runs and keyword highlights.
pub fn highlight_paragraph(paragraph: &str, keyword: &str) -> Vec<StyledSegment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for span in find_occurrences(paragraph, keyword) {
        if span.start > cursor {
            segments.push(StyledSegment::plain(&paragraph[cursor..span.start]));
        }
        segments.push(StyledSegment::new(
            &paragraph[span.clone()],
            SegmentStyle::Highlight,
        ));
        cursor = span.end;
    }

    if cursor < paragraph.len() {
        segments.push(StyledSegment::plain(&paragraph[cursor..]));
    }

    segments
}

pub fn plain_text(segments: &[StyledSegment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}

fn merge_adjacent(segments: Vec<StyledSegment>) -> Vec<StyledSegment> {
    let mut merged: Vec<StyledSegment> = Vec::with_capacity(segments.len());

    for segment in segments {
        match merged.last_mut() {
            Some(last)
                if last.style == SegmentStyle::Plain && segment.style == SegmentStyle::Plain =>
            {
                last.text.push_str(&segment.text);
            }
            _ => merged.push(segment),
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporter::TextExporter;
    use pretty_assertions::assert_eq;

    fn highlights(segments: &[StyledSegment]) -> Vec<&str> {
        segments
            .iter()
            .filter(|s| s.style == SegmentStyle::Highlight)
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn test_render_scenario() {
        let mut results = SearchResults::new();
        results.insert("a.pdf", vec!["foo BAR baz".to_string()]);

        let segments = render_results(&results, "bar");
        assert_eq!(
            segments,
            vec![
                StyledSegment::new("\nPDF: a.pdf\n", SegmentStyle::Header),
                StyledSegment::plain("\nfoo "),
                StyledSegment::new("BAR", SegmentStyle::Highlight),
                StyledSegment::plain(" baz\n"),
            ]
        );
    }

    #[test]
    fn test_highlight_all_casings() {
        let segments = highlight_paragraph("bar, Bar and BAR", "BAR");
        assert_eq!(highlights(&segments), vec!["bar", "Bar", "BAR"]);
        assert_eq!(plain_text(&segments), "bar, Bar and BAR");
    }

    #[test]
    fn test_highlight_count_and_offsets() {
        let paragraph = "xx key yy KEY zz keykey";
        let segments = highlight_paragraph(paragraph, "key");

        let mut offset = 0;
        let mut spans = Vec::new();
        for segment in &segments {
            if segment.style == SegmentStyle::Highlight {
                spans.push(offset..offset + segment.text.len());
            }
            offset += segment.text.len();
        }

        assert_eq!(spans, vec![3..6, 10..13, 17..20, 20..23]);
        assert!(spans.iter().all(|s| s.len() == 3));
    }

    #[test]
    fn test_highlight_without_keyword_is_plain() {
        let segments = highlight_paragraph("nothing here", "bar");
        assert_eq!(segments, vec![StyledSegment::plain("nothing here")]);
    }

    #[test]
    fn test_rendered_text_matches_saved_file() {
        let mut results = SearchResults::new();
        results.insert("a.pdf", vec!["one bar".to_string(), "bar two".to_string()]);
        results.insert("b.pdf", vec!["BAR".to_string()]);

        let mut saved = Vec::new();
        TextExporter::write_results(&mut saved, &results).unwrap();

        let rendered = plain_text(&render_results(&results, "bar"));
        assert_eq!(rendered, String::from_utf8(saved).unwrap());
    }

    #[test]
    fn test_empty_results_render_nothing() {
        assert!(render_results(&SearchResults::new(), "bar").is_empty());
    }
}
