//! Emphasis markup understood by the document assembler.
//!
//! Generated narrative uses double-asterisk markers only:
//! - a paragraph that is entirely `**...**` is a bold sub-heading,
//! - embedded `**` pairs toggle bold for the enclosed run,
//! - an odd marker count leaves the trailing segment un-emphasized
//!   (an unmatched marker never bleeds bold to the end of the line).

/// One run of text within a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
}

/// A parsed narrative paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupParagraph {
    /// Paragraph consisting solely of `**...**`, rendered as a bold
    /// heading-style paragraph.
    Heading(String),
    /// Ordinary paragraph split into alternating plain/bold runs.
    Runs(Vec<TextRun>),
}

/// Parses one line of narrative. Blank lines yield `None`.
pub fn parse_paragraph(line: &str) -> Option<MarkupParagraph> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    if line.len() > 4 && line.starts_with("**") && line.ends_with("**") {
        let inner = line.trim_matches('*').trim();
        // "**bold** and **bold**" also starts and ends with markers but is
        // not a heading; only promote when no markers remain inside.
        if !inner.contains("**") {
            return Some(MarkupParagraph::Heading(inner.to_string()));
        }
    }

    Some(MarkupParagraph::Runs(split_emphasis(line)))
}

/// Splits a paragraph on `**` markers into alternating runs, first segment
/// plain. With an odd number of markers the segment after the unmatched
/// marker stays plain.
pub fn split_emphasis(text: &str) -> Vec<TextRun> {
    let parts: Vec<&str> = text.split("**").collect();
    // parts.len() - 1 markers; an even parts count means an odd marker count.
    let unmatched_tail = parts.len() % 2 == 0;
    let last = parts.len() - 1;

    parts
        .iter()
        .enumerate()
        .filter(|(_, part)| !part.is_empty())
        .map(|(i, part)| TextRun {
            text: part.to_string(),
            bold: i % 2 == 1 && !(unmatched_tail && i == last),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(pairs: &[(&str, bool)]) -> Vec<TextRun> {
        pairs
            .iter()
            .map(|(text, bold)| TextRun {
                text: text.to_string(),
                bold: *bold,
            })
            .collect()
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(parse_paragraph(""), None);
        assert_eq!(parse_paragraph("   \t "), None);
    }

    #[test]
    fn test_pure_bold_paragraph_is_heading() {
        assert_eq!(
            parse_paragraph("**Market Overview:**"),
            Some(MarkupParagraph::Heading("Market Overview:".to_string()))
        );
    }

    #[test]
    fn test_plain_paragraph_is_single_run() {
        assert_eq!(
            parse_paragraph("Just a sentence."),
            Some(MarkupParagraph::Runs(runs(&[("Just a sentence.", false)])))
        );
    }

    #[test]
    fn test_embedded_emphasis_alternates() {
        assert_eq!(
            split_emphasis("growth of **12%** over **five** years"),
            runs(&[
                ("growth of ", false),
                ("12%", true),
                (" over ", false),
                ("five", true),
                (" years", false),
            ])
        );
    }

    #[test]
    fn test_bold_bracketed_line_is_not_heading() {
        // starts and ends with markers but contains two separate pairs
        let parsed = parse_paragraph("**a** plain **b**");
        assert_eq!(
            parsed,
            Some(MarkupParagraph::Runs(runs(&[
                ("a", true),
                (" plain ", false),
                ("b", true),
            ])))
        );
    }

    #[test]
    fn test_unmatched_marker_leaves_tail_plain() {
        assert_eq!(
            split_emphasis("before **bold** after ** trailing"),
            runs(&[
                ("before ", false),
                ("bold", true),
                (" after ", false),
                (" trailing", false),
            ])
        );
    }

    #[test]
    fn test_single_marker_is_all_plain() {
        assert_eq!(
            split_emphasis("odd ** marker"),
            runs(&[("odd ", false), (" marker", false)])
        );
    }
}
