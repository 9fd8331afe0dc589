//! Heading outline: one entry per heading with the range of its section.

use tower_lsp_server::ls_types::{Position, Range};

use super::token::{StructuralToken, TokenKind};
use crate::document::Document;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEntry {
    /// Line of the heading itself
    pub line: u32,
    /// 1 to 6
    pub level: u8,
    pub text: String,
    /// From the heading line to the end of its section
    pub range: Range,
}

/// Build the outline from the `heading_open` tokens of a parse.
///
/// A section runs until the line before the next heading of the same or a
/// higher level, or to the end of the document.
pub fn build_outline(document: &Document, tokens: &[StructuralToken]) -> Vec<HeadingEntry> {
    let headings: Vec<(u32, u8)> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::HeadingOpen)
        .filter_map(|token| {
            let span = token.line_span?;
            Some((span.start, heading_level(&token.markup)))
        })
        .collect();

    headings
        .iter()
        .enumerate()
        .map(|(index, &(line, level))| {
            let end_line = headings[index + 1..]
                .iter()
                .find(|(_, next_level)| *next_level <= level)
                .map(|(next_line, _)| next_line.saturating_sub(1))
                .unwrap_or_else(|| document.last_line())
                .max(line);

            HeadingEntry {
                line,
                level,
                text: heading_text(document.line(line as usize).unwrap_or_default()),
                range: Range::new(
                    Position::new(line, 0),
                    Position::new(end_line, document.line_len_utf16(end_line as usize)),
                ),
            }
        })
        .collect()
}

fn heading_level(markup: &str) -> u8 {
    match markup {
        "-" => 2,
        hashes if hashes.starts_with('#') => hashes.len().min(6) as u8,
        _ => 1,
    }
}

/// Heading text without the `#` markers and the optional closing sequence
fn heading_text(line: &str) -> String {
    let trimmed = line.trim();
    let Some(rest) = trimmed.strip_prefix('#') else {
        return trimmed.to_string();
    };
    rest.trim_start_matches('#')
        .trim_end_matches('#')
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(line: u32, markup: &str) -> StructuralToken {
        StructuralToken::new(TokenKind::HeadingOpen, line, line + 1).with_markup(markup)
    }

    #[test]
    fn test_sections_end_before_next_sibling() {
        let document = Document::new("# A\ntext\n## B\nmore\n# C\nend");
        let tokens = vec![
            heading(0, "#"),
            StructuralToken::new(TokenKind::ParagraphOpen, 1, 2),
            heading(2, "##"),
            heading(4, "#"),
        ];

        let outline = build_outline(&document, &tokens);
        let summary: Vec<_> = outline
            .iter()
            .map(|entry| (entry.line, entry.level, entry.range.end.line))
            .collect();

        assert_eq!(summary, vec![(0, 1, 3), (2, 2, 3), (4, 1, 5)]);
        assert_eq!(outline[0].range.start, Position::new(0, 0));
        // "more" and "end" are the last lines of their sections
        assert_eq!(outline[0].range.end.character, 4);
        assert_eq!(outline[2].range.end.character, 3);
    }

    #[test]
    fn test_last_section_runs_to_document_end() {
        let document = Document::new("# Only\n\nbody\n");
        let outline = build_outline(&document, &[heading(0, "#")]);

        assert_eq!(outline[0].range.end, Position::new(3, 0));
    }

    #[test]
    fn test_adjacent_headings_never_end_before_start() {
        let document = Document::new("# A\n# B\n");
        let outline = build_outline(&document, &[heading(0, "#"), heading(1, "#")]);

        assert_eq!(outline[0].range.end.line, 0);
        assert_eq!(outline[1].range.start.line, 1);
    }

    #[test]
    fn test_heading_text_strips_markers() {
        assert_eq!(heading_text("## Install ##"), "Install");
        assert_eq!(heading_text("#   Spaced   "), "Spaced");
        assert_eq!(heading_text("Setext title"), "Setext title");
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading_level("#"), 1);
        assert_eq!(heading_level("###"), 3);
        assert_eq!(heading_level("="), 1);
        assert_eq!(heading_level("-"), 2);
    }

    #[test]
    fn test_tokens_without_span_are_skipped() {
        let document = Document::new("# A\n");
        let outline = build_outline(&document, &[StructuralToken::without_span("heading_open")]);
        assert!(outline.is_empty());
    }
}
