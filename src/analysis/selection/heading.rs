//! Selection ranges for heading sections.

use tower_lsp_server::ls_types::{Position, Range, SelectionRange};

use crate::document::Document;
use crate::syntax::HeadingEntry;

/// Build the section ranges of the headings that sit on the cursor line.
///
/// Only an exact match on the heading line counts; a cursor inside a
/// section body yields nothing here. Results have no parent.
pub fn heading_selection_ranges(
    document: &Document,
    outline: &[HeadingEntry],
    position: Position,
) -> Vec<SelectionRange> {
    outline
        .iter()
        .filter(|entry| entry.line == position.line)
        .map(|entry| SelectionRange {
            range: section_range(document, entry),
            parent: None,
        })
        .collect()
}

/// The section range minus one trailing blank line, if the section has
/// content before it.
fn section_range(document: &Document, entry: &HeadingEntry) -> Range {
    let mut end_line = entry.range.end.line;
    if document.is_line_empty_or_whitespace(end_line as usize) && end_line > entry.line {
        end_line -= 1;
    }
    Range::new(
        entry.range.start,
        Position::new(end_line, entry.range.end.character),
    )
}
