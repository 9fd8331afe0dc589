//! Text synchronization for LSP didChange handling.
//!
//! The server advertises incremental sync, but clients may still send whole
//! documents; both kinds of change event are applied in order.

use tower_lsp_server::ls_types::TextDocumentContentChangeEvent;

use crate::document::PositionMapper;

/// Apply content changes to `old_text` and return the new text.
///
/// Ranged events replace their range (positions are clamped to the text);
/// events without a range replace the whole document.
pub(crate) fn apply_content_changes(
    old_text: &str,
    content_changes: Vec<TextDocumentContentChangeEvent>,
) -> String {
    let mut text = old_text.to_string();

    for change in content_changes {
        match change.range {
            Some(range) => {
                let mapper = PositionMapper::new(&text);
                let start = mapper.position_to_byte(range.start).unwrap_or(text.len());
                let end = mapper
                    .position_to_byte(range.end)
                    .unwrap_or(text.len())
                    .max(start);
                text.replace_range(start..end, &change.text);
            }
            None => text = change.text,
        }
    }

    text
}
