//! Conversion between LSP positions (UTF-16 columns) and byte offsets.

use tower_lsp_server::ls_types::Position;

/// Maps LSP positions onto byte offsets of a text
pub struct PositionMapper<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> PositionMapper<'a> {
    /// Create a new PositionMapper with pre-computed line starts
    pub fn new(text: &'a str) -> Self {
        let line_starts = compute_line_starts(text);
        Self { text, line_starts }
    }

    /// Convert LSP Position to byte offset in the text.
    ///
    /// A column past the end of its line is clamped to the line end.
    /// Returns `None` when the line does not exist.
    pub fn position_to_byte(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;
        let line_start = *self.line_starts.get(line)?;

        // Exclude the terminator, `\r\n` included
        let mut line_end = match self.line_starts.get(line + 1) {
            Some(next) => next - 1,
            None => self.text.len(),
        };
        if self.text[line_start..line_end].ends_with('\r') {
            line_end -= 1;
        }
        let line_text = &self.text[line_start..line_end];

        match convert_utf16_to_byte_in_line(line_text, position.character as usize) {
            Some(byte_offset) => Some(line_start + byte_offset),
            None => Some(line_end),
        }
    }
}

/// Compute line start offsets for efficient position mapping
pub fn compute_line_starts(text: &str) -> Vec<usize> {
    let mut line_starts = vec![0];
    line_starts.extend(
        text.bytes()
            .enumerate()
            .filter(|(_, byte)| *byte == b'\n')
            .map(|(offset, _)| offset + 1),
    );
    line_starts
}

/// Convert UTF-16 position to byte position within a line
/// Returns None if the UTF-16 position is beyond the end of the line
#[inline(always)]
pub fn convert_utf16_to_byte_in_line(line_text: &str, utf16_pos: usize) -> Option<usize> {
    let mut byte_offset = 0;
    let mut utf16_offset = 0;

    for ch in line_text.chars() {
        if utf16_offset >= utf16_pos {
            return Some(byte_offset);
        }
        utf16_offset += ch.len_utf16();
        byte_offset += ch.len_utf8();
    }

    if utf16_offset == utf16_pos {
        Some(byte_offset)
    } else {
        None
    }
}
