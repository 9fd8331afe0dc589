use super::position::compute_line_starts;

/// Line-indexed text of one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    version: Option<i32>,
    /// Byte offset of the first character of every line
    line_starts: Vec<usize>,
}

impl Document {
    /// Create a new document with just text
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = compute_line_starts(&text);
        Self {
            text,
            version: None,
            line_starts,
        }
    }

    /// Create a new document with version
    pub fn with_version(text: impl Into<String>, version: i32) -> Self {
        Self {
            version: Some(version),
            ..Self::new(text)
        }
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the document version
    pub fn version(&self) -> Option<i32> {
        self.version
    }

    /// Replace the text, recomputing the line table
    pub fn set_text(&mut self, text: String, version: Option<i32>) {
        self.line_starts = compute_line_starts(&text);
        self.text = text;
        if version.is_some() {
            self.version = version;
        }
    }

    /// Number of lines. A trailing newline opens one final empty line.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Index of the last line
    pub fn last_line(&self) -> u32 {
        self.line_count().saturating_sub(1) as u32
    }

    /// Text of line `line` without its terminator (`\n` or `\r\n`)
    pub fn line(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line)?;
        let end = match self.line_starts.get(line + 1) {
            Some(next) => next - 1,
            None => self.text.len(),
        };
        let text = &self.text[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Length of a line in UTF-16 code units, the unit of LSP `character`
    pub fn line_len_utf16(&self, line: usize) -> u32 {
        self.line(line)
            .map(|text| text.encode_utf16().count() as u32)
            .unwrap_or(0)
    }

    /// True for blank lines; lines past the end of the document count as blank.
    pub fn is_line_empty_or_whitespace(&self, line: usize) -> bool {
        self.line(line).is_none_or(|text| text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_access() {
        let doc = Document::new("# Title\n\nbody text\n");
        assert_eq!(doc.line_count(), 4);
        assert_eq!(doc.line(0), Some("# Title"));
        assert_eq!(doc.line(1), Some(""));
        assert_eq!(doc.line(2), Some("body text"));
        assert_eq!(doc.line(3), Some(""));
        assert_eq!(doc.line(4), None);
        assert_eq!(doc.last_line(), 3);
    }

    #[test]
    fn test_crlf_lines_are_stripped() {
        let doc = Document::new("a\r\nb\r\n");
        assert_eq!(doc.line(0), Some("a"));
        assert_eq!(doc.line(1), Some("b"));
    }

    #[test]
    fn test_blank_line_detection() {
        let doc = Document::new("text\n   \t\n");
        assert!(!doc.is_line_empty_or_whitespace(0));
        assert!(doc.is_line_empty_or_whitespace(1));
        assert!(doc.is_line_empty_or_whitespace(2));
        assert!(doc.is_line_empty_or_whitespace(99));
    }

    #[test]
    fn test_line_len_counts_utf16_units() {
        // "あ" is one UTF-16 unit, "😀" is two
        let doc = Document::new("あ😀x");
        assert_eq!(doc.line_len_utf16(0), 4);
        assert_eq!(doc.line_len_utf16(1), 0);
    }

    #[test]
    fn test_set_text_keeps_version_when_none() {
        let mut doc = Document::with_version("one", 3);
        doc.set_text("one\ntwo".to_string(), None);
        assert_eq!(doc.version(), Some(3));
        assert_eq!(doc.line_count(), 2);

        doc.set_text("x".to_string(), Some(4));
        assert_eq!(doc.version(), Some(4));
    }
}
