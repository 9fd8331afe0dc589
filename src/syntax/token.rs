//! Structural tokens: a block type tag plus the lines it covers.

use std::fmt;

/// Block token types, named after their markdown-it counterparts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    HeadingOpen,
    ParagraphOpen,
    BulletListOpen,
    OrderedListOpen,
    ListItemOpen,
    BlockquoteOpen,
    Fence,
    CodeBlock,
    TableOpen,
    HtmlBlock,
    Hr,
    Other(String),
}

impl TokenKind {
    pub fn as_str(&self) -> &str {
        match self {
            TokenKind::HeadingOpen => "heading_open",
            TokenKind::ParagraphOpen => "paragraph_open",
            TokenKind::BulletListOpen => "bullet_list_open",
            TokenKind::OrderedListOpen => "ordered_list_open",
            TokenKind::ListItemOpen => "list_item_open",
            TokenKind::BlockquoteOpen => "blockquote_open",
            TokenKind::Fence => "fence",
            TokenKind::CodeBlock => "code_block",
            TokenKind::TableOpen => "table_open",
            TokenKind::HtmlBlock => "html_block",
            TokenKind::Hr => "hr",
            TokenKind::Other(name) => name,
        }
    }
}

impl From<&str> for TokenKind {
    fn from(name: &str) -> Self {
        match name {
            "heading_open" => TokenKind::HeadingOpen,
            "paragraph_open" => TokenKind::ParagraphOpen,
            "bullet_list_open" => TokenKind::BulletListOpen,
            "ordered_list_open" => TokenKind::OrderedListOpen,
            "list_item_open" => TokenKind::ListItemOpen,
            "blockquote_open" => TokenKind::BlockquoteOpen,
            "fence" => TokenKind::Fence,
            "code_block" => TokenKind::CodeBlock,
            "table_open" => TokenKind::TableOpen,
            "html_block" => TokenKind::HtmlBlock,
            "hr" => TokenKind::Hr,
            other => TokenKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive `[start, end]` line interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    pub start: u32,
    pub end: u32,
}

impl LineSpan {
    /// Returns `None` when `end` precedes `start`
    pub fn new(start: u32, end: u32) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn contains_line(&self, line: u32) -> bool {
        self.start <= line && line <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralToken {
    pub kind: TokenKind,
    /// `None` for tokens without a line extent
    pub line_span: Option<LineSpan>,
    /// Heading marker: the `#` run, or `=` / `-` for setext underlines.
    /// Empty for every other block.
    pub markup: String,
}

impl StructuralToken {
    pub fn new(kind: impl Into<TokenKind>, start: u32, end: u32) -> Self {
        Self {
            kind: kind.into(),
            line_span: LineSpan::new(start, end),
            markup: String::new(),
        }
    }

    pub fn without_span(kind: impl Into<TokenKind>) -> Self {
        Self {
            kind: kind.into(),
            line_span: None,
            markup: String::new(),
        }
    }

    pub fn with_markup(mut self, markup: impl Into<String>) -> Self {
        self.markup = markup.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip_through_str() {
        for kind in [
            TokenKind::HeadingOpen,
            TokenKind::BulletListOpen,
            TokenKind::ListItemOpen,
            TokenKind::Fence,
        ] {
            assert_eq!(TokenKind::from(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_unknown_kind_is_preserved() {
        let kind = TokenKind::from("dl_open");
        assert_eq!(kind, TokenKind::Other("dl_open".to_string()));
        assert_eq!(kind.to_string(), "dl_open");
    }

    #[test]
    fn test_line_span_contains_is_inclusive() {
        let span = LineSpan::new(3, 6).unwrap();
        assert!(!span.contains_line(2));
        assert!(span.contains_line(3));
        assert!(span.contains_line(6));
        assert!(!span.contains_line(7));
    }

    #[test]
    fn test_reversed_span_is_absent() {
        assert_eq!(LineSpan::new(5, 4), None);
        assert_eq!(StructuralToken::new("paragraph_open", 5, 4).line_span, None);
    }

    #[test]
    fn test_single_line_span() {
        let token = StructuralToken::new("hr", 2, 2);
        assert_eq!(token.line_span, Some(LineSpan { start: 2, end: 2 }));
    }
}
