//! Selection ranges from the block token stream.

use std::collections::{BTreeMap, HashMap};

use tower_lsp_server::ls_types::{Position, Range, SelectionRange};

use super::hierarchy_chain::range_contains;
use crate::syntax::{LineSpan, StructuralToken, TokenKind};

/// Lines to cut from the end of a token's span, per token type.
///
/// List containers report one line past their visible content; trimming
/// keeps their range off the first line of whatever follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndTrimTable {
    trims: HashMap<TokenKind, u32>,
}

impl Default for EndTrimTable {
    fn default() -> Self {
        Self::empty().with_trim(TokenKind::BulletListOpen, 1)
    }
}

impl EndTrimTable {
    /// A table that trims nothing
    pub fn empty() -> Self {
        Self {
            trims: HashMap::new(),
        }
    }

    pub fn with_trim(mut self, kind: TokenKind, lines: u32) -> Self {
        self.set(kind, lines);
        self
    }

    /// Set the trim for `kind`.
    ///
    /// A trim taller than a span clamps the range end to the span's start
    /// line. The range never inverts, so a start/end swap never happens.
    pub fn set(&mut self, kind: TokenKind, lines: u32) {
        self.trims.insert(kind, lines);
    }

    /// Trim for `kind`, zero when the type has no rule
    pub fn trim_for(&self, kind: &TokenKind) -> u32 {
        self.trims.get(kind).copied().unwrap_or(0)
    }

    /// Build a table from token type names
    pub fn from_names(names: &BTreeMap<String, u32>) -> Self {
        names
            .iter()
            .fold(Self::empty(), |table, (name, lines)| {
                table.with_trim(TokenKind::from(name.as_str()), *lines)
            })
    }

    /// The table keyed by token type names
    pub fn to_names(&self) -> BTreeMap<String, u32> {
        self.trims
            .iter()
            .map(|(kind, lines)| (kind.as_str().to_string(), *lines))
            .collect()
    }
}

/// Build the block selection range for the cursor line.
///
/// The last token containing the cursor line is the focus block; the
/// remaining containing tokens are candidates in document order. Only the
/// first candidate is returned. It gets the focus range as parent when the
/// focus range contains it, and stands alone otherwise. Returns `None` when
/// fewer than two tokens contain the cursor line.
pub fn block_selection_range(
    tokens: &[StructuralToken],
    position: Position,
    end_trim: &EndTrimTable,
) -> Option<SelectionRange> {
    let line = position.line;
    let mut nearby: Vec<(&TokenKind, LineSpan)> = tokens
        .iter()
        .filter(|token| token.kind != TokenKind::HeadingOpen)
        .filter_map(|token| token.line_span.map(|span| (&token.kind, span)))
        .filter(|(_, span)| span.contains_line(line))
        .collect();

    let (focus_kind, focus_span) = nearby.pop()?;
    let focus = span_range(focus_span, 0);

    log::debug!(
        target: "mdexpand::selection",
        "Block focus at line {}: {} {:?} with {} candidates",
        line,
        focus_kind,
        focus_span,
        nearby.len()
    );

    nearby
        .into_iter()
        .map(|(kind, span)| {
            let range = span_range(span, end_trim.trim_for(kind));
            let parent = range_contains(&focus, &range).then(|| {
                Box::new(SelectionRange {
                    range: focus,
                    parent: None,
                })
            });
            SelectionRange { range, parent }
        })
        .next()
}

/// Whole-line range of a span, both ends at column 0. The trim never moves
/// the end above the start line.
fn span_range(span: LineSpan, trim: u32) -> Range {
    let end = span.end.saturating_sub(trim).max(span.start);
    Range::new(Position::new(span.start, 0), Position::new(end, 0))
}
