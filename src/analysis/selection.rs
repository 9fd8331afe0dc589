//! Smart selection for Markdown documents.
//!
//! Two independent builders answer each request: one from the block token
//! stream, one from the heading outline. Their results are concatenated.
//!
//! # Single position
//!
//! Only the first requested position is honoured. Further positions of a
//! multi-cursor request are ignored.

pub mod block;
pub mod heading;
pub mod hierarchy_chain;

use tokio_util::sync::CancellationToken;
use tower_lsp_server::ls_types::{Position, SelectionRange};

use crate::config::WorkspaceSettings;
use crate::document::Document;
use crate::error::{SelectionError, SelectionResult};
use crate::syntax::{MarkdownEngine, OutlineSource, TokenSource};

pub use block::{EndTrimTable, block_selection_range};
pub use heading::heading_selection_ranges;
pub use hierarchy_chain::range_contains;

/// Selection range provider over a token source and an outline source.
#[derive(Debug, Clone)]
pub struct SmartSelect<T, O> {
    tokens: T,
    outline: O,
    end_trim: EndTrimTable,
}

/// The provider used by the server: both sources backed by tree-sitter-md
pub type MarkdownSmartSelect = SmartSelect<MarkdownEngine, MarkdownEngine>;

impl MarkdownSmartSelect {
    pub fn from_settings(settings: &WorkspaceSettings) -> Self {
        let engine = MarkdownEngine::new(settings.parse_timeout);
        SmartSelect::new(engine.clone(), engine, settings.end_trim.clone())
    }
}

impl<T, O> SmartSelect<T, O>
where
    T: TokenSource,
    O: OutlineSource,
{
    pub fn new(tokens: T, outline: O, end_trim: EndTrimTable) -> Self {
        Self {
            tokens,
            outline,
            end_trim,
        }
    }

    /// Compute the selection ranges for `positions[0]`.
    ///
    /// Both sources are read once, concurrently. If `cancel` fires before
    /// they finish, `SelectionError::Cancelled` is returned and nothing else.
    /// A position with no structure yields an empty vector.
    pub async fn provide_selection_ranges(
        &self,
        document: &Document,
        positions: &[Position],
        cancel: &CancellationToken,
    ) -> SelectionResult<Vec<SelectionRange>> {
        let Some(&position) = positions.first() else {
            return Ok(Vec::new());
        };
        if positions.len() > 1 {
            log::debug!(
                target: "mdexpand::selection",
                "Ignoring {} additional positions",
                positions.len() - 1
            );
        }

        let sources = async {
            tokio::try_join!(
                self.outline.outline(document),
                self.tokens.tokens(document)
            )
        };

        let (outline, tokens) = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(SelectionError::Cancelled),
            result = sources => result?,
        };

        let headings = heading_selection_ranges(document, &outline, position);
        let block = block_selection_range(&tokens, position, &self.end_trim);

        log::debug!(
            target: "mdexpand::selection",
            "Line {}: {} heading ranges, block range: {}",
            position.line,
            headings.len(),
            block.is_some()
        );

        Ok(merge_ranges(headings, block))
    }
}

/// Heading ranges first, then the block range; empty results leave no gap.
pub fn merge_ranges(
    headings: Vec<SelectionRange>,
    block: Option<SelectionRange>,
) -> Vec<SelectionRange> {
    headings.into_iter().chain(block).collect()
}
