//! Structural views of a Markdown document: the block token stream and the
//! heading outline consumed by the selection builders.

pub mod markdown;
pub mod outline;
pub mod token;

use std::future::Future;

use crate::document::Document;
use crate::error::SelectionResult;

pub use markdown::MarkdownEngine;
pub use outline::{HeadingEntry, build_outline};
pub use token::{LineSpan, StructuralToken, TokenKind};

/// Produces the block tokens of a document, in document order.
pub trait TokenSource: Send + Sync {
    fn tokens(
        &self,
        document: &Document,
    ) -> impl Future<Output = SelectionResult<Vec<StructuralToken>>> + Send;
}

/// Produces the heading outline of a document, in document order.
pub trait OutlineSource: Send + Sync {
    fn outline(
        &self,
        document: &Document,
    ) -> impl Future<Output = SelectionResult<Vec<HeadingEntry>>> + Send;
}
