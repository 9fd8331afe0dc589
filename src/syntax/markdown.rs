//! Markdown block tokens from the tree-sitter-md block grammar.
//!
//! The tree is walked in pre-order, so tokens come out in the order their
//! blocks open, the same order a markdown-it token stream has.

use std::time::Duration;

use tree_sitter::{Node, Parser};

use super::outline::build_outline;
use super::token::{LineSpan, StructuralToken, TokenKind};
use super::{HeadingEntry, OutlineSource, TokenSource};
use crate::document::Document;
use crate::error::{SelectionError, SelectionResult};

/// Timeout for spawn_blocking parse operations to prevent hangs on pathological inputs.
pub const DEFAULT_PARSE_TIMEOUT: Duration = Duration::from_secs(10);

/// Parses Markdown documents into structural tokens and heading outlines.
///
/// Each call parses from scratch on the blocking thread pool; nothing is
/// cached between calls.
#[derive(Debug, Clone)]
pub struct MarkdownEngine {
    parse_timeout: Duration,
}

impl Default for MarkdownEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PARSE_TIMEOUT)
    }
}

impl MarkdownEngine {
    pub fn new(parse_timeout: Duration) -> Self {
        Self { parse_timeout }
    }

    /// Parse the document off the async runtime, bounded by the parse timeout.
    pub async fn parse(&self, document: &Document) -> SelectionResult<Vec<StructuralToken>> {
        let text = document.text().to_string();
        let len = text.len();
        let timeout = self.parse_timeout;

        let result =
            tokio::time::timeout(timeout, tokio::task::spawn_blocking(move || tokenize(&text)))
                .await;

        match result {
            Ok(Ok(tokens)) => tokens,
            Ok(Err(join_err)) => {
                log::error!("Markdown parse task failed: {}", join_err);
                Err(SelectionError::TaskFailed(join_err.to_string()))
            }
            Err(_elapsed) => {
                log::warn!(
                    "Markdown parse timeout after {:?} ({} bytes)",
                    timeout,
                    len
                );
                Err(SelectionError::ParseTimeout { timeout })
            }
        }
    }
}

impl TokenSource for MarkdownEngine {
    async fn tokens(&self, document: &Document) -> SelectionResult<Vec<StructuralToken>> {
        self.parse(document).await
    }
}

impl OutlineSource for MarkdownEngine {
    async fn outline(&self, document: &Document) -> SelectionResult<Vec<HeadingEntry>> {
        let tokens = self.parse(document).await?;
        Ok(build_outline(document, &tokens))
    }
}

/// Parse `text` synchronously and flatten its block tree into tokens.
pub fn tokenize(text: &str) -> SelectionResult<Vec<StructuralToken>> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_md::LANGUAGE.into())
        .map_err(|e| SelectionError::parse(e.to_string()))?;
    let tree = parser
        .parse(text, None)
        .ok_or_else(|| SelectionError::parse("parser returned no tree"))?;

    let source = text.as_bytes();
    let mut tokens = Vec::new();
    let mut cursor = tree.root_node().walk();

    loop {
        let node = cursor.node();
        if let Some(kind) = token_kind(node) {
            // Headings keep their marker; the outline derives levels from it
            let markup = match kind {
                TokenKind::HeadingOpen => heading_markup(node, source).unwrap_or_default(),
                _ => String::new(),
            };
            tokens.push(StructuralToken {
                kind,
                line_span: line_span(node),
                markup,
            });
        }

        if is_container(node.kind()) && cursor.goto_first_child() {
            continue;
        }

        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return Ok(tokens);
            }
        }
    }
}

/// Blocks whose children can hold further block tokens
fn is_container(kind: &str) -> bool {
    matches!(
        kind,
        "document" | "section" | "list" | "list_item" | "block_quote"
    )
}

fn token_kind(node: Node) -> Option<TokenKind> {
    let kind = match node.kind() {
        "atx_heading" | "setext_heading" => TokenKind::HeadingOpen,
        "paragraph" => TokenKind::ParagraphOpen,
        "list" => match list_marker(node) {
            Some(".") | Some(")") => TokenKind::OrderedListOpen,
            _ => TokenKind::BulletListOpen,
        },
        "list_item" => TokenKind::ListItemOpen,
        "block_quote" => TokenKind::BlockquoteOpen,
        "fenced_code_block" => TokenKind::Fence,
        "indented_code_block" => TokenKind::CodeBlock,
        "pipe_table" => TokenKind::TableOpen,
        "html_block" => TokenKind::HtmlBlock,
        "thematic_break" => TokenKind::Hr,
        _ => return None,
    };
    Some(kind)
}

/// Lines covered by a block, using markdown-it's convention: the end line is
/// the first line after the block, so a block that stops mid-line counts
/// that line as covered.
fn line_span(node: Node) -> Option<LineSpan> {
    let start = node.start_position();
    let end = node.end_position();
    let end_line = if end.column > 0 { end.row + 1 } else { end.row };
    LineSpan::new(start.row as u32, end_line as u32)
}

fn heading_markup(node: Node, source: &[u8]) -> Option<String> {
    let marker = first_child(node, |kind| {
        (kind.starts_with("atx_h") && kind.ends_with("_marker")) || kind.starts_with("setext_h")
    })?;
    match marker.kind() {
        "setext_h1_underline" => Some("=".to_string()),
        "setext_h2_underline" => Some("-".to_string()),
        _ => marker
            .utf8_text(source)
            .ok()
            .map(|text| text.trim().to_string()),
    }
}

/// Marker of the first item of a list
fn list_marker(list: Node) -> Option<&'static str> {
    let item = first_child(list, |kind| kind == "list_item")?;
    item_marker(item)
}

fn item_marker(item: Node) -> Option<&'static str> {
    let mut cursor = item.walk();
    let marker = item
        .children(&mut cursor)
        .find_map(|child| marker_markup(child.kind()));
    marker
}

fn marker_markup(kind: &str) -> Option<&'static str> {
    match kind {
        "list_marker_minus" => Some("-"),
        "list_marker_plus" => Some("+"),
        "list_marker_star" => Some("*"),
        "list_marker_dot" => Some("."),
        "list_marker_parenthesis" => Some(")"),
        _ => None,
    }
}

fn first_child<'tree>(node: Node<'tree>, predicate: impl Fn(&str) -> bool) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .find(|child| predicate(child.kind()));
    found
}
