pub mod analysis;
pub mod config;
pub mod document;
pub mod error;
pub mod lsp;
pub mod syntax;

pub use analysis::{MarkdownSmartSelect, SmartSelect};
pub use document::Document;
pub use error::{SelectionError, SelectionResult};

// Re-export the main server implementation
pub use lsp::MdExpand;
