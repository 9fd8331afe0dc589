//! Document model shared by the language server and the selection engine.
//!
//! A [`Document`] is an immutable-per-request snapshot of the text with
//! line access; [`DocumentStore`] keeps the documents the client has open.

mod model;
pub mod position;
mod store;

pub use model::Document;
pub use position::{PositionMapper, compute_line_starts};
pub use store::{DocumentHandle, DocumentStore};
