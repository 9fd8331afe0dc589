//! Text document related LSP methods.

mod selection_range;
