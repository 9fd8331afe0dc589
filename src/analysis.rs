pub mod selection;

pub use selection::{
    EndTrimTable, MarkdownSmartSelect, SmartSelect, block_selection_range,
    heading_selection_ranges, merge_ranges, range_contains,
};
