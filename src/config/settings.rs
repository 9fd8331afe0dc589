use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Settings as written in `mdexpand.toml` or sent by the client.
///
/// Every field is optional so that layers can be merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MdExpandSettings {
    /// Upper bound for one Markdown parse, in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_timeout_ms: Option<u64>,

    /// Lines trimmed from the end of a block range, keyed by token type
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub block_end_trim: BTreeMap<String, u32>,
}
