//! Default configuration values for mdexpand.
//!
//! These are the lowest settings layer and the source of `config init`.

use super::settings::MdExpandSettings;
use crate::analysis::EndTrimTable;

pub const DEFAULT_PARSE_TIMEOUT_MS: u64 = 10_000;

/// Returns the default MdExpandSettings with every field filled in.
pub fn default_settings() -> MdExpandSettings {
    MdExpandSettings {
        parse_timeout_ms: Some(DEFAULT_PARSE_TIMEOUT_MS),
        block_end_trim: EndTrimTable::default().to_names(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_render_as_toml() {
        let text = toml::to_string_pretty(&default_settings()).unwrap();
        assert!(text.contains("parseTimeoutMs = 10000"));
        assert!(text.contains("bullet_list_open = 1"));
    }
}
