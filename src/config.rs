pub mod defaults;
pub mod settings;
pub mod user;

use std::path::Path;
use std::time::Duration;

use crate::analysis::EndTrimTable;
use crate::error::ConfigError;

pub use defaults::{DEFAULT_PARSE_TIMEOUT_MS, default_settings};
pub use settings::MdExpandSettings;
pub use user::{load_user_config, user_config_path};

/// File name of both the user and the project configuration
pub const CONFIG_FILE_NAME: &str = "mdexpand.toml";

/// Resolved settings used while serving requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceSettings {
    pub parse_timeout: Duration,
    pub end_trim: EndTrimTable,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        WorkspaceSettings::from(default_settings())
    }
}

impl From<MdExpandSettings> for WorkspaceSettings {
    fn from(settings: MdExpandSettings) -> Self {
        Self {
            parse_timeout: Duration::from_millis(
                settings.parse_timeout_ms.unwrap_or(DEFAULT_PARSE_TIMEOUT_MS),
            ),
            end_trim: EndTrimTable::from_names(&settings.block_end_trim),
        }
    }
}

/// Merge two MdExpandSettings, preferring values from `primary` over `fallback`
pub fn merge_settings(
    fallback: Option<MdExpandSettings>,
    primary: Option<MdExpandSettings>,
) -> Option<MdExpandSettings> {
    match (fallback, primary) {
        (None, None) => None,
        (Some(settings), None) | (None, Some(settings)) => Some(settings),
        (Some(fallback), Some(primary)) => {
            let mut block_end_trim = fallback.block_end_trim;
            block_end_trim.extend(primary.block_end_trim);
            Some(MdExpandSettings {
                parse_timeout_ms: primary.parse_timeout_ms.or(fallback.parse_timeout_ms),
                block_end_trim,
            })
        }
    }
}

/// Merge layers from lowest to highest precedence
pub fn merge_all(layers: &[Option<MdExpandSettings>]) -> Option<MdExpandSettings> {
    layers
        .iter()
        .cloned()
        .fold(None, |merged, layer| merge_settings(merged, layer))
}

/// Read one TOML settings file
pub fn load_settings_file(path: &Path) -> Result<MdExpandSettings, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}
