//! User configuration loading for mdexpand.
//!
//! User config location: $XDG_CONFIG_HOME/mdexpand/mdexpand.toml
//! Fallback: the platform config directory (e.g. ~/.config/mdexpand/mdexpand.toml)

use std::path::PathBuf;

use super::{CONFIG_FILE_NAME, MdExpandSettings, load_settings_file};
use crate::error::ConfigError;

/// Returns the path to the user configuration file.
///
/// Returns None if no config directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(xdg_config) if !xdg_config.is_empty() => PathBuf::from(xdg_config),
        _ => dirs::config_dir()?,
    };
    Some(base.join("mdexpand").join(CONFIG_FILE_NAME))
}

/// Load the user config. A missing file is `Ok(None)`.
pub fn load_user_config() -> Result<Option<MdExpandSettings>, ConfigError> {
    let Some(path) = user_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    load_settings_file(&path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    /// Run `f` with XDG_CONFIG_HOME pointed at `value`, restoring it afterwards
    fn with_xdg_config_home<T>(value: &std::path::Path, f: impl FnOnce() -> T) -> T {
        let original = env::var_os("XDG_CONFIG_HOME");
        // SAFETY: #[serial(xdg_env)] prevents concurrent modification of XDG_CONFIG_HOME
        unsafe {
            env::set_var("XDG_CONFIG_HOME", value);
        }
        let result = f();
        // SAFETY: Same as above - restoring original env state
        unsafe {
            match original {
                Some(val) => env::set_var("XDG_CONFIG_HOME", val),
                None => env::remove_var("XDG_CONFIG_HOME"),
            }
        }
        result
    }

    #[test]
    #[serial(xdg_env)]
    fn user_config_path_uses_xdg_config_home_when_set() {
        let path = with_xdg_config_home(std::path::Path::new("/custom/config"), user_config_path);
        assert_eq!(
            path,
            Some(PathBuf::from("/custom/config/mdexpand/mdexpand.toml"))
        );
    }

    #[test]
    #[serial(xdg_env)]
    fn load_user_config_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = with_xdg_config_home(dir.path(), load_user_config).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    #[serial(xdg_env)]
    fn load_user_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("mdexpand")).unwrap();
        std::fs::write(
            dir.path().join("mdexpand").join("mdexpand.toml"),
            "parseTimeoutMs = 42\n",
        )
        .unwrap();

        let loaded = with_xdg_config_home(dir.path(), load_user_config)
            .unwrap()
            .unwrap();
        assert_eq!(loaded.parse_timeout_ms, Some(42));
    }
}
