use crate::config::{
    CONFIG_FILE_NAME, MdExpandSettings, WorkspaceSettings, default_settings, load_settings_file,
    load_user_config, merge_all,
};
use crate::error::ConfigError;
use serde_json::Value;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsEventKind {
    Info,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsEvent {
    pub kind: SettingsEventKind,
    pub message: String,
}

impl SettingsEvent {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: SettingsEventKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: SettingsEventKind::Warning,
            message: message.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsSource {
    InitializationOptions,
    ClientConfiguration,
}

impl SettingsSource {
    fn description(self) -> &'static str {
        match self {
            SettingsSource::InitializationOptions => "initialization options",
            SettingsSource::ClientConfiguration => "client configuration",
        }
    }
}

#[derive(Default, Debug)]
pub struct SettingsLoadOutcome {
    pub settings: Option<WorkspaceSettings>,
    pub events: Vec<SettingsEvent>,
}

pub fn load_settings(
    root_path: Option<&Path>,
    override_settings: Option<(SettingsSource, Value)>,
) -> SettingsLoadOutcome {
    let mut events = Vec::new();

    // Layer 1: Programmed defaults
    let defaults = Some(default_settings());

    // Layer 2: User config from XDG_CONFIG_HOME (~/.config/mdexpand/mdexpand.toml)
    let user_config = load_user_config_with_events(&mut events);

    // Layer 3: Project config from root_path/mdexpand.toml
    let project_settings = load_toml_settings(root_path, &mut events);

    // Layer 4: Override settings from initialization options or client configuration
    let override_settings = override_settings
        .and_then(|(source, value)| parse_override_settings(source, value, &mut events));

    let merged = merge_all(&[defaults, user_config, project_settings, override_settings]);
    let settings = merged.map(WorkspaceSettings::from);

    SettingsLoadOutcome { settings, events }
}

fn load_user_config_with_events(events: &mut Vec<SettingsEvent>) -> Option<MdExpandSettings> {
    match load_user_config() {
        Ok(Some(settings)) => {
            events.push(SettingsEvent::info("Loaded user config"));
            Some(settings)
        }
        Ok(None) => None,
        Err(err) => {
            events.push(SettingsEvent::warning(format!(
                "Failed to load user config: {}",
                err
            )));
            None
        }
    }
}

fn load_toml_settings(
    root_path: Option<&Path>,
    events: &mut Vec<SettingsEvent>,
) -> Option<MdExpandSettings> {
    let config_path = root_path?.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return None;
    }

    events.push(SettingsEvent::info(format!(
        "Found config file: {}",
        config_path.display()
    )));

    match load_settings_file(&config_path) {
        Ok(settings) => {
            events.push(SettingsEvent::info("Successfully loaded mdexpand.toml"));
            Some(settings)
        }
        Err(err) => {
            events.push(SettingsEvent::warning(format!(
                "Failed to load mdexpand.toml: {}",
                err
            )));
            None
        }
    }
}

fn parse_override_settings(
    source: SettingsSource,
    value: Value,
    events: &mut Vec<SettingsEvent>,
) -> Option<MdExpandSettings> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value::<MdExpandSettings>(value).map_err(ConfigError::from) {
        Ok(settings) => {
            events.push(SettingsEvent::info(format!(
                "Parsed {} as MdExpandSettings",
                source.description()
            )));
            Some(settings)
        }
        Err(err) => {
            events.push(SettingsEvent::warning(format!(
                "Failed to parse {}: {}",
                source.description(),
                err
            )));
            None
        }
    }
}
