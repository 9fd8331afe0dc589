//! Settings state shared by the server's request handlers.
//!
//! Settings can be replaced at any time by `workspace/didChangeConfiguration`,
//! so they live behind an `ArcSwap`; each request loads one snapshot.

use arc_swap::ArcSwap;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::WorkspaceSettings;

pub(crate) struct SettingsManager {
    root_path: ArcSwap<Option<PathBuf>>,
    settings: ArcSwap<WorkspaceSettings>,
}

impl std::fmt::Debug for SettingsManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsManager")
            .field("root_path", &"ArcSwap<Option<PathBuf>>")
            .field("settings", &"ArcSwap<WorkspaceSettings>")
            .finish()
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsManager {
    pub(crate) fn new() -> Self {
        Self {
            root_path: ArcSwap::new(Arc::new(None)),
            settings: ArcSwap::new(Arc::new(WorkspaceSettings::default())),
        }
    }

    pub(crate) fn set_root_path(&self, path: Option<PathBuf>) {
        self.root_path.store(Arc::new(path));
    }

    pub(crate) fn root_path(&self) -> Arc<Option<PathBuf>> {
        self.root_path.load_full()
    }

    pub(crate) fn load_settings(&self) -> Arc<WorkspaceSettings> {
        self.settings.load_full()
    }

    pub(crate) fn apply_settings(&self, settings: WorkspaceSettings) {
        self.settings.store(Arc::new(settings));
    }
}
