mod lsp_impl;
pub mod request_tracker;
mod settings;
mod settings_manager;
mod text_sync;

pub use lsp_impl::MdExpand;
pub use settings::{
    SettingsEvent, SettingsEventKind, SettingsLoadOutcome, SettingsSource, load_settings,
};
