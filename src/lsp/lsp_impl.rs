use std::path::PathBuf;
use tower_lsp_server::jsonrpc::Result;
use tower_lsp_server::ls_types::*;
use tower_lsp_server::{Client, LanguageServer};
use url::Url;

use super::request_tracker::SelectionRequestTracker;
use super::settings::{SettingsEventKind, SettingsLoadOutcome, SettingsSource, load_settings};
use super::settings_manager::SettingsManager;
use super::text_sync::apply_content_changes;
use crate::document::{Document, DocumentStore};

mod text_document;

/// Language server answering `textDocument/selectionRange` for Markdown.
pub struct MdExpand {
    client: Client,
    documents: DocumentStore,
    settings_manager: SettingsManager,
    requests: SelectionRequestTracker,
}

impl std::fmt::Debug for MdExpand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MdExpand")
            .field("client", &"Client")
            .field("documents", &self.documents.len())
            .field("settings_manager", &self.settings_manager)
            .field("requests", &self.requests)
            .finish()
    }
}

/// Convert ls_types::Uri to url::Url for internal use
pub(crate) fn uri_to_url(uri: &Uri) -> std::result::Result<Url, url::ParseError> {
    Url::parse(uri.as_str())
}

/// Workspace root from workspace folders, then the deprecated root_uri
fn root_path_from_params(params: &InitializeParams) -> Option<PathBuf> {
    let from_folders = params
        .workspace_folders
        .as_ref()
        .and_then(|folders| folders.first())
        .map(|folder| &folder.uri);

    #[allow(deprecated)] // Support for older LSP clients
    let root_uri = from_folders.or(params.root_uri.as_ref());

    root_uri
        .and_then(|uri| uri_to_url(uri).ok())
        .and_then(|url| url.to_file_path().ok())
}

impl MdExpand {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
            settings_manager: SettingsManager::new(),
            requests: SelectionRequestTracker::new(),
        }
    }

    async fn apply_settings_outcome(&self, outcome: SettingsLoadOutcome) {
        for event in outcome.events {
            let message_type = match event.kind {
                SettingsEventKind::Info => {
                    log::info!("{}", event.message);
                    MessageType::INFO
                }
                SettingsEventKind::Warning => {
                    log::warn!("{}", event.message);
                    MessageType::WARNING
                }
            };
            self.client.log_message(message_type, event.message).await;
        }

        if let Some(settings) = outcome.settings {
            self.settings_manager.apply_settings(settings);
        }
    }
}

impl LanguageServer for MdExpand {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let root_path = root_path_from_params(&params);
        match &root_path {
            Some(path) => log::info!("Using workspace root: {}", path.display()),
            None => log::info!("No workspace root; project config will not be loaded"),
        }
        self.settings_manager.set_root_path(root_path.clone());

        let override_settings = params
            .initialization_options
            .map(|options| (SettingsSource::InitializationOptions, options));
        let outcome = load_settings(root_path.as_deref(), override_settings);
        self.apply_settings_outcome(outcome).await;

        Ok(InitializeResult {
            server_info: Some(ServerInfo {
                name: "mdexpand".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::INCREMENTAL,
                )),
                selection_range_provider: Some(SelectionRangeProviderCapability::Simple(true)),
                ..ServerCapabilities::default()
            },
            ..InitializeResult::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        log::info!("mdexpand is ready");
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let item = params.text_document;
        let Ok(uri) = uri_to_url(&item.uri) else {
            log::warn!("Invalid URI in didOpen: {}", item.uri.as_str());
            return;
        };

        if item.language_id != "markdown" {
            log::debug!("Opened {} with language id {}", uri, item.language_id);
        }
        self.documents
            .insert(uri.clone(), Document::with_version(item.text, item.version));
        self.requests.invalidate(&uri);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let Ok(uri) = uri_to_url(&params.text_document.uri) else {
            log::warn!(
                "Invalid URI in didChange: {}",
                params.text_document.uri.as_str()
            );
            return;
        };

        let Some((old_text, applied_version)) = self
            .documents
            .get(&uri)
            .map(|doc| (doc.text().to_string(), doc.version()))
        else {
            log::warn!("didChange for a document that is not open: {}", uri);
            return;
        };

        let version = params.text_document.version;
        if applied_version.is_some_and(|applied| version <= applied) {
            log::warn!(
                "didChange for {} carries version {} after version {:?}",
                uri,
                version,
                applied_version
            );
        }

        let text = apply_content_changes(&old_text, params.content_changes);
        self.documents.update_text(&uri, text, Some(version));
        // Requests running against the previous text are now stale
        self.requests.invalidate(&uri);
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let Ok(uri) = uri_to_url(&params.text_document.uri) else {
            return;
        };
        self.documents.remove(&uri);
        self.requests.invalidate(&uri);
    }

    async fn did_change_configuration(&self, params: DidChangeConfigurationParams) {
        // Clients commonly nest the settings under the server name
        let value = params
            .settings
            .get("mdexpand")
            .cloned()
            .unwrap_or(params.settings);

        let root_path = self.settings_manager.root_path();
        let outcome = load_settings(
            root_path.as_deref(),
            Some((SettingsSource::ClientConfiguration, value)),
        );
        self.apply_settings_outcome(outcome).await;
    }

    async fn selection_range(
        &self,
        params: SelectionRangeParams,
    ) -> Result<Option<Vec<SelectionRange>>> {
        self.selection_range_impl(params).await
    }
}
