//! Selection range method for MdExpand.

use tower_lsp_server::jsonrpc::{Error, ErrorCode, Result};
use tower_lsp_server::ls_types::{MessageType, SelectionRange, SelectionRangeParams};

use super::super::{MdExpand, uri_to_url};
use crate::analysis::MarkdownSmartSelect;
use crate::error::SelectionError;

impl MdExpand {
    pub(crate) async fn selection_range_impl(
        &self,
        params: SelectionRangeParams,
    ) -> Result<Option<Vec<SelectionRange>>> {
        let lsp_uri = params.text_document.uri;
        let Ok(uri) = uri_to_url(&lsp_uri) else {
            log::warn!("Invalid URI in selectionRange: {}", lsp_uri.as_str());
            return Ok(None);
        };

        // Token before snapshot: an edit landing in between cancels this request
        let cancel = self.requests.start_request(&uri);
        let Some(document) = self.documents.snapshot(&uri) else {
            log::debug!("selectionRange for a document that is not open: {}", uri);
            // Unopened URIs must not keep a tracker entry alive
            self.requests.invalidate(&uri);
            return Ok(None);
        };

        let settings = self.settings_manager.load_settings();
        let provider = MarkdownSmartSelect::from_settings(&settings);

        match provider
            .provide_selection_ranges(&document, &params.positions, &cancel)
            .await
        {
            Ok(ranges) => Ok(Some(ranges)),
            Err(SelectionError::Cancelled) => {
                log::debug!("selectionRange for {} superseded by an edit", uri);
                let mut error = Error::new(ErrorCode::ContentModified);
                error.message = "Document changed during selectionRange".into();
                Err(error)
            }
            Err(err) => {
                log::warn!("selectionRange failed for {}: {}", uri, err);
                self.client
                    .log_message(
                        MessageType::ERROR,
                        format!("selectionRange failed: {}", err),
                    )
                    .await;
                let mut error = Error::internal_error();
                error.message = err.to_string().into();
                Err(error)
            }
        }
    }
}
