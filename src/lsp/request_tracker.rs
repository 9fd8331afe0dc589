//! Cancellation of in-flight selection requests when their document changes.
//!
//! Every request runs against a snapshot of its document. Each URI owns a
//! parent `CancellationToken`; requests get child tokens. An edit or close
//! cancels the parent, and the next request starts a fresh one.

use dashmap::DashMap;
use tokio_util::sync::CancellationToken;
use url::Url;

#[derive(Debug, Default)]
pub struct SelectionRequestTracker {
    tokens: DashMap<Url, CancellationToken>,
}

impl SelectionRequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for a new request against the current contents of `uri`
    pub fn start_request(&self, uri: &Url) -> CancellationToken {
        self.tokens.entry(uri.clone()).or_default().child_token()
    }

    /// Cancel every request started before the current edit of `uri`
    pub fn invalidate(&self, uri: &Url) {
        if let Some((_, token)) = self.tokens.remove(uri) {
            token.cancel();
        }
    }

    /// Number of documents with a live parent token
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
