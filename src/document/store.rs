use super::Document;
use dashmap::DashMap;
use dashmap::mapref::one::Ref;
use std::ops::Deref;
use url::Url;

// The central store for all open documents.
pub struct DocumentStore {
    documents: DashMap<Url, Document>,
}

pub struct DocumentHandle<'a> {
    inner: Ref<'a, Url, Document>,
}

impl<'a> Deref for DocumentHandle<'a> {
    type Target = Document;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, uri: Url, document: Document) {
        self.documents.insert(uri, document);
    }

    pub fn get(&self, uri: &Url) -> Option<DocumentHandle<'_>> {
        self.documents
            .get(uri)
            .map(|inner| DocumentHandle { inner })
    }

    /// Clone the document so no shard lock is held while a request runs
    pub fn snapshot(&self, uri: &Url) -> Option<Document> {
        self.documents.get(uri).map(|doc| doc.clone())
    }

    /// Replace the text of an open document. Returns false if it is not open.
    pub fn update_text(&self, uri: &Url, text: String, version: Option<i32>) -> bool {
        match self.documents.get_mut(uri) {
            Some(mut doc) => {
                doc.set_text(text, version);
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, uri: &Url) -> Option<Document> {
        self.documents.remove(uri).map(|(_, doc)| doc)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get_document() {
        let store = DocumentStore::new();
        let uri = Url::parse("file:///test.md").unwrap();

        store.insert(uri.clone(), Document::new("hello world"));
        let doc = store.get(&uri).unwrap();
        assert_eq!(doc.text(), "hello world");
    }

    #[test]
    fn test_update_text_of_missing_document() {
        let store = DocumentStore::new();
        let uri = Url::parse("file:///missing.md").unwrap();

        assert!(!store.update_text(&uri, "text".to_string(), Some(2)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let store = DocumentStore::new();
        let uri = Url::parse("file:///test.md").unwrap();
        store.insert(uri.clone(), Document::with_version("v1", 1));

        let snapshot = store.snapshot(&uri).unwrap();
        assert!(store.update_text(&uri, "v2".to_string(), Some(2)));

        assert_eq!(snapshot.text(), "v1");
        assert_eq!(store.get(&uri).unwrap().text(), "v2");
        assert_eq!(store.get(&uri).unwrap().version(), Some(2));
    }

    #[test]
    fn test_remove_document() {
        let store = DocumentStore::new();
        let uri = Url::parse("file:///test.md").unwrap();
        store.insert(uri.clone(), Document::new("x"));

        assert!(store.remove(&uri).is_some());
        assert!(store.get(&uri).is_none());
        assert_eq!(store.len(), 0);
    }
}
