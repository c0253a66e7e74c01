use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use guestlist::submission::{BlobError, BlobStore};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Blob backend for local serving, demos, and route tests; one document per
/// name, held in process memory.
#[derive(Default, Clone)]
pub(crate) struct InMemoryBlobStore {
    documents: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryBlobStore {
    pub(crate) fn document(&self, name: &str) -> Option<String> {
        self.documents
            .lock()
            .expect("blob mutex poisoned")
            .get(name)
            .cloned()
    }
}

impl BlobStore for InMemoryBlobStore {
    async fn fetch(&self, name: &str) -> Result<Option<String>, BlobError> {
        Ok(self.document(name))
    }

    async fn put(&self, name: &str, content: String) -> Result<(), BlobError> {
        self.documents
            .lock()
            .expect("blob mutex poisoned")
            .insert(name.to_string(), content);
        Ok(())
    }
}
