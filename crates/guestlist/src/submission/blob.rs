use std::future::Future;

use reqwest::header;

use crate::config::StorageConfig;

#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("blob transport failed: {0}")]
    Transport(String),
    #[error("blob backend returned {status}: {body}")]
    Backend { status: u16, body: String },
    #[error("no blob write endpoint configured")]
    NotConfigured,
}

/// Gateway to the external object store holding the shared document.
///
/// `fetch` resolves to `None` when the document does not exist yet; transport
/// failures surface as errors and are downgraded by the caller.
pub trait BlobStore: Send + Sync {
    fn fetch(&self, name: &str) -> impl Future<Output = Result<Option<String>, BlobError>> + Send;
    fn put(&self, name: &str, content: String)
        -> impl Future<Output = Result<(), BlobError>> + Send;
}

/// Blob backend over plain HTTP: GET from a fixed read URL when one is
/// configured (the backend hands out a stable public URL after the first
/// write), otherwise from the write endpoint; PUT with an optional bearer
/// token.
#[derive(Debug, Clone)]
pub struct HttpBlobStore {
    client: reqwest::Client,
    base_url: Option<String>,
    read_url: Option<String>,
    token: Option<String>,
}

impl HttpBlobStore {
    pub fn from_config(storage: &StorageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: storage
                .base_url
                .as_ref()
                .map(|base| base.trim_end_matches('/').to_string()),
            read_url: storage.read_url.clone(),
            token: storage.token.clone(),
        }
    }

    fn write_url(&self, name: &str) -> Result<String, BlobError> {
        let base = self.base_url.as_deref().ok_or(BlobError::NotConfigured)?;
        Ok(format!("{base}/{name}"))
    }
}

impl BlobStore for HttpBlobStore {
    async fn fetch(&self, name: &str) -> Result<Option<String>, BlobError> {
        let url = match &self.read_url {
            Some(url) => url.clone(),
            None => self.write_url(name)?,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| BlobError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let content = response
            .text()
            .await
            .map_err(|err| BlobError::Transport(err.to_string()))?;
        Ok(Some(content))
    }

    async fn put(&self, name: &str, content: String) -> Result<(), BlobError> {
        let url = self.write_url(name)?;

        let mut request = self
            .client
            .put(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(content);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| BlobError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(BlobError::Backend {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            })
        }
    }
}
