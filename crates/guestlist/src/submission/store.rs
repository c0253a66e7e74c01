use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::blob::{BlobError, BlobStore};
use crate::intake::draft::ApplicationDraft;

/// A draft accepted by the server, stamped at receipt time. Immutable once
/// created; only the store creates these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub draft: ApplicationDraft,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to encode submission log: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to save submission log: {0}")]
    Write(#[from] BlobError),
}

/// Appends each accepted submission to one shared JSON-array document.
///
/// The append is a read-modify-write with no concurrency control: no version
/// check, no locking, no compare-and-swap. Two racing calls both read the
/// same prior log and the later write wins, silently dropping the earlier
/// record even though it was acknowledged to its submitter. Accepted for the
/// expected low traffic; do not rely on the log being complete under
/// concurrent submissions.
pub struct SubmissionStore<B> {
    blob: Arc<B>,
    document: String,
}

impl<B: BlobStore> SubmissionStore<B> {
    pub fn new(blob: Arc<B>, document: impl Into<String>) -> Self {
        Self {
            blob,
            document: document.into(),
        }
    }

    pub fn document(&self) -> &str {
        &self.document
    }

    /// Stamp the draft, append it to the prior log, and overwrite the shared
    /// document in one unconditional write. Fetch problems degrade to an
    /// empty log; write failures surface so no partial write is acknowledged.
    pub async fn append(&self, draft: ApplicationDraft) -> Result<SubmissionRecord, StoreError> {
        let mut log = self.load_log().await;

        let record = SubmissionRecord {
            timestamp: Utc::now(),
            draft,
        };
        log.push(serde_json::to_value(&record)?);

        let content = serde_json::to_string_pretty(&log)?;
        self.blob.put(&self.document, content).await?;

        info!(total = log.len(), "submission saved");
        Ok(record)
    }

    /// Prior log contents. Every failure mode (transport, missing document,
    /// invalid JSON, non-array shape) degrades to an empty sequence; the
    /// reason is logged but deliberately not propagated.
    async fn load_log(&self) -> Vec<Value> {
        let content = match self.blob.fetch(&self.document).await {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!("no existing submission log, starting fresh");
                return Vec::new();
            }
            Err(err) => {
                warn!(%err, "submission log fetch failed, starting fresh");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                warn!("submission log is not an array, starting fresh");
                Vec::new()
            }
            Err(err) => {
                warn!(%err, "submission log is not valid JSON, starting fresh");
                Vec::new()
            }
        }
    }
}
