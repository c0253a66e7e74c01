use std::future::Future;

use serde::Deserialize;

use super::draft::ApplicationDraft;

/// Message shown when the boundary gives no usable error of its own.
pub const GENERIC_FAILURE: &str = "Failed to submit application. Please try again.";

/// Failure of one submission attempt, already reduced to the message the
/// terminal step displays.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct SubmitError {
    message: String,
}

impl SubmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn generic() -> Self {
        Self::new(GENERIC_FAILURE)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Outbound seam the wizard submits through, so controllers and tests can run
/// against in-memory boundaries.
pub trait SubmissionGateway: Send + Sync {
    fn submit(
        &self,
        draft: &ApplicationDraft,
    ) -> impl Future<Output = Result<String, SubmitError>> + Send;
}

#[derive(Debug, Default, Deserialize)]
struct BoundaryResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// HTTP submission client: serializes the draft and issues exactly one POST.
///
/// No retries and no idempotency keys; a second user click after a failure is
/// a second, independent submission. No explicit timeout is configured, so
/// behavior is bounded only by the transport's defaults.
#[derive(Debug, Clone)]
pub struct HttpSubmissionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmissionClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SubmissionGateway for HttpSubmissionClient {
    /// Success requires both an HTTP success status and an explicit
    /// `success: true` flag in the body; every other combination is a failure
    /// carrying the body's error message when one is present.
    async fn submit(&self, draft: &ApplicationDraft) -> Result<String, SubmitError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(draft)
            .send()
            .await
            .map_err(|_| SubmitError::generic())?;

        let status_ok = response.status().is_success();
        let body: BoundaryResponse = response.json().await.unwrap_or_default();

        if status_ok && body.success {
            Ok(body.message.unwrap_or_default())
        } else {
            Err(match body.error {
                Some(error) => SubmitError::new(error),
                None => SubmitError::generic(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_response_tolerates_missing_fields() {
        let body: BoundaryResponse = serde_json::from_str("{}").expect("parses");
        assert!(!body.success);
        assert!(body.message.is_none());
        assert!(body.error.is_none());

        let body: BoundaryResponse =
            serde_json::from_str(r#"{"success":false,"error":"Method not allowed"}"#)
                .expect("parses");
        assert_eq!(body.error.as_deref(), Some("Method not allowed"));
    }

    #[test]
    fn submit_error_displays_its_message() {
        assert_eq!(SubmitError::generic().to_string(), GENERIC_FAILURE);
        assert_eq!(SubmitError::new("nope").message(), "nope");
    }
}
