use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use serde_json::json;
use tracing::error;

use super::blob::BlobStore;
use super::store::SubmissionStore;
use crate::intake::draft::ApplicationDraft;

pub const SUBMISSION_PATH: &str = "/api/submit-application";

/// Router for the submission boundary. Method dispatch is manual so the
/// contract holds exactly: OPTIONS preflight, POST intake, 405 with a JSON
/// body for everything else, CORS headers on every response.
pub fn submission_router<B>(store: Arc<SubmissionStore<B>>) -> Router
where
    B: BlobStore + 'static,
{
    Router::new()
        .route(SUBMISSION_PATH, any(submission_endpoint::<B>))
        .with_state(store)
}

async fn submission_endpoint<B>(
    State(store): State<Arc<SubmissionStore<B>>>,
    method: Method,
    body: Bytes,
) -> Response
where
    B: BlobStore + 'static,
{
    let response = match method {
        Method::OPTIONS => StatusCode::OK.into_response(),
        Method::POST => submit(store, body).await,
        _ => (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({ "success": false, "error": "Method not allowed" })),
        )
            .into_response(),
    };

    with_cors(response)
}

async fn submit<B: BlobStore>(store: Arc<SubmissionStore<B>>, body: Bytes) -> Response {
    let draft: ApplicationDraft = match serde_json::from_slice(&body) {
        Ok(draft) => draft,
        Err(err) => {
            error!(%err, "submission payload rejected");
            return failure_response();
        }
    };

    match store.append(draft).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "message": "Application submitted successfully",
            })),
        )
            .into_response(),
        Err(err) => {
            error!(%err, "submission append failed");
            failure_response()
        }
    }
}

fn failure_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "error": "Failed to submit application",
        })),
    )
        .into_response()
}

fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
