use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryBlobStore};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use guestlist::config::AppConfig;
use guestlist::error::AppError;
use guestlist::submission::{HttpBlobStore, SubmissionStore};
use guestlist::telemetry;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let document = config.storage.document_name.clone();
    let app = if config.storage.has_remote_backend() {
        let blob = Arc::new(HttpBlobStore::from_config(&config.storage));
        with_service_routes(Arc::new(SubmissionStore::new(blob, document)))
    } else {
        warn!("no blob backend configured, submissions stay in process memory");
        let blob = Arc::new(InMemoryBlobStore::default());
        with_service_routes(Arc::new(SubmissionStore::new(blob, document)))
    };
    let app = app.layer(Extension(app_state)).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "guestlist intake service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
