use std::sync::Arc;

use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde_json::json;

use dehix_hire::pipeline::{
    hire_router, ConnectsLedger, FreelancerProfileLookup, HirePipelineService, HireRequestStore,
    NotificationSink,
};

use crate::infra::AppState;

pub(crate) fn with_pipeline_routes<S, L, N, F>(
    service: Arc<HirePipelineService<S, L, N, F>>,
) -> axum::Router
where
    S: HireRequestStore + 'static,
    L: ConnectsLedger + 'static,
    N: NotificationSink + 'static,
    F: FreelancerProfileLookup + 'static,
{
    hire_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
