use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use medbridge::error::AppError;
use medbridge::workflows::licensure::{
    licensure_router, AlertPublisher, Applicant, CaseRepository, CredentialMappingReport,
    LicensureCaseService, MappingEngine,
};
use medbridge::workflows::matching::matching_router;

pub(crate) fn with_service_routes<R, A>(service: Arc<LicensureCaseService<R, A>>) -> axum::Router
where
    R: CaseRepository + 'static,
    A: AlertPublisher + 'static,
{
    licensure_router(service)
        .merge(matching_router())
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/licensure/evaluations",
            axum::routing::post(evaluation_endpoint),
        )
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

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluationRequest {
    pub(crate) applicant: Applicant,
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluationResponse {
    pub(crate) country: &'static str,
    pub(crate) meets_standard: bool,
    pub(crate) report: CredentialMappingReport,
}

/// Stateless evaluation: callers supply already-structured applicant facts
/// and receive the pathway report without opening a case.
pub(crate) async fn evaluation_endpoint(
    Json(payload): Json<EvaluationRequest>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let engine = MappingEngine::standard();
    let report = engine.evaluate(&payload.applicant)?;

    Ok(Json(EvaluationResponse {
        country: report.country.label(),
        meets_standard: report.meets_standard(),
        report,
    }))
}
