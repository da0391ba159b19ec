use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{CaseId, DoctorSubmission, LicensureCaseStatus};
use super::repository::{AlertPublisher, CaseRepository, CaseRepositoryError};
use super::service::{CaseServiceError, LicensureCaseService};

/// Router builder exposing HTTP endpoints for case intake, status, and
/// evaluation.
pub fn licensure_router<R, A>(service: Arc<LicensureCaseService<R, A>>) -> Router
where
    R: CaseRepository + 'static,
    A: AlertPublisher + 'static,
{
    Router::new()
        .route("/api/v1/licensure/cases", post(submit_handler::<R, A>))
        .route(
            "/api/v1/licensure/cases/:case_id",
            get(status_handler::<R, A>),
        )
        .route(
            "/api/v1/licensure/cases/:case_id/evaluation",
            post(evaluate_handler::<R, A>),
        )
        .with_state(service)
}

pub(crate) async fn submit_handler<R, A>(
    State(service): State<Arc<LicensureCaseService<R, A>>>,
    axum::Json(submission): axum::Json<DoctorSubmission>,
) -> Response
where
    R: CaseRepository + 'static,
    A: AlertPublisher + 'static,
{
    match service.submit(submission) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::ACCEPTED, axum::Json(view)).into_response()
        }
        Err(CaseServiceError::Intake(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(CaseServiceError::Repository(CaseRepositoryError::Conflict)) => {
            let payload = json!({
                "error": "case already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn status_handler<R, A>(
    State(service): State<Arc<LicensureCaseService<R, A>>>,
    Path(case_id): Path<String>,
) -> Response
where
    R: CaseRepository + 'static,
    A: AlertPublisher + 'static,
{
    let id = CaseId(case_id);
    match service.get(&id) {
        Ok(record) => {
            let view = record.status_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(CaseServiceError::Repository(CaseRepositoryError::NotFound)) => {
            let payload = json!({
                "case_id": id.0,
                "status": LicensureCaseStatus::Submitted.label(),
                "pathway_rationale": "pending evaluation",
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn evaluate_handler<R, A>(
    State(service): State<Arc<LicensureCaseService<R, A>>>,
    Path(case_id): Path<String>,
) -> Response
where
    R: CaseRepository + 'static,
    A: AlertPublisher + 'static,
{
    let id = CaseId(case_id);
    match service.evaluate(&id) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(CaseServiceError::Repository(CaseRepositoryError::NotFound)) => {
            let payload = json!({
                "error": format!("no case found for '{}'", id.0),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(CaseServiceError::UnsupportedCountry(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
