use std::io::Cursor;

use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

use super::domain::{DoctorMatch, DoctorProfile, JobPosting, JobPostingMatch, MatchExplanation};
use super::engine::{explain_match, match_doctor_to_jobs, match_job_to_doctors};
use super::import::JobPostingImporter;

/// Router builder for the stateless matching endpoints.
pub fn matching_router() -> Router {
    Router::new()
        .route("/api/v1/matching/jobs", post(jobs_for_doctor_endpoint))
        .route("/api/v1/matching/doctors", post(doctors_for_job_endpoint))
        .route("/api/v1/matching/explain", post(explain_endpoint))
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobsForDoctorRequest {
    pub(crate) doctor: DoctorProfile,
    #[serde(default)]
    pub(crate) postings: Vec<JobPosting>,
    /// Optional hospital CSV export appended to the inline postings.
    #[serde(default)]
    pub(crate) postings_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct JobsForDoctorResponse {
    pub(crate) matches: Vec<JobPostingMatch>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DoctorsForJobRequest {
    pub(crate) posting: JobPosting,
    pub(crate) doctors: Vec<DoctorProfile>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DoctorsForJobResponse {
    pub(crate) matches: Vec<DoctorMatch>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExplainRequest {
    pub(crate) doctor: DoctorProfile,
    pub(crate) posting: JobPosting,
}

pub(crate) async fn jobs_for_doctor_endpoint(
    Json(payload): Json<JobsForDoctorRequest>,
) -> Result<Json<JobsForDoctorResponse>, AppError> {
    let JobsForDoctorRequest {
        doctor,
        mut postings,
        postings_csv,
    } = payload;

    if let Some(csv) = postings_csv {
        let imported = JobPostingImporter::from_reader(Cursor::new(csv.into_bytes()))?;
        postings.extend(imported);
    }

    let matches = match_doctor_to_jobs(&doctor, &postings);
    Ok(Json(JobsForDoctorResponse { matches }))
}

pub(crate) async fn doctors_for_job_endpoint(
    Json(payload): Json<DoctorsForJobRequest>,
) -> Json<DoctorsForJobResponse> {
    let matches = match_job_to_doctors(&payload.posting, &payload.doctors);
    Json(DoctorsForJobResponse { matches })
}

pub(crate) async fn explain_endpoint(
    Json(payload): Json<ExplainRequest>,
) -> Json<MatchExplanation> {
    Json(explain_match(&payload.doctor, &payload.posting))
}
