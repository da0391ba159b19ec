use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::workflows::licensure::domain::{
    Applicant, ApplicantRole, CaseId, DoctorSubmission, DocumentReference,
};
use crate::workflows::licensure::evaluation::MappingEngine;
use crate::workflows::licensure::extraction::{CredentialExtractor, ExtractionError};
use crate::workflows::licensure::repository::{
    AlertError, AlertPublisher, CaseRecord, CaseRepository, CaseRepositoryError, PathwayAlert,
};
use crate::workflows::licensure::{licensure_router, LicensureCaseService};

pub(super) fn gp_applicant(country: &str) -> Applicant {
    Applicant {
        country: country.to_string(),
        degree_verified: true,
        internship_months: 12,
        has_mccqe1: true,
        role: ApplicantRole::GeneralPractitioner,
        foreign_specialty_cert: None,
        cfpc_certified: true,
        province_licence: true,
        cmpa: true,
    }
}

pub(super) fn specialist_applicant(country: &str) -> Applicant {
    Applicant {
        country: country.to_string(),
        degree_verified: true,
        internship_months: 12,
        has_mccqe1: false,
        role: ApplicantRole::Specialist,
        foreign_specialty_cert: None,
        cfpc_certified: false,
        province_licence: false,
        cmpa: false,
    }
}

pub(super) fn submission_with(applicant: Applicant) -> DoctorSubmission {
    DoctorSubmission {
        full_name: "Amira Hassan".to_string(),
        country_of_origin: applicant.country.clone(),
        years_experience: 8,
        location: "Toronto, ON".to_string(),
        attested: Some(applicant),
        resume: None,
    }
}

pub(super) fn submission() -> DoctorSubmission {
    submission_with(specialist_applicant("India"))
}

pub(super) fn resume() -> DocumentReference {
    DocumentReference {
        file_name: "cv.pdf".to_string(),
        content_type: "application/pdf".to_string(),
        storage_key: "uploads/doc-001/cv.pdf".to_string(),
    }
}

pub(super) fn resume_submission() -> DoctorSubmission {
    DoctorSubmission {
        attested: None,
        resume: Some(resume()),
        ..submission()
    }
}

pub(super) fn sourceless_submission() -> DoctorSubmission {
    DoctorSubmission {
        attested: None,
        resume: None,
        ..submission()
    }
}

pub(super) fn nameless_submission() -> DoctorSubmission {
    DoctorSubmission {
        full_name: "   ".to_string(),
        ..submission()
    }
}

pub(super) fn engine() -> MappingEngine {
    MappingEngine::standard()
}

pub(super) fn build_service() -> (
    LicensureCaseService<MemoryRepository, MemoryAlerts>,
    Arc<MemoryRepository>,
    Arc<MemoryAlerts>,
) {
    build_service_with_extractor(Arc::new(FixtureExtractor::new(gp_applicant("Ireland"))))
}

pub(super) fn build_service_with_extractor(
    extractor: Arc<dyn CredentialExtractor>,
) -> (
    LicensureCaseService<MemoryRepository, MemoryAlerts>,
    Arc<MemoryRepository>,
    Arc<MemoryAlerts>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let alerts = Arc::new(MemoryAlerts::default());
    let service = LicensureCaseService::new(
        repository.clone(),
        alerts.clone(),
        extractor,
        MappingEngine::standard(),
    );
    (service, repository, alerts)
}

pub(super) fn licensure_router_with_service(
    service: LicensureCaseService<MemoryRepository, MemoryAlerts>,
) -> axum::Router {
    licensure_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<CaseId, CaseRecord>>>,
}

impl CaseRepository for MemoryRepository {
    fn insert(&self, record: CaseRecord) -> Result<CaseRecord, CaseRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.case_id) {
            return Err(CaseRepositoryError::Conflict);
        }
        guard.insert(record.case_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: CaseRecord) -> Result<(), CaseRepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.case_id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &CaseId) -> Result<Option<CaseRecord>, CaseRepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn awaiting_evaluation(&self, _limit: usize) -> Result<Vec<CaseRecord>, CaseRepositoryError> {
        Ok(Vec::new())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryAlerts {
    events: Arc<Mutex<Vec<PathwayAlert>>>,
}

impl MemoryAlerts {
    pub(super) fn events(&self) -> Vec<PathwayAlert> {
        self.events.lock().expect("alert mutex poisoned").clone()
    }
}

impl AlertPublisher for MemoryAlerts {
    fn publish(&self, alert: PathwayAlert) -> Result<(), AlertError> {
        self.events
            .lock()
            .expect("alert mutex poisoned")
            .push(alert);
        Ok(())
    }
}

pub(super) struct FixtureExtractor {
    applicant: Applicant,
}

impl FixtureExtractor {
    pub(super) fn new(applicant: Applicant) -> Self {
        Self { applicant }
    }
}

impl CredentialExtractor for FixtureExtractor {
    fn extract(&self, _document: &DocumentReference) -> Result<Applicant, ExtractionError> {
        Ok(self.applicant.clone())
    }
}

pub(super) struct OfflineExtractor;

impl CredentialExtractor for OfflineExtractor {
    fn extract(&self, _document: &DocumentReference) -> Result<Applicant, ExtractionError> {
        Err(ExtractionError::Unavailable(
            "no extraction backend".to_string(),
        ))
    }
}

pub(super) struct ConflictRepository;

impl CaseRepository for ConflictRepository {
    fn insert(&self, _record: CaseRecord) -> Result<CaseRecord, CaseRepositoryError> {
        Err(CaseRepositoryError::Conflict)
    }

    fn update(&self, _record: CaseRecord) -> Result<(), CaseRepositoryError> {
        Err(CaseRepositoryError::Unavailable("read only".to_string()))
    }

    fn fetch(&self, _id: &CaseId) -> Result<Option<CaseRecord>, CaseRepositoryError> {
        Ok(None)
    }

    fn awaiting_evaluation(&self, _limit: usize) -> Result<Vec<CaseRecord>, CaseRepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl CaseRepository for UnavailableRepository {
    fn insert(&self, _record: CaseRecord) -> Result<CaseRecord, CaseRepositoryError> {
        Err(CaseRepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: CaseRecord) -> Result<(), CaseRepositoryError> {
        Err(CaseRepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &CaseId) -> Result<Option<CaseRecord>, CaseRepositoryError> {
        Err(CaseRepositoryError::Unavailable("database offline".to_string()))
    }

    fn awaiting_evaluation(&self, _limit: usize) -> Result<Vec<CaseRecord>, CaseRepositoryError> {
        Err(CaseRepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn assert_conflict_response(response: Response) {
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
