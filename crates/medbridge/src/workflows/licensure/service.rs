use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::domain::{CaseId, DoctorSubmission, LicensureCaseStatus};
use super::evaluation::{CredentialMappingReport, MappingEngine};
use super::extraction::CredentialExtractor;
use super::intake::{IntakeGuard, IntakeViolation};
use super::repository::{
    AlertError, AlertPublisher, CaseRecord, CaseRepository, CaseRepositoryError, PathwayAlert,
};
use super::rules::UnsupportedCountryError;

/// Service composing the intake guard, repository, alert hooks, and mapping
/// engine.
pub struct LicensureCaseService<R, A> {
    guard: IntakeGuard,
    repository: Arc<R>,
    alerts: Arc<A>,
    engine: Arc<MappingEngine>,
}

static CASE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_case_id() -> CaseId {
    let id = CASE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CaseId(format!("case-{id:06}"))
}

impl<R, A> LicensureCaseService<R, A>
where
    R: CaseRepository + 'static,
    A: AlertPublisher + 'static,
{
    pub fn new(
        repository: Arc<R>,
        alerts: Arc<A>,
        extractor: Arc<dyn CredentialExtractor>,
        engine: MappingEngine,
    ) -> Self {
        Self {
            guard: IntakeGuard::new(extractor),
            repository,
            alerts,
            engine: Arc::new(engine),
        }
    }

    /// Open a new case, resolving the evaluable applicant during intake.
    pub fn submit(&self, submission: DoctorSubmission) -> Result<CaseRecord, CaseServiceError> {
        let applicant = self.guard.applicant_from_submission(&submission)?;

        let record = CaseRecord {
            case_id: next_case_id(),
            submission,
            applicant,
            status: LicensureCaseStatus::Submitted,
            report: None,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Evaluate a submitted case and persist the resulting report.
    pub fn evaluate(
        &self,
        case_id: &CaseId,
    ) -> Result<CredentialMappingReport, CaseServiceError> {
        let mut record = self
            .repository
            .fetch(case_id)?
            .ok_or(CaseRepositoryError::NotFound)?;

        let report = self.engine.evaluate(&record.applicant)?;

        record.status = if report.meets_standard() {
            LicensureCaseStatus::Cleared
        } else {
            LicensureCaseStatus::ActionRequired
        };
        record.report = Some(report.clone());

        self.repository.update(record)?;

        if report.meets_standard() {
            let mut details = BTreeMap::new();
            details.insert("country".to_string(), report.country.label().to_string());
            self.alerts.publish(PathwayAlert {
                template: "pathway_clear".to_string(),
                case_id: case_id.clone(),
                details,
            })?;
        }

        Ok(report)
    }

    /// Fetch a case and current status for API responses.
    pub fn get(&self, case_id: &CaseId) -> Result<CaseRecord, CaseServiceError> {
        let record = self
            .repository
            .fetch(case_id)?
            .ok_or(CaseRepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the licensure case service.
#[derive(Debug, thiserror::Error)]
pub enum CaseServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    UnsupportedCountry(#[from] UnsupportedCountryError),
    #[error(transparent)]
    Repository(#[from] CaseRepositoryError),
    #[error(transparent)]
    Alert(#[from] AlertError),
}
