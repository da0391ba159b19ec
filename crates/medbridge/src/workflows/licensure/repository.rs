use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::domain::{Applicant, CaseId, DoctorSubmission, LicensureCaseStatus};
use super::evaluation::CredentialMappingReport;

/// Repository record for one licensure case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    pub case_id: CaseId,
    pub submission: DoctorSubmission,
    pub applicant: Applicant,
    pub status: LicensureCaseStatus,
    pub report: Option<CredentialMappingReport>,
}

impl CaseRecord {
    pub fn pathway_rationale(&self) -> String {
        match &self.report {
            Some(report) if report.meets_standard() => {
                "meets the Canadian Standard".to_string()
            }
            Some(report) => format!("{} outstanding action(s)", report.gap_actions.len()),
            None => "pending evaluation".to_string(),
        }
    }

    pub fn status_view(&self) -> CaseStatusView {
        CaseStatusView {
            case_id: self.case_id.clone(),
            status: self.status.label(),
            pathway_rationale: self.pathway_rationale(),
            country: self.report.as_ref().map(|report| report.country.label()),
            gap_actions: self
                .report
                .as_ref()
                .map(|report| report.gap_actions.clone()),
        }
    }
}

/// Storage abstraction so the service can be exercised without a database.
pub trait CaseRepository: Send + Sync {
    fn insert(&self, record: CaseRecord) -> Result<CaseRecord, CaseRepositoryError>;
    fn update(&self, record: CaseRecord) -> Result<(), CaseRepositoryError>;
    fn fetch(&self, id: &CaseId) -> Result<Option<CaseRecord>, CaseRepositoryError>;
    fn awaiting_evaluation(&self, limit: usize) -> Result<Vec<CaseRecord>, CaseRepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum CaseRepositoryError {
    #[error("case already exists")]
    Conflict,
    #[error("case not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound notification hooks (portal or e-mail adapters).
pub trait AlertPublisher: Send + Sync {
    fn publish(&self, alert: PathwayAlert) -> Result<(), AlertError>;
}

/// Alert payload so routes and tests can assert integration boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathwayAlert {
    pub template: String,
    pub case_id: CaseId,
    pub details: BTreeMap<String, String>,
}

/// Alert dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("alert transport unavailable: {0}")]
    Transport(String),
}

/// Public projection of a case for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct CaseStatusView {
    pub case_id: CaseId,
    pub status: &'static str,
    pub pathway_rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gap_actions: Option<Vec<String>>,
}
