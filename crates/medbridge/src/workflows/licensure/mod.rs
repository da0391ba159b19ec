//! Licensure case intake, credential mapping, and pathway reporting.
//!
//! The mapping engine is a pure function over attested credential facts and
//! the per-country rule table; everything around it (intake guard, case
//! repository, alert hooks, HTTP router) is plumbing that composes it into
//! the service.

pub mod domain;
pub(crate) mod evaluation;
pub mod extraction;
pub(crate) mod intake;
pub mod repository;
pub mod router;
pub mod rules;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Applicant, ApplicantRole, CaseId, CredentialStatus, Criterion, DoctorSubmission,
    DocumentReference, LicensureCaseStatus,
};
pub use evaluation::{CredentialMappingReport, CriterionOutcome, MappingEngine};
pub use extraction::{CredentialExtractor, ExtractionError};
pub use intake::IntakeViolation;
pub use repository::{
    AlertError, AlertPublisher, CaseRecord, CaseRepository, CaseRepositoryError, CaseStatusView,
    PathwayAlert,
};
pub use router::licensure_router;
pub use rules::{CountryRule, CountryRuleSet, SupportedCountry, UnsupportedCountryError};
pub use service::{CaseServiceError, LicensureCaseService};
