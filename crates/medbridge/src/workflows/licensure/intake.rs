use std::sync::Arc;

use super::domain::{Applicant, DoctorSubmission};
use super::extraction::{CredentialExtractor, ExtractionError};

/// Validation errors raised while opening a case.
#[derive(Debug, thiserror::Error)]
pub enum IntakeViolation {
    #[error("submission is missing the applicant's full name")]
    MissingName,
    #[error("submission carries neither attested credentials nor a resume")]
    MissingCredentialSource,
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Guard producing evaluable `Applicant` values from inbound submissions.
pub struct IntakeGuard {
    extractor: Arc<dyn CredentialExtractor>,
}

impl IntakeGuard {
    pub fn new(extractor: Arc<dyn CredentialExtractor>) -> Self {
        Self { extractor }
    }

    /// Resolve the applicant facts for a submission. Attested data always
    /// wins; the extraction collaborator is consulted only when the
    /// submission arrived with a resume alone.
    pub fn applicant_from_submission(
        &self,
        submission: &DoctorSubmission,
    ) -> Result<Applicant, IntakeViolation> {
        if submission.full_name.trim().is_empty() {
            return Err(IntakeViolation::MissingName);
        }

        if let Some(attested) = &submission.attested {
            return Ok(attested.clone());
        }

        let resume = submission
            .resume
            .as_ref()
            .ok_or(IntakeViolation::MissingCredentialSource)?;

        Ok(self.extractor.extract(resume)?)
    }
}
