use super::domain::{Applicant, DocumentReference};

/// Boundary to the document text-extraction collaborator (OCR + structured
/// analysis). Implementations read the referenced document and return the
/// already-structured applicant facts; the mapping engine never sees raw
/// document text.
pub trait CredentialExtractor: Send + Sync {
    fn extract(&self, document: &DocumentReference) -> Result<Applicant, ExtractionError>;
}

/// Failures surfaced by extraction implementations.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("extraction service unavailable: {0}")]
    Unavailable(String),
    #[error("document '{file_name}' could not be analyzed: {detail}")]
    Unreadable { file_name: String, detail: String },
}
