//! Doctor/job matching: naive set-overlap scoring over comma-delimited
//! requirement strings, plus hospital posting import.

pub mod domain;
mod engine;
pub mod import;
pub mod router;

pub use domain::{DoctorMatch, DoctorProfile, JobPosting, JobPostingMatch, MatchExplanation};
pub use engine::{explain_match, match_doctor_to_jobs, match_job_to_doctors};
pub use import::{JobImportError, JobPostingImporter};
pub use router::matching_router;
