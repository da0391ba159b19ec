use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Doctor-facing profile used by the matching engine.
///
/// `translated_credentials` is the unit of comparison: a single string of
/// comma-separated credential tokens, however it was produced (manual entry
/// or the translation pipeline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorProfile {
    pub id: String,
    pub full_name: String,
    pub country_of_origin: String,
    pub credentials: String,
    pub translated_credentials: String,
    pub years_experience: u32,
    pub location: String,
}

/// Hospital posting; `requirements` is comma-separated requirement tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub hospital_id: String,
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Scored posting for one doctor. Zero-score candidates are never produced,
/// so a result list can be shorter than the posting list it was scored
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPostingMatch {
    pub job_posting: JobPosting,
    pub match_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_requirements: Option<Vec<String>>,
    pub explanation: String,
}

/// Scored doctor for one posting, subject to the same zero-score filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorMatch {
    pub doctor_profile: DoctorProfile,
    pub match_score: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_qualifications: Option<Vec<String>>,
    pub explanation: String,
}

/// Single-pair breakdown returned by `explain_match`; never filtered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchExplanation {
    pub match_score: u8,
    pub explanation: String,
    pub met_requirements: Vec<String>,
    pub missing_requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_improvements: Option<Vec<String>>,
}
