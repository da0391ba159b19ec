use serde::{Deserialize, Serialize};

/// Identifier wrapper for licensure cases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CaseId(pub String);

/// Professional stream the applicant is pursuing in Canada.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicantRole {
    #[serde(rename = "gp")]
    GeneralPractitioner,
    Specialist,
}

impl ApplicantRole {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicantRole::GeneralPractitioner => "general practitioner",
            ApplicantRole::Specialist => "specialist",
        }
    }
}

/// Attested credential facts consumed by the mapping engine.
///
/// Values arrive already structured, either typed in by the applicant or
/// produced by the extraction collaborator. The engine performs no coercion
/// and no validation beyond resolving `country` against the rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub country: String,
    pub degree_verified: bool,
    pub internship_months: u32,
    pub has_mccqe1: bool,
    pub role: ApplicantRole,
    #[serde(default)]
    pub foreign_specialty_cert: Option<String>,
    #[serde(default)]
    pub cfpc_certified: bool,
    #[serde(default)]
    pub province_licence: bool,
    #[serde(default)]
    pub cmpa: bool,
}

/// Tri-state outcome recorded for a single criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialStatus {
    Accepted,
    Partial,
    Rejected,
}

impl CredentialStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CredentialStatus::Accepted => "accepted",
            CredentialStatus::Partial => "partial",
            CredentialStatus::Rejected => "rejected",
        }
    }

    /// Display glyph used only when rendering summaries.
    pub const fn glyph(self) -> &'static str {
        match self {
            CredentialStatus::Accepted => "✔",
            CredentialStatus::Partial => "⟳",
            CredentialStatus::Rejected => "✖",
        }
    }
}

/// Criteria checked by the mapping engine.
///
/// `Cfpc` and `Rcpsc` are role-specific: a report carries exactly one of
/// them depending on the applicant's stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Degree,
    Internship,
    Mccqe1,
    Lmcc,
    Cfpc,
    Rcpsc,
    ProvincialLicence,
    Cmpa,
}

impl Criterion {
    pub const fn key(self) -> &'static str {
        match self {
            Criterion::Degree => "degree",
            Criterion::Internship => "internship",
            Criterion::Mccqe1 => "mccqe1",
            Criterion::Lmcc => "lmcc",
            Criterion::Cfpc => "cfpc",
            Criterion::Rcpsc => "rcpsc",
            Criterion::ProvincialLicence => "provincial_licence",
            Criterion::Cmpa => "cmpa",
        }
    }
}

/// High level status tracked for a licensure case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicensureCaseStatus {
    Submitted,
    Cleared,
    ActionRequired,
}

impl LicensureCaseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            LicensureCaseStatus::Submitted => "submitted",
            LicensureCaseStatus::Cleared => "cleared",
            LicensureCaseStatus::ActionRequired => "action_required",
        }
    }
}

/// Pointer to an uploaded document held by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentReference {
    pub file_name: String,
    pub content_type: String,
    pub storage_key: String,
}

/// Inbound payload for opening a licensure case.
///
/// Either `attested` or `resume` must be present; attested data always wins
/// and the resume is only forwarded to the extraction collaborator when the
/// applicant supplied nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorSubmission {
    pub full_name: String,
    pub country_of_origin: String,
    pub years_experience: u32,
    pub location: String,
    #[serde(default)]
    pub attested: Option<Applicant>,
    #[serde(default)]
    pub resume: Option<DocumentReference>,
}
