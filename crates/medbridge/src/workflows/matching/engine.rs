use std::collections::HashSet;

use super::domain::{DoctorMatch, DoctorProfile, JobPosting, JobPostingMatch, MatchExplanation};

/// Split a comma-delimited credential or requirement string into comparable
/// tokens: trimmed, lowercased, empties dropped.
fn tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Requirement coverage of one credential string against one requirement
/// string, shared by both matching directions and by `explain_match`.
struct RequirementCoverage {
    met: Vec<String>,
    missing: Vec<String>,
    total: usize,
}

impl RequirementCoverage {
    fn of(credentials: &str, requirements: &str) -> Self {
        let held: HashSet<String> = tokens(credentials).into_iter().collect();
        let required = tokens(requirements);
        let total = required.len();
        let (met, missing) = required
            .into_iter()
            .partition(|requirement| held.contains(requirement));

        Self { met, missing, total }
    }

    fn matched(&self) -> usize {
        self.total - self.missing.len()
    }

    /// Integer percentage of requirements met, rounded half-up. Zero
    /// requirements score zero rather than dividing by zero.
    fn score(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        ((self.matched() as f64 / self.total as f64) * 100.0).round() as u8
    }

    /// `None` when nothing is missing — callers never see an empty list.
    fn into_missing(self) -> Option<Vec<String>> {
        if self.missing.is_empty() {
            None
        } else {
            Some(self.missing)
        }
    }
}

/// Score every posting against one doctor's translated credentials.
/// Zero-score postings are dropped.
pub fn match_doctor_to_jobs(
    doctor: &DoctorProfile,
    postings: &[JobPosting],
) -> Vec<JobPostingMatch> {
    postings
        .iter()
        .filter_map(|posting| {
            let coverage =
                RequirementCoverage::of(&doctor.translated_credentials, &posting.requirements);
            let score = coverage.score();
            if score == 0 {
                return None;
            }

            let matched = coverage.matched();
            let total = coverage.total;
            Some(JobPostingMatch {
                job_posting: posting.clone(),
                match_score: score,
                missing_requirements: coverage.into_missing(),
                explanation: format!("Matched {matched} out of {total} requirements."),
            })
        })
        .collect()
}

/// Score every doctor against one posting's requirements. Zero-score
/// doctors are dropped.
pub fn match_job_to_doctors(posting: &JobPosting, doctors: &[DoctorProfile]) -> Vec<DoctorMatch> {
    doctors
        .iter()
        .filter_map(|doctor| {
            let coverage =
                RequirementCoverage::of(&doctor.translated_credentials, &posting.requirements);
            let score = coverage.score();
            if score == 0 {
                return None;
            }

            let matched = coverage.matched();
            let total = coverage.total;
            Some(DoctorMatch {
                doctor_profile: doctor.clone(),
                match_score: score,
                missing_qualifications: coverage.into_missing(),
                explanation: format!("Doctor matches {matched} out of {total} requirements."),
            })
        })
        .collect()
}

/// Full breakdown for a single doctor/posting pair. Unlike the list
/// variants, a zero score is still returned.
pub fn explain_match(doctor: &DoctorProfile, posting: &JobPosting) -> MatchExplanation {
    let coverage = RequirementCoverage::of(&doctor.translated_credentials, &posting.requirements);
    let matched = coverage.matched();
    let total = coverage.total;

    MatchExplanation {
        match_score: coverage.score(),
        explanation: format!(
            "Doctor matches {matched} out of {total} requirements. Met: [{}]. Missing: [{}]",
            display_list(&coverage.met),
            display_list(&coverage.missing),
        ),
        suggested_improvements: if coverage.missing.is_empty() {
            None
        } else {
            Some(coverage.missing.clone())
        },
        met_requirements: coverage.met,
        missing_requirements: coverage.missing,
    }
}

/// Comma-joined tokens, with the literal `N/A` placeholder for empty lists.
fn display_list(tokens: &[String]) -> String {
    if tokens.is_empty() {
        "N/A".to_string()
    } else {
        tokens.join(", ")
    }
}
