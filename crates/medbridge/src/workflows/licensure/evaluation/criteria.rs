use super::super::domain::{Applicant, ApplicantRole, CredentialStatus, Criterion};
use super::super::rules::CountryRule;

/// Remediation texts surfaced to applicants.
pub(crate) mod actions {
    pub const VERIFY_DEGREE: &str = "Verify primary medical degree";
    pub const RESIDENCY: &str = "Match to a Canadian residency / PRA programme";
    pub const MCCQE1: &str = "Pass MCCQE Part I";
    pub const LMCC: &str = "Obtain LMCC (via MCCQE I + 12 mos verified PG training)";
    pub const CFPC_EXAM: &str = "Sit CFPC Certification Exam";
    pub const CFPC_PAPERWORK: &str = "Apply for CFPC certificate without exam";
    pub const RCPSC_EXAM: &str = "Sit RCPSC Specialty Exam";
    pub const RCPSC_ASSESSMENT: &str = "Apply to RCPSC Approved-Jurisdiction Route";
    pub const PROVINCIAL_LICENCE: &str = "Apply for full provincial licence (e.g., CPSBC)";
    pub const CMPA: &str = "Purchase CMPA professional-liability coverage";
}

/// LMCC requires MCCQE Part I plus twelve verified post-graduate months,
/// independent of the country minimum.
pub(crate) const LMCC_TRAINING_FLOOR_MONTHS: u32 = 12;

/// Certificate marker that unlocks the CFPC exam waiver in eligible
/// countries.
const GP_WAIVER_MARKER: &str = "MRCGP";

/// Result of one criterion check: the recorded status plus an optional gap
/// action. A criterion can be accepted and still carry an action (the CFPC
/// waiver leaves the certificate application outstanding).
pub(crate) struct Finding {
    pub(crate) criterion: Criterion,
    pub(crate) status: CredentialStatus,
    pub(crate) action: Option<String>,
}

impl Finding {
    fn accepted(criterion: Criterion) -> Self {
        Self {
            criterion,
            status: CredentialStatus::Accepted,
            action: None,
        }
    }

    fn partial(criterion: Criterion, action: &str) -> Self {
        Self {
            criterion,
            status: CredentialStatus::Partial,
            action: Some(action.to_string()),
        }
    }

    fn rejected(criterion: Criterion, action: &str) -> Self {
        Self {
            criterion,
            status: CredentialStatus::Rejected,
            action: Some(action.to_string()),
        }
    }
}

pub(crate) struct CheckContext<'a> {
    pub(crate) applicant: &'a Applicant,
    pub(crate) rule: &'a CountryRule,
}

pub(crate) type CriterionCheck = fn(&CheckContext<'_>) -> Finding;

/// The fixed pipeline. Evaluation order is the order gap actions appear in
/// the report; adding or removing a criterion is a one-line change here.
pub(crate) const PIPELINE: &[CriterionCheck] = &[
    degree,
    internship,
    mccqe1,
    lmcc,
    certification,
    provincial_licence,
    cmpa,
];

fn degree(ctx: &CheckContext<'_>) -> Finding {
    if ctx.applicant.degree_verified {
        Finding::accepted(Criterion::Degree)
    } else {
        Finding::rejected(Criterion::Degree, actions::VERIFY_DEGREE)
    }
}

fn internship(ctx: &CheckContext<'_>) -> Finding {
    if ctx.applicant.internship_months >= ctx.rule.minimum_training_months {
        Finding::accepted(Criterion::Internship)
    } else {
        Finding::rejected(Criterion::Internship, actions::RESIDENCY)
    }
}

fn mccqe1(ctx: &CheckContext<'_>) -> Finding {
    if ctx.applicant.has_mccqe1 {
        Finding::accepted(Criterion::Mccqe1)
    } else {
        Finding::rejected(Criterion::Mccqe1, actions::MCCQE1)
    }
}

// LMCC is never rejected: an applicant short of the exam or the training
// floor is still on the pathway, just not there yet.
fn lmcc(ctx: &CheckContext<'_>) -> Finding {
    let eligible = ctx.applicant.has_mccqe1
        && ctx.applicant.internship_months >= LMCC_TRAINING_FLOOR_MONTHS;
    if eligible {
        Finding::accepted(Criterion::Lmcc)
    } else {
        Finding::partial(Criterion::Lmcc, actions::LMCC)
    }
}

fn certification(ctx: &CheckContext<'_>) -> Finding {
    match ctx.applicant.role {
        ApplicantRole::GeneralPractitioner => certify_general_practitioner(ctx),
        ApplicantRole::Specialist => certify_specialist(ctx),
    }
}

fn certify_general_practitioner(ctx: &CheckContext<'_>) -> Finding {
    let waiver = ctx.rule.gp_exam_waiver_eligible
        && ctx
            .applicant
            .foreign_specialty_cert
            .as_deref()
            .map_or(false, holds_waiver_certificate);

    if waiver {
        // Eligible without the exam, but the certificate application itself
        // is still outstanding.
        Finding {
            criterion: Criterion::Cfpc,
            status: CredentialStatus::Accepted,
            action: Some(actions::CFPC_PAPERWORK.to_string()),
        }
    } else if ctx.applicant.cfpc_certified {
        Finding::accepted(Criterion::Cfpc)
    } else {
        Finding::rejected(Criterion::Cfpc, actions::CFPC_EXAM)
    }
}

fn certify_specialist(ctx: &CheckContext<'_>) -> Finding {
    if ctx.rule.specialist_approved_jurisdiction {
        Finding::partial(Criterion::Rcpsc, actions::RCPSC_ASSESSMENT)
    } else {
        Finding::rejected(Criterion::Rcpsc, actions::RCPSC_EXAM)
    }
}

fn provincial_licence(ctx: &CheckContext<'_>) -> Finding {
    if ctx.applicant.province_licence {
        Finding::accepted(Criterion::ProvincialLicence)
    } else {
        Finding::rejected(Criterion::ProvincialLicence, actions::PROVINCIAL_LICENCE)
    }
}

fn cmpa(ctx: &CheckContext<'_>) -> Finding {
    if ctx.applicant.cmpa {
        Finding::accepted(Criterion::Cmpa)
    } else {
        Finding::rejected(Criterion::Cmpa, actions::CMPA)
    }
}

fn holds_waiver_certificate(cert: &str) -> bool {
    cert.to_ascii_uppercase().contains(GP_WAIVER_MARKER)
}
