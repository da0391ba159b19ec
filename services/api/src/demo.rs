use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use medbridge::error::AppError;
use medbridge::workflows::licensure::{
    Applicant, ApplicantRole, DoctorSubmission, LicensureCaseService, MappingEngine,
};
use medbridge::workflows::matching::{
    explain_match, match_doctor_to_jobs, DoctorProfile, JobPosting, JobPostingImporter,
};

use crate::infra::{InMemoryAlertPublisher, InMemoryCaseRepository, UnconfiguredExtractor};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional hospital CSV export to hydrate the matching demo
    #[arg(long)]
    pub(crate) postings_csv: Option<PathBuf>,
    /// Skip the matching portion of the demo
    #[arg(long)]
    pub(crate) skip_matching: bool,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Path to an applicant JSON document
    #[arg(long)]
    pub(crate) applicant: PathBuf,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.applicant)?;
    let applicant: Applicant = serde_json::from_str(&raw)?;

    let engine = MappingEngine::standard();
    let report = engine.evaluate(&applicant)?;

    println!("{}", report.summary);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("MedBridge demo");

    let repository = Arc::new(InMemoryCaseRepository::default());
    let alerts = Arc::new(InMemoryAlertPublisher::default());
    let service = Arc::new(LicensureCaseService::new(
        repository,
        alerts.clone(),
        Arc::new(UnconfiguredExtractor),
        MappingEngine::standard(),
    ));

    for applicant in [demo_specialist(), demo_cleared_gp()] {
        let submission = demo_submission(applicant);
        let record = match service.submit(submission) {
            Ok(record) => record,
            Err(err) => {
                println!("  Submission rejected: {}", err);
                continue;
            }
        };
        println!(
            "\nCase {} — {} trained in {}",
            record.case_id.0, record.submission.full_name, record.applicant.country
        );

        match service.evaluate(&record.case_id) {
            Ok(report) => println!("{}", indent(&report.summary)),
            Err(err) => {
                println!("  Evaluation unavailable: {}", err);
                continue;
            }
        }

        match service.get(&record.case_id) {
            Ok(record) => match serde_json::to_string_pretty(&record.status_view()) {
                Ok(json) => println!("  Public status payload:\n{}", json),
                Err(err) => println!("  Public status payload unavailable: {}", err),
            },
            Err(err) => println!("  Case lookup unavailable: {}", err),
        }
    }

    let events = alerts.events();
    if events.is_empty() {
        println!("\nExternal alerts: none dispatched");
    } else {
        println!("\nExternal alerts:");
        for alert in events {
            println!("  - template={} -> {}", alert.template, alert.case_id.0);
        }
    }

    if args.skip_matching {
        return Ok(());
    }

    println!("\nMatching demo");
    let doctor = demo_doctor();
    let postings = match args.postings_csv {
        Some(path) => JobPostingImporter::from_path(path)?,
        None => demo_postings(),
    };
    println!(
        "Doctor {} offers: {}",
        doctor.full_name, doctor.translated_credentials
    );

    let matches = match_doctor_to_jobs(&doctor, &postings);
    if matches.is_empty() {
        println!("- No postings overlap the doctor's credentials");
    }
    for entry in &matches {
        println!(
            "- {} at {} ({}): {}% — {}",
            entry.job_posting.title,
            entry.job_posting.hospital_id,
            entry.job_posting.location,
            entry.match_score,
            entry.explanation
        );
        if let Some(missing) = &entry.missing_requirements {
            println!("  Missing: {}", missing.join(", "));
        }
    }

    if let Some(first) = postings.first() {
        let explanation = explain_match(&doctor, first);
        println!("\nFirst posting breakdown:\n  {}", explanation.explanation);
    }

    Ok(())
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn demo_specialist() -> Applicant {
    Applicant {
        country: "India".to_string(),
        degree_verified: true,
        internship_months: 12,
        has_mccqe1: false,
        role: ApplicantRole::Specialist,
        foreign_specialty_cert: Some("MD General Surgery (MCI)".to_string()),
        cfpc_certified: false,
        province_licence: false,
        cmpa: false,
    }
}

fn demo_cleared_gp() -> Applicant {
    Applicant {
        country: "UK".to_string(),
        degree_verified: true,
        internship_months: 24,
        has_mccqe1: true,
        role: ApplicantRole::GeneralPractitioner,
        foreign_specialty_cert: Some("MRCGP".to_string()),
        cfpc_certified: true,
        province_licence: true,
        cmpa: true,
    }
}

fn demo_submission(applicant: Applicant) -> DoctorSubmission {
    let full_name = match applicant.role {
        ApplicantRole::GeneralPractitioner => "Dr. Eleanor Byrne",
        ApplicantRole::Specialist => "Dr. Arjun Mehta",
    };

    DoctorSubmission {
        full_name: full_name.to_string(),
        country_of_origin: applicant.country.clone(),
        years_experience: 9,
        location: "Vancouver, BC".to_string(),
        attested: Some(applicant),
        resume: None,
    }
}

fn demo_doctor() -> DoctorProfile {
    DoctorProfile {
        id: "doc-001".to_string(),
        full_name: "Dr. Arjun Mehta".to_string(),
        country_of_origin: "India".to_string(),
        credentials: "MBBS, MS General Surgery".to_string(),
        translated_credentials: "MD, General Surgery, ACLS".to_string(),
        years_experience: 9,
        location: "Vancouver, BC".to_string(),
    }
}

fn demo_postings() -> Vec<JobPosting> {
    let stamp = Utc::now();
    vec![
        JobPosting {
            id: "job-001".to_string(),
            hospital_id: "vgh".to_string(),
            title: "General Surgeon".to_string(),
            description: "Full-time surgical position".to_string(),
            requirements: "MD, General Surgery".to_string(),
            location: "Vancouver, BC".to_string(),
            created_at: stamp,
            updated_at: stamp,
        },
        JobPosting {
            id: "job-002".to_string(),
            hospital_id: "sickkids".to_string(),
            title: "Pediatric Hospitalist".to_string(),
            description: "Inpatient pediatrics coverage".to_string(),
            requirements: "MD, Pediatrics, PALS".to_string(),
            location: "Toronto, ON".to_string(),
            created_at: stamp,
            updated_at: stamp,
        },
        JobPosting {
            id: "job-003".to_string(),
            hospital_id: "foothills".to_string(),
            title: "Emergency Physician".to_string(),
            description: "Rotating ED shifts".to_string(),
            requirements: "Radiology Fellowship".to_string(),
            location: "Calgary, AB".to_string(),
            created_at: stamp,
            updated_at: stamp,
        },
    ]
}
