//! Integration specifications for the doctor/job matching workflow,
//! including CSV-imported postings.

use std::io::Cursor;

use chrono::{TimeZone, Utc};
use medbridge::workflows::matching::{
    explain_match, match_doctor_to_jobs, match_job_to_doctors, DoctorProfile, JobPosting,
    JobPostingImporter,
};

fn doctor(id: &str, translated_credentials: &str) -> DoctorProfile {
    DoctorProfile {
        id: id.to_string(),
        full_name: "Dr. Arjun Mehta".to_string(),
        country_of_origin: "India".to_string(),
        credentials: translated_credentials.to_string(),
        translated_credentials: translated_credentials.to_string(),
        years_experience: 9,
        location: "Vancouver, BC".to_string(),
    }
}

fn posting(id: &str, requirements: &str) -> JobPosting {
    let stamp = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
    JobPosting {
        id: id.to_string(),
        hospital_id: "vgh".to_string(),
        title: "General Surgeon".to_string(),
        description: "Full-time surgical position".to_string(),
        requirements: requirements.to_string(),
        location: "Vancouver, BC".to_string(),
        created_at: stamp,
        updated_at: stamp,
    }
}

#[test]
fn doctor_matches_an_identical_posting_perfectly() {
    let matches = match_doctor_to_jobs(
        &doctor("doc-1", "MD, General Surgery"),
        &[posting("job-1", "MD, General Surgery")],
    );

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].match_score, 100);
    assert!(matches[0].missing_requirements.is_none());
}

#[test]
fn both_directions_agree_on_coverage() {
    let doctors = vec![
        doctor("doc-1", "MD, General Surgery"),
        doctor("doc-2", "MD"),
        doctor("doc-3", "Pediatrics"),
    ];
    let target = posting("job-1", "MD, General Surgery");

    let doctor_matches = match_job_to_doctors(&target, &doctors);
    assert_eq!(doctor_matches.len(), 2);
    assert_eq!(doctor_matches[0].match_score, 100);
    assert_eq!(doctor_matches[1].match_score, 50);
    assert_eq!(
        doctor_matches[1].missing_qualifications,
        Some(vec!["general surgery".to_string()])
    );

    let job_matches = match_doctor_to_jobs(&doctors[1], &[target.clone()]);
    assert_eq!(job_matches[0].match_score, 50);
}

#[test]
fn imported_postings_flow_straight_into_the_matcher() {
    let csv = "Job ID,Hospital ID,Title,Description,Requirements,Location,Posted At\n\
               job-1,vgh,General Surgeon,Full-time,\"MD, General Surgery\",Vancouver,2025-06-01\n\
               job-2,sickkids,Pediatric Hospitalist,Inpatient,\"MD, Pediatrics\",Toronto,2025-06-02\n\
               job-3,foothills,Emergency Physician,Shifts,\"Radiology Fellowship\",Calgary,2025-06-03\n";

    let postings = JobPostingImporter::from_reader(Cursor::new(csv)).expect("import succeeds");
    assert_eq!(postings.len(), 3);

    let matches = match_doctor_to_jobs(&doctor("doc-1", "MD, General Surgery"), &postings);

    // job-3 has no overlap and is dropped; job-2 keeps a 50% footprint.
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].job_posting.id, "job-1");
    assert_eq!(matches[0].match_score, 100);
    assert_eq!(matches[1].job_posting.id, "job-2");
    assert_eq!(matches[1].match_score, 50);
}

#[test]
fn explanation_covers_zero_score_pairs_the_list_api_drops() {
    let surgeon = doctor("doc-1", "MD, General Surgery");
    let unrelated = posting("job-9", "Radiology Fellowship");

    assert!(match_doctor_to_jobs(&surgeon, &[unrelated.clone()]).is_empty());

    let explanation = explain_match(&surgeon, &unrelated);
    assert_eq!(explanation.match_score, 0);
    assert_eq!(
        explanation.missing_requirements,
        vec!["radiology fellowship".to_string()]
    );
    assert!(explanation.explanation.contains("Met: [N/A]"));
}
