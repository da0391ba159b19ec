use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

use super::domain::JobPosting;

/// Failures raised while importing a hospital's posting export.
#[derive(Debug, thiserror::Error)]
pub enum JobImportError {
    #[error("failed to read postings export: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed postings export: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },
    #[error("row {row}: unparseable timestamp '{value}'")]
    InvalidTimestamp { row: usize, value: String },
}

/// Importer for hospital job-posting CSV exports.
///
/// Expected columns: "Job ID", "Hospital ID", "Title", "Description",
/// "Requirements", "Location", "Posted At". Requirements stay a raw
/// comma-delimited string; tokenization happens in the matching engine.
pub struct JobPostingImporter;

impl JobPostingImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<JobPosting>, JobImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<JobPosting>, JobImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut postings = Vec::new();
        for (index, record) in csv_reader.deserialize::<PostingRow>().enumerate() {
            let row = record?;
            postings.push(row.into_posting(index + 1)?);
        }

        Ok(postings)
    }
}

#[derive(Debug, Deserialize)]
struct PostingRow {
    #[serde(rename = "Job ID")]
    id: String,
    #[serde(rename = "Hospital ID")]
    hospital_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Requirements", default, deserialize_with = "empty_string_as_none")]
    requirements: Option<String>,
    #[serde(rename = "Location", default)]
    location: String,
    #[serde(rename = "Posted At", default, deserialize_with = "empty_string_as_none")]
    posted_at: Option<String>,
}

impl PostingRow {
    fn into_posting(self, row: usize) -> Result<JobPosting, JobImportError> {
        if self.id.is_empty() {
            return Err(JobImportError::MissingField {
                row,
                field: "Job ID",
            });
        }
        if self.title.is_empty() {
            return Err(JobImportError::MissingField { row, field: "Title" });
        }
        let requirements = self.requirements.ok_or(JobImportError::MissingField {
            row,
            field: "Requirements",
        })?;

        // Exports without a timestamp are stamped at import time.
        let posted_at = match self.posted_at.as_deref() {
            Some(raw) => {
                parse_timestamp(raw).ok_or_else(|| JobImportError::InvalidTimestamp {
                    row,
                    value: raw.to_string(),
                })?
            }
            None => Utc::now(),
        };

        Ok(JobPosting {
            id: self.id,
            hospital_id: self.hospital_id,
            title: self.title,
            description: self.description,
            requirements,
            location: self.location,
            created_at: posted_at,
            updated_at: posted_at,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(stamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(stamp.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }

    None
}
