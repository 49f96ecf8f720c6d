//! Job record ingestion
//!
//! Reads the exported jobs array and validates every record at the
//! boundary, so classification never sees a malformed job.

use crate::error::{JobReclassError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One job record as exported from the job management system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Job number; usually numeric, but free-form identifiers occur
    pub generated_job_id: String,

    /// Opaque category identifier; empty when no category is assigned
    #[serde(default)]
    pub category_uuid: String,

    pub job_description: String,

    /// Site address; absent on office-time and quote entries
    #[serde(default)]
    pub job_address: Option<String>,

    pub total_invoice_amount: f64,

    pub status: String,
}

/// Load and validate a jobs array from a JSON file
///
/// Each record is validated individually so a bad entry reports its
/// index instead of failing somewhere inside classification.
pub fn load_jobs(path: &Path) -> Result<Vec<JobRecord>> {
    if !path.exists() {
        return Err(JobReclassError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let raw: Vec<serde_json::Value> = serde_json::from_str(&content)?;

    let mut jobs = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        let job: JobRecord = serde_json::from_value(value)
            .map_err(|e| JobReclassError::InvalidRecord {
                index,
                reason: e.to_string(),
            })?;
        jobs.push(job);
    }

    Ok(jobs)
}
