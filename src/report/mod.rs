//! Result artifacts and console report
//!
//! Writes the per-job detail list and the aggregate summary as JSON,
//! and prints the breakdown report.

pub mod summary;

pub use summary::{build_summary, LabelCount, Summary};

use crate::classifier::JobClassification;
use crate::error::Result;
use std::path::Path;

pub const DETAIL_FILE_NAME: &str = "job_classification.json";
pub const SUMMARY_FILE_NAME: &str = "classification_summary.json";

/// Sort results by job number for presentation
///
/// Numeric job numbers sort first in ascending order; non-numeric ones
/// go last, keeping their relative input order.
pub fn sort_by_job_number(results: &mut [JobClassification]) {
    results.sort_by_key(|r| match r.job_number.parse::<u64>() {
        Ok(n) => (false, n),
        Err(_) => (true, 0),
    });
}

/// Write the per-job detail artifact
pub fn write_detail(results: &[JobClassification], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(results)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Write the summary artifact
pub fn write_summary(summary: &Summary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Read a detail artifact back, for re-reporting
pub fn read_detail(path: &Path) -> Result<Vec<JobClassification>> {
    if !path.exists() {
        return Err(crate::error::JobReclassError::FileNotFound(
            path.display().to_string(),
        ));
    }
    let content = std::fs::read_to_string(path)?;
    let results = serde_json::from_str(&content)?;
    Ok(results)
}

/// Print the breakdown report
pub fn print_summary(summary: &Summary) {
    println!("Total jobs analyzed: {}", summary.total_jobs);
    println!(
        "Jobs needing reclassification: {} ({}%)",
        summary.jobs_needing_reclassification, summary.percentage_needing_change
    );

    println!("\nWork Type Breakdown:");
    for row in &summary.work_type_breakdown {
        println!("  {}: {}", row.label, row.count);
    }

    println!("\nUrgency Breakdown:");
    for row in &summary.urgency_breakdown {
        println!("  {}: {}", row.label, row.count);
    }

    println!("\nProperty Type Breakdown:");
    for row in &summary.property_type_breakdown {
        println!("  {}: {}", row.label, row.count);
    }

    if !summary.changes_by_category.is_empty() {
        println!("\nChanges by Category:");
        for row in &summary.changes_by_category {
            println!("  {}: {}", row.label, row.count);
        }
    }
}
