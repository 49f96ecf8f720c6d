//! Job classification module
//!
//! Re-tags a job record along three independent dimensions and derives
//! the recommended business category.
//!
//! ## Flow
//! 1. Work type from the description (ordered keyword lists)
//! 2. Urgency tier from the description, falling back to the current category
//! 3. Property type from description + address
//! 4. Recommended category from work type (and urgency, per policy)

pub mod category;
pub mod keywords;
pub mod property;
pub mod types;
pub mod urgency;
pub mod work_type;

pub use category::{determine_recommended_category, CategoryLabel, CategoryMap, CategoryPolicy};
pub use property::{classify_property_type, PropertyRules, PropertyType};
pub use types::JobClassification;
pub use urgency::{classify_urgency_level, UrgencyLevel, UrgencyRules};
pub use work_type::{classify_work_type, WorkType, WorkTypeRules};

use crate::loader::JobRecord;

/// The full rule tables, one set per dimension
///
/// Built once and passed in by reference.
#[derive(Debug, Clone)]
pub struct Rules {
    pub work_type: WorkTypeRules,
    pub urgency: UrgencyRules,
    pub property: PropertyRules,
}

impl Rules {
    pub fn standard() -> Self {
        Self {
            work_type: WorkTypeRules::standard(),
            urgency: UrgencyRules::standard(),
            property: PropertyRules::standard(),
        }
    }
}

lazy_static::lazy_static! {
    /// Standard rule tables compiled once per process
    pub static ref STANDARD_RULES: Rules = Rules::standard();
}

/// Per-run classification settings
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// How urgency feeds into the recommended category
    pub policy: CategoryPolicy,
    /// Description snippet length in chars for the detail artifact
    /// (0 keeps the full text)
    pub snippet_chars: usize,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            policy: CategoryPolicy::default(),
            snippet_chars: 200,
        }
    }
}

/// Classify one job record
///
/// # Arguments
/// * `job` - validated input record
/// * `rules` - keyword rule tables
/// * `categories` - category identifier lookup table
/// * `options` - per-run settings
pub fn classify_record(
    job: &JobRecord,
    rules: &Rules,
    categories: &CategoryMap,
    options: &ClassifyOptions,
) -> JobClassification {
    let current_category = categories.lookup(&job.category_uuid);

    let work_type = classify_work_type(&job.job_description, &rules.work_type);
    let urgency_level = classify_urgency_level(
        &job.job_description,
        &job.status,
        current_category,
        &rules.urgency,
    );
    let property_type = classify_property_type(
        &job.job_description,
        job.job_address.as_deref(),
        &rules.property,
    );

    let recommended_category =
        determine_recommended_category(work_type, urgency_level, options.policy);

    JobClassification {
        job_number: job.generated_job_id.clone(),
        current_category,
        work_type,
        urgency_level,
        property_type,
        recommended_category,
        needs_change: current_category != recommended_category,
        job_description_snippet: snippet(&job.job_description, options.snippet_chars),
        job_address: job.job_address.clone().unwrap_or_default(),
        amount: job.total_invoice_amount,
        status: job.status.clone(),
        classification_logic: format!(
            "{} + {} + {} -> {}",
            work_type, urgency_level, property_type, recommended_category
        ),
    }
}

/// Truncate a description for the detail artifact, on a char boundary
fn snippet(text: &str, max_chars: usize) -> String {
    if max_chars == 0 || text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated)
}
