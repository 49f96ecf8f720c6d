use super::category::CategoryLabel;
use super::property::PropertyType;
use super::urgency::UrgencyLevel;
use super::work_type::WorkType;
use serde::{Deserialize, Serialize};

/// Per-job classification verdict, one entry of the detail artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobClassification {
    pub job_number: String,

    pub current_category: CategoryLabel,

    pub work_type: WorkType,

    pub urgency_level: UrgencyLevel,

    pub property_type: PropertyType,

    pub recommended_category: CategoryLabel,

    pub needs_change: bool,

    pub job_description_snippet: String,

    #[serde(default)]
    pub job_address: String,

    pub amount: f64,

    pub status: String,

    /// Human-readable trace of how the recommendation was derived
    pub classification_logic: String,
}
