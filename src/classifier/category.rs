//! Category taxonomy
//!
//! The business category labels, the static UUID-to-label map of the
//! upstream job feed, and the final category recommendation.

use super::urgency::UrgencyLevel;
use super::work_type::WorkType;
use crate::error::{JobReclassError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Business category label
///
/// Covers every label the upstream feed can carry plus the two
/// sentinels: `NoCategoryAssigned` for an empty identifier and
/// `Unknown` for an identifier missing from the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryLabel {
    #[serde(rename = "No Category Assigned")]
    NoCategoryAssigned,
    #[serde(rename = "Urgent")]
    Urgent,
    #[serde(rename = "Electrical")]
    Electrical,
    #[serde(rename = "Make Safe")]
    MakeSafe,
    #[serde(rename = "Solar, Battery, Standalone")]
    SolarBatteryStandalone,
    #[serde(rename = "Admin office time & Quotes")]
    AdminOfficeTimeQuotes,
    #[serde(rename = "Level Two")]
    LevelTwo,
    #[serde(rename = "Security, CCTV, Access control")]
    SecurityCctvAccessControl,
    #[serde(rename = "Data, Phone")]
    DataPhone,
    #[serde(rename = "AC install")]
    AcInstall,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl std::fmt::Display for CategoryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CategoryLabel::NoCategoryAssigned => "No Category Assigned",
            CategoryLabel::Urgent => "Urgent",
            CategoryLabel::Electrical => "Electrical",
            CategoryLabel::MakeSafe => "Make Safe",
            CategoryLabel::SolarBatteryStandalone => "Solar, Battery, Standalone",
            CategoryLabel::AdminOfficeTimeQuotes => "Admin office time & Quotes",
            CategoryLabel::LevelTwo => "Level Two",
            CategoryLabel::SecurityCctvAccessControl => "Security, CCTV, Access control",
            CategoryLabel::DataPhone => "Data, Phone",
            CategoryLabel::AcInstall => "AC install",
            CategoryLabel::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

impl std::str::FromStr for CategoryLabel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "No Category Assigned" => Ok(CategoryLabel::NoCategoryAssigned),
            "Urgent" => Ok(CategoryLabel::Urgent),
            "Electrical" => Ok(CategoryLabel::Electrical),
            "Make Safe" => Ok(CategoryLabel::MakeSafe),
            "Solar, Battery, Standalone" => Ok(CategoryLabel::SolarBatteryStandalone),
            "Admin office time & Quotes" => Ok(CategoryLabel::AdminOfficeTimeQuotes),
            "Level Two" => Ok(CategoryLabel::LevelTwo),
            "Security, CCTV, Access control" => Ok(CategoryLabel::SecurityCctvAccessControl),
            "Data, Phone" => Ok(CategoryLabel::DataPhone),
            "AC install" => Ok(CategoryLabel::AcInstall),
            "Unknown" => Ok(CategoryLabel::Unknown),
            _ => Err(format!("Unknown category label: {}", s)),
        }
    }
}

/// Upstream category identifiers and their labels
const STANDARD_CATEGORIES: &[(&str, CategoryLabel)] = &[
    ("", CategoryLabel::NoCategoryAssigned),
    ("e459d11f-e77e-4b57-9daf-1f4c5f8aa52b", CategoryLabel::Urgent),
    ("9b87f18b-5e5c-486f-99e5-1f4c5a3460fb", CategoryLabel::Electrical),
    ("4e7b2af8-44a8-4570-b4cc-20deaa28a65b", CategoryLabel::MakeSafe),
    ("080733e2-a30a-4553-9e40-1f47cec7f6cb", CategoryLabel::SolarBatteryStandalone),
    ("5f08a40b-f578-465d-b3ee-1f4c5e4d900b", CategoryLabel::AdminOfficeTimeQuotes),
    ("cfc84630-8c27-48cc-b6aa-1f47cfefaffb", CategoryLabel::LevelTwo),
    ("75a20c1b-bc57-4251-92cf-21eca071128b", CategoryLabel::SecurityCctvAccessControl),
    ("067bdf55-7332-4103-9f72-1f4c5e18c70b", CategoryLabel::DataPhone),
];

/// Category identifier lookup table
///
/// Configuration data, built once and passed into the pipeline.
#[derive(Debug, Clone)]
pub struct CategoryMap {
    entries: HashMap<String, CategoryLabel>,
}

impl CategoryMap {
    /// The fixed table of the upstream job feed
    pub fn standard() -> Self {
        let entries = STANDARD_CATEGORIES
            .iter()
            .map(|(uuid, label)| (uuid.to_string(), *label))
            .collect();
        Self { entries }
    }

    /// Load a custom table from a flat `{identifier: label}` JSON object
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(JobReclassError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let raw: HashMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| JobReclassError::InvalidCategoryMap(format!("JSON parse error: {}", e)))?;

        let mut entries = HashMap::new();
        for (uuid, label) in raw {
            let label: CategoryLabel = label
                .parse()
                .map_err(JobReclassError::InvalidCategoryMap)?;
            entries.insert(uuid, label);
        }

        Ok(Self { entries })
    }

    /// Resolve an identifier to its label
    ///
    /// The empty identifier resolves through its own table entry;
    /// anything absent from the table resolves to `Unknown`.
    pub fn lookup(&self, category_uuid: &str) -> CategoryLabel {
        self.entries
            .get(category_uuid)
            .copied()
            .unwrap_or(CategoryLabel::Unknown)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        Self::standard()
    }
}

/// How urgency feeds into the recommended category for electrical work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryPolicy {
    /// Electrical work always recommends Electrical; urgency is
    /// tracked in its own field
    #[default]
    #[serde(rename = "work-type")]
    WorkTypeOnly,
    /// Emergency/Urgent electrical work recommends the Urgent category
    #[serde(rename = "urgency-aware")]
    UrgencyAware,
}

impl std::str::FromStr for CategoryPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "work-type" | "worktype" => Ok(CategoryPolicy::WorkTypeOnly),
            "urgency-aware" | "urgency" => Ok(CategoryPolicy::UrgencyAware),
            _ => Err(format!("Unknown policy: {}. Use work-type or urgency-aware", s)),
        }
    }
}

impl std::fmt::Display for CategoryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryPolicy::WorkTypeOnly => write!(f, "work-type"),
            CategoryPolicy::UrgencyAware => write!(f, "urgency-aware"),
        }
    }
}

/// Map a work type (and optionally urgency) onto the category taxonomy
pub fn determine_recommended_category(
    work_type: WorkType,
    urgency_level: UrgencyLevel,
    policy: CategoryPolicy,
) -> CategoryLabel {
    match work_type {
        WorkType::MakeSafe => CategoryLabel::MakeSafe,
        WorkType::LevelTwo => CategoryLabel::LevelTwo,
        WorkType::SolarBattery => CategoryLabel::SolarBatteryStandalone,
        WorkType::Admin => CategoryLabel::AdminOfficeTimeQuotes,
        WorkType::SecurityCctv => CategoryLabel::SecurityCctvAccessControl,
        WorkType::DataPhone => CategoryLabel::DataPhone,
        WorkType::AirConditioning => CategoryLabel::AcInstall,
        WorkType::Electrical => match policy {
            CategoryPolicy::WorkTypeOnly => CategoryLabel::Electrical,
            CategoryPolicy::UrgencyAware => match urgency_level {
                UrgencyLevel::Emergency | UrgencyLevel::Urgent => CategoryLabel::Urgent,
                UrgencyLevel::Standard | UrgencyLevel::Planned => CategoryLabel::Electrical,
            },
        },
    }
}
