//! Work-type classification
//!
//! Determines the kind of labor a job describes. Rule lists are tested
//! in a fixed priority order and the first match wins; safety work is
//! checked before everything else.

use super::keywords::KeywordSet;
use serde::{Deserialize, Serialize};

/// The category of labor performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkType {
    #[serde(rename = "Make Safe")]
    MakeSafe,
    #[serde(rename = "Level Two")]
    LevelTwo,
    #[serde(rename = "Solar/Battery")]
    SolarBattery,
    #[serde(rename = "Admin")]
    Admin,
    #[serde(rename = "Security/CCTV")]
    SecurityCctv,
    #[serde(rename = "Data/Phone")]
    DataPhone,
    #[serde(rename = "Air Conditioning")]
    AirConditioning,
    #[serde(rename = "Electrical")]
    Electrical,
}

impl std::fmt::Display for WorkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkType::MakeSafe => write!(f, "Make Safe"),
            WorkType::LevelTwo => write!(f, "Level Two"),
            WorkType::SolarBattery => write!(f, "Solar/Battery"),
            WorkType::Admin => write!(f, "Admin"),
            WorkType::SecurityCctv => write!(f, "Security/CCTV"),
            WorkType::DataPhone => write!(f, "Data/Phone"),
            WorkType::AirConditioning => write!(f, "Air Conditioning"),
            WorkType::Electrical => write!(f, "Electrical"),
        }
    }
}

/// Keyword lists for work-type detection, in priority order
#[derive(Debug, Clone)]
pub struct WorkTypeRules {
    pub make_safe: KeywordSet,
    pub level_two: KeywordSet,
    pub solar: KeywordSet,
    pub admin: KeywordSet,
    pub security: KeywordSet,
    pub data: KeywordSet,
    pub air_conditioning: KeywordSet,
}

impl WorkTypeRules {
    pub fn standard() -> Self {
        Self {
            // Safety-related work
            make_safe: KeywordSet::patterns(&[
                "make safe", "makesafe", "ms ", "water entry", "storm damage", "flooding",
                "unsafe", "lightning strike", "burst pipe", "hanging wire", "power line",
                "isolate electric", "secure electric", "disconnect and secure", "water damage",
                "electrical box.*unsafe", "secure electricals",
            ]),
            // Service connections
            level_two: KeywordSet::patterns(&[
                "level 2", "level two", "l2 ", "service mains", "overhead service",
                "meter connection", "essential energy", "reconnection", "service fuse",
                "disconnect reconnect", "relocate.*pole",
            ]),
            solar: KeywordSet::literal(&[
                "solar", "battery", "inverter", "pv", "photovoltaic", "renewable",
                "grid tie", "standalone", "off grid", "panels", "redback", "fronius",
                "vaulta", "noark", "canadian solar",
            ]),
            admin: KeywordSet::patterns(&[
                "meeting", "office time", "quote", "admin", "certification", "ndis",
                "paperwork", "training", "discuss.*taking on",
            ]),
            security: KeywordSet::literal(&[
                "security", "cctv", "access control", "starlink", "camera", "monitoring",
                "surveillance",
            ]),
            data: KeywordSet::patterns(&[
                "data", "phone", "telecommunications", "network", "ethernet", "cat6",
                "alarm test", "communication", "cabling.*monitoring", "test alarm",
            ]),
            air_conditioning: KeywordSet::patterns(&[
                "air.?condition", "hvac", "split system", "cooling", "heating",
                "mitsubishi.*air", "ac unit", "ac tech",
            ]),
        }
    }
}

/// Classify the type of work from a job description
///
/// Lists are tested in priority order and the first match wins. An
/// empty or unmatched description falls through to Electrical.
pub fn classify_work_type(description: &str, rules: &WorkTypeRules) -> WorkType {
    let desc_lower = description.to_lowercase();

    if rules.make_safe.matches(&desc_lower) {
        return WorkType::MakeSafe;
    }

    if rules.level_two.matches(&desc_lower) {
        return WorkType::LevelTwo;
    }

    if rules.solar.matches(&desc_lower) {
        return WorkType::SolarBattery;
    }

    if rules.admin.matches(&desc_lower) {
        return WorkType::Admin;
    }

    if rules.security.matches(&desc_lower) {
        return WorkType::SecurityCctv;
    }

    if rules.data.matches(&desc_lower) {
        return WorkType::DataPhone;
    }

    if rules.air_conditioning.matches(&desc_lower) {
        return WorkType::AirConditioning;
    }

    WorkType::Electrical
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> WorkTypeRules {
        WorkTypeRules::standard()
    }

    #[test]
    fn test_make_safe_keywords() {
        assert_eq!(classify_work_type("Make safe after storm damage", &rules()), WorkType::MakeSafe);
        assert_eq!(classify_work_type("Hanging wire at front of property", &rules()), WorkType::MakeSafe);
        assert_eq!(classify_work_type("electrical box is rusted and unsafe", &rules()), WorkType::MakeSafe);
    }

    #[test]
    fn test_make_safe_beats_solar() {
        // Earlier list wins even when a later list also matches
        assert_eq!(
            classify_work_type("Make safe lightning strike on solar inverter", &rules()),
            WorkType::MakeSafe
        );
    }

    #[test]
    fn test_level_two() {
        assert_eq!(classify_work_type("Level 2 reconnection of service mains", &rules()), WorkType::LevelTwo);
        assert_eq!(classify_work_type("Relocate private pole", &rules()), WorkType::LevelTwo);
    }

    #[test]
    fn test_solar_battery() {
        assert_eq!(classify_work_type("Install 6.6kW solar and Fronius inverter", &rules()), WorkType::SolarBattery);
        assert_eq!(classify_work_type("Battery upgrade quote accepted", &rules()), WorkType::SolarBattery);
    }

    #[test]
    fn test_admin() {
        assert_eq!(classify_work_type("Office time - NDIS paperwork", &rules()), WorkType::Admin);
    }

    #[test]
    fn test_security_and_data() {
        assert_eq!(classify_work_type("Install CCTV camera at entry", &rules()), WorkType::SecurityCctv);
        assert_eq!(classify_work_type("Run cat6 to study", &rules()), WorkType::DataPhone);
    }

    #[test]
    fn test_air_conditioning() {
        assert_eq!(classify_work_type("Supply split system aircondition unit", &rules()), WorkType::AirConditioning);
        assert_eq!(classify_work_type("Mitsubishi 2.5kW air con install", &rules()), WorkType::AirConditioning);
    }

    #[test]
    fn test_electrical_fallback() {
        assert_eq!(classify_work_type("Replace kitchen downlights", &rules()), WorkType::Electrical);
        assert_eq!(classify_work_type("", &rules()), WorkType::Electrical);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_work_type("MAKE SAFE - BURST PIPE", &rules()), WorkType::MakeSafe);
    }

    #[test]
    fn test_deterministic() {
        let desc = "Install solar panels and battery";
        assert_eq!(
            classify_work_type(desc, &rules()),
            classify_work_type(desc, &rules())
        );
    }
}
