//! Urgency classification
//!
//! Determines the time-sensitivity tier of a job. Emergency phrasing is
//! checked first, then make-safe work, then the general urgent, planned
//! and standard lists; anything left defaults off the current category.

use super::category::CategoryLabel;
use super::keywords::KeywordSet;
use serde::{Deserialize, Serialize};

/// Time-sensitivity tier, highest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Emergency,
    Urgent,
    Standard,
    Planned,
}

impl UrgencyLevel {
    /// Fixed presentation order for summary breakdowns
    pub const PRIORITY_ORDER: [UrgencyLevel; 4] = [
        UrgencyLevel::Emergency,
        UrgencyLevel::Urgent,
        UrgencyLevel::Standard,
        UrgencyLevel::Planned,
    ];
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrgencyLevel::Emergency => write!(f, "Emergency"),
            UrgencyLevel::Urgent => write!(f, "Urgent"),
            UrgencyLevel::Standard => write!(f, "Standard"),
            UrgencyLevel::Planned => write!(f, "Planned"),
        }
    }
}

/// Keyword lists for urgency detection
#[derive(Debug, Clone)]
pub struct UrgencyRules {
    pub emergency: KeywordSet,
    pub urgent: KeywordSet,
    pub planned: KeywordSet,
    pub standard: KeywordSet,
}

impl UrgencyRules {
    pub fn standard() -> Self {
        Self {
            // Immediate response. A bare "no power" is urgent, not
            // emergency; only urgency-phrased forms belong here.
            emergency: KeywordSet::patterns(&[
                "emergency", "asap", "urgent.*parkinson", "stopped working.*asap",
                "unsafe", "hanging.*power line", "lightning strike", "burst pipe",
                "water.*saturated", "no power.*asap", "no hot water.*asap",
            ]),
            // Same-day response
            urgent: KeywordSet::patterns(&[
                "urgent", "stopped working", "not working", "failed", "fault",
                "breakdown", "no power", "no hot water", "make safe", "ms ",
                "pre.?approval limit",
            ]),
            planned: KeywordSet::patterns(&[
                "meeting", "quote", "admin", "certification", "stage.*works",
                "for full details.*attached", "scheduled",
            ]),
            standard: KeywordSet::patterns(&[
                "install", "fit off", "supply.*install", "stage [0-9]", "rough in",
                "upgrade", "replace.*service", "compliance testing",
            ]),
        }
    }
}

/// Classify the urgency tier of a job
///
/// # Arguments
/// * `description` - free-text job description
/// * `_status` - job status token, accepted for parity with the feed
/// * `current_category` - currently assigned category, used as the
///   fallback signal when no keyword matches
pub fn classify_urgency_level(
    description: &str,
    _status: &str,
    current_category: CategoryLabel,
    rules: &UrgencyRules,
) -> UrgencyLevel {
    let desc_lower = description.to_lowercase();

    if rules.emergency.matches(&desc_lower) {
        return UrgencyLevel::Emergency;
    }

    // Make-safe work is urgent by definition
    if desc_lower.contains("make safe") || desc_lower.contains("ms ") {
        return UrgencyLevel::Urgent;
    }

    if rules.urgent.matches(&desc_lower) {
        return UrgencyLevel::Urgent;
    }

    if rules.planned.matches(&desc_lower) {
        return UrgencyLevel::Planned;
    }

    if rules.standard.matches(&desc_lower) {
        return UrgencyLevel::Standard;
    }

    match current_category {
        CategoryLabel::Urgent => UrgencyLevel::Urgent,
        CategoryLabel::AdminOfficeTimeQuotes => UrgencyLevel::Planned,
        _ => UrgencyLevel::Standard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> UrgencyRules {
        UrgencyRules::standard()
    }

    fn classify(description: &str, current: CategoryLabel) -> UrgencyLevel {
        classify_urgency_level(description, "Completed", current, &rules())
    }

    #[test]
    fn test_emergency_keywords() {
        assert_eq!(
            classify("Emergency call out, switchboard smoking", CategoryLabel::Electrical),
            UrgencyLevel::Emergency
        );
        assert_eq!(
            classify("Hot water stopped working, need someone asap", CategoryLabel::Electrical),
            UrgencyLevel::Emergency
        );
        assert_eq!(
            classify("Lightning strike, ceiling saturated with water", CategoryLabel::Electrical),
            UrgencyLevel::Emergency
        );
    }

    #[test]
    fn test_make_safe_is_urgent() {
        assert_eq!(
            classify("Make safe at rear of property", CategoryLabel::Electrical),
            UrgencyLevel::Urgent
        );
        assert_eq!(
            classify("MS job from insurer", CategoryLabel::Electrical),
            UrgencyLevel::Urgent
        );
    }

    #[test]
    fn test_bare_no_power_is_urgent_not_emergency() {
        assert_eq!(
            classify("No power to rear shed", CategoryLabel::Electrical),
            UrgencyLevel::Urgent
        );
    }

    #[test]
    fn test_urgent_keywords() {
        assert_eq!(
            classify("Oven not working since yesterday", CategoryLabel::Electrical),
            UrgencyLevel::Urgent
        );
        assert_eq!(
            classify("Pump breakdown at dairy", CategoryLabel::Electrical),
            UrgencyLevel::Urgent
        );
    }

    #[test]
    fn test_planned_checked_before_standard() {
        // "quote" (planned) and "install" (standard) both present
        assert_eq!(
            classify("Quote to install new switchboard", CategoryLabel::Electrical),
            UrgencyLevel::Planned
        );
    }

    #[test]
    fn test_standard_keywords() {
        assert_eq!(
            classify("Install power point in garage", CategoryLabel::Electrical),
            UrgencyLevel::Standard
        );
        assert_eq!(
            classify("Stage 2 rough in", CategoryLabel::Electrical),
            UrgencyLevel::Standard
        );
    }

    #[test]
    fn test_default_follows_current_category() {
        assert_eq!(classify("", CategoryLabel::Urgent), UrgencyLevel::Urgent);
        assert_eq!(
            classify("", CategoryLabel::AdminOfficeTimeQuotes),
            UrgencyLevel::Planned
        );
        assert_eq!(classify("", CategoryLabel::Electrical), UrgencyLevel::Standard);
        assert_eq!(classify("", CategoryLabel::Unknown), UrgencyLevel::Standard);
    }
}
