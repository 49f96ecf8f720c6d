//! Aggregate summary over classification results
//!
//! Fully recomputed on every run; nothing is updated incrementally.

use crate::classifier::{JobClassification, UrgencyLevel};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One breakdown row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub label: String,
    pub count: usize,
}

/// Aggregate counts over one classification run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub generated_at: String,
    pub total_jobs: usize,
    pub jobs_needing_reclassification: usize,
    pub percentage_needing_change: f64,
    /// By descending frequency, ties by label
    pub work_type_breakdown: Vec<LabelCount>,
    /// In fixed priority order: Emergency, Urgent, Standard, Planned
    pub urgency_breakdown: Vec<LabelCount>,
    /// By descending frequency, ties by label
    pub property_type_breakdown: Vec<LabelCount>,
    /// Top-N work type + urgency + property type combinations
    pub top_combinations: Vec<LabelCount>,
    /// Current -> recommended transitions for jobs needing change
    pub changes_by_category: Vec<LabelCount>,
}

/// Build the summary over all classified jobs
///
/// # Arguments
/// * `results` - classification results, any order
/// * `top_combinations` - number of combination rows to keep
pub fn build_summary(results: &[JobClassification], top_combinations: usize) -> Summary {
    let mut work_type_counts: HashMap<String, usize> = HashMap::new();
    let mut urgency_counts: HashMap<UrgencyLevel, usize> = HashMap::new();
    let mut property_counts: HashMap<String, usize> = HashMap::new();
    let mut combination_counts: HashMap<String, usize> = HashMap::new();
    let mut change_counts: HashMap<String, usize> = HashMap::new();

    for result in results {
        *work_type_counts
            .entry(result.work_type.to_string())
            .or_insert(0) += 1;
        *urgency_counts.entry(result.urgency_level).or_insert(0) += 1;
        *property_counts
            .entry(result.property_type.to_string())
            .or_insert(0) += 1;

        let combo = format!(
            "{} - {} - {}",
            result.work_type, result.urgency_level, result.property_type
        );
        *combination_counts.entry(combo).or_insert(0) += 1;

        if result.needs_change {
            let transition = format!(
                "{} -> {}",
                result.current_category, result.recommended_category
            );
            *change_counts.entry(transition).or_insert(0) += 1;
        }
    }

    let changes_needed = results.iter().filter(|r| r.needs_change).count();
    let percentage = if results.is_empty() {
        0.0
    } else {
        (changes_needed as f64 / results.len() as f64 * 1000.0).round() / 10.0
    };

    // Urgency keeps the fixed priority order; absent tiers are omitted
    let urgency_breakdown = UrgencyLevel::PRIORITY_ORDER
        .iter()
        .filter_map(|level| {
            urgency_counts.get(level).map(|count| LabelCount {
                label: level.to_string(),
                count: *count,
            })
        })
        .collect();

    let mut top = sorted_by_frequency(combination_counts);
    top.truncate(top_combinations);

    Summary {
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        total_jobs: results.len(),
        jobs_needing_reclassification: changes_needed,
        percentage_needing_change: percentage,
        work_type_breakdown: sorted_by_frequency(work_type_counts),
        urgency_breakdown,
        property_type_breakdown: sorted_by_frequency(property_counts),
        top_combinations: top,
        changes_by_category: sorted_by_frequency(change_counts),
    }
}

/// Descending by count, ascending by label for equal counts
fn sorted_by_frequency(counts: HashMap<String, usize>) -> Vec<LabelCount> {
    let mut rows: Vec<LabelCount> = counts
        .into_iter()
        .map(|(label, count)| LabelCount { label, count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{CategoryLabel, PropertyType, WorkType};

    fn result(
        work_type: WorkType,
        urgency: UrgencyLevel,
        property: PropertyType,
        current: CategoryLabel,
        recommended: CategoryLabel,
    ) -> JobClassification {
        JobClassification {
            job_number: "1".to_string(),
            current_category: current,
            work_type,
            urgency_level: urgency,
            property_type: property,
            recommended_category: recommended,
            needs_change: current != recommended,
            job_description_snippet: String::new(),
            job_address: String::new(),
            amount: 0.0,
            status: "Completed".to_string(),
            classification_logic: String::new(),
        }
    }

    #[test]
    fn test_empty_input() {
        let summary = build_summary(&[], 20);
        assert_eq!(summary.total_jobs, 0);
        assert_eq!(summary.jobs_needing_reclassification, 0);
        assert_eq!(summary.percentage_needing_change, 0.0);
        assert!(summary.work_type_breakdown.is_empty());
        assert!(summary.urgency_breakdown.is_empty());
    }

    #[test]
    fn test_percentage_rounded_to_one_decimal() {
        let mut results = vec![
            result(
                WorkType::Electrical,
                UrgencyLevel::Standard,
                PropertyType::Residential,
                CategoryLabel::Electrical,
                CategoryLabel::Electrical,
            );
            3
        ];
        results.push(result(
            WorkType::MakeSafe,
            UrgencyLevel::Urgent,
            PropertyType::Residential,
            CategoryLabel::Electrical,
            CategoryLabel::MakeSafe,
        ));

        let summary = build_summary(&results, 20);
        assert_eq!(summary.total_jobs, 4);
        assert_eq!(summary.jobs_needing_reclassification, 1);
        assert_eq!(summary.percentage_needing_change, 25.0);

        // A repeating fraction rounds to one decimal
        let summary = build_summary(&results[1..], 20);
        assert_eq!(summary.total_jobs, 3);
        assert_eq!(summary.percentage_needing_change, 33.3);
    }

    #[test]
    fn test_urgency_priority_order() {
        let results = vec![
            result(
                WorkType::Electrical,
                UrgencyLevel::Planned,
                PropertyType::Residential,
                CategoryLabel::Electrical,
                CategoryLabel::Electrical,
            ),
            result(
                WorkType::Electrical,
                UrgencyLevel::Planned,
                PropertyType::Residential,
                CategoryLabel::Electrical,
                CategoryLabel::Electrical,
            ),
            result(
                WorkType::Electrical,
                UrgencyLevel::Emergency,
                PropertyType::Residential,
                CategoryLabel::Electrical,
                CategoryLabel::Electrical,
            ),
        ];

        let summary = build_summary(&results, 20);
        // Planned is more frequent but Emergency still leads
        let labels: Vec<&str> = summary
            .urgency_breakdown
            .iter()
            .map(|row| row.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Emergency", "Planned"]);
    }

    #[test]
    fn test_breakdown_frequency_order_with_label_tiebreak() {
        let results = vec![
            result(
                WorkType::DataPhone,
                UrgencyLevel::Standard,
                PropertyType::Residential,
                CategoryLabel::DataPhone,
                CategoryLabel::DataPhone,
            ),
            result(
                WorkType::Admin,
                UrgencyLevel::Planned,
                PropertyType::Residential,
                CategoryLabel::AdminOfficeTimeQuotes,
                CategoryLabel::AdminOfficeTimeQuotes,
            ),
            result(
                WorkType::DataPhone,
                UrgencyLevel::Standard,
                PropertyType::Residential,
                CategoryLabel::DataPhone,
                CategoryLabel::DataPhone,
            ),
            result(
                WorkType::SolarBattery,
                UrgencyLevel::Standard,
                PropertyType::Residential,
                CategoryLabel::SolarBatteryStandalone,
                CategoryLabel::SolarBatteryStandalone,
            ),
        ];

        let summary = build_summary(&results, 20);
        let labels: Vec<&str> = summary
            .work_type_breakdown
            .iter()
            .map(|row| row.label.as_str())
            .collect();
        // Data/Phone first on count, then the tied pair alphabetically
        assert_eq!(labels, vec!["Data/Phone", "Admin", "Solar/Battery"]);
    }

    #[test]
    fn test_top_combinations_truncated() {
        let results = vec![
            result(
                WorkType::Electrical,
                UrgencyLevel::Standard,
                PropertyType::Residential,
                CategoryLabel::Electrical,
                CategoryLabel::Electrical,
            ),
            result(
                WorkType::MakeSafe,
                UrgencyLevel::Urgent,
                PropertyType::Residential,
                CategoryLabel::MakeSafe,
                CategoryLabel::MakeSafe,
            ),
            result(
                WorkType::Admin,
                UrgencyLevel::Planned,
                PropertyType::Commercial,
                CategoryLabel::AdminOfficeTimeQuotes,
                CategoryLabel::AdminOfficeTimeQuotes,
            ),
        ];

        let summary = build_summary(&results, 2);
        assert_eq!(summary.top_combinations.len(), 2);
    }

    #[test]
    fn test_changes_by_category_transitions() {
        let results = vec![
            result(
                WorkType::MakeSafe,
                UrgencyLevel::Urgent,
                PropertyType::Residential,
                CategoryLabel::Electrical,
                CategoryLabel::MakeSafe,
            ),
            result(
                WorkType::MakeSafe,
                UrgencyLevel::Urgent,
                PropertyType::Residential,
                CategoryLabel::Electrical,
                CategoryLabel::MakeSafe,
            ),
        ];

        let summary = build_summary(&results, 20);
        assert_eq!(
            summary.changes_by_category,
            vec![LabelCount {
                label: "Electrical -> Make Safe".to_string(),
                count: 2,
            }]
        );
    }
}
