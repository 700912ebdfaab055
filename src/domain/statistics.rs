// Aggregate statistics domain model
use super::certificate::parse_completion_date;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body of `GET /api/statistics/{userId}`. Aggregated server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    #[serde(default)]
    pub total_courses: u32,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub domains: BTreeMap<String, u32>,
    #[serde(default)]
    pub difficulty_levels: BTreeMap<String, u32>,
    #[serde(default)]
    pub certificates: Vec<ProgressEntry>,
}

impl Statistics {
    pub fn total_courses_label(&self) -> String {
        self.total_courses.to_string()
    }

    pub fn average_score_label(&self) -> String {
        format!("{:.1}%", self.average_score)
    }
}

/// Per-certificate entry the statistics endpoint carries for the progress chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub course_name: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub performance_score: Option<f64>,
    #[serde(default)]
    pub completion_date: String,
}

impl ProgressEntry {
    pub fn completed_at(&self) -> Option<NaiveDateTime> {
        parse_completion_date(&self.completion_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let stats: Statistics = serde_json::from_str(r#"{"total_courses": 0}"#).unwrap();
        assert_eq!(stats.average_score, 0.0);
        assert!(stats.domains.is_empty());
        assert!(stats.certificates.is_empty());
    }

    #[test]
    fn test_summary_labels() {
        let stats: Statistics = serde_json::from_str(
            r#"{"total_courses": 3, "average_score": 82.333, "domains": {"AI": 2, "Web": 1},
                "difficulty_levels": {"Beginner": 3}, "certificates": []}"#,
        )
        .unwrap();
        assert_eq!(stats.total_courses_label(), "3");
        assert_eq!(stats.average_score_label(), "82.3%");
        assert_eq!(stats.domains.get("AI"), Some(&2));
    }
}
