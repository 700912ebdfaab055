// Course and recommendation domain models
use super::certificate::{Certificate, CertificateForm};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DOMAIN: &str = "Programming";
pub const DEFAULT_DIFFICULTY: &str = "Beginner";

/// A catalog course. Recommendations come back in the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub domain: String,
    pub difficulty: String,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub prerequisites: Option<String>,
}

impl Course {
    /// Text of the course dropdown entry, e.g. "Rust Basics (Programming - Beginner)"
    pub fn option_label(&self) -> String {
        format!("{} ({} - {})", self.name, self.domain, self.difficulty)
    }

    pub fn duration_label(&self) -> String {
        match self.duration {
            Some(hours) => format!("{} hours", hours),
            None => "N/A".to_string(),
        }
    }

    pub fn rating_label(&self) -> Option<String> {
        self.rating
            .filter(|r| *r > 0.0)
            .map(|r| format!("{:.1}/5.0", r))
    }
}

/// Body of `POST /api/recommendations`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationQuery {
    pub domain: String,
    pub difficulty: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_score: Option<u32>,
}

impl Default for RecommendationQuery {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            name: None,
            course_name: None,
            duration: None,
            performance_score: None,
        }
    }
}

impl RecommendationQuery {
    /// Query seeded from a certificate the user already holds
    pub fn from_certificate(cert: &Certificate) -> Self {
        Self {
            domain: cert.domain.clone(),
            difficulty: cert.difficulty.clone(),
            name: Some(cert.course_name.clone()),
            ..Self::default()
        }
    }

    /// Query seeded from the attributes that were just submitted
    pub fn from_form(form: &CertificateForm) -> Self {
        Self {
            domain: form.domain.clone(),
            difficulty: form.difficulty.clone(),
            name: None,
            course_name: Some(form.course_name.clone()),
            duration: form.duration,
            performance_score: form.performance_score,
        }
    }

    /// Query seeded from the user's most recent certificate, or the default
    /// query when there is none.
    pub fn for_history(certificates: &[Certificate]) -> Self {
        most_recent(certificates)
            .map(Self::from_certificate)
            .unwrap_or_default()
    }
}

/// Latest completion date wins. When no date parses the backend's ordering
/// is trusted and the first entry is used.
pub fn most_recent(certificates: &[Certificate]) -> Option<&Certificate> {
    certificates
        .iter()
        .filter_map(|c| c.completed_at().map(|at| (at, c)))
        .max_by_key(|(at, _)| *at)
        .map(|(_, c)| c)
        .or_else(|| certificates.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn certificate(id: i64, domain: &str, difficulty: &str, date: &str) -> Certificate {
        Certificate {
            id,
            course_id: None,
            course_name: format!("Course {}", id),
            domain: domain.to_string(),
            duration: 10,
            difficulty: difficulty.to_string(),
            performance_score: None,
            completion_date: date.to_string(),
            image_path: None,
        }
    }

    #[test]
    fn test_default_query_without_history() {
        let query = RecommendationQuery::for_history(&[]);
        assert_eq!(query.domain, "Programming");
        assert_eq!(query.difficulty, "Beginner");
        assert_eq!(query.name, None);
    }

    #[test]
    fn test_query_uses_latest_certificate() {
        let certs = vec![
            certificate(1, "Data", "Beginner", "2024-01-10T00:00:00"),
            certificate(2, "AI", "Advanced", "2024-06-01T00:00:00"),
            certificate(3, "Web", "Intermediate", "2023-12-31T00:00:00"),
        ];
        let query = RecommendationQuery::for_history(&certs);
        assert_eq!(query.domain, "AI");
        assert_eq!(query.difficulty, "Advanced");
        assert_eq!(query.name.as_deref(), Some("Course 2"));
    }

    #[test]
    fn test_unparseable_dates_fall_back_to_first() {
        let certs = vec![
            certificate(1, "Data", "Beginner", ""),
            certificate(2, "AI", "Advanced", "soon"),
        ];
        assert_eq!(most_recent(&certs).map(|c| c.id), Some(1));
    }

    #[test]
    fn test_query_serialization_skips_empty_fields() {
        let json = serde_json::to_value(RecommendationQuery::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"domain": "Programming", "difficulty": "Beginner"})
        );
    }

    #[test]
    fn test_course_labels() {
        let course: Course = serde_json::from_str(
            r#"{"id": 5, "name": "Deep Learning", "domain": "AI", "difficulty": "Advanced",
                "duration": 40, "rating": 4.56, "url": null}"#,
        )
        .unwrap();
        assert_eq!(course.option_label(), "Deep Learning (AI - Advanced)");
        assert_eq!(course.duration_label(), "40 hours");
        assert_eq!(course.rating_label().as_deref(), Some("4.6/5.0"));
        assert_eq!(course.url, None);
    }
}
