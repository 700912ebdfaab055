// Certificate domain models
use bytes::Bytes;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display format for completion dates in tables and chart axes
pub const DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Opaque identifier of the signed-in user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u64);

impl UserId {
    /// Resolve a user id from a raw page value, falling back to `default`
    /// when the value is absent, empty or not a positive integer.
    pub fn resolve(raw: Option<&str>, default: Option<UserId>) -> Option<UserId> {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|id| *id > 0)
            .map(UserId)
            .or(default)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A completed course record as returned by `GET /api/certificates/{userId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub id: i64,
    #[serde(default)]
    pub course_id: Option<i64>,
    pub course_name: String,
    pub domain: String,
    #[serde(default)]
    pub duration: u32,
    pub difficulty: String,
    #[serde(default)]
    pub performance_score: Option<f64>,
    #[serde(default)]
    pub completion_date: String,
    #[serde(default)]
    pub image_path: Option<String>,
}

impl Certificate {
    pub fn completed_at(&self) -> Option<NaiveDateTime> {
        parse_completion_date(&self.completion_date)
    }

    /// Completion date as shown to the user, or the raw text when it does not parse
    pub fn formatted_date(&self) -> String {
        format_completion_date(&self.completion_date)
    }

    /// "85%" or "N/A" when no score was recorded
    pub fn score_label(&self) -> String {
        match self.performance_score {
            Some(score) if score > 0.0 => format!("{}%", format_number(score)),
            _ => "N/A".to_string(),
        }
    }

    /// Link to the uploaded certificate scan, relative to the static root
    pub fn image_url(&self) -> Option<String> {
        self.image_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(|p| format!("/static/{}", p.trim_start_matches('/')))
    }
}

/// Parse the backend's ISO-8601 timestamps: naive (`2024-03-15T10:30:00`,
/// optionally with fractional seconds), offset-qualified, or date only.
pub fn parse_completion_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn format_completion_date(raw: &str) -> String {
    match parse_completion_date(raw) {
        Some(dt) => dt.format(DATE_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// Whole numbers without a trailing ".0", everything else with one decimal
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Form field carrying the certificate scan
pub const IMAGE_FIELD: &str = "certificate_image";
pub const COURSE_FIELD: &str = "course_id";

/// Scanned certificate attached to an upload
#[derive(Debug, Clone)]
pub struct CertificateImage {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Fields of the certificate upload form
#[derive(Debug, Clone, Default)]
pub struct CertificateForm {
    pub course_id: Option<i64>,
    pub course_name: String,
    pub domain: String,
    pub duration: Option<u32>,
    pub difficulty: String,
    pub performance_score: Option<u32>,
    pub feedback: Option<String>,
    pub image: Option<CertificateImage>,
}

impl CertificateForm {
    /// Set a text field by its form name. Numeric fields that do not parse
    /// are left empty. Returns false for unknown names.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        let value = value.trim();
        match name {
            COURSE_FIELD => self.course_id = value.parse().ok(),
            "course_name" => self.course_name = value.to_string(),
            "domain" => self.domain = value.to_string(),
            "duration" => self.duration = value.parse().ok(),
            "difficulty" => self.difficulty = value.to_string(),
            "performance_score" => self.performance_score = value.parse().ok(),
            "feedback" => {
                self.feedback = Some(value.to_string()).filter(|v| !v.is_empty());
            }
            _ => return false,
        }
        true
    }
}

/// Body of a successful `POST /api/certificates`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: Option<String>,
}
