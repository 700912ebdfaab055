// Chart domain models and builders
use super::certificate::{format_number, Certificate, DATE_FORMAT};
use super::statistics::ProgressEntry;
use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

const PALETTE: [&str; 5] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF"];
const BAR_COLOR: &str = "#36A2EB";
const LINE_COLOR: &str = "rgb(75, 192, 192)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: Option<String>,
    /// One value per chart label; `None` leaves a gap
    pub data: Vec<Option<f64>>,
    pub colors: Vec<String>,
}

impl Dataset {
    pub fn new(label: Option<String>, data: Vec<Option<f64>>, colors: Vec<String>) -> Self {
        Self {
            label,
            data,
            colors,
        }
    }
}

/// Library-neutral description of a chart. The page's chart seam draws it
/// and replaces whatever was on the canvas before.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    /// Extra tooltip lines per label, empty when the default tooltip is enough
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tooltips: Vec<Vec<String>>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, title: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            labels,
            datasets: Vec::new(),
            x_title: None,
            y_title: None,
            y_min: None,
            y_max: None,
            tooltips: Vec::new(),
        }
    }

    fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.datasets.push(dataset);
        self
    }

    fn with_axes(mut self, x_title: &str, y_title: &str) -> Self {
        self.x_title = Some(x_title.to_string());
        self.y_title = Some(y_title.to_string());
        self
    }

    fn with_y_range(mut self, y_min: Option<f64>, y_max: Option<f64>) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    /// Values of the first dataset, gaps as zero
    #[cfg(test)]
    pub fn values(&self) -> Vec<f64> {
        self.datasets
            .first()
            .map(|d| d.data.iter().map(|v| v.unwrap_or(0.0)).collect())
            .unwrap_or_default()
    }
}

/// Pie chart of certificates per domain. Labels and values share the map's order.
pub fn domain_chart(domains: &BTreeMap<String, u32>) -> ChartSpec {
    let labels: Vec<String> = domains.keys().cloned().collect();
    let data = domains.values().map(|v| Some(f64::from(*v))).collect();
    let colors = (0..labels.len())
        .map(|i| PALETTE[i % PALETTE.len()].to_string())
        .collect();

    ChartSpec::new(ChartKind::Pie, "Course Domains", labels)
        .with_dataset(Dataset::new(None, data, colors))
}

/// Bar chart of certificates per difficulty level
pub fn difficulty_chart(levels: &BTreeMap<String, u32>) -> ChartSpec {
    let labels: Vec<String> = levels.keys().cloned().collect();
    let data = levels.values().map(|v| Some(f64::from(*v))).collect();

    ChartSpec::new(ChartKind::Bar, "Difficulty Distribution", labels)
        .with_dataset(Dataset::new(
            Some("Number of Courses".to_string()),
            data,
            vec![BAR_COLOR.to_string()],
        ))
        .with_axes("Difficulty Level", "Number of Courses")
        .with_y_range(Some(0.0), None)
}

/// Line chart of performance score over completion date, oldest first.
/// Entries whose date does not parse cannot be placed on the axis and are left out.
pub fn score_progress_chart(entries: &[ProgressEntry]) -> ChartSpec {
    let mut dated: Vec<_> = entries
        .iter()
        .filter_map(|e| e.completed_at().map(|at| (at, e)))
        .collect();
    // stable: same-day entries keep the backend's order
    dated.sort_by_key(|(at, _)| *at);

    let labels = dated
        .iter()
        .map(|(at, _)| at.format(DATE_FORMAT).to_string())
        .collect();
    let data = dated.iter().map(|(_, e)| e.performance_score).collect();
    let tooltips = dated
        .iter()
        .map(|(_, e)| {
            vec![
                format!("Course: {}", e.course_name),
                format!(
                    "Score: {}",
                    e.performance_score
                        .map(format_number)
                        .unwrap_or_else(|| "N/A".to_string())
                ),
                format!("Domain: {}", e.domain),
                format!("Difficulty: {}", e.difficulty),
            ]
        })
        .collect();

    let mut chart = ChartSpec::new(ChartKind::Line, "Course Progress Over Time", labels)
        .with_dataset(Dataset::new(
            Some("Performance Score".to_string()),
            data,
            vec![LINE_COLOR.to_string()],
        ))
        .with_axes("Completion Date", "Performance Score")
        .with_y_range(Some(0.0), Some(100.0));
    chart.tooltips = tooltips;
    chart
}

/// Cumulative count of completed courses per calendar month, oldest month first.
/// Several certificates in one month add to the same bucket; undated ones are skipped.
pub fn cumulative_progress_chart(certificates: &[Certificate]) -> ChartSpec {
    let mut monthly: BTreeMap<(i32, u32), u32> = BTreeMap::new();
    for at in certificates.iter().filter_map(Certificate::completed_at) {
        *monthly.entry((at.year(), at.month())).or_insert(0) += 1;
    }

    let mut labels = Vec::with_capacity(monthly.len());
    let mut data = Vec::with_capacity(monthly.len());
    let mut cumulative = 0u32;
    for ((year, month), count) in &monthly {
        cumulative += count;
        labels.push(month_label(*year, *month));
        data.push(Some(f64::from(cumulative)));
    }

    ChartSpec::new(ChartKind::Line, "Course Completion Progress", labels)
        .with_dataset(Dataset::new(
            Some("Courses Completed".to_string()),
            data,
            vec![LINE_COLOR.to_string()],
        ))
        .with_axes("Month", "Total Courses Completed")
        .with_y_range(Some(0.0), None)
}

fn month_label(year: i32, month: u32) -> String {
    chrono::NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, date: &str, score: Option<f64>) -> ProgressEntry {
        ProgressEntry {
            course_name: name.to_string(),
            domain: "AI".to_string(),
            difficulty: "Beginner".to_string(),
            performance_score: score,
            completion_date: date.to_string(),
        }
    }

    fn certificate(id: i64, date: &str) -> Certificate {
        Certificate {
            id,
            course_id: None,
            course_name: format!("Course {}", id),
            domain: "AI".to_string(),
            duration: 5,
            difficulty: "Beginner".to_string(),
            performance_score: None,
            completion_date: date.to_string(),
            image_path: None,
        }
    }

    #[test]
    fn test_domain_chart_labels_match_values() {
        let mut domains = BTreeMap::new();
        domains.insert("A".to_string(), 2);
        domains.insert("B".to_string(), 3);

        let chart = domain_chart(&domains);
        assert_eq!(chart.kind, ChartKind::Pie);
        assert_eq!(chart.labels, vec!["A", "B"]);
        assert_eq!(chart.values(), vec![2.0, 3.0]);
        assert_eq!(chart.datasets[0].colors.len(), 2);
    }

    #[test]
    fn test_difficulty_chart() {
        let mut levels = BTreeMap::new();
        levels.insert("Advanced".to_string(), 1);
        levels.insert("Beginner".to_string(), 4);

        let chart = difficulty_chart(&levels);
        assert_eq!(chart.kind, ChartKind::Bar);
        assert_eq!(chart.labels, vec!["Advanced", "Beginner"]);
        assert_eq!(chart.values(), vec![1.0, 4.0]);
        assert_eq!(chart.y_min, Some(0.0));
    }

    #[test]
    fn test_score_progress_sorted_by_date() {
        let entries = vec![
            entry("Third", "2024-05-01T00:00:00", Some(70.0)),
            entry("First", "2023-11-20T00:00:00", Some(90.0)),
            entry("Undated", "", Some(50.0)),
            entry("Second", "2024-01-15T12:00:00", None),
        ];

        let chart = score_progress_chart(&entries);
        assert_eq!(chart.labels, vec!["11/20/2023", "1/15/2024", "5/1/2024"]);
        assert_eq!(chart.datasets[0].data, vec![Some(90.0), None, Some(70.0)]);
        assert_eq!(chart.tooltips[0][0], "Course: First");
        assert_eq!(chart.tooltips[1][1], "Score: N/A");
        assert_eq!(chart.y_max, Some(100.0));
    }

    #[test]
    fn test_cumulative_progress_buckets_by_month() {
        let certs = vec![
            certificate(1, "2024-03-20T00:00:00"),
            certificate(2, "2024-01-05T00:00:00"),
            certificate(3, "2024-03-02T00:00:00"),
            certificate(4, "garbage"),
        ];

        let chart = cumulative_progress_chart(&certs);
        assert_eq!(chart.labels, vec!["Jan 2024", "Mar 2024"]);
        assert_eq!(chart.values(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_empty_inputs_give_empty_charts() {
        assert!(domain_chart(&BTreeMap::new()).labels.is_empty());
        assert!(score_progress_chart(&[]).labels.is_empty());
        assert!(cumulative_progress_chart(&[]).values().is_empty());
    }

    #[test]
    fn test_chart_serializes_kind_lowercase() {
        let json = serde_json::to_value(difficulty_chart(&BTreeMap::new())).unwrap();
        assert_eq!(json["kind"], "bar");
        assert!(json.get("tooltips").is_none());
    }
}
