//! HTML rendering of a finished `Document`
//!
//! Each page is a fixed template; the regions the controllers wrote are
//! spliced in by element id. Charts travel as JSON blocks next to their
//! canvas for the browser-side charting library to pick up.

use crate::application::markup::html_escape;
use crate::application::page::{ids, Notification};
use crate::domain::certificate::COURSE_FIELD;
use crate::domain::chart::ChartSpec;
use crate::infrastructure::document::Document;

/// Per-render settings for the page chrome
#[derive(Debug, Clone, Copy)]
pub struct PageChrome {
    pub notification_timeout_secs: u64,
}

pub fn render_dashboard(doc: &Document, user_id: Option<u64>, chrome: PageChrome) -> String {
    let body = format!(
        r#"<div class="row mb-4">
    <div class="col-md-6"><div class="card"><div class="card-body"><h5>Total Courses</h5>{total}</div></div></div>
    <div class="col-md-6"><div class="card"><div class="card-body"><h5>Average Score</h5>{average}</div></div></div>
</div>
{loading}
<div class="row mb-4">
    <div class="col-md-6">{domain_chart}</div>
    <div class="col-md-6">{difficulty_chart}</div>
</div>
<div class="row mb-4">
    <div class="col-md-6">{progress_chart}{no_progress}</div>
    <div class="col-md-6">{completion_chart}</div>
</div>
<table class="table">
    <thead><tr><th>Course</th><th>Domain</th><th>Difficulty</th><th>Score</th><th>Completed</th><th></th></tr></thead>
    {table_body}
</table>
<h4>Recommended Courses</h4>
{recommended}"#,
        total = region(doc, "h2", ids::TOTAL_COURSES, ""),
        average = region(doc, "h2", ids::AVERAGE_SCORE, ""),
        loading = region(doc, "div", ids::LOADING_INDICATOR, "spinner-border"),
        domain_chart = canvas(doc, ids::DOMAIN_CHART),
        difficulty_chart = canvas(doc, ids::DIFFICULTY_CHART),
        progress_chart = canvas(doc, ids::PROGRESS_CHART),
        no_progress = no_progress_placeholder(doc),
        completion_chart = canvas(doc, ids::COMPLETION_CHART),
        table_body = region(doc, "tbody", ids::CERTIFICATES_TABLE_BODY, ""),
        recommended = region(doc, "div", ids::RECOMMENDED_COURSES, "row"),
    );

    layout("Dashboard", user_id, doc, chrome, &body)
}

pub fn render_upload(doc: &Document, user_id: Option<u64>, chrome: PageChrome) -> String {
    let body = format!(
        r#"<form id="{form_id}" method="post" action="/certificates" enctype="multipart/form-data">
    {course_select}
    <input class="form-control" name="course_name" placeholder="Course name" required>
    <input class="form-control" name="domain" placeholder="Domain" required>
    <input class="form-control" name="duration" type="number" min="0" placeholder="Duration (hours)" required>
    <select class="form-select" name="difficulty"><option>Beginner</option><option>Intermediate</option><option>Advanced</option></select>
    <input class="form-control" name="performance_score" type="number" min="0" max="100" placeholder="Score">
    <input class="form-control" name="certificate_image" type="file" accept="image/*">
    <button class="btn btn-primary" type="submit">Upload</button>
</form>
{submitted}
{section}"#,
        form_id = ids::CERTIFICATE_FORM,
        course_select = course_select(doc),
        submitted = region(doc, "div", ids::SUBMIT_RECOMMENDATIONS, ""),
        section = section(doc),
    );

    layout("Upload Certificate", user_id, doc, chrome, &body)
}

fn layout(
    title: &str,
    user_id: Option<u64>,
    doc: &Document,
    chrome: PageChrome,
    body: &str,
) -> String {
    let user_attr = user_id
        .map(|id| format!(r#" data-user-id="{}""#, id))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
</head>
<body{user_attr}>
    <div class="container">
        {notifications}
        {alerts}
        {body}
    </div>
    {charts}
</body>
</html>"#,
        title = html_escape(title),
        user_attr = user_attr,
        notifications = doc
            .notifications()
            .iter()
            .map(|n| notification(n, chrome))
            .collect::<String>(),
        alerts = doc
            .alerts()
            .iter()
            .map(|a| format!(r#"<div class="alert alert-warning" role="alert" data-blocking="true">{}</div>"#, html_escape(a)))
            .collect::<String>(),
        body = body,
        charts = chart_blocks(doc),
    )
}

fn region(doc: &Document, tag: &str, id: &str, class: &str) -> String {
    let class_attr = if class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, class)
    };
    format!(
        r#"<{tag} id="{id}"{class_attr}{hidden}>{inner}</{tag}>"#,
        tag = tag,
        id = id,
        class_attr = class_attr,
        hidden = hidden_attr(doc, id),
        inner = doc.inner_html(id).unwrap_or_default(),
    )
}

/// Course dropdown; submitted as `course_id`
fn course_select(doc: &Document) -> String {
    format!(
        r#"<select id="{id}" name="{name}" class="form-select" required>{options}</select>"#,
        id = ids::COURSE_SELECT,
        name = COURSE_FIELD,
        options = doc.inner_html(ids::COURSE_SELECT).unwrap_or_default(),
    )
}

fn canvas(doc: &Document, id: &str) -> String {
    format!(r#"<canvas id="{}"{}></canvas>"#, id, hidden_attr(doc, id))
}

fn no_progress_placeholder(doc: &Document) -> String {
    format!(
        r#"<p id="{}" class="text-muted"{}>Complete a course to see your progress.</p>"#,
        ids::NO_PROGRESS_DATA,
        hidden_attr(doc, ids::NO_PROGRESS_DATA),
    )
}

fn section(doc: &Document) -> String {
    format!(
        r#"<div id="{}"{}><h4>Recommended Next</h4>{}</div>"#,
        ids::RECOMMENDATIONS_SECTION,
        hidden_attr(doc, ids::RECOMMENDATIONS_SECTION),
        region(doc, "div", ids::RECOMMENDATIONS_LIST, "row"),
    )
}

fn hidden_attr(doc: &Document, id: &str) -> &'static str {
    match doc.is_visible(id) {
        Some(false) => r#" style="display: none""#,
        _ => "",
    }
}

fn notification(n: &Notification, chrome: PageChrome) -> String {
    format!(
        r#"<div class="alert alert-{class} alert-dismissible fade show" role="alert" data-dismiss-after="{ms}">{message}<button type="button" class="btn-close" data-bs-dismiss="alert" aria-label="Close"></button></div>"#,
        class = n.kind.css_class(),
        ms = chrome.notification_timeout_secs * 1000,
        message = html_escape(&n.message),
    )
}

fn chart_blocks(doc: &Document) -> String {
    let mut charts: Vec<(&String, &ChartSpec)> = doc.charts().iter().collect();
    charts.sort_by(|a, b| a.0.cmp(b.0));

    charts
        .into_iter()
        .filter_map(|(id, chart)| match serde_json::to_string(chart) {
            Ok(json) => Some(format!(
                r#"<script type="application/json" data-chart-for="{}">{}</script>"#,
                id,
                json.replace("</", "<\\/")
            )),
            Err(e) => {
                tracing::error!("Failed to serialize chart {}: {}", id, e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::page::{NotificationKind, Page};
    use crate::domain::chart::{ChartKind, ChartSpec};

    const CHROME: PageChrome = PageChrome {
        notification_timeout_secs: 5,
    };

    #[test]
    fn test_dashboard_splices_regions() {
        let mut doc = Document::dashboard();
        doc.set_text(ids::TOTAL_COURSES, "4");
        doc.draw_chart(
            ids::DOMAIN_CHART,
            ChartSpec::new(ChartKind::Pie, "Course Domains", vec!["</script>".to_string()]),
        );
        doc.notify(Notification::new("Certificate deleted successfully", NotificationKind::Success));

        let html = render_dashboard(&doc, Some(3), CHROME);
        assert!(html.contains(r#"<body data-user-id="3">"#));
        assert!(html.contains(r#"<h2 id="totalCourses">4</h2>"#));
        assert!(html.contains(r#"data-chart-for="domainChart""#));
        assert!(!html.contains(r#"["</script>"]"#));
        assert!(html.contains(r#"alert-success"#));
        assert!(html.contains(r#"data-dismiss-after="5000""#));
        assert!(html.contains(r#"<div id="loadingIndicator" class="spinner-border" style="display: none">"#));
    }

    #[test]
    fn test_upload_page_hides_empty_section() {
        let mut doc = Document::upload_page();
        doc.alert("Certificate added successfully!");

        let html = render_upload(&doc, None, CHROME);
        assert!(html.contains("<body>"));
        assert!(html.contains(r#"<div id="recommendationsSection" style="display: none">"#));
        assert!(html.contains("Select a course"));
        assert!(html.contains(r#"<select id="course" name="course_id" class="form-select" required>"#));
        assert!(html.contains(r#"data-blocking="true">Certificate added successfully!"#));
    }
}
