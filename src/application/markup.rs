// HTML fragments shared by the page controllers
use crate::domain::certificate::{Certificate, UserId};
use crate::domain::course::Course;

/// Columns of the dashboard certificate table
pub const CERTIFICATE_COLUMNS: usize = 6;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Table row for one certificate. The delete button posts back to the page
/// host for `user_id`.
pub fn certificate_row(cert: &Certificate, user_id: UserId) -> String {
    format!(
        r#"<tr data-certificate-id="{id}"><td>{course}</td><td>{domain}</td><td>{difficulty}</td><td>{score}</td><td>{date}</td><td>{image}<form method="post" action="/certificates/{id}/delete?user_id={user}" class="d-inline"><button type="submit" class="btn btn-sm btn-danger" data-delete-certificate="{id}"><i class="fas fa-trash"></i> Delete</button></form></td></tr>"#,
        id = cert.id,
        user = user_id,
        course = html_escape(&cert.course_name),
        domain = html_escape(&cert.domain),
        difficulty = html_escape(&cert.difficulty),
        score = html_escape(&cert.score_label()),
        date = html_escape(&cert.formatted_date()),
        image = cert
            .image_url()
            .map(|url| format!(
                r#"<a href="{}" target="_blank" class="btn btn-sm btn-link">View Certificate</a> "#,
                html_escape(&url)
            ))
            .unwrap_or_default(),
    )
}

/// Full-width table row used for placeholders and error text
pub fn message_row(text: &str, class: &str) -> String {
    let class = match class {
        "" => "text-center".to_string(),
        extra => format!("text-center {}", extra),
    };
    format!(
        r#"<tr><td colspan="{}" class="{}">{}</td></tr>"#,
        CERTIFICATE_COLUMNS,
        class,
        html_escape(text),
    )
}

/// Full-width grid cell used for placeholders and error text
pub fn message_block(text: &str, class: &str) -> String {
    format!(
        r#"<div class="col-12 text-center"><p class="{}">{}</p></div>"#,
        class,
        html_escape(text)
    )
}

/// Compact entry shown under the upload form
pub fn recommendation_item(course: &Course) -> String {
    format!(
        r#"<div class="recommendation-item"><h6>{}</h6><p>Domain: {}</p><p>Difficulty: {}</p></div>"#,
        html_escape(&course.name),
        html_escape(&course.domain),
        html_escape(&course.difficulty),
    )
}

/// Card in the dashboard's recommended-courses grid
pub fn recommendation_card(course: &Course) -> String {
    let description = course
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .unwrap_or("No description available");

    format!(
        r#"<div class="col-md-4 mb-3"><div class="card h-100"><div class="card-body"><h6 class="card-title">{name}</h6><p class="card-text"><small class="text-muted">Domain: {domain}<br>Difficulty: {difficulty}<br>Duration: {duration}</small></p><p class="card-text">{description}</p>{link}</div></div></div>"#,
        name = html_escape(&course.name),
        domain = html_escape(&course.domain),
        difficulty = html_escape(&course.difficulty),
        duration = html_escape(&course.duration_label()),
        description = html_escape(description),
        link = course_link(course, "btn btn-sm btn-primary mt-2"),
    )
}

/// Detailed card for the per-course recommendation list
pub fn course_detail_card(course: &Course) -> String {
    let mut extras = String::new();
    if let Some(prerequisites) = course.prerequisites.as_deref().filter(|p| !p.is_empty()) {
        extras.push_str(&format!(
            r#"<p class="card-text"><strong>Prerequisites:</strong> {}</p>"#,
            html_escape(prerequisites)
        ));
    }
    if let Some(description) = course.description.as_deref().filter(|d| !d.is_empty()) {
        extras.push_str(&format!(r#"<p class="card-text">{}</p>"#, html_escape(description)));
    }
    if let Some(instructor) = course.instructor.as_deref().filter(|i| !i.is_empty()) {
        extras.push_str(&format!(
            r#"<p class="card-text"><strong>Instructor:</strong> {}</p>"#,
            html_escape(instructor)
        ));
    }
    if let Some(rating) = course.rating_label() {
        extras.push_str(&format!(
            r#"<p class="card-text"><strong>Rating:</strong> {}</p>"#,
            rating
        ));
    }

    format!(
        r#"<div class="col-md-4 mb-4"><div class="card h-100"><div class="card-body"><h5 class="card-title">{name}</h5><p class="card-text"><strong>Domain:</strong> {domain}<br><strong>Difficulty:</strong> {difficulty}<br><strong>Duration:</strong> {duration}</p>{extras}{link}</div></div></div>"#,
        name = html_escape(&course.name),
        domain = html_escape(&course.domain),
        difficulty = html_escape(&course.difficulty),
        duration = html_escape(&course.duration_label()),
        extras = extras,
        link = course_link(course, "btn btn-primary mt-2"),
    )
}

pub fn course_option(course: &Course) -> String {
    format!(
        r#"<option value="{}">{}</option>"#,
        course.id.map(|id| id.to_string()).unwrap_or_default(),
        html_escape(&course.option_label()),
    )
}

fn course_link(course: &Course, class: &str) -> String {
    course
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .map(|url| {
            format!(
                r#"<a href="{}" target="_blank" class="{}">View Course</a>"#,
                html_escape(url),
                class
            )
        })
        .unwrap_or_default()
}
