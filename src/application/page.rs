// Page trait standing in for the DOM and the charting library
use crate::application::markup::html_escape;
use crate::domain::chart::ChartSpec;
use serde::Serialize;

/// Element ids the controllers write to
pub mod ids {
    pub const CERTIFICATE_FORM: &str = "certificateForm";
    pub const SUBMIT_RECOMMENDATIONS: &str = "recommendations";
    pub const RECOMMENDED_COURSES: &str = "recommended-courses";
    pub const TOTAL_COURSES: &str = "totalCourses";
    pub const AVERAGE_SCORE: &str = "averageScore";
    pub const CERTIFICATES_TABLE_BODY: &str = "certificatesTableBody";
    pub const DOMAIN_CHART: &str = "domainChart";
    pub const DIFFICULTY_CHART: &str = "difficultyChart";
    pub const PROGRESS_CHART: &str = "progress-chart";
    pub const NO_PROGRESS_DATA: &str = "no-progress-data";
    pub const COMPLETION_CHART: &str = "completionChart";
    pub const COURSE_SELECT: &str = "course";
    pub const RECOMMENDATIONS_LIST: &str = "recommendationsList";
    pub const RECOMMENDATIONS_SECTION: &str = "recommendationsSection";
    pub const LOADING_INDICATOR: &str = "loadingIndicator";
}

/// A child node of a page element. Keyed fragments can be removed individually.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub key: Option<String>,
    pub html: String,
}

impl Fragment {
    pub fn html(html: impl Into<String>) -> Self {
        Self {
            key: None,
            html: html.into(),
        }
    }

    pub fn text(text: &str) -> Self {
        Self::html(html_escape(text))
    }

    pub fn keyed(key: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            html: html.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Bootstrap alert class suffix
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "danger",
        }
    }
}

/// Dismissible toast shown above the page content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

/// Rendering surface the controllers write to.
///
/// Writes to an element the page does not have are dropped; the page decides
/// whether to log them.
pub trait Page: Send {
    fn has_element(&self, id: &str) -> bool;

    /// Number of children of `id`; zero for an unknown element
    fn child_count(&self, id: &str) -> usize;

    /// Replace every child of `id`
    fn replace_children(&mut self, id: &str, children: Vec<Fragment>);

    fn append_children(&mut self, id: &str, children: Vec<Fragment>);

    /// Drop all children of `id` after the first `keep`
    fn truncate_children(&mut self, id: &str, keep: usize);

    /// Remove the child of `id` carrying `key`. Returns whether one was removed.
    fn remove_keyed(&mut self, id: &str, key: &str) -> bool;

    fn set_visible(&mut self, id: &str, visible: bool);

    fn reset_form(&mut self, id: &str);

    /// Blocking message box
    fn alert(&mut self, message: &str);

    fn notify(&mut self, notification: Notification);

    /// Draw `chart` on canvas `id`, replacing any chart drawn there before
    fn draw_chart(&mut self, id: &str, chart: ChartSpec);

    fn set_text(&mut self, id: &str, text: &str) {
        self.replace_children(id, vec![Fragment::text(text)]);
    }

    fn set_html(&mut self, id: &str, html: String) {
        self.replace_children(id, vec![Fragment::html(html)]);
    }
}
