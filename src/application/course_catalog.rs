// Course catalog - Upload page dropdown and per-course recommendations
use crate::application::certificate_api::CertificateApi;
use crate::application::error::ClientResult;
use crate::application::markup::{course_detail_card, course_option};
use crate::application::page::{ids, Fragment, Page};
use crate::domain::course::Course;
use std::sync::Arc;

pub const LOAD_ERROR_TEXT: &str = "Failed to load courses. Please refresh the page.";

#[derive(Clone)]
pub struct CourseCatalog {
    api: Arc<dyn CertificateApi>,
}

impl CourseCatalog {
    pub fn new(api: Arc<dyn CertificateApi>) -> Self {
        Self { api }
    }

    /// Replace the course options, keeping the select's placeholder entry
    pub async fn load_courses<P: Page + ?Sized>(&self, page: &mut P) -> ClientResult<usize> {
        let courses = match self.api.list_courses().await {
            Ok(courses) => courses,
            Err(e) => {
                tracing::error!("Error loading courses: {}", e);
                page.alert(LOAD_ERROR_TEXT);
                return Err(e);
            }
        };

        if !page.has_element(ids::COURSE_SELECT) {
            tracing::error!("Course select element not found");
            return Ok(0);
        }

        page.truncate_children(ids::COURSE_SELECT, 1);
        page.append_children(
            ids::COURSE_SELECT,
            courses
                .iter()
                .map(|c| Fragment::html(course_option(c)))
                .collect(),
        );
        tracing::debug!("Loaded {} courses into dropdown", courses.len());
        Ok(courses.len())
    }

    pub async fn show_recommendations_for<P: Page + ?Sized>(
        &self,
        page: &mut P,
        course_id: i64,
    ) -> Vec<Course> {
        let recommendations = self
            .api
            .recommendations_for_course(course_id)
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Error fetching recommendations for course {}: {}", course_id, e);
                Vec::new()
            });

        if recommendations.is_empty() {
            page.set_visible(ids::RECOMMENDATIONS_SECTION, false);
            return recommendations;
        }

        page.replace_children(
            ids::RECOMMENDATIONS_LIST,
            recommendations
                .iter()
                .map(|c| Fragment::html(course_detail_card(c)))
                .collect(),
        );
        page.set_visible(ids::RECOMMENDATIONS_SECTION, true);
        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::fake_api::{course, server_error, Call, FakeApi};
    use crate::infrastructure::document::Document;

    #[tokio::test]
    async fn test_load_courses_keeps_placeholder() {
        let mut api = FakeApi::new();
        api.courses = Ok(vec![course(1, "Rust"), course(2, "Go")]);
        let catalog = CourseCatalog::new(Arc::new(api));
        let mut doc = Document::upload_page();

        assert_eq!(catalog.load_courses(&mut doc).await.unwrap(), 2);
        // reload must not duplicate entries
        assert_eq!(catalog.load_courses(&mut doc).await.unwrap(), 2);

        let options = doc.children(ids::COURSE_SELECT);
        assert_eq!(options.len(), 3);
        assert!(options[0].html.contains("Select a course"));
        assert_eq!(
            options[1].html,
            r#"<option value="1">Rust (Programming - Beginner)</option>"#
        );
    }

    #[tokio::test]
    async fn test_load_courses_failure_alerts() {
        let mut api = FakeApi::new();
        api.courses = Err(server_error());
        let mut doc = Document::upload_page();

        assert!(CourseCatalog::new(Arc::new(api)).load_courses(&mut doc).await.is_err());
        assert_eq!(doc.alerts(), [LOAD_ERROR_TEXT]);
        assert_eq!(doc.children(ids::COURSE_SELECT).len(), 1);
    }

    #[tokio::test]
    async fn test_course_recommendations_toggle_section() {
        let mut api = FakeApi::new();
        api.recommendations = Ok(vec![course(3, "Systems Programming")]);
        let api = Arc::new(api);
        let mut doc = Document::upload_page();

        let shown = CourseCatalog::new(api.clone())
            .show_recommendations_for(&mut doc, 1)
            .await;

        assert_eq!(shown.len(), 1);
        assert_eq!(api.calls(), vec![Call::RecommendationsForCourse(1)]);
        assert_eq!(doc.is_visible(ids::RECOMMENDATIONS_SECTION), Some(true));
        assert!(doc
            .inner_html(ids::RECOMMENDATIONS_LIST)
            .unwrap()
            .contains("Systems Programming"));
    }

    #[tokio::test]
    async fn test_failed_course_recommendations_hide_section() {
        let mut api = FakeApi::new();
        api.recommendations = Err(server_error());
        let mut doc = Document::upload_page().hidden(ids::RECOMMENDATIONS_SECTION);

        let shown = CourseCatalog::new(Arc::new(api))
            .show_recommendations_for(&mut doc, 1)
            .await;

        assert!(shown.is_empty());
        assert_eq!(doc.is_visible(ids::RECOMMENDATIONS_SECTION), Some(false));
    }
}
