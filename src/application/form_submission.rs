// Form submission handler - Uploads a certificate and shows follow-up recommendations
use crate::application::certificate_api::CertificateApi;
use crate::application::error::ClientResult;
use crate::application::markup::recommendation_item;
use crate::application::page::{ids, Page};
use crate::domain::certificate::CertificateForm;
use crate::domain::course::{Course, RecommendationQuery};
use std::sync::Arc;

pub const SUCCESS_TEXT: &str = "Certificate added successfully!";
pub const EMPTY_TEXT: &str = "No recommendations available.";
pub const RECOMMENDATIONS_FAILED_TEXT: &str = "Recommendations could not be loaded";

#[derive(Clone)]
pub struct FormSubmissionHandler {
    api: Arc<dyn CertificateApi>,
}

impl FormSubmissionHandler {
    pub fn new(api: Arc<dyn CertificateApi>) -> Self {
        Self { api }
    }

    /// Upload `form`, then request recommendations seeded with what was just
    /// submitted. The form is reset once the upload is stored; a failed
    /// recommendations call is reported but does not fail the submission.
    pub async fn submit<P: Page + ?Sized>(
        &self,
        page: &mut P,
        form: &CertificateForm,
    ) -> ClientResult<Vec<Course>> {
        if let Err(e) = self.upload(form).await {
            tracing::error!("Error uploading certificate: {}", e);
            page.alert(&format!("Failed to upload certificate: {}", e));
            return Err(e);
        }
        page.reset_form(ids::CERTIFICATE_FORM);

        let query = RecommendationQuery::from_form(form);
        match self.api.recommendations(&query).await {
            Ok(recommendations) => {
                render_recommendations(page, &recommendations);
                page.alert(SUCCESS_TEXT);
                Ok(recommendations)
            }
            Err(e) => {
                tracing::error!("Certificate stored but recommendations failed: {}", e);
                page.alert(&format!("{} {}: {}", SUCCESS_TEXT, RECOMMENDATIONS_FAILED_TEXT, e));
                Ok(Vec::new())
            }
        }
    }

    async fn upload(&self, form: &CertificateForm) -> ClientResult<()> {
        tracing::debug!(
            "Uploading certificate for course {:?} (image attached: {})",
            form.course_name,
            form.image.is_some()
        );
        let receipt = self.api.upload_certificate(form).await?;
        if let Some(message) = receipt.message {
            tracing::debug!("Upload accepted: {}", message);
        }
        Ok(())
    }
}

fn render_recommendations<P: Page + ?Sized>(page: &mut P, recommendations: &[Course]) {
    let html = if recommendations.is_empty() {
        format!(r#"<p class="text-muted">{}</p>"#, EMPTY_TEXT)
    } else {
        recommendations.iter().map(recommendation_item).collect()
    };
    page.set_html(ids::SUBMIT_RECOMMENDATIONS, html);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::ClientError;
    use crate::application::fake_api::{course, Call, FakeApi};
    use crate::infrastructure::document::Document;

    fn form() -> CertificateForm {
        let mut form = CertificateForm::default();
        for (name, value) in [
            ("course_id", "4"),
            ("course_name", "Rust Basics"),
            ("domain", "Programming"),
            ("duration", "12"),
            ("difficulty", "Beginner"),
            ("performance_score", "88"),
        ] {
            form.set_field(name, value);
        }
        form
    }

    #[tokio::test]
    async fn test_submit_uploads_then_recommends() {
        let mut api = FakeApi::new();
        api.recommendations = Ok(vec![course(1, "Advanced Rust")]);
        let api = Arc::new(api);
        let mut doc = Document::upload_page();

        let recommendations = FormSubmissionHandler::new(api.clone())
            .submit(&mut doc, &form())
            .await
            .unwrap();

        assert_eq!(recommendations.len(), 1);
        let calls = api.calls();
        assert_eq!(calls[0], Call::Upload("Rust Basics".to_string()));
        match &calls[1] {
            Call::Recommendations(query) => {
                assert_eq!(query.course_name.as_deref(), Some("Rust Basics"));
                assert_eq!(query.duration, Some(12));
                assert_eq!(query.performance_score, Some(88));
            }
            other => panic!("unexpected call {:?}", other),
        }
        assert!(doc
            .inner_html(ids::SUBMIT_RECOMMENDATIONS)
            .unwrap()
            .contains("Advanced Rust"));
        assert_eq!(doc.form_resets(), [ids::CERTIFICATE_FORM]);
        assert_eq!(doc.alerts(), [SUCCESS_TEXT]);
    }

    #[tokio::test]
    async fn test_failed_upload_alerts_without_recommending() {
        let mut api = FakeApi::new();
        api.upload = Err(ClientError::status(400, Some("No file uploaded".to_string())));
        let api = Arc::new(api);
        let mut doc = Document::upload_page();

        let result = FormSubmissionHandler::new(api.clone())
            .submit(&mut doc, &form())
            .await;

        assert!(result.is_err());
        assert_eq!(api.calls().len(), 1);
        assert!(doc.form_resets().is_empty());
        assert_eq!(doc.alerts(), ["Failed to upload certificate: No file uploaded"]);
    }

    #[tokio::test]
    async fn test_empty_recommendations_show_placeholder() {
        let mut doc = Document::upload_page();

        FormSubmissionHandler::new(Arc::new(FakeApi::new()))
            .submit(&mut doc, &form())
            .await
            .unwrap();

        assert!(doc
            .inner_html(ids::SUBMIT_RECOMMENDATIONS)
            .unwrap()
            .contains(EMPTY_TEXT));
    }

    #[tokio::test]
    async fn test_failed_recommendations_still_report_stored_upload() {
        let mut api = FakeApi::new();
        api.recommendations = Err(ClientError::status(500, Some("model offline".to_string())));
        let api = Arc::new(api);
        let mut doc = Document::upload_page();

        let recommendations = FormSubmissionHandler::new(api.clone())
            .submit(&mut doc, &form())
            .await
            .unwrap();

        assert!(recommendations.is_empty());
        assert_eq!(api.calls().len(), 2);
        assert_eq!(doc.form_resets(), [ids::CERTIFICATE_FORM]);
        assert_eq!(
            doc.alerts(),
            ["Certificate added successfully! Recommendations could not be loaded: model offline"]
        );
        assert!(!doc.alerts()[0].contains("Failed to upload"));
    }
}
