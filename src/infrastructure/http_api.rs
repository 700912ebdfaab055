// HTTP implementation of the certificate backend API
use crate::application::certificate_api::CertificateApi;
use crate::application::error::{ClientError, ClientResult};
use crate::domain::certificate::{
    Certificate, CertificateForm, UploadReceipt, UserId, COURSE_FIELD, IMAGE_FIELD,
};
use crate::domain::course::{Course, RecommendationQuery};
use crate::domain::statistics::Statistics;
use crate::infrastructure::config::{api_url, ApiSettings};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct HttpCertificateApi {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

impl HttpCertificateApi {
    pub fn new(settings: &ApiSettings) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, segments: &[&str]) -> String {
        api_url(&self.base_url, segments)
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> ClientResult<Response> {
        tracing::debug!("Sending request to {}", path);
        let response = request
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!("{} responded with {}", path, status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            return Err(ClientError::status(status.as_u16(), message));
        }

        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> ClientResult<T> {
        let response = self.send(path, request).await?;
        response.json::<T>().await.map_err(|e| ClientError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn multipart(form: &CertificateForm) -> Form {
        let mut multipart = Form::new()
            .text("course_name", form.course_name.clone())
            .text("domain", form.domain.clone())
            .text("difficulty", form.difficulty.clone());

        if let Some(course_id) = form.course_id {
            multipart = multipart.text(COURSE_FIELD, course_id.to_string());
        }
        if let Some(duration) = form.duration {
            multipart = multipart.text("duration", duration.to_string());
        }
        if let Some(score) = form.performance_score {
            multipart = multipart.text("performance_score", score.to_string());
        }
        if let Some(feedback) = &form.feedback {
            multipart = multipart.text("feedback", feedback.clone());
        }
        if let Some(image) = &form.image {
            let mut part = Part::stream(image.bytes.clone()).file_name(image.file_name.clone());
            if let Some(content_type) = &image.content_type {
                part = match part.mime_str(content_type) {
                    Ok(part) => part,
                    Err(e) => {
                        tracing::warn!("Ignoring content type {:?} of upload: {}", content_type, e);
                        Part::stream(image.bytes.clone()).file_name(image.file_name.clone())
                    }
                };
            }
            multipart = multipart.part(IMAGE_FIELD, part);
        }

        multipart
    }
}

#[async_trait]
impl CertificateApi for HttpCertificateApi {
    async fn upload_certificate(&self, form: &CertificateForm) -> ClientResult<UploadReceipt> {
        let path = "/api/certificates";
        let request = self
            .client
            .post(self.url(&["api", "certificates"]))
            .multipart(Self::multipart(form));
        let response = self.send(path, request).await?;

        // the receipt is informational; a 2xx with an odd body still counts as uploaded
        match response.json::<UploadReceipt>().await {
            Ok(receipt) => Ok(receipt),
            Err(e) => {
                tracing::warn!("Unreadable upload receipt: {}", e);
                Ok(UploadReceipt::default())
            }
        }
    }

    async fn list_certificates(&self, user_id: UserId) -> ClientResult<Vec<Certificate>> {
        let id = user_id.to_string();
        let request = self.client.get(self.url(&["api", "certificates", &id]));
        self.send_json(&format!("/api/certificates/{}", id), request)
            .await
    }

    async fn delete_certificate(&self, certificate_id: i64) -> ClientResult<()> {
        let id = certificate_id.to_string();
        let request = self
            .client
            .delete(self.url(&["api", "certificates", &id]))
            .header("Content-Type", "application/json");
        self.send(&format!("/api/certificates/{}", id), request)
            .await
            .map(|_| ())
    }

    async fn recommendations(&self, query: &RecommendationQuery) -> ClientResult<Vec<Course>> {
        let request = self
            .client
            .post(self.url(&["api", "recommendations"]))
            .json(query);
        self.send_json("/api/recommendations", request).await
    }

    async fn recommendations_for_course(&self, course_id: i64) -> ClientResult<Vec<Course>> {
        let id = course_id.to_string();
        let request = self.client.get(self.url(&["api", "recommendations", &id]));
        self.send_json(&format!("/api/recommendations/{}", id), request)
            .await
    }

    async fn list_courses(&self) -> ClientResult<Vec<Course>> {
        let request = self.client.get(self.url(&["api", "courses"]));
        self.send_json("/api/courses", request).await
    }

    async fn statistics(&self, user_id: UserId) -> ClientResult<Statistics> {
        let id = user_id.to_string();
        let request = self.client.get(self.url(&["api", "statistics", &id]));
        self.send_json(&format!("/api/statistics/{}", id), request)
            .await
    }
}
