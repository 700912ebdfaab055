// API trait for the certificate backend
use crate::application::error::ClientResult;
use crate::domain::certificate::{Certificate, CertificateForm, UploadReceipt, UserId};
use crate::domain::course::{Course, RecommendationQuery};
use crate::domain::statistics::Statistics;
use async_trait::async_trait;

#[async_trait]
pub trait CertificateApi: Send + Sync {
    /// `POST /api/certificates` as multipart form data
    async fn upload_certificate(&self, form: &CertificateForm) -> ClientResult<UploadReceipt>;

    /// `GET /api/certificates/{userId}`
    async fn list_certificates(&self, user_id: UserId) -> ClientResult<Vec<Certificate>>;

    /// `DELETE /api/certificates/{id}`
    async fn delete_certificate(&self, certificate_id: i64) -> ClientResult<()>;

    /// `POST /api/recommendations`
    async fn recommendations(&self, query: &RecommendationQuery) -> ClientResult<Vec<Course>>;

    /// `GET /api/recommendations/{courseId}`
    async fn recommendations_for_course(&self, course_id: i64) -> ClientResult<Vec<Course>>;

    /// `GET /api/courses`
    async fn list_courses(&self) -> ClientResult<Vec<Course>>;

    /// `GET /api/statistics/{userId}`
    async fn statistics(&self, user_id: UserId) -> ClientResult<Statistics>;
}
