// In-memory CertificateApi for controller tests
use crate::application::certificate_api::CertificateApi;
use crate::application::error::{ClientError, ClientResult};
use crate::domain::certificate::{Certificate, CertificateForm, UploadReceipt, UserId};
use crate::domain::course::{Course, RecommendationQuery};
use crate::domain::statistics::Statistics;
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Upload(String),
    ListCertificates(UserId),
    Delete(i64),
    Recommendations(RecommendationQuery),
    RecommendationsForCourse(i64),
    ListCourses,
    Statistics(UserId),
}

pub struct FakeApi {
    pub certificates: ClientResult<Vec<Certificate>>,
    pub statistics: ClientResult<Statistics>,
    pub recommendations: ClientResult<Vec<Course>>,
    pub courses: ClientResult<Vec<Course>>,
    pub upload: ClientResult<UploadReceipt>,
    pub delete: ClientResult<()>,
    calls: Mutex<Vec<Call>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            certificates: Ok(Vec::new()),
            statistics: Ok(Statistics::default()),
            recommendations: Ok(Vec::new()),
            courses: Ok(Vec::new()),
            upload: Ok(UploadReceipt::default()),
            delete: Ok(()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| matches(*c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn server_error() -> ClientError {
    ClientError::status(500, Some("boom".to_string()))
}

pub fn certificate(id: i64, name: &str, date: &str) -> Certificate {
    Certificate {
        id,
        course_id: Some(id * 10),
        course_name: name.to_string(),
        domain: "Data Science".to_string(),
        duration: 8,
        difficulty: "Intermediate".to_string(),
        performance_score: Some(80.0),
        completion_date: date.to_string(),
        image_path: None,
    }
}

pub fn course(id: i64, name: &str) -> Course {
    Course {
        id: Some(id),
        name: name.to_string(),
        domain: "Programming".to_string(),
        difficulty: "Beginner".to_string(),
        duration: Some(10),
        description: Some(format!("About {}", name)),
        url: None,
        instructor: None,
        rating: None,
        prerequisites: None,
    }
}

#[async_trait]
impl CertificateApi for FakeApi {
    async fn upload_certificate(&self, form: &CertificateForm) -> ClientResult<UploadReceipt> {
        self.record(Call::Upload(form.course_name.clone()));
        self.upload.clone()
    }

    async fn list_certificates(&self, user_id: UserId) -> ClientResult<Vec<Certificate>> {
        self.record(Call::ListCertificates(user_id));
        self.certificates.clone()
    }

    async fn delete_certificate(&self, certificate_id: i64) -> ClientResult<()> {
        self.record(Call::Delete(certificate_id));
        self.delete.clone()
    }

    async fn recommendations(&self, query: &RecommendationQuery) -> ClientResult<Vec<Course>> {
        self.record(Call::Recommendations(query.clone()));
        self.recommendations.clone()
    }

    async fn recommendations_for_course(&self, course_id: i64) -> ClientResult<Vec<Course>> {
        self.record(Call::RecommendationsForCourse(course_id));
        self.recommendations.clone()
    }

    async fn list_courses(&self) -> ClientResult<Vec<Course>> {
        self.record(Call::ListCourses);
        self.courses.clone()
    }

    async fn statistics(&self, user_id: UserId) -> ClientResult<Statistics> {
        self.record(Call::Statistics(user_id));
        self.statistics.clone()
    }
}
