// Recommendation fetcher - Suggested courses based on the user's latest certificate
use crate::application::certificate_api::CertificateApi;
use crate::application::error::{ClientError, ClientResult};
use crate::application::markup::{message_block, recommendation_card};
use crate::application::page::{ids, Page};
use crate::domain::certificate::UserId;
use crate::domain::course::{Course, RecommendationQuery};
use std::sync::Arc;

pub const EMPTY_TEXT: &str = "No recommendations available at this time.";
pub const MISSING_USER_TEXT: &str = "Error: User ID not found. Please log in again.";

#[derive(Clone)]
pub struct RecommendationFetcher {
    api: Arc<dyn CertificateApi>,
}

impl RecommendationFetcher {
    pub fn new(api: Arc<dyn CertificateApi>) -> Self {
        Self { api }
    }

    /// Query derived from the user's history, or the default query when the
    /// user holds no certificates yet.
    pub async fn query_for(&self, user_id: UserId) -> ClientResult<RecommendationQuery> {
        let certificates = self.api.list_certificates(user_id).await?;
        if certificates.is_empty() {
            tracing::debug!("No certificates for user {}, using default recommendations", user_id);
        }
        Ok(RecommendationQuery::for_history(&certificates))
    }

    pub async fn fetch(&self, user_id: Option<UserId>) -> ClientResult<Vec<Course>> {
        let user_id = user_id.ok_or(ClientError::MissingUserId)?;
        let query = self.query_for(user_id).await?;
        self.fetch_query(&query).await
    }

    pub async fn fetch_query(&self, query: &RecommendationQuery) -> ClientResult<Vec<Course>> {
        tracing::debug!(
            "Requesting recommendations for domain={} difficulty={}",
            query.domain,
            query.difficulty
        );
        self.api.recommendations(query).await
    }

    pub async fn load<P: Page + ?Sized>(&self, page: &mut P, user_id: Option<UserId>) {
        let result = self.fetch(user_id).await;
        self.render(page, &result);
    }

    pub fn render<P: Page + ?Sized>(&self, page: &mut P, result: &ClientResult<Vec<Course>>) {
        let html = match result {
            Ok(courses) if courses.is_empty() => message_block(EMPTY_TEXT, "text-muted"),
            Ok(courses) => courses.iter().map(recommendation_card).collect(),
            Err(ClientError::MissingUserId) => {
                tracing::error!("User ID not found");
                message_block(MISSING_USER_TEXT, "text-danger")
            }
            Err(e) => {
                tracing::error!("Error fetching recommendations: {}", e);
                message_block(
                    &format!("Error loading recommendations: {}", e),
                    "text-danger",
                )
            }
        };
        page.set_html(ids::RECOMMENDED_COURSES, html);
    }
}
