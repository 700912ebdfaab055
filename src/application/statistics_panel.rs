// Statistics panel - Summary counters and distribution charts
use crate::application::certificate_api::CertificateApi;
use crate::application::error::ClientResult;
use crate::application::page::{ids, Page};
use crate::domain::certificate::UserId;
use crate::domain::chart::{difficulty_chart, domain_chart, score_progress_chart};
use crate::domain::statistics::Statistics;
use std::sync::Arc;

const ERROR_TEXT: &str = "Error";

#[derive(Clone)]
pub struct StatisticsPanel {
    api: Arc<dyn CertificateApi>,
}

impl StatisticsPanel {
    pub fn new(api: Arc<dyn CertificateApi>) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, user_id: UserId) -> ClientResult<Statistics> {
        tracing::debug!("Fetching statistics for user {}", user_id);
        self.api.statistics(user_id).await
    }

    /// Fetch and render, showing the loading indicator meanwhile
    pub async fn refresh<P: Page + ?Sized>(&self, page: &mut P, user_id: UserId) {
        page.set_visible(ids::LOADING_INDICATOR, true);
        let result = self.fetch(user_id).await;
        self.render(page, &result);
        page.set_visible(ids::LOADING_INDICATOR, false);
    }

    pub fn render<P: Page + ?Sized>(&self, page: &mut P, result: &ClientResult<Statistics>) {
        match result {
            Ok(stats) => render_statistics(page, stats),
            Err(e) => {
                tracing::error!("Error fetching statistics: {}", e);
                page.set_text(ids::TOTAL_COURSES, ERROR_TEXT);
                page.set_text(ids::AVERAGE_SCORE, ERROR_TEXT);
            }
        }
    }
}

fn render_statistics<P: Page + ?Sized>(page: &mut P, stats: &Statistics) {
    page.set_text(ids::TOTAL_COURSES, &stats.total_courses_label());
    page.set_text(ids::AVERAGE_SCORE, &stats.average_score_label());

    if stats.domains.is_empty() {
        tracing::debug!("No domain data available");
    } else {
        page.draw_chart(ids::DOMAIN_CHART, domain_chart(&stats.domains));
    }

    if stats.difficulty_levels.is_empty() {
        tracing::debug!("No difficulty level data available");
    } else {
        page.draw_chart(ids::DIFFICULTY_CHART, difficulty_chart(&stats.difficulty_levels));
    }

    let has_progress = !stats.certificates.is_empty();
    if has_progress {
        page.draw_chart(ids::PROGRESS_CHART, score_progress_chart(&stats.certificates));
    }
    page.set_visible(ids::PROGRESS_CHART, has_progress);
    page.set_visible(ids::NO_PROGRESS_DATA, !has_progress);
}
