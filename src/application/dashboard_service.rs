// Dashboard service - Loads every dashboard region for one user
use crate::application::certificate_api::CertificateApi;
use crate::application::certificate_table::CertificateTable;
use crate::application::page::{ids, Page};
use crate::application::recommendation_service::RecommendationFetcher;
use crate::application::statistics_panel::StatisticsPanel;
use crate::application::error::ClientResult;
use crate::domain::certificate::{Certificate, UserId};
use crate::domain::chart::cumulative_progress_chart;
use crate::domain::course::RecommendationQuery;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardLoader {
    statistics: StatisticsPanel,
    certificates: CertificateTable,
    recommendations: RecommendationFetcher,
}

impl DashboardLoader {
    pub fn new(api: Arc<dyn CertificateApi>) -> Self {
        let statistics = StatisticsPanel::new(api.clone());
        Self {
            certificates: CertificateTable::new(api.clone(), statistics.clone()),
            recommendations: RecommendationFetcher::new(api),
            statistics,
        }
    }

    pub fn recommendations(&self) -> &RecommendationFetcher {
        &self.recommendations
    }

    /// Fetch statistics, certificates and recommendations concurrently, then
    /// render each into its own region. A failure in one region leaves the
    /// others intact. Returns the certificates now on the page, empty when the
    /// list could not be loaded.
    pub async fn load<P: Page + ?Sized>(&self, page: &mut P, user_id: UserId) -> Vec<Certificate> {
        tracing::debug!("Loading dashboard for user {}", user_id);
        page.set_visible(ids::LOADING_INDICATOR, true);

        let (stats, certificates, recommendations) = futures::join!(
            self.statistics.fetch(user_id),
            self.certificates.fetch(user_id),
            self.recommendations.fetch(Some(user_id)),
        );

        self.statistics.render(page, &stats);
        self.certificates.render(page, user_id, &certificates);
        self.recommendations.render(page, &recommendations);
        let shown = certificates.unwrap_or_default();
        draw_completion(page, &shown);

        page.set_visible(ids::LOADING_INDICATOR, false);
        shown
    }

    /// Delete a certificate from a loaded dashboard. Besides the table row and
    /// the counters, the completion chart is redrawn without it, and the
    /// recommendations are refetched when it was the one seeding them.
    pub async fn delete<P: Page + ?Sized>(
        &self,
        page: &mut P,
        user_id: UserId,
        certificate_id: i64,
        shown: &[Certificate],
    ) -> ClientResult<()> {
        self.certificates.delete(page, user_id, certificate_id).await?;

        let remaining: Vec<Certificate> = shown
            .iter()
            .filter(|c| c.id != certificate_id)
            .cloned()
            .collect();
        draw_completion(page, &remaining);

        let query = RecommendationQuery::for_history(&remaining);
        if query != RecommendationQuery::for_history(shown) {
            let result = self.recommendations.fetch_query(&query).await;
            self.recommendations.render(page, &result);
        }
        Ok(())
    }
}

fn draw_completion<P: Page + ?Sized>(page: &mut P, certificates: &[Certificate]) {
    let undated = certificates.iter().filter(|c| c.completed_at().is_none()).count();
    if undated > 0 {
        tracing::warn!(
            "{} certificates without a usable completion date left out of the progress chart",
            undated
        );
    }
    page.draw_chart(ids::COMPLETION_CHART, cumulative_progress_chart(certificates));
}
