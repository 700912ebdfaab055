// Certificate table - Lists a user's certificates and handles deletion
use crate::application::certificate_api::CertificateApi;
use crate::application::error::ClientResult;
use crate::application::markup::{certificate_row, message_row};
use crate::application::page::{ids, Fragment, Notification, NotificationKind, Page};
use crate::application::statistics_panel::StatisticsPanel;
use crate::domain::certificate::{Certificate, UserId};
use std::sync::Arc;

pub const EMPTY_TEXT: &str = "No certificates found";
pub const LOAD_ERROR_TEXT: &str = "Error loading certificates. Please try again later.";
pub const DELETED_TEXT: &str = "Certificate deleted successfully";

#[derive(Clone)]
pub struct CertificateTable {
    api: Arc<dyn CertificateApi>,
    statistics: StatisticsPanel,
}

impl CertificateTable {
    pub fn new(api: Arc<dyn CertificateApi>, statistics: StatisticsPanel) -> Self {
        Self { api, statistics }
    }

    pub async fn fetch(&self, user_id: UserId) -> ClientResult<Vec<Certificate>> {
        tracing::debug!("Fetching certificates for user {}", user_id);
        let certificates = self.api.list_certificates(user_id).await?;
        tracing::debug!("Loaded {} certificates for user {}", certificates.len(), user_id);
        Ok(certificates)
    }

    /// Redraw the whole table body from `result`
    pub fn render<P: Page + ?Sized>(
        &self,
        page: &mut P,
        user_id: UserId,
        result: &ClientResult<Vec<Certificate>>,
    ) {
        let rows = match result {
            Ok(certificates) if certificates.is_empty() => vec![empty_row()],
            Ok(certificates) => certificates
                .iter()
                .map(|c| Fragment::keyed(c.id.to_string(), certificate_row(c, user_id)))
                .collect(),
            Err(e) => {
                tracing::error!("Error fetching certificates: {}", e);
                vec![Fragment::html(message_row(LOAD_ERROR_TEXT, "text-danger"))]
            }
        };
        page.replace_children(ids::CERTIFICATES_TABLE_BODY, rows);
    }

    /// Delete one certificate, drop its row and refresh the summary counters.
    /// The rest of the table is left as it is.
    pub async fn delete<P: Page + ?Sized>(
        &self,
        page: &mut P,
        user_id: UserId,
        certificate_id: i64,
    ) -> ClientResult<()> {
        tracing::debug!("Deleting certificate {} for user {}", certificate_id, user_id);

        if let Err(e) = self.api.delete_certificate(certificate_id).await {
            tracing::error!("Error deleting certificate {}: {}", certificate_id, e);
            page.notify(Notification::new(e.to_string(), NotificationKind::Error));
            return Err(e);
        }

        if !page.remove_keyed(ids::CERTIFICATES_TABLE_BODY, &certificate_id.to_string()) {
            tracing::debug!("No table row for certificate {}", certificate_id);
        }
        if page.child_count(ids::CERTIFICATES_TABLE_BODY) == 0 {
            page.replace_children(ids::CERTIFICATES_TABLE_BODY, vec![empty_row()]);
        }

        self.statistics.refresh(page, user_id).await;
        page.notify(Notification::new(DELETED_TEXT, NotificationKind::Success));
        Ok(())
    }
}

fn empty_row() -> Fragment {
    Fragment::html(message_row(EMPTY_TEXT, ""))
}
