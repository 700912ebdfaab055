// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::certificate_api::CertificateApi;
use crate::application::course_catalog::CourseCatalog;
use crate::application::dashboard_service::DashboardLoader;
use crate::application::form_submission::FormSubmissionHandler;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_api::HttpCertificateApi;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    course_recommendations, dashboard, delete_certificate, health_check, submit_certificate,
    upload_page,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Backend client (infrastructure layer)
    let api: Arc<dyn CertificateApi> = Arc::new(HttpCertificateApi::new(&config.api)?);

    // Page controllers (application layer)
    let state = Arc::new(AppState {
        dashboard: DashboardLoader::new(api.clone()),
        form_handler: FormSubmissionHandler::new(api.clone()),
        catalog: CourseCatalog::new(api),
        page: config.page.clone(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(dashboard))
        .route("/upload", get(upload_page))
        .route("/certificates", post(submit_certificate))
        .route("/certificates/:id/delete", post(delete_certificate))
        .route("/courses/:id/recommendations", get(course_recommendations))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = config.server.listen_addr.parse()?;
    tracing::info!(
        "Starting certificate dashboard on {} (backend {})",
        addr,
        config.api.base_url
    );

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
