// HTTP request handlers
use crate::domain::certificate::{CertificateForm, CertificateImage, UserId, IMAGE_FIELD};
use crate::infrastructure::document::Document;
use crate::presentation::app_state::AppState;
use crate::presentation::html::{render_dashboard, render_upload, PageChrome};
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct UserQuery {
    pub user_id: Option<String>,
}

impl AppState {
    fn resolve_user(&self, query: &UserQuery) -> Option<UserId> {
        UserId::resolve(query.user_id.as_deref(), self.page.default_user())
    }

    fn chrome(&self) -> PageChrome {
        PageChrome {
            notification_timeout_secs: self.page.notification_timeout_secs,
        }
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Dashboard for one user: counters, charts, certificate table, recommendations
pub async fn dashboard(
    Query(query): Query<UserQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let user_id = state.resolve_user(&query);
    let mut doc = Document::dashboard();

    match user_id {
        Some(user_id) => {
            state.dashboard.load(&mut doc, user_id).await;
        }
        None => {
            tracing::error!("Dashboard requested without a user id");
            state.dashboard.recommendations().load(&mut doc, None).await;
        }
    }

    Html(render_dashboard(&doc, user_id.map(|u| u.0), state.chrome()))
}

/// Delete a certificate, then show the dashboard without its row
pub async fn delete_certificate(
    Path(certificate_id): Path<i64>,
    Query(query): Query<UserQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let Some(user_id) = state.resolve_user(&query) else {
        return (StatusCode::BAD_REQUEST, "User ID not found").into_response();
    };

    let mut doc = Document::dashboard();
    let shown = state.dashboard.load(&mut doc, user_id).await;
    // the failure is already on the page as a notification
    let _ = state
        .dashboard
        .delete(&mut doc, user_id, certificate_id, &shown)
        .await;

    Html(render_dashboard(&doc, Some(user_id.0), state.chrome())).into_response()
}

/// Upload form with the course dropdown filled in
pub async fn upload_page(
    Query(query): Query<UserQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let mut doc = Document::upload_page();
    let _ = state.catalog.load_courses(&mut doc).await;

    let user_id = state.resolve_user(&query);
    Html(render_upload(&doc, user_id.map(|u| u.0), state.chrome()))
}

/// Accept the upload form and forward it to the backend
pub async fn submit_certificate(
    Query(query): Query<UserQuery>,
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> impl IntoResponse {
    let form = match read_form(multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!("Malformed certificate form: {}", e);
            return (StatusCode::BAD_REQUEST, e).into_response();
        }
    };

    let mut doc = Document::upload_page();
    let _ = state.catalog.load_courses(&mut doc).await;
    let status = match state.form_handler.submit(&mut doc, &form).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::BAD_GATEWAY,
    };

    let user_id = state.resolve_user(&query);
    (status, Html(render_upload(&doc, user_id.map(|u| u.0), state.chrome()))).into_response()
}

/// Upload page showing recommendations for one catalog course
pub async fn course_recommendations(
    Path(course_id): Path<i64>,
    Query(query): Query<UserQuery>,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    let mut doc = Document::upload_page();
    let _ = state.catalog.load_courses(&mut doc).await;
    state
        .catalog
        .show_recommendations_for(&mut doc, course_id)
        .await;

    let user_id = state.resolve_user(&query);
    Html(render_upload(&doc, user_id.map(|u| u.0), state.chrome()))
}

async fn read_form(mut multipart: Multipart) -> Result<CertificateForm, String> {
    let mut form = CertificateForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        let name = field.name().unwrap_or_default().to_string();

        if name == IMAGE_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await.map_err(|e| e.to_string())?;
            // browsers send an empty part when no file was chosen
            if !file_name.is_empty() && !bytes.is_empty() {
                form.image = Some(CertificateImage {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            continue;
        }

        let value = field.text().await.map_err(|e| e.to_string())?;
        if !form.set_field(&name, &value) {
            tracing::debug!("Ignoring unknown form field {}", name);
        }
    }

    Ok(form)
}
