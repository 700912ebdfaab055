// Application state for HTTP handlers
use crate::application::course_catalog::CourseCatalog;
use crate::application::dashboard_service::DashboardLoader;
use crate::application::form_submission::FormSubmissionHandler;
use crate::infrastructure::config::PageSettings;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: DashboardLoader,
    pub form_handler: FormSubmissionHandler,
    pub catalog: CourseCatalog,
    pub page: PageSettings,
}
