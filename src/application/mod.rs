// Application layer - Page controllers and the seams they depend on
pub mod certificate_api;
pub mod certificate_table;
pub mod course_catalog;
pub mod dashboard_service;
pub mod error;
pub mod form_submission;
pub mod markup;
pub mod page;
pub mod recommendation_service;
pub mod statistics_panel;

#[cfg(test)]
pub(crate) mod fake_api;
