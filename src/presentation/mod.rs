// Presentation layer - Page host serving rendered pages over HTTP
pub mod app_state;
pub mod handlers;
pub mod html;
