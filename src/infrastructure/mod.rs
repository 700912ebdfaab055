// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod document;
pub mod http_api;
