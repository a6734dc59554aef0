// Infrastructure layer - External dependencies and adapters
pub mod catalog_http;
pub mod config;
pub mod http_response;
pub mod session_provider;
