// Application layer - Ports and the dashboard view model
pub mod auth_provider;
pub mod catalog_client;
pub mod dashboard_runtime;
pub mod dashboard_service;
pub mod dashboard_state;
