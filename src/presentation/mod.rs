// Presentation layer - HTTP surface for rendering clients
pub mod app_state;
pub mod error;
pub mod handlers;
