// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use product_dashboard::application::dashboard_runtime::DashboardHandle;
use product_dashboard::application::dashboard_service::DashboardViewModel;
use product_dashboard::infrastructure::catalog_http::HttpCatalogClient;
use product_dashboard::infrastructure::config::load_app_config;
use product_dashboard::infrastructure::session_provider::ConfiguredAuthProvider;
use product_dashboard::presentation::app_state::AppState;
use product_dashboard::presentation::handlers::{
    change_page, current_session, get_dashboard, health_check, profile, refresh_dashboard,
    search, select_category, set_brand, sign_in, sign_out,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Catalog client (infrastructure layer)
    let catalog = Arc::new(HttpCatalogClient::new(
        app_config.catalog.base_url.clone(),
        app_config.catalog_timeout(),
    )?);
    let auth = Arc::new(ConfiguredAuthProvider::new(
        app_config.auth.user.clone(),
        app_config.auth.signed_in,
    ));

    // View model runtime (application layer)
    let view_model = DashboardViewModel::new(catalog, app_config.dashboard_settings());
    let dashboard = DashboardHandle::spawn(view_model);
    dashboard.refresh().await?;

    let state = Arc::new(AppState { dashboard, auth });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/session", get(current_session))
        .route("/auth/sign-in", post(sign_in))
        .route("/auth/sign-out", post(sign_out))
        .route("/profile", get(profile))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/refresh", post(refresh_dashboard))
        .route("/dashboard/category", post(select_category))
        .route("/dashboard/search", post(search))
        .route("/dashboard/brand", post(set_brand))
        .route("/dashboard/page", post(change_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = app_config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address {}", app_config.server.bind_addr))?;
    tracing::info!("Starting product-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
