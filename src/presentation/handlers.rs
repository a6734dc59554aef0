// HTTP request handlers
use crate::domain::dashboard::{CategorySelection, DashboardView};
use crate::domain::pagination::PageDirection;
use crate::domain::session::{Profile, User};
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct CategoryRequest {
    pub category: String,
}

#[derive(Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
}

#[derive(Deserialize)]
pub struct BrandRequest {
    #[serde(default)]
    pub brand: Option<String>,
}

#[derive(Deserialize)]
pub struct PageRequest {
    pub direction: PageDirection,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

async fn require_user(state: &AppState) -> Result<User, ApiError> {
    state.auth.current_session().await.ok_or(ApiError::Unauthorized)
}

async fn render(view: DashboardView, headers: &HeaderMap) -> Response {
    match json_response(StatusCode::OK, &view, accepts_brotli(headers)).await {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

pub async fn current_session(State(state): State<Arc<AppState>>) -> Result<Json<User>, ApiError> {
    Ok(Json(require_user(&state).await?))
}

pub async fn sign_in(State(state): State<Arc<AppState>>) -> Result<Json<User>, ApiError> {
    let user = state.auth.sign_in().await?;
    Ok(Json(user))
}

pub async fn sign_out(State(state): State<Arc<AppState>>) -> Result<StatusCode, ApiError> {
    state.auth.sign_out().await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn profile(State(state): State<Arc<AppState>>) -> Result<Json<Profile>, ApiError> {
    let user = require_user(&state).await?;
    Ok(Json(Profile::for_user(&user)))
}

pub async fn get_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    require_user(&state).await?;
    let view = state.dashboard.snapshot().await?;
    Ok(render(view, &headers).await)
}

pub async fn refresh_dashboard(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    require_user(&state).await?;
    let view = state.dashboard.refresh().await?;
    Ok(render(view, &headers).await)
}

pub async fn select_category(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<CategoryRequest>,
) -> Result<Response, ApiError> {
    require_user(&state).await?;
    let selection = CategorySelection::parse(&request.category);
    let view = state.dashboard.select_category(selection).await?;
    Ok(render(view, &headers).await)
}

pub async fn search(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<Response, ApiError> {
    require_user(&state).await?;
    let view = state.dashboard.set_search_query(request.query).await?;
    Ok(render(view, &headers).await)
}

pub async fn set_brand(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<BrandRequest>,
) -> Result<Response, ApiError> {
    require_user(&state).await?;
    let view = state.dashboard.set_brand(request.brand).await?;
    Ok(render(view, &headers).await)
}

pub async fn change_page(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
    Json(request): Json<PageRequest>,
) -> Result<Response, ApiError> {
    require_user(&state).await?;
    let view = state.dashboard.set_page(request.direction).await?;
    Ok(render(view, &headers).await)
}
