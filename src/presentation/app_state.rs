// Application state for HTTP handlers
use crate::application::auth_provider::AuthProvider;
use crate::application::dashboard_runtime::DashboardHandle;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub dashboard: DashboardHandle,
    pub auth: Arc<dyn AuthProvider>,
}
