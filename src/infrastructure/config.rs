use crate::application::dashboard_state::DashboardSettings;
use crate::domain::pagination::PaginationController;
use crate::domain::session::User;
use anyhow::{ensure, Context};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub pagination: PaginationSettings,
    #[serde(default)]
    pub auth: AuthSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_overview_limit")]
    pub overview_limit: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaginationSettings {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Upper bound for paging when the catalog total is unknown or larger
    #[serde(default = "default_cap")]
    pub cap: usize,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AuthSettings {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub signed_in: bool,
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_base_url() -> String {
    "https://dummyjson.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_overview_limit() -> usize {
    100
}

fn default_page_size() -> usize {
    50
}

fn default_cap() -> usize {
    100
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            overview_limit: default_overview_limit(),
        }
    }
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            cap: default_cap(),
        }
    }
}

impl AppConfig {
    pub fn validate(self) -> anyhow::Result<Self> {
        ensure!(self.pagination.page_size > 0, "pagination.page_size must be positive");
        ensure!(
            self.pagination.cap >= self.pagination.page_size,
            "pagination.cap ({}) must be at least pagination.page_size ({})",
            self.pagination.cap,
            self.pagination.page_size
        );
        ensure!(self.catalog.overview_limit > 0, "catalog.overview_limit must be positive");
        Ok(self)
    }

    pub fn dashboard_settings(&self) -> DashboardSettings {
        DashboardSettings {
            pager: PaginationController::new(self.pagination.page_size, self.pagination.cap),
            overview_limit: self.catalog.overview_limit,
        }
    }

    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog.timeout_secs)
    }
}

/// `config/dashboard.toml` (optional) overlaid with `DASHBOARD__SECTION__KEY` variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("DASHBOARD")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to read dashboard configuration")?;

    let app_config: AppConfig = settings
        .try_deserialize()
        .context("Failed to parse dashboard configuration")?;
    app_config.validate()
}
