// Dashboard domain model - the snapshot handed to rendering surfaces
use super::pagination::PageWindow;
use super::product::{CategoryCount, FilterCriteria, TableRow};
use serde::Serialize;

pub const ALL_CATEGORIES: &str = "All";

/// The category scope chosen by the user. This is the single source of truth
/// for "which category am I looking at"; the category filter follows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategorySelection {
    #[default]
    All,
    Category(String),
}

impl CategorySelection {
    /// "All" (any case) and the empty string both mean no category.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(ALL_CATEGORIES) {
            Self::All
        } else {
            Self::Category(value.to_string())
        }
    }

    pub fn as_filter(&self) -> Option<String> {
        match self {
            Self::All => None,
            Self::Category(name) => Some(name.clone()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Category(name) => name,
        }
    }
}

/// Which part of the dashboard state a fetch writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Overview,
    Products,
    Categories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshErrorKind {
    Fetch,
    Parse,
}

/// Transient "could not refresh" signal. Data shown alongside it is the last good data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshError {
    pub slot: Slot,
    pub kind: RefreshErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub selection: CategorySelection,
    /// Scope the rows were fetched for; differs from `selection` until its fetch lands
    pub scope: CategorySelection,
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub criteria: FilterCriteria,
    pub filters_active: bool,
    pub average_rating: Option<f64>,
    pub average_rating_display: String,
    pub category_histogram: Vec<CategoryCount>,
    pub rows: Vec<TableRow>,
    pub window: PageWindow,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub loading: bool,
    pub error: Option<RefreshError>,
    pub last_refreshed_ms: Option<i64>,
}
