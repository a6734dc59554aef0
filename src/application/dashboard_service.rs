// Dashboard view model - owns the state record and turns intents into fetches
use crate::application::catalog_client::CatalogClient;
use crate::application::dashboard_state::{
    CatalogQuery, DashboardEvent, DashboardSettings, DashboardState, FetchPayload, FetchRequest,
};
use crate::domain::aggregation::format_rating;
use crate::domain::dashboard::{CategorySelection, DashboardView};
use crate::domain::pagination::PageDirection;
use crate::domain::product::TableRow;
use std::sync::Arc;

pub struct DashboardViewModel {
    client: Arc<dyn CatalogClient>,
    settings: DashboardSettings,
    state: DashboardState,
}

impl DashboardViewModel {
    pub fn new(client: Arc<dyn CatalogClient>, settings: DashboardSettings) -> Self {
        let state = DashboardState::new(&settings);
        Self {
            client,
            settings,
            state,
        }
    }

    pub fn client(&self) -> Arc<dyn CatalogClient> {
        self.client.clone()
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Single update entry point. Returns the fetches the caller must run and
    /// feed back in as `FetchSucceeded`/`FetchFailed`.
    pub fn dispatch(&mut self, event: DashboardEvent) -> Vec<FetchRequest> {
        let current = std::mem::replace(&mut self.state, DashboardState::new(&self.settings));
        let (next, requests) = current.apply(event, &self.settings);
        self.state = next;
        requests
    }

    pub fn refresh(&mut self) -> Vec<FetchRequest> {
        self.dispatch(DashboardEvent::Refresh)
    }

    pub fn select_category(&mut self, selection: CategorySelection) -> Vec<FetchRequest> {
        self.dispatch(DashboardEvent::SelectCategory(selection))
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        let requests = self.dispatch(DashboardEvent::SetSearchQuery(text.into()));
        debug_assert!(requests.is_empty());
    }

    pub fn set_brand(&mut self, brand: Option<String>) {
        let requests = self.dispatch(DashboardEvent::SetBrand(brand));
        debug_assert!(requests.is_empty());
    }

    pub fn set_page(&mut self, direction: PageDirection) -> Vec<FetchRequest> {
        self.dispatch(DashboardEvent::ChangePage(direction))
    }

    /// Runs `requests` one after another and applies each completion.
    #[cfg(test)]
    pub(crate) async fn run(&mut self, requests: Vec<FetchRequest>) {
        for request in requests {
            let completion = execute(self.client.clone(), request).await;
            let follow_up = self.dispatch(completion);
            debug_assert!(follow_up.is_empty());
        }
    }

    pub fn view(&self) -> DashboardView {
        let pager = &self.settings.pager;
        let aggregate = self.state.aggregate();
        let rows = self.state.filtered().iter().map(TableRow::from).collect();

        let title = match &self.state.selection {
            CategorySelection::All => "All Categories".to_string(),
            CategorySelection::Category(name) => format!("Category: {}", name),
        };

        DashboardView {
            title,
            selection: self.state.selection.clone(),
            scope: self.state.products_scope.clone(),
            categories: self.state.categories.clone(),
            brands: self.state.brands(),
            criteria: self.state.criteria.clone(),
            filters_active: !self.state.criteria.is_empty(),
            average_rating_display: format_rating(aggregate.average_rating),
            average_rating: aggregate.average_rating,
            category_histogram: aggregate.category_histogram,
            rows,
            window: self.state.window,
            can_advance: self.state.can_advance(pager),
            can_retreat: self.state.can_retreat(pager),
            loading: self.state.is_loading(),
            error: self.state.last_error.clone(),
            last_refreshed_ms: self.state.last_refreshed_ms,
        }
    }
}

/// Performs one catalog fetch and wraps the outcome as a completion event.
pub async fn execute(client: Arc<dyn CatalogClient>, request: FetchRequest) -> DashboardEvent {
    tracing::debug!(seq = request.seq, slot = ?request.slot, query = ?request.query, "fetching");

    let result = match &request.query {
        CatalogQuery::Page { limit, skip } => client
            .fetch_products(*limit, *skip)
            .await
            .map(FetchPayload::Products),
        CatalogQuery::Category(name) => client
            .fetch_by_category(name)
            .await
            .map(FetchPayload::Products),
        CatalogQuery::Categories => client
            .fetch_categories()
            .await
            .map(FetchPayload::Categories),
    };

    match result {
        Ok(payload) => DashboardEvent::FetchSucceeded {
            request,
            payload,
            completed_at_ms: chrono::Utc::now().timestamp_millis(),
        },
        Err(error) => {
            tracing::warn!(seq = request.seq, "catalog fetch failed: {}", error);
            DashboardEvent::FetchFailed { request, error }
        }
    }
}
