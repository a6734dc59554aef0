// Dashboard state record and its pure transition function
use crate::application::catalog_client::{CatalogError, ProductPage};
use crate::domain::aggregation::{aggregate, distinct_brands};
use crate::domain::dashboard::{CategorySelection, RefreshError, RefreshErrorKind, Slot};
use crate::domain::filter::{apply_all, apply_brand, apply_text_search};
use crate::domain::pagination::{PageDirection, PageWindow, PaginationController};
use crate::domain::product::{AggregateResult, FilterCriteria, Product};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSettings {
    pub pager: PaginationController,
    /// Size of the unconstrained collection behind the "All" aggregates
    pub overview_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogQuery {
    Page { limit: usize, skip: usize },
    Category(String),
    Categories,
}

/// A fetch the state machine wants performed. `seq` identifies it when the
/// result comes back; `window` is the page that becomes current on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub seq: u64,
    pub slot: Slot,
    pub query: CatalogQuery,
    pub window: Option<PageWindow>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchPayload {
    Products(ProductPage),
    Categories(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    Refresh,
    SelectCategory(CategorySelection),
    SetSearchQuery(String),
    SetBrand(Option<String>),
    ChangePage(PageDirection),
    FetchSucceeded {
        request: FetchRequest,
        payload: FetchPayload,
        completed_at_ms: i64,
    },
    FetchFailed {
        request: FetchRequest,
        error: CatalogError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Unconstrained collection used for aggregates in the "All" scope
    pub overview: Vec<Product>,
    /// Freshest table collection, replaced wholesale on every successful fetch
    pub products: Vec<Product>,
    pub products_scope: CategorySelection,
    pub categories: Vec<String>,
    pub selection: CategorySelection,
    pub criteria: FilterCriteria,
    pub window: PageWindow,
    pub last_error: Option<RefreshError>,
    pub last_refreshed_ms: Option<i64>,
    next_seq: u64,
    in_flight: HashMap<Slot, u64>,
}

impl DashboardState {
    pub fn new(settings: &DashboardSettings) -> Self {
        Self {
            overview: Vec::new(),
            products: Vec::new(),
            products_scope: CategorySelection::All,
            categories: Vec::new(),
            selection: CategorySelection::All,
            criteria: FilterCriteria::default(),
            window: settings.pager.initial(),
            last_error: None,
            last_refreshed_ms: None,
            next_seq: 0,
            in_flight: HashMap::new(),
        }
    }

    /// `(state, event) -> (state, fetches to perform)`
    pub fn apply(mut self, event: DashboardEvent, settings: &DashboardSettings) -> (Self, Vec<FetchRequest>) {
        let mut requests = Vec::new();

        match event {
            DashboardEvent::Refresh => {
                requests.push(self.issue_overview(settings));
                requests.push(self.issue(Slot::Categories, CatalogQuery::Categories, None));
                let window = self.window;
                requests.push(self.issue_products(window));
            }
            DashboardEvent::SelectCategory(selection) => {
                if selection != self.selection {
                    // a brand picked in the old scope may not exist in the new one
                    self.criteria.brand = None;
                }
                self.criteria.category = selection.as_filter();
                self.selection = selection;

                if self.selection == CategorySelection::All {
                    requests.push(self.issue_overview(settings));
                }
                let window = settings.pager.initial();
                requests.push(self.issue_products(window));
            }
            DashboardEvent::SetSearchQuery(text) => {
                self.criteria.search_text = text;
            }
            DashboardEvent::SetBrand(brand) => {
                self.criteria.brand = brand.filter(|b| !b.is_empty());
            }
            DashboardEvent::ChangePage(direction) => {
                if self.paging_enabled() {
                    let target = settings.pager.step(&self.window, direction);
                    if target != self.window {
                        requests.push(self.issue_products(target));
                    }
                }
            }
            DashboardEvent::FetchSucceeded {
                request,
                payload,
                completed_at_ms,
            } => {
                if self.settle(&request) {
                    self.store(request, payload);
                    self.last_refreshed_ms = Some(completed_at_ms);
                }
            }
            DashboardEvent::FetchFailed { request, error } => {
                if self.settle(&request) {
                    tracing::warn!(seq = request.seq, slot = ?request.slot, "keeping last good data: {}", error);
                    self.last_error = Some(RefreshError {
                        slot: request.slot,
                        kind: match error {
                            CatalogError::Parse(_) => RefreshErrorKind::Parse,
                            CatalogError::Fetch(_) | CatalogError::Status { .. } => RefreshErrorKind::Fetch,
                        },
                        message: error.to_string(),
                    });
                }
            }
        }

        (self, requests)
    }

    fn issue(&mut self, slot: Slot, query: CatalogQuery, window: Option<PageWindow>) -> FetchRequest {
        self.next_seq += 1;
        if let Some(superseded) = self.in_flight.insert(slot, self.next_seq) {
            tracing::debug!(slot = ?slot, superseded, seq = self.next_seq, "superseding in-flight fetch");
        }
        FetchRequest {
            seq: self.next_seq,
            slot,
            query,
            window,
        }
    }

    fn issue_overview(&mut self, settings: &DashboardSettings) -> FetchRequest {
        let query = CatalogQuery::Page {
            limit: settings.overview_limit,
            skip: 0,
        };
        self.issue(Slot::Overview, query, None)
    }

    fn issue_products(&mut self, window: PageWindow) -> FetchRequest {
        match self.selection.clone() {
            CategorySelection::All => {
                let query = CatalogQuery::Page {
                    limit: window.limit,
                    skip: window.offset,
                };
                self.issue(Slot::Products, query, Some(window))
            }
            CategorySelection::Category(name) => {
                self.issue(Slot::Products, CatalogQuery::Category(name), None)
            }
        }
    }

    /// Clears the in-flight marker if `request` is still the newest for its slot.
    /// Returns false for stale completions, which must not touch the state.
    fn settle(&mut self, request: &FetchRequest) -> bool {
        let latest = self.in_flight.get(&request.slot).copied();
        if latest == Some(request.seq) {
            self.in_flight.remove(&request.slot);
            return true;
        }

        tracing::debug!(seq = request.seq, latest = ?latest, slot = ?request.slot, "dropping stale response");
        false
    }

    fn store(&mut self, request: FetchRequest, payload: FetchPayload) {
        match (request.slot, payload) {
            (Slot::Overview, FetchPayload::Products(page)) => {
                self.overview = page.products;
            }
            (Slot::Products, FetchPayload::Products(page)) => {
                self.products_scope = match &request.query {
                    CatalogQuery::Category(name) => CategorySelection::Category(name.clone()),
                    _ => CategorySelection::All,
                };
                if let Some(window) = request.window {
                    self.window = window.with_total(page.total);
                }
                self.products = page.products;
            }
            (Slot::Categories, FetchPayload::Categories(categories)) => {
                self.categories = categories;
            }
            (slot, _) => {
                tracing::warn!(slot = ?slot, "payload does not match slot, ignoring");
                return;
            }
        }

        if self.last_error.as_ref().is_some_and(|e| e.slot == request.slot) {
            self.last_error = None;
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn is_in_flight(&self, slot: Slot) -> bool {
        self.in_flight.contains_key(&slot)
    }

    /// Paging only walks the unconstrained listing; a category fetch returns its whole scope.
    pub fn paging_enabled(&self) -> bool {
        self.selection == CategorySelection::All
    }

    pub fn can_advance(&self, pager: &PaginationController) -> bool {
        self.paging_enabled() && pager.can_advance(&self.window)
    }

    pub fn can_retreat(&self, pager: &PaginationController) -> bool {
        self.paging_enabled() && pager.can_retreat(&self.window)
    }

    /// True once the table collection was fetched for the current selection.
    pub fn scope_matches(&self) -> bool {
        self.products_scope == self.selection
    }

    /// Products of the selected category scope, before brand and text filters.
    /// `None` while the collection still belongs to another scope (fetch pending
    /// or failed): those products are not the selected category's figures.
    pub fn scoped(&self) -> Option<Vec<Product>> {
        match &self.selection {
            CategorySelection::All => Some(self.overview.clone()),
            CategorySelection::Category(_) if self.scope_matches() => Some(self.products.clone()),
            CategorySelection::Category(_) => None,
        }
    }

    /// Table contents: the current collection, in the scope it was fetched
    /// for, narrowed by the brand and search criteria.
    pub fn filtered(&self) -> Vec<Product> {
        let criteria = FilterCriteria {
            category: self.products_scope.as_filter(),
            ..self.criteria.clone()
        };
        apply_all(&self.products, &criteria)
    }

    /// Average rating over the category scope; histogram over the scope
    /// after brand and search filters, so typing narrows the chart too.
    /// Empty when the selected scope has no data yet.
    pub fn aggregate(&self) -> AggregateResult {
        let Some(scoped) = self.scoped() else {
            return AggregateResult::default();
        };
        let by_brand = apply_brand(&scoped, self.criteria.brand.as_deref());
        let narrowed = apply_text_search(&by_brand, &self.criteria.search_text);
        aggregate(&scoped, &narrowed)
    }

    pub fn brands(&self) -> Vec<String> {
        distinct_brands(&self.products)
    }
}
