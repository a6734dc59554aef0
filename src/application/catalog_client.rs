// Catalog port - the external product data source
use crate::domain::product::Product;
use async_trait::async_trait;
use thiserror::Error;

/// One catalog response: the products plus the size of the whole result set when reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: Option<usize>,
}

impl ProductPage {
    pub fn new(products: Vec<Product>, total: Option<usize>) -> Self {
        Self { products, total }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Network failure or timeout
    #[error("catalog request failed: {0}")]
    Fetch(String),

    #[error("catalog returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape
    #[error("malformed catalog response: {0}")]
    Parse(String),
}

#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// `GET /products?limit=N&skip=M`
    async fn fetch_products(&self, limit: usize, skip: usize) -> Result<ProductPage, CatalogError>;

    /// `GET /products/category/{name}`
    async fn fetch_by_category(&self, category: &str) -> Result<ProductPage, CatalogError>;

    /// `GET /products/categories`
    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError>;
}
