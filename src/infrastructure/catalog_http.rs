// Catalog client over the public REST catalog
use crate::application::catalog_client::{CatalogClient, CatalogError, ProductPage};
use crate::domain::product::Product;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
    #[serde(default)]
    total: Option<usize>,
}

/// The categories endpoint used to return bare slugs and now returns objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryEntry {
    Slug(String),
    Detailed { slug: String },
}

impl CategoryEntry {
    fn into_slug(self) -> String {
        match self {
            CategoryEntry::Slug(slug) | CategoryEntry::Detailed { slug } => slug,
        }
    }
}

impl HttpCatalogClient {
    pub fn new(base_url: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn products_url(&self, limit: usize, skip: usize) -> String {
        format!("{}/products?limit={}&skip={}", self.base_url, limit, skip)
    }

    fn category_url(&self, category: &str) -> String {
        format!(
            "{}/products/category/{}",
            self.base_url,
            urlencoding::encode(category)
        )
    }

    fn categories_url(&self) -> String {
        format!("{}/products/categories", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| CatalogError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status { status, body });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Fetch(e.to_string()))?;

        parse_body(&bytes)
    }
}

fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CatalogError> {
    serde_json::from_slice(bytes).map_err(|e| CatalogError::Parse(e.to_string()))
}

fn into_page(response: ProductsResponse) -> ProductPage {
    ProductPage::new(response.products, response.total)
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_products(&self, limit: usize, skip: usize) -> Result<ProductPage, CatalogError> {
        let url = self.products_url(limit, skip);
        self.get_json::<ProductsResponse>(&url).await.map(into_page)
    }

    async fn fetch_by_category(&self, category: &str) -> Result<ProductPage, CatalogError> {
        let url = self.category_url(category);
        self.get_json::<ProductsResponse>(&url).await.map(into_page)
    }

    async fn fetch_categories(&self) -> Result<Vec<String>, CatalogError> {
        let url = self.categories_url();
        let entries = self.get_json::<Vec<CategoryEntry>>(&url).await?;
        Ok(entries.into_iter().map(CategoryEntry::into_slug).collect())
    }
}
