// Product catalog domain models
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category: String,
    // Some catalog entries (groceries, mostly) carry no brand at all
    #[serde(default)]
    pub brand: String,
    pub rating: f64,
    #[serde(default)]
    pub stock: i64,
    #[serde(rename = "thumbnail", alias = "thumbnailUrl", default)]
    pub thumbnail_url: String,
}

/// Active selection constraints. `None` or an empty string means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub brand: Option<String>,
    pub search_text: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        active(&self.category).is_none()
            && active(&self.brand).is_none()
            && self.search_text.is_empty()
    }
}

/// Returns the constraint value if it actually constrains anything.
pub fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

impl CategoryCount {
    pub fn new(category: String, count: usize) -> Self {
        Self { category, count }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    pub average_rating: Option<f64>,
    pub category_histogram: Vec<CategoryCount>,
}

/// One row of the product table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub brand: String,
    pub stock: i64,
    pub thumbnail_url: String,
}

impl From<&Product> for TableRow {
    fn from(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            category: product.category.clone(),
            brand: product.brand.clone(),
            stock: product.stock,
            thumbnail_url: product.thumbnail_url.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample(id: i64, title: &str, category: &str, brand: &str, rating: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: String::new(),
        price: 9.99,
        category: category.to_string(),
        brand: brand.to_string(),
        rating,
        stock: 10,
        thumbnail_url: format!("https://cdn.example/{id}.png"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_catalog_product() {
        let json = r#"{
            "id": 1,
            "title": "Essence Mascara Lash Princess",
            "description": "A popular mascara",
            "price": 9.99,
            "category": "beauty",
            "brand": "Essence",
            "rating": 4.94,
            "stock": 5,
            "thumbnail": "https://cdn.dummyjson.com/1/thumbnail.png",
            "tags": ["beauty", "mascara"]
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.brand, "Essence");
        assert_eq!(product.thumbnail_url, "https://cdn.dummyjson.com/1/thumbnail.png");
    }

    #[test]
    fn test_missing_brand_defaults_to_empty() {
        let json = r#"{"id": 16, "title": "Apple", "price": 1.99, "category": "groceries", "rating": 4.2}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.brand, "");
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn test_criteria_emptiness() {
        assert!(FilterCriteria::default().is_empty());

        let criteria = FilterCriteria {
            category: Some(String::new()),
            brand: None,
            search_text: String::new(),
        };
        assert!(criteria.is_empty());

        let criteria = FilterCriteria {
            brand: Some("Apple".to_string()),
            ..Default::default()
        };
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_table_row_projection() {
        let product = sample(3, "Lipstick", "beauty", "Chic", 4.0);
        let row = TableRow::from(&product);
        assert_eq!(row.title, "Lipstick");
        assert_eq!(row.thumbnail_url, "https://cdn.example/3.png");
    }
}
