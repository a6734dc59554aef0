// Composable product predicates. Every function returns a new collection
// and keeps the relative order of the surviving products.
use super::product::{active, FilterCriteria, Product};

pub fn apply_category(products: &[Product], category: Option<&str>) -> Vec<Product> {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect(),
        None => products.to_vec(),
    }
}

pub fn apply_brand(products: &[Product], brand: Option<&str>) -> Vec<Product> {
    match brand.filter(|b| !b.is_empty()) {
        Some(brand) => products.iter().filter(|p| p.brand == brand).cloned().collect(),
        None => products.to_vec(),
    }
}

/// Case-insensitive substring match against title or description.
pub fn apply_text_search(products: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }

    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| matches_text(p, &needle))
        .cloned()
        .collect()
}

/// Intersection of every active predicate, evaluated in a single pass.
pub fn apply_all(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let category = active(&criteria.category);
    let brand = active(&criteria.brand);
    let needle = criteria.search_text.to_lowercase();

    products
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| brand.is_none_or(|b| p.brand == b))
        .filter(|p| needle.is_empty() || matches_text(p, &needle))
        .cloned()
        .collect()
}

fn matches_text(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::sample;

    fn catalog() -> Vec<Product> {
        let mut phone = sample(1, "Smartphone X", "smartphones", "Apple", 4.5);
        phone.description = "A very smart device".to_string();
        let mut laptop = sample(2, "Laptop", "laptops", "Apple", 4.1);
        laptop.description = "fast machine".to_string();
        let mut case = sample(3, "Case", "accessories", "Generic", 3.2);
        case.description = "Protects your PHONE".to_string();
        let mut galaxy = sample(4, "Galaxy S", "smartphones", "Samsung", 4.3);
        galaxy.description = "Android flagship".to_string();
        vec![phone, laptop, case, galaxy]
    }

    fn ids(products: &[Product]) -> Vec<i64> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_constraints_are_identity() {
        let products = catalog();
        assert_eq!(apply_category(&products, None), products);
        assert_eq!(apply_category(&products, Some("")), products);
        assert_eq!(apply_brand(&products, None), products);
        assert_eq!(apply_text_search(&products, ""), products);
        assert_eq!(apply_all(&products, &FilterCriteria::default()), products);
    }

    #[test]
    fn test_category_exact_match() {
        assert_eq!(ids(&apply_category(&catalog(), Some("smartphones"))), vec![1, 4]);
        assert!(apply_category(&catalog(), Some("Smartphones")).is_empty());
    }

    #[test]
    fn test_brand_exact_match() {
        assert_eq!(ids(&apply_brand(&catalog(), Some("Apple"))), vec![1, 2]);
    }

    #[test]
    fn test_text_search_title_or_description() {
        let products = catalog();
        // "Smartphone X" by title, "Case" by description; "Laptop"/"fast machine" is out
        assert_eq!(ids(&apply_text_search(&products, "phone")), vec![1, 3]);
        assert_eq!(ids(&apply_text_search(&products, "PHONE")), vec![1, 3]);
        assert_eq!(ids(&apply_text_search(&products, "FAST")), vec![2]);
    }

    #[test]
    fn test_apply_all_is_intersection() {
        let products = catalog();
        let criteria = FilterCriteria {
            category: Some("smartphones".to_string()),
            brand: Some("Apple".to_string()),
            search_text: "smart".to_string(),
        };
        assert_eq!(ids(&apply_all(&products, &criteria)), vec![1]);

        let staged = apply_text_search(
            &apply_brand(&apply_category(&products, Some("smartphones")), Some("Apple")),
            "smart",
        );
        assert_eq!(apply_all(&products, &criteria), staged);
    }

    #[test]
    fn test_apply_all_order_independent() {
        let products = catalog();
        let a = apply_brand(&apply_text_search(&products, "a"), Some("Apple"));
        let b = apply_text_search(&apply_brand(&products, Some("Apple")), "a");
        assert_eq!(a, b);
    }

    #[test]
    fn test_apply_all_subset_preserving_order_and_idempotent() {
        let products = catalog();
        let criteria = FilterCriteria {
            category: None,
            brand: None,
            search_text: "s".to_string(),
        };
        let once = apply_all(&products, &criteria);

        let mut cursor = products.iter();
        for kept in &once {
            assert!(cursor.any(|p| p == kept), "result must be an ordered subset");
        }

        assert_eq!(apply_all(&once, &criteria), once);
    }

    #[test]
    fn test_source_is_untouched() {
        let products = catalog();
        let before = products.clone();
        let _ = apply_all(
            &products,
            &FilterCriteria {
                category: Some("laptops".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(products, before);
    }
}
