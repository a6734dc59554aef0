// Aggregate statistics over an in-memory product collection
use super::product::{AggregateResult, CategoryCount, Product};
use std::collections::HashMap;

/// Mean of `rating`. `None` for an empty collection, never NaN.
pub fn average_rating(products: &[Product]) -> Option<f64> {
    if products.is_empty() {
        return None;
    }

    let total: f64 = products.iter().map(|p| p.rating).sum();
    Some(total / products.len() as f64)
}

/// Count of products per category, ordered by first appearance in the input.
pub fn category_histogram(products: &[Product]) -> Vec<CategoryCount> {
    let mut histogram: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for product in products {
        match index.get(product.category.as_str()).copied() {
            Some(slot) => histogram[slot].count += 1,
            None => {
                index.insert(product.category.as_str(), histogram.len());
                histogram.push(CategoryCount::new(product.category.clone(), 1));
            }
        }
    }

    histogram
}

/// Distinct non-empty brands, ordered by first appearance.
pub fn distinct_brands(products: &[Product]) -> Vec<String> {
    let mut brands: Vec<String> = Vec::new();
    for product in products {
        if !product.brand.is_empty() && !brands.contains(&product.brand) {
            brands.push(product.brand.clone());
        }
    }
    brands
}

pub fn aggregate(rating_scope: &[Product], histogram_scope: &[Product]) -> AggregateResult {
    AggregateResult {
        average_rating: average_rating(rating_scope),
        category_histogram: category_histogram(histogram_scope),
    }
}

/// Display form of an average rating: two decimals with ties rounded away
/// from zero, or "N/A" without data.
pub fn format_rating(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{:.2}", (value * 100.0).round() / 100.0),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::sample;

    fn by_category(categories: &[&str]) -> Vec<Product> {
        categories
            .iter()
            .enumerate()
            .map(|(i, c)| sample(i as i64, "item", c, "", 3.0))
            .collect()
    }

    #[test]
    fn test_average_rating_empty_is_none() {
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn test_average_rating_mean() {
        let products = vec![
            sample(1, "a", "x", "", 4.0),
            sample(2, "b", "x", "", 3.0),
            sample(3, "c", "x", "", 4.5),
        ];
        let average = average_rating(&products).unwrap();
        assert!((average - 11.5 / 3.0).abs() < 1e-9);
        assert_eq!(format_rating(Some(average)), "3.83");
    }

    #[test]
    fn test_format_rating_without_data() {
        assert_eq!(format_rating(None), "N/A");
        assert_eq!(format_rating(Some(4.0)), "4.00");
    }

    #[test]
    fn test_format_rating_rounds_ties_up() {
        let products = vec![sample(1, "a", "x", "", 4.0), sample(2, "b", "x", "", 4.25)];
        let average = average_rating(&products);
        assert_eq!(average, Some(4.125));
        assert_eq!(format_rating(average), "4.13");
        assert_eq!(format_rating(Some(0.125)), "0.13");
        assert_eq!(format_rating(Some(4.994)), "4.99");
    }

    #[test]
    fn test_histogram_first_seen_order() {
        let histogram = category_histogram(&by_category(&["a", "b", "a"]));
        assert_eq!(
            histogram,
            vec![
                CategoryCount::new("a".to_string(), 2),
                CategoryCount::new("b".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_histogram_is_not_alphabetical() {
        let histogram = category_histogram(&by_category(&["smartphones", "beauty", "laptops", "beauty"]));
        let labels: Vec<&str> = histogram.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(labels, vec!["smartphones", "beauty", "laptops"]);
    }

    #[test]
    fn test_histogram_counts_sum_to_length() {
        for categories in [
            vec![],
            vec!["a"],
            vec!["a", "b", "c", "b", "a", "a", "d"],
        ] {
            let products = by_category(&categories);
            let total: usize = category_histogram(&products).iter().map(|c| c.count).sum();
            assert_eq!(total, products.len());
        }
    }

    #[test]
    fn test_histogram_exact_match_grouping() {
        let histogram = category_histogram(&by_category(&["Beauty", "beauty"]));
        assert_eq!(histogram.len(), 2);
    }

    #[test]
    fn test_distinct_brands_skips_empty() {
        let products = vec![
            sample(1, "a", "x", "Apple", 4.0),
            sample(2, "b", "x", "", 4.0),
            sample(3, "c", "x", "Samsung", 4.0),
            sample(4, "d", "x", "Apple", 4.0),
        ];
        assert_eq!(distinct_brands(&products), vec!["Apple", "Samsung"]);
    }
}
