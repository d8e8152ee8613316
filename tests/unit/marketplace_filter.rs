//! Marketplace filter tests

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use test_log::test;

use crate::common::test_data::{create_test_product, names};
use harvest_flow::catalog;
use harvest_flow::error::HarvestError;
use harvest_flow::marketplace::{filter_products, MarketplaceFilter};

#[test]
fn test_all_with_empty_search_returns_everything_in_order() {
    let products = catalog::products();
    let filtered = filter_products(&products, "all", "");

    assert_eq!(filtered.len(), products.len());
    for (kept, original) in filtered.iter().zip(products.iter()) {
        assert_eq!(kept.id, original.id);
    }
}

#[test]
fn test_category_filter_returns_exact_subsequence() {
    let products = catalog::products();
    let fruits = filter_products(&products, "fruits", "");
    assert_eq!(names(&fruits), vec!["Premium Apples", "Organic Strawberries"]);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let products = catalog::products();
    let organic = filter_products(&products, "all", "organic");
    assert_eq!(names(&organic), vec!["Organic Tomatoes", "Organic Strawberries"]);

    let shouted = filter_products(&products, "all", "ORGANIC");
    assert_eq!(names(&shouted), names(&organic));
}

#[test]
fn test_search_matches_seller_name() {
    let products = vec![
        create_test_product(1, "Carrots", "vegetables", "Sunny Acres"),
        create_test_product(2, "Beets", "vegetables", "Root Cellar"),
        create_test_product(3, "Sunflower Seeds", "grains", "Plains Co."),
    ];

    let sunny = filter_products(&products, "all", "sun");
    assert_eq!(names(&sunny), vec!["Carrots", "Sunflower Seeds"]);

    let both = filter_products(&products, "vegetables", "sun");
    assert_eq!(names(&both), vec!["Carrots"]);
}

#[test]
fn test_no_match_is_empty() {
    let products = catalog::products();
    assert!(filter_products(&products, "dairy", "").is_empty());
    assert!(filter_products(&products, "all", "durian").is_empty());
}

#[test]
fn test_filter_state_keeps_category_in_option_set() {
    let mut filter = MarketplaceFilter::new();
    assert_eq!(filter.category(), "all");

    filter.select_category("grains").unwrap();
    assert_matches!(
        filter.select_category("meat"),
        Err(HarvestError::UnknownOption { id, .. }) if id == "meat"
    );
    assert_eq!(filter.category(), "grains");

    filter.previous_category();
    assert_eq!(filter.category(), "fruits");
}

#[test]
fn test_filter_state_applies_search_edits() {
    let products = catalog::products();
    let mut filter = MarketplaceFilter::new();

    for c in "Bee".chars() {
        filter.push_char(c);
    }
    assert_eq!(names(&filter.apply(&products)), vec!["Raw Honey"]);

    filter.pop_char();
    filter.pop_char();
    assert_eq!(filter.search(), "B");

    filter.clear_search();
    assert_eq!(filter.apply(&products).len(), products.len());
}
