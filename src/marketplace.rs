//! Marketplace listing filter.

use crate::catalog;
use crate::error::HarvestError;
use crate::models::Product;
use crate::selector::OptionSelector;

/// Category value that disables the category predicate
pub const ALL_CATEGORIES: &str = "all";

/// Products matching both the category and the search text, in input order.
///
/// The category must match exactly unless it is `all`. The search text is a
/// case-insensitive substring matched against the product name or the seller.
pub fn filter_products<'a>(products: &'a [Product], category: &str, search: &str) -> Vec<&'a Product> {
    let needle = search.to_lowercase();

    products
        .iter()
        .filter(|product| category == ALL_CATEGORIES || product.category == category)
        .filter(|product| {
            product.name.to_lowercase().contains(&needle)
                || product.seller.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Component-local filter state of the marketplace view
#[derive(Debug, Clone)]
pub struct MarketplaceFilter {
    category: OptionSelector,
    search: String,
}

impl Default for MarketplaceFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketplaceFilter {
    pub fn new() -> Self {
        Self {
            category: OptionSelector::new("category", catalog::categories().iter().copied()),
            search: String::new(),
        }
    }

    pub fn category(&self) -> &str {
        self.category.selected()
    }

    pub fn categories(&self) -> &OptionSelector {
        &self.category
    }

    pub fn select_category(&mut self, category: &str) -> Result<(), HarvestError> {
        self.category.select(category)
    }

    pub fn next_category(&mut self) {
        self.category.next();
    }

    pub fn previous_category(&mut self) {
        self.category.previous();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn push_char(&mut self, c: char) {
        self.search.push(c);
    }

    pub fn pop_char(&mut self) {
        self.search.pop();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Apply the current category and search text
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        filter_products(products, self.category(), &self.search)
    }
}
