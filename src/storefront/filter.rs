//! Catalog filtering.

use crate::api::models::Product;

use super::models::CategoryFilter;

/// Whether `term` occurs in the product's name or description, ignoring case.
/// An empty term matches everything.
pub fn matches_search(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
}

/// Products matching both the search term and the category filter, in
/// catalog order.
pub fn filter_products<'a>(
    products: &'a [Product],
    term: &str,
    category: &CategoryFilter,
) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|p| matches_search(p, term) && category.matches(&p.category))
        .collect()
}
