use std::collections::BTreeSet;

use super::models::Product;
use crate::favorites::FavoriteSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text: String,
    pub category: Option<String>,
    pub favorites_only: bool,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search_text.is_empty() && self.category.is_none() && !self.favorites_only
    }
}

/// Indices into `products` that pass every active predicate, in input order.
///
/// Predicates run title search, then category, then favorites.
pub fn filter_indices(
    products: &[Product],
    criteria: &FilterCriteria,
    favorites: &FavoriteSet,
) -> Vec<usize> {
    let query = criteria.search_text.to_lowercase();

    products
        .iter()
        .enumerate()
        .filter(|(_, product)| query.is_empty() || title_matches(product, &query))
        .filter(|(_, product)| match &criteria.category {
            Some(category) => product.category == *category,
            None => true,
        })
        .filter(|(_, product)| !criteria.favorites_only || favorites.contains(product.id))
        .map(|(idx, _)| idx)
        .collect()
}

pub fn filter_products<'a>(
    products: &'a [Product],
    criteria: &FilterCriteria,
    favorites: &FavoriteSet,
) -> Vec<&'a Product> {
    filter_indices(products, criteria, favorites).into_iter().map(|idx| &products[idx]).collect()
}

fn title_matches(product: &Product, lowercase_query: &str) -> bool {
    product.title.to_lowercase().contains(lowercase_query)
}

/// Sorted distinct categories present in `products`.
pub fn category_index(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .map(|product| product.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
