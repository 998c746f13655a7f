use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::models::Item;
use crate::services::ranking::top_k;

/// Content-based recommender over categorical attributes
///
/// Maps each category, principal and origin value to the catalog positions
/// carrying it, in catalog order. Built once from an immutable catalog; there
/// is no incremental update path.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeIndex {
    catalog: Arc<Catalog>,
    by_category: HashMap<String, Vec<usize>>,
    by_principal: HashMap<String, Vec<usize>>,
    by_origin: HashMap<String, Vec<usize>>,
}

impl AttributeIndex {
    /// Indexes every item of `catalog` under its three attribute buckets
    pub fn build(catalog: Arc<Catalog>) -> Self {
        let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_principal: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_origin: HashMap<String, Vec<usize>> = HashMap::new();

        for (position, item) in catalog.items().iter().enumerate() {
            by_category
                .entry(item.category.clone())
                .or_default()
                .push(position);
            by_principal
                .entry(item.principal.clone())
                .or_default()
                .push(position);
            by_origin.entry(item.origin.clone()).or_default().push(position);
        }

        tracing::info!(
            items = catalog.len(),
            categories = by_category.len(),
            principals = by_principal.len(),
            origins = by_origin.len(),
            "Attribute index built"
        );

        Self {
            catalog,
            by_category,
            by_principal,
            by_origin,
        }
    }

    /// Catalog positions filed under `category`
    pub fn category_bucket(&self, category: &str) -> &[usize] {
        bucket(&self.by_category, category)
    }

    /// Catalog positions filed under `principal`
    pub fn principal_bucket(&self, principal: &str) -> &[usize] {
        bucket(&self.by_principal, principal)
    }

    /// Catalog positions filed under `origin`
    pub fn origin_bucket(&self, origin: &str) -> &[usize] {
        bucket(&self.by_origin, origin)
    }

    /// Every item in `category` produced in `origin`, in catalog order
    ///
    /// An unknown category or an origin with no matches yields an empty list.
    pub fn query_by_category_and_origin(&self, category: &str, origin: &str) -> Vec<Item> {
        self.matching(category, origin).into_iter().cloned().collect()
    }

    /// The `k` highest-rated items in `category` produced in `origin`
    ///
    /// Equal ratings keep catalog order.
    pub fn top_rated_by_category_and_origin(
        &self,
        category: &str,
        origin: &str,
        k: usize,
    ) -> Vec<Item> {
        let scored: Vec<(&Item, f64)> = self
            .matching(category, origin)
            .into_iter()
            .map(|item| (item, item.score))
            .collect();

        let ranked: Vec<Item> = top_k(scored, k).into_iter().cloned().collect();
        tracing::debug!(category, origin, k, results = ranked.len(), "Top rated by category");
        ranked
    }

    /// The `k` highest-rated items featuring `principal`, across all categories
    pub fn top_rated_by_principal(&self, principal: &str, k: usize) -> Vec<Item> {
        let scored: Vec<(&Item, f64)> = self
            .resolve(self.principal_bucket(principal))
            .map(|item| (item, item.score))
            .collect();

        let ranked: Vec<Item> = top_k(scored, k).into_iter().cloned().collect();
        tracing::debug!(principal, k, results = ranked.len(), "Top rated by principal");
        ranked
    }

    /// Categories with at least one item from `origin`, in order of first occurrence
    pub fn distinct_categories_for_origin(&self, origin: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.resolve(self.origin_bucket(origin))
            .filter(|item| seen.insert(item.category.as_str()))
            .map(|item| item.category.clone())
            .collect()
    }

    fn matching(&self, category: &str, origin: &str) -> Vec<&Item> {
        self.resolve(self.category_bucket(category))
            .filter(|item| item.origin == origin)
            .collect()
    }

    fn resolve<'a>(&'a self, positions: &'a [usize]) -> impl Iterator<Item = &'a Item> + 'a {
        positions
            .iter()
            .filter_map(move |&position| self.catalog.get(position))
    }
}

fn bucket<'a>(map: &'a HashMap<String, Vec<usize>>, key: &str) -> &'a [usize] {
    map.get(key).map(Vec::as_slice).unwrap_or(&[])
}
