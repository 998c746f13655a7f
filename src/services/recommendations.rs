use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    catalog::{Catalog, CatalogError, CatalogSource},
    models::{Item, ItemDetails, ItemId, Neighbor, PrincipalSummary},
    services::{ranking::top_k, AttributeIndex, SimilarityGraph},
};

/// Both recommenders built over one catalog snapshot
///
/// Construction builds the attribute index and the similarity graph up front,
/// so every query afterwards is a read over immutable data and the whole
/// value can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    index: AttributeIndex,
    graph: SimilarityGraph,
}

impl Recommender {
    /// Builds the attribute index and the similarity graph for `catalog`
    pub fn new(catalog: Catalog) -> Self {
        let catalog = Arc::new(catalog);
        let index = AttributeIndex::build(catalog.clone());
        let graph = SimilarityGraph::build(catalog.clone());

        Self {
            catalog,
            index,
            graph,
        }
    }

    /// Loads a catalog from `source` and builds both recommenders over it
    pub fn from_source(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::load(source)?))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn index(&self) -> &AttributeIndex {
        &self.index
    }

    pub fn graph(&self) -> &SimilarityGraph {
        &self.graph
    }

    /// Principals appearing in `category` / `origin`, best average score first
    ///
    /// Principals with equal averages keep the order of their first appearance
    /// in the catalog.
    pub fn popular_principals(
        &self,
        category: &str,
        origin: &str,
        k: usize,
    ) -> Vec<PrincipalSummary> {
        let items = self.index.query_by_category_and_origin(category, origin);

        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, (usize, f64)> = HashMap::new();
        for item in &items {
            let entry = totals.entry(item.principal.as_str()).or_insert_with(|| {
                order.push(item.principal.as_str());
                (0, 0.0)
            });
            entry.0 += 1;
            entry.1 += item.score;
        }

        let scored: Vec<(PrincipalSummary, f64)> = order
            .into_iter()
            .map(|name| {
                let (appearances, total) = totals[name];
                let average_score = total / appearances as f64;
                (
                    PrincipalSummary {
                        name: name.to_string(),
                        appearances,
                        average_score,
                    },
                    average_score,
                )
            })
            .collect();

        top_k(scored, k)
    }

    /// Drill-down view of one item
    ///
    /// Lists its `similar_k` nearest neighbors, then up to `principal_k` of the
    /// principal's top-rated items that are neither the item itself nor already
    /// among the neighbors. Returns `None` for unknown identifiers.
    pub fn item_details(
        &self,
        id: ItemId,
        similar_k: usize,
        principal_k: usize,
    ) -> Option<ItemDetails> {
        let item = self.catalog.by_id(id)?.clone();

        let similar: Vec<Item> = self
            .graph
            .neighbors_of(id)
            .into_iter()
            .take(similar_k)
            .map(|neighbor| neighbor.item)
            .collect();

        let same_principal: Vec<Item> = self
            .index
            .top_rated_by_principal(&item.principal, principal_k)
            .into_iter()
            .filter(|other| other.id != item.id)
            .filter(|other| similar.iter().all(|s| s.id != other.id))
            .collect();

        tracing::debug!(
            item_id = %id,
            similar = similar.len(),
            same_principal = same_principal.len(),
            "Item details assembled"
        );

        Some(ItemDetails {
            item,
            similar,
            same_principal,
        })
    }

    pub fn query_by_category_and_origin(&self, category: &str, origin: &str) -> Vec<Item> {
        self.index.query_by_category_and_origin(category, origin)
    }

    pub fn top_rated_by_category_and_origin(
        &self,
        category: &str,
        origin: &str,
        k: usize,
    ) -> Vec<Item> {
        self.index
            .top_rated_by_category_and_origin(category, origin, k)
    }

    pub fn top_rated_by_principal(&self, principal: &str, k: usize) -> Vec<Item> {
        self.index.top_rated_by_principal(principal, k)
    }

    pub fn distinct_categories_for_origin(&self, origin: &str) -> Vec<String> {
        self.index.distinct_categories_for_origin(origin)
    }

    pub fn neighbors_of(&self, id: ItemId) -> Vec<Neighbor> {
        self.graph.neighbors_of(id)
    }

    pub fn top_k_similar_by_category_and_origin(
        &self,
        category: &str,
        origin: &str,
        k: usize,
    ) -> Vec<Item> {
        self.graph
            .top_k_similar_by_category_and_origin(category, origin, k)
    }

    pub fn find_similar_by_title(&self, title: &str, k: usize) -> Vec<Item> {
        self.graph.find_similar_by_title(title, k)
    }
}
