use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use crate::catalog::{Catalog, MAX_SCORE};
use crate::models::{Item, ItemId, Neighbor};
use crate::services::ranking::top_k;

/// Weight of a shared category (genre)
pub const CATEGORY_WEIGHT: f64 = 0.3;
/// Weight of a shared principal (actor)
pub const PRINCIPAL_WEIGHT: f64 = 0.3;
/// Weight of a shared origin
pub const ORIGIN_WEIGHT: f64 = 0.2;
/// Weight of rating closeness
pub const SCORE_WEIGHT: f64 = 0.2;

/// Pairs must score strictly above this to become edges
pub const EDGE_THRESHOLD: f64 = 0.2;

/// Rating weight in the cohesion composite score
pub const COHESION_SCORE_WEIGHT: f64 = 0.6;
/// Average-similarity weight in the cohesion composite score.
///
/// Ratings span [0, 10] while similarities span [0, 1], so this term stays
/// small next to the rating term.
pub const COHESION_SIMILARITY_WEIGHT: f64 = 4.0;

/// Similarity between two items, in [0, 1]
///
/// Weighted sum of category, principal and origin equality plus rating
/// closeness. Symmetric in its arguments.
pub fn similarity(a: &Item, b: &Item) -> f64 {
    let mut score = 0.0;

    if a.category == b.category {
        score += CATEGORY_WEIGHT;
    }
    if a.principal == b.principal {
        score += PRINCIPAL_WEIGHT;
    }
    if a.origin == b.origin {
        score += ORIGIN_WEIGHT;
    }

    let rating_gap = (a.score - b.score).abs() / MAX_SCORE;
    score + SCORE_WEIGHT * (1.0 - rating_gap)
}

/// Undirected edge endpoint stored in an adjacency list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Catalog position of the neighbor
    pub neighbor: usize,
    pub similarity: f64,
}

/// Graph-based recommender
///
/// Every pair of items scoring above [`EDGE_THRESHOLD`] is linked in both
/// directions with the same weight. Built once from an immutable catalog and
/// never updated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityGraph {
    catalog: Arc<Catalog>,
    /// position -> edges, in ascending neighbor position
    adjacency: Vec<Vec<Edge>>,
    by_category: HashMap<String, Vec<usize>>,
}

impl SimilarityGraph {
    /// Scores every unordered pair of items and keeps the edges above threshold
    ///
    /// This is the most expensive step in the system: n(n-1)/2 similarity
    /// evaluations and up to as many stored edges (twice, one per direction).
    /// It runs once, before any query, and is only viable because catalogs
    /// hold a few hundred items.
    pub fn build(catalog: Arc<Catalog>) -> Self {
        let start = Instant::now();
        let items = catalog.items();
        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); items.len()];
        let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();
        let mut edge_count = 0usize;

        for (i, item) in items.iter().enumerate() {
            by_category
                .entry(item.category.clone())
                .or_default()
                .push(i);

            for (j, other) in items.iter().enumerate().skip(i + 1) {
                let score = similarity(item, other);
                if score > EDGE_THRESHOLD {
                    adjacency[i].push(Edge {
                        neighbor: j,
                        similarity: score,
                    });
                    adjacency[j].push(Edge {
                        neighbor: i,
                        similarity: score,
                    });
                    edge_count += 1;
                }
            }
        }

        let pairs = items.len() * items.len().saturating_sub(1) / 2;
        tracing::info!(
            items = items.len(),
            pairs,
            edges = edge_count,
            build_time_ms = start.elapsed().as_millis(),
            "Similarity graph built"
        );

        Self {
            catalog,
            adjacency,
            by_category,
        }
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Raw adjacency list for the item at `position`
    pub fn edges(&self, position: usize) -> &[Edge] {
        self.adjacency
            .get(position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Neighbors of `id`, most similar first
    ///
    /// Unknown identifiers yield an empty list.
    pub fn neighbors_of(&self, id: ItemId) -> Vec<Neighbor> {
        match id.position() {
            Some(position) => self.ranked_neighbors(position, usize::MAX),
            None => Vec::new(),
        }
    }

    /// The `k` items of `category` and `origin` that best combine a high rating
    /// with strong ties to the rest of that group
    ///
    /// Each candidate's average similarity only counts neighbors that share the
    /// same category and origin; a candidate without such neighbors averages 0.
    /// Composite score: `rating * 0.6 + average_similarity * 4.0`.
    pub fn top_k_similar_by_category_and_origin(
        &self,
        category: &str,
        origin: &str,
        k: usize,
    ) -> Vec<Item> {
        let candidates = self
            .by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let scored: Vec<(&Item, f64)> = candidates
            .iter()
            .filter_map(|&position| {
                let item = self.catalog.get(position)?;
                if item.origin != origin {
                    return None;
                }
                let cohesion = self.average_similarity_within(position, category, origin);
                let composite =
                    item.score * COHESION_SCORE_WEIGHT + cohesion * COHESION_SIMILARITY_WEIGHT;
                Some((item, composite))
            })
            .collect();

        let ranked: Vec<Item> = top_k(scored, k).into_iter().cloned().collect();
        tracing::debug!(category, origin, k, results = ranked.len(), "Graph-based ranking");
        ranked
    }

    /// Up to `k` items most similar to the first item titled `title`
    ///
    /// Unknown titles yield an empty list.
    pub fn find_similar_by_title(&self, title: &str, k: usize) -> Vec<Item> {
        let Some(position) = self.catalog.position_of_title(title) else {
            tracing::debug!(title, "Title not in catalog");
            return Vec::new();
        };

        self.ranked_neighbors(position, k)
            .into_iter()
            .map(|neighbor| neighbor.item)
            .collect()
    }

    fn ranked_neighbors(&self, position: usize, k: usize) -> Vec<Neighbor> {
        let scored: Vec<(Neighbor, f64)> = self
            .edges(position)
            .iter()
            .filter_map(|edge| {
                let item = self.catalog.get(edge.neighbor)?.clone();
                Some((
                    Neighbor {
                        item,
                        similarity: edge.similarity,
                    },
                    edge.similarity,
                ))
            })
            .collect();

        top_k(scored, k)
    }

    fn average_similarity_within(&self, position: usize, category: &str, origin: &str) -> f64 {
        let (total, count) = self
            .edges(position)
            .iter()
            .filter(|edge| {
                self.catalog
                    .get(edge.neighbor)
                    .is_some_and(|neighbor| neighbor.matches(category, origin))
            })
            .fold((0.0, 0usize), |(total, count), edge| {
                (total + edge.similarity, count + 1)
            });

        if count == 0 {
            0.0
        } else {
            total / count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SeedCatalog;
    use crate::models::ItemRecord;

    const EPSILON: f64 = 1e-9;

    fn catalog(records: Vec<ItemRecord>) -> Arc<Catalog> {
        Arc::new(Catalog::from_records(records).unwrap())
    }

    fn seed() -> Arc<Catalog> {
        Arc::new(Catalog::load(&SeedCatalog).unwrap())
    }

    fn titles(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.title.as_str()).collect()
    }

    fn inception_interstellar() -> Arc<Catalog> {
        catalog(vec![
            ItemRecord::new("Inception", "Sci-Fi", "Leonardo DiCaprio", 8.8, "Hollywood"),
            ItemRecord::new("Interstellar", "Sci-Fi", "Matthew McConaughey", 8.6, "Hollywood"),
        ])
    }

    #[test]
    fn test_similarity_inception_interstellar() {
        let catalog = inception_interstellar();
        let items = catalog.items();

        // 0.3 (genre) + 0 (actor) + 0.2 (origin) + 0.2 * (1 - 0.2 / 10)
        let score = similarity(&items[0], &items[1]);
        assert!((score - 0.696).abs() < EPSILON);

        let graph = SimilarityGraph::build(catalog.clone());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges(0)[0].neighbor, 1);
    }

    #[test]
    fn test_similarity_identical_attributes_is_one() {
        let catalog = catalog(vec![
            ItemRecord::new("Batman Begins", "Action", "Christian Bale", 8.2, "Hollywood"),
            ItemRecord::new("Die Hard", "Action", "Christian Bale", 8.2, "Hollywood"),
        ]);
        let items = catalog.items();
        assert!((similarity(&items[0], &items[1]) - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_similarity_nothing_shared() {
        let catalog = catalog(vec![
            ItemRecord::new("Worst", "Comedy", "Someone", 0.0, "Hollywood"),
            ItemRecord::new("Best", "Drama", "Someone Else", 10.0, "Bollywood"),
        ]);
        let items = catalog.items();
        assert!(similarity(&items[0], &items[1]).abs() < EPSILON);

        let graph = SimilarityGraph::build(catalog.clone());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_similarity_symmetric_and_bounded_over_seed() {
        let catalog = seed();
        let items = catalog.items();
        for (i, a) in items.iter().enumerate() {
            for b in items.iter().skip(i + 1) {
                let ab = similarity(a, b);
                assert_eq!(ab, similarity(b, a));
                assert!((0.0..=1.0 + EPSILON).contains(&ab));
            }
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        // Nothing shared but the rating: similarity lands exactly on the threshold.
        let catalog = catalog(vec![
            ItemRecord::new("A", "Comedy", "Someone", 7.0, "Hollywood"),
            ItemRecord::new("B", "Drama", "Someone Else", 7.0, "Bollywood"),
        ]);
        let items = catalog.items();
        assert!((similarity(&items[0], &items[1]) - EDGE_THRESHOLD).abs() < EPSILON);

        let graph = SimilarityGraph::build(catalog.clone());
        assert!(graph.neighbors_of(ItemId(1)).is_empty());
    }

    #[test]
    fn test_edges_symmetric_without_self_loops_or_duplicates() {
        let graph = SimilarityGraph::build(seed());

        for (position, edges) in graph.adjacency.iter().enumerate() {
            let mut seen = std::collections::HashSet::new();
            for edge in edges {
                assert_ne!(edge.neighbor, position);
                assert!(seen.insert(edge.neighbor));
                assert!(edge.similarity > EDGE_THRESHOLD && edge.similarity <= 1.0 + EPSILON);

                let back = graph
                    .edges(edge.neighbor)
                    .iter()
                    .find(|e| e.neighbor == position)
                    .unwrap();
                assert_eq!(back.similarity, edge.similarity);
            }
        }
    }

    #[test]
    fn test_build_is_idempotent() {
        let catalog = seed();
        let first = SimilarityGraph::build(catalog.clone());
        let second = SimilarityGraph::build(catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn test_neighbors_sorted_descending() {
        let graph = SimilarityGraph::build(seed());
        let neighbors = graph.neighbors_of(ItemId(1));

        assert!(!neighbors.is_empty());
        assert!(neighbors
            .windows(2)
            .all(|w| w[0].similarity >= w[1].similarity));
        assert!(neighbors.iter().all(|n| n.item.id != ItemId(1)));
    }

    #[test]
    fn test_neighbors_of_unknown_id_is_empty() {
        let graph = SimilarityGraph::build(inception_interstellar());
        assert!(graph.neighbors_of(ItemId(0)).is_empty());
        assert!(graph.neighbors_of(ItemId(99)).is_empty());
    }

    #[test]
    fn test_find_similar_by_title() {
        let catalog = catalog(vec![
            ItemRecord::new("The Dark Knight", "Action", "Christian Bale", 9.0, "Hollywood"),
            ItemRecord::new("The Prestige", "Drama", "Christian Bale", 8.5, "Hollywood"),
            ItemRecord::new("Batman Begins", "Action", "Christian Bale", 8.2, "Hollywood"),
            ItemRecord::new("Dangal", "Drama", "Aamir Khan", 9.0, "Bollywood"),
        ]);
        let graph = SimilarityGraph::build(catalog);

        // Batman Begins: 0.3 + 0.3 + 0.2 + 0.2 * 0.92 = 0.984
        // The Prestige:  0.0 + 0.3 + 0.2 + 0.2 * 0.95 = 0.690
        // Dangal:        0.0 + 0.0 + 0.0 + 0.2 * 1.00 = 0.200 (not an edge)
        let similar = graph.find_similar_by_title("The Dark Knight", 3);
        assert_eq!(titles(&similar), vec!["Batman Begins", "The Prestige"]);

        let similar = graph.find_similar_by_title("The Dark Knight", 1);
        assert_eq!(titles(&similar), vec!["Batman Begins"]);

        assert!(graph.find_similar_by_title("The Dark Knight", 0).is_empty());
    }

    #[test]
    fn test_find_similar_unknown_title_is_empty() {
        let graph = SimilarityGraph::build(seed());
        assert!(graph.find_similar_by_title("Nonexistent Title", 3).is_empty());
    }

    #[test]
    fn test_find_similar_uses_first_title_occurrence() {
        let catalog = catalog(vec![
            ItemRecord::new("Twin", "Sci-Fi", "Actor A", 8.0, "Hollywood"),
            ItemRecord::new("Twin", "Comedy", "Actor B", 5.0, "Bollywood"),
            ItemRecord::new("Space", "Sci-Fi", "Actor A", 8.0, "Hollywood"),
            ItemRecord::new("Laughs", "Comedy", "Actor B", 5.0, "Bollywood"),
        ]);
        let graph = SimilarityGraph::build(catalog);

        let similar = graph.find_similar_by_title("Twin", 1);
        assert_eq!(similar[0].title, "Space");
    }

    #[test]
    fn test_cohesion_ignores_neighbors_outside_group() {
        let catalog = catalog(vec![
            ItemRecord::new("Loner", "Sci-Fi", "Keanu Reeves", 8.0, "Hollywood"),
            ItemRecord::new("John Wick", "Action", "Keanu Reeves", 8.0, "Hollywood"),
            ItemRecord::new("Member", "Sci-Fi", "Amy Adams", 7.0, "Hollywood"),
        ]);
        let graph = SimilarityGraph::build(catalog);

        // Loner's strongest edge (0.70, to John Wick) is outside the group;
        // only the 0.68 edge to Member counts.
        let cohesion = graph.average_similarity_within(0, "Sci-Fi", "Hollywood");
        assert!((cohesion - 0.68).abs() < EPSILON);

        // John Wick has no Action/Hollywood neighbors at all.
        let cohesion = graph.average_similarity_within(1, "Action", "Hollywood");
        assert_eq!(cohesion, 0.0);

        let ranked = graph.top_k_similar_by_category_and_origin("Sci-Fi", "Hollywood", 5);
        assert_eq!(titles(&ranked), vec!["Loner", "Member"]);
    }

    #[test]
    fn test_cohesion_composite_ranking() {
        let catalog = catalog(vec![
            // Isolated within the group: composite = 8.0 * 0.6 = 4.8
            ItemRecord::new("High Rated", "Drama", "Solo Actor", 8.0, "Hollywood"),
            // Linked to each other with similarity 1.0: composite = 7.0 * 0.6 + 4.0 = 8.2
            ItemRecord::new("Twin A", "Drama", "Shared Actor", 7.0, "Bollywood"),
            ItemRecord::new("Twin B", "Drama", "Shared Actor", 7.0, "Bollywood"),
        ]);
        let graph = SimilarityGraph::build(catalog);

        let ranked = graph.top_k_similar_by_category_and_origin("Drama", "Bollywood", 5);
        assert_eq!(titles(&ranked), vec!["Twin A", "Twin B"]);

        let ranked = graph.top_k_similar_by_category_and_origin("Drama", "Hollywood", 5);
        assert_eq!(titles(&ranked), vec!["High Rated"]);
    }

    #[test]
    fn test_cohesion_similarity_term_can_outrank_rating() {
        let catalog = catalog(vec![
            // 9.0 * 0.6 + avg(0.68, 0.68) * 4.0 = 8.12
            ItemRecord::new("Top Rated Loner", "Thriller", "Actor X", 9.0, "Hollywood"),
            // 8.0 * 0.6 + avg(1.0, 0.68) * 4.0 = 8.16
            ItemRecord::new("Franchise 1", "Thriller", "Actor Y", 8.0, "Hollywood"),
            ItemRecord::new("Franchise 2", "Thriller", "Actor Y", 8.0, "Hollywood"),
        ]);
        let graph = SimilarityGraph::build(catalog);

        let ranked = graph.top_k_similar_by_category_and_origin("Thriller", "Hollywood", 3);
        assert_eq!(
            titles(&ranked),
            vec!["Franchise 1", "Franchise 2", "Top Rated Loner"]
        );
    }

    #[test]
    fn test_cohesion_unknown_group_and_zero_k() {
        let graph = SimilarityGraph::build(seed());
        assert!(graph
            .top_k_similar_by_category_and_origin("Horror", "Hollywood", 5)
            .is_empty());
        assert!(graph
            .top_k_similar_by_category_and_origin("Sci-Fi", "Hollywood", 0)
            .is_empty());
        assert_eq!(
            graph
                .top_k_similar_by_category_and_origin("Sci-Fi", "Hollywood", 5)
                .len(),
            5
        );
    }
}
