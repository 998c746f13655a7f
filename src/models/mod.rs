use serde::Serialize;

mod item;

pub use item::{Item, ItemId, ItemRecord};

/// A principal (actor) ranked by the average score of their matching items
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PrincipalSummary {
    pub name: String,
    /// Number of matching items the principal appears in
    pub appearances: usize,
    pub average_score: f64,
}

/// Drill-down view of a single item
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ItemDetails {
    pub item: Item,
    /// Nearest neighbors in the similarity graph
    pub similar: Vec<Item>,
    /// Other top-rated items with the same principal, excluding the item and
    /// anything already listed in `similar`
    pub same_principal: Vec<Item>,
}

/// An item paired with its similarity to a reference item
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Neighbor {
    pub item: Item,
    pub similarity: f64,
}
