use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Stable, 1-based identifier assigned to an item by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Identifier of the item stored at `position` in the catalog
    pub fn from_position(position: usize) -> Self {
        Self(position as u32 + 1)
    }

    /// Catalog position for this identifier, `None` for the reserved id 0
    pub fn position(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry: a movie with its categorical attributes and rating
///
/// Items are created by the catalog and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    /// Genre
    pub category: String,
    /// Principal actor
    pub principal: String,
    /// Production origin (e.g. "Hollywood", "Bollywood")
    pub origin: String,
    /// Rating in [0, 10]
    pub score: f64,
}

impl Item {
    /// Whether the item belongs to `category` and was produced in `origin`
    pub fn matches(&self, category: &str, origin: &str) -> bool {
        self.category == category && self.origin == origin
    }
}

/// Unvalidated item data as supplied by a catalog source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemRecord {
    pub title: String,
    pub category: String,
    pub principal: String,
    pub origin: String,
    pub score: f64,
}

impl ItemRecord {
    pub fn new(title: &str, category: &str, principal: &str, score: f64, origin: &str) -> Self {
        Self {
            title: title.to_string(),
            category: category.to_string(),
            principal: principal.to_string(),
            origin: origin.to_string(),
            score,
        }
    }
}
