use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::{Item, ItemId, ItemRecord};

pub mod seed;

pub use seed::SeedCatalog;

/// Highest score an item may carry
pub const MAX_SCORE: f64 = 10.0;

/// Error types for catalog construction
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Invalid item at position {position}: {reason}")]
    InvalidItem { position: usize, reason: String },
    #[error("Catalog source failed: {0}")]
    Source(String),
}

/// Supplier of the raw item records a catalog is built from
///
/// Sources are expected to hand over pre-validated data; the catalog still
/// rejects malformed records rather than indexing them.
#[cfg_attr(test, mockall::automock)]
pub trait CatalogSource: Send + Sync {
    /// Returns every record, in catalog order
    fn records(&self) -> Result<Vec<ItemRecord>, CatalogError>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// The ordered, immutable collection of items
///
/// Owns the canonical item data. Identifiers are assigned sequentially from 1
/// in insertion order, so an item's position is always `id - 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
    /// title -> position of its first occurrence
    title_positions: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from raw records, failing on the first malformed one
    pub fn from_records(records: Vec<ItemRecord>) -> Result<Self, CatalogError> {
        let mut items = Vec::with_capacity(records.len());
        let mut title_positions = HashMap::new();

        for (position, record) in records.into_iter().enumerate() {
            validate(position, &record)?;

            title_positions.entry(record.title.clone()).or_insert(position);
            items.push(Item {
                id: ItemId::from_position(position),
                title: record.title,
                category: record.category,
                principal: record.principal,
                origin: record.origin,
                score: record.score,
            });
        }

        Ok(Self {
            items,
            title_positions,
        })
    }

    /// Loads records from `source` and builds the catalog
    pub fn load(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let records = source.records()?;
        let catalog = Self::from_records(records)?;

        tracing::info!(
            source = source.name(),
            items = catalog.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item stored at `position`
    pub fn get(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }

    /// Item with identifier `id`
    pub fn by_id(&self, id: ItemId) -> Option<&Item> {
        id.position().and_then(|position| self.get(position))
    }

    /// Position of the first item titled exactly `title`
    pub fn position_of_title(&self, title: &str) -> Option<usize> {
        self.title_positions.get(title).copied()
    }

    /// Distinct origins in order of first occurrence
    pub fn origins(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter(|item| seen.insert(item.origin.as_str()))
            .map(|item| item.origin.clone())
            .collect()
    }
}

fn validate(position: usize, record: &ItemRecord) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidItem {
        position,
        reason: reason.to_string(),
    };

    if record.title.trim().is_empty() {
        return Err(invalid("title is empty"));
    }
    if record.category.trim().is_empty() {
        return Err(invalid("category is empty"));
    }
    if record.principal.trim().is_empty() {
        return Err(invalid("principal is empty"));
    }
    if record.origin.trim().is_empty() {
        return Err(invalid("origin is empty"));
    }
    if !record.score.is_finite() || !(0.0..=MAX_SCORE).contains(&record.score) {
        return Err(invalid(&format!(
            "score {} is outside [0, {}]",
            record.score, MAX_SCORE
        )));
    }

    Ok(())
}
