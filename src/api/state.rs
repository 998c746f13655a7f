use std::sync::Arc;

use crate::config::Config;
use crate::services::Recommender;

/// Shared application state
///
/// The recommender is immutable once built, so handlers read it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates application state around a fully built recommender
    pub fn new(recommender: Recommender, config: Config) -> Self {
        Self {
            recommender: Arc::new(recommender),
            config: Arc::new(config),
        }
    }
}
