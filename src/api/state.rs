use std::sync::Arc;

use crate::data::MovieData;
use crate::services::RecommendationSettings;

/// Shared application state
///
/// The dataset is loaded once at startup and never modified afterwards.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<MovieData>,
    pub settings: RecommendationSettings,
}

impl AppState {
    pub fn new(data: MovieData, settings: RecommendationSettings) -> Self {
        Self {
            data: Arc::new(data),
            settings,
        }
    }
}
