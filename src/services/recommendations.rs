use crate::{
    data::MovieData,
    models::Recommendations,
    services::{popularity, similarity},
};

/// Tunables for both recommendation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationSettings {
    /// Top-rated titles need strictly more ratings than this
    pub min_rating_count: usize,
    /// Number of titles returned
    pub limit: usize,
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            min_rating_count: 10,
            limit: 5,
        }
    }
}

/// Recommends titles for the user's selection
///
/// Empty selections are dropped. With nothing left the top-rated titles are
/// returned; otherwise titles correlated with the selection.
pub fn recommend(data: &MovieData, selected: &[String], settings: &RecommendationSettings) -> Recommendations {
    let selected: Vec<String> = selected.iter().filter(|t| !t.is_empty()).cloned().collect();

    if selected.is_empty() {
        tracing::info!(limit = settings.limit, "No selection, ranking by popularity");
        return Recommendations::TopRated(popularity::top_rated(
            data,
            settings.min_rating_count,
            settings.limit,
        ));
    }

    tracing::info!(selected = ?selected, limit = settings.limit, "Computing similar titles");
    Recommendations::Similar(similarity::similar_titles(
        data.matrix(),
        &selected,
        settings.limit,
    ))
}
