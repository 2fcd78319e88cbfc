use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    data::DatasetSummary,
    error::{AppError, AppResult},
    models::{RatedTitle, Recommendations},
    services::{self, popularity, RecommendationSettings},
};

use super::AppState;

/// Largest `limit` accepted by the JSON API
pub const MAX_LIMIT: usize = 100;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct MovieQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub titles: Vec<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub heading: String,
    #[serde(flatten)]
    pub recommendations: Recommendations,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Dataset sizes and load time
pub async fn stats(State(state): State<AppState>) -> Json<DatasetSummary> {
    Json(state.data.summary().clone())
}

/// Movie titles, optionally filtered by a case-insensitive substring
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieQuery>,
) -> Json<Vec<String>> {
    let catalog = state.data.catalog();
    let movies = match query.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
        Some(q) => {
            let needle = q.to_lowercase();
            catalog
                .iter()
                .filter(|title| title.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
        None => catalog.to_vec(),
    };
    Json(movies)
}

/// Top-rated titles
pub async fn top_rated(
    State(state): State<AppState>,
    query: Result<Query<LimitQuery>, QueryRejection>,
) -> AppResult<Json<Vec<RatedTitle>>> {
    let Query(query) = query?;
    let limit = resolve_limit(query.limit, &state.settings)?;
    Ok(Json(popularity::top_rated(
        &state.data,
        state.settings.min_rating_count,
        limit,
    )))
}

/// Recommendations for a list of titles; an empty list falls back to top-rated
pub async fn recommend(
    State(state): State<AppState>,
    request: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(request) = request?;
    let settings = RecommendationSettings {
        limit: resolve_limit(request.limit, &state.settings)?,
        ..state.settings
    };

    let recommendations = services::recommend(&state.data, &request.titles, &settings);

    Ok(Json(RecommendationResponse {
        heading: recommendations.heading(settings.limit),
        recommendations,
    }))
}

fn resolve_limit(requested: Option<usize>, settings: &RecommendationSettings) -> AppResult<usize> {
    match requested {
        None => Ok(settings.limit),
        Some(limit) if (1..=MAX_LIMIT).contains(&limit) => Ok(limit),
        Some(limit) => Err(AppError::InvalidInput(format!(
            "limit must be between 1 and {}, got {}",
            MAX_LIMIT, limit
        ))),
    }
}
