use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{loader, RatingMatrix};
use crate::error::DataError;
use crate::models::{Movie, Rating};

/// Count and sum of the non-missing ratings of one title
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatingStats {
    pub count: usize,
    pub sum: f64,
}

impl RatingStats {
    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Sizes of the loaded dataset
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DatasetSummary {
    pub movie_count: usize,
    pub rating_count: usize,
    pub joined_count: usize,
    pub title_count: usize,
    pub rated_title_count: usize,
    pub user_count: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Movies joined with their ratings
#[derive(Debug, Clone)]
pub struct MovieData {
    catalog: Vec<String>,
    stats: BTreeMap<String, RatingStats>,
    matrix: RatingMatrix,
    summary: DatasetSummary,
}

impl MovieData {
    /// Loads and joins both files
    pub fn load(movies_path: impl AsRef<Path>, ratings_path: impl AsRef<Path>) -> Result<Self, DataError> {
        let movies = loader::load_movies(movies_path)?;
        let ratings = loader::load_ratings(ratings_path)?;
        let data = Self::from_tables(movies, ratings);

        tracing::info!(
            movies = data.summary.movie_count,
            ratings = data.summary.rating_count,
            joined = data.summary.joined_count,
            users = data.summary.user_count,
            titles = data.summary.rated_title_count,
            "Dataset loaded"
        );

        Ok(data)
    }

    /// Inner-joins ratings with movies on the movie id
    pub fn from_tables(movies: Vec<Movie>, ratings: Vec<Rating>) -> Self {
        let mut titles_by_id: HashMap<&str, Vec<&str>> = HashMap::new();
        for movie in &movies {
            titles_by_id
                .entry(movie.movie_id.as_str())
                .or_default()
                .push(movie.title.as_str());
        }

        let mut joined: Vec<(&str, &str, Option<f64>)> = Vec::new();
        for rating in &ratings {
            if let Some(titles) = titles_by_id.get(rating.movie_id.as_str()) {
                for title in titles {
                    joined.push((rating.user_id.as_str(), *title, rating.rating));
                }
            }
        }

        let dropped = ratings
            .iter()
            .filter(|r| !titles_by_id.contains_key(r.movie_id.as_str()))
            .count();
        if dropped > 0 {
            tracing::debug!(dropped, "Ratings reference unknown movie ids");
        }

        let mut stats: BTreeMap<String, RatingStats> = BTreeMap::new();
        for (_, title, rating) in &joined {
            let entry = stats.entry(title.to_string()).or_default();
            if let Some(value) = rating {
                entry.count += 1;
                entry.sum += value;
            }
        }

        let matrix = RatingMatrix::pivot(
            joined
                .iter()
                .filter_map(|(user, title, rating)| rating.map(|value| (*user, *title, value))),
        );

        let catalog: Vec<String> = movies
            .iter()
            .map(|movie| movie.title.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let summary = DatasetSummary {
            movie_count: movies.len(),
            rating_count: ratings.len(),
            joined_count: joined.len(),
            title_count: catalog.len(),
            rated_title_count: matrix.titles().len(),
            user_count: matrix.user_count(),
            loaded_at: Utc::now(),
        };

        Self {
            catalog,
            stats,
            matrix,
            summary,
        }
    }

    /// Distinct titles of the movie file, sorted
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Rating statistics per joined title
    pub fn stats(&self) -> &BTreeMap<String, RatingStats> {
        &self.stats
    }

    pub fn matrix(&self) -> &RatingMatrix {
        &self.matrix
    }

    pub fn summary(&self) -> &DatasetSummary {
        &self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;

    #[test]
    fn test_catalog_is_sorted_and_distinct() {
        let data = MovieData::from_tables(
            vec![
                Movie::new("2", "Heat (1995)"),
                Movie::new("1", "Casino (1995)"),
                Movie::new("3", "Heat (1995)"),
            ],
            vec![],
        );
        assert_eq!(data.catalog(), &["Casino (1995)".to_string(), "Heat (1995)".to_string()]);
    }

    #[test]
    fn test_unknown_movie_ids_are_dropped() {
        let data = MovieData::from_tables(
            vec![Movie::new("1", "Casino (1995)")],
            vec![
                Rating::new("10", "1", Some(4.0)),
                Rating::new("10", "99", Some(5.0)),
            ],
        );
        assert_eq!(data.summary().rating_count, 2);
        assert_eq!(data.summary().joined_count, 1);
        assert_eq!(data.stats().len(), 1);
    }

    #[test]
    fn test_duplicate_movie_ids_join_every_row() {
        let data = MovieData::from_tables(
            vec![Movie::new("1", "Casino (1995)"), Movie::new("1", "Casino (Director's Cut)")],
            vec![Rating::new("10", "1", Some(4.0))],
        );
        assert_eq!(data.summary().joined_count, 2);
        assert_eq!(data.stats()["Casino (Director's Cut)"].count, 1);
    }

    #[test]
    fn test_shared_titles_collapse() {
        let data = MovieData::from_tables(
            vec![Movie::new("1", "Hamlet"), Movie::new("2", "Hamlet")],
            vec![
                Rating::new("10", "1", Some(2.0)),
                Rating::new("10", "2", Some(4.0)),
            ],
        );
        assert_eq!(data.stats()["Hamlet"].count, 2);
        assert_eq!(data.matrix().cell("10", "Hamlet"), Some(3.0));
    }

    #[test]
    fn test_missing_ratings_are_not_counted() {
        let data = fixtures::movie_data();
        let alpha = data.stats()["Alpha"];
        assert_eq!(alpha.count, 12);
        assert!((alpha.mean().unwrap() - 35.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_unrated_movie_is_listed_but_not_ranked() {
        let data = fixtures::movie_data();
        assert!(data.catalog().contains(&"Echo".to_string()));
        assert!(!data.matrix().contains("Echo"));
        assert_eq!(data.summary().title_count, 6);
        assert_eq!(data.summary().rated_title_count, 5);
    }
}
