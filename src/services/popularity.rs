use std::cmp::Ordering;

use crate::data::MovieData;
use crate::models::RatedTitle;

/// Ranks titles by mean rating
///
/// Only titles with strictly more than `min_count` ratings qualify. Equal
/// means are ordered by title.
pub fn top_rated(data: &MovieData, min_count: usize, n: usize) -> Vec<RatedTitle> {
    let mut ranked: Vec<RatedTitle> = data
        .stats()
        .iter()
        .filter(|(_, stats)| stats.count > min_count)
        .filter_map(|(title, stats)| {
            stats.mean().map(|mean_rating| RatedTitle {
                title: title.clone(),
                rating_count: stats.count,
                mean_rating,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.mean_rating
            .partial_cmp(&a.mean_rating)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.title.cmp(&b.title))
    });
    ranked.truncate(n);

    tracing::debug!(
        qualifying = ranked.len(),
        min_count,
        "Computed top-rated titles"
    );

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures;
    use crate::models::{Movie, Rating};

    #[test]
    fn test_ranks_by_mean_then_title() {
        let data = fixtures::movie_data();
        let titles: Vec<String> = top_rated(&data, 10, 5).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Charlie", "Alpha", "Bravo"]);
    }

    #[test]
    fn test_reports_count_and_mean() {
        let data = fixtures::movie_data();
        let top = &top_rated(&data, 10, 1)[0];
        assert_eq!(top.title, "Charlie");
        assert_eq!(top.rating_count, 12);
        assert!((top.mean_rating - 37.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_is_strict() {
        let data = fixtures::movie_data();
        assert!(top_rated(&data, 12, 5).is_empty());
        assert_eq!(top_rated(&data, 11, 5).len(), 3);
        assert_eq!(top_rated(&data, 2, 5).len(), 4);
    }

    #[test]
    fn test_truncates_to_n() {
        let data = fixtures::movie_data();
        assert_eq!(top_rated(&data, 0, 2).len(), 2);
    }

    #[test]
    fn test_missing_ratings_do_not_qualify() {
        let ratings = (0..20)
            .map(|user| Rating::new(user.to_string(), "1", None))
            .collect();
        let data = MovieData::from_tables(vec![Movie::new("1", "Heat (1995)")], ratings);
        assert!(top_rated(&data, 10, 5).is_empty());
    }
}
