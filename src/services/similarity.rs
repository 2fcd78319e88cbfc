use std::cmp::Ordering;
use std::collections::HashSet;

use crate::data::RatingMatrix;
use crate::models::ScoredTitle;

/// Pearson correlation over the rows where both columns have a rating
///
/// Returns `None` with fewer than two shared rows or when either side has
/// no variance.
pub fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let divisor = (sxx * syy).sqrt();
    if divisor == 0.0 || !divisor.is_finite() {
        return None;
    }

    Some((sxy / divisor).clamp(-1.0, 1.0))
}

/// Item-based recommendations for a set of selected titles
///
/// Every matrix column is correlated with each selected title and the
/// correlations are summed per column. Selected titles that are not columns
/// are ignored. A missing correlation counts as zero unless all of a
/// column's correlations are missing, in which case its score is `None` and
/// it sorts after every scored title.
pub fn similar_titles(matrix: &RatingMatrix, selected: &[String], n: usize) -> Vec<ScoredTitle> {
    let mut scores: Option<Vec<Option<f64>>> = None;

    for title in selected {
        let Some(target) = matrix.column(title) else {
            tracing::debug!(title = %title, "Selected title has no ratings, ignoring");
            continue;
        };

        let totals = scores.get_or_insert_with(|| vec![None; matrix.titles().len()]);
        for (total, (_, column)) in totals.iter_mut().zip(matrix.columns()) {
            *total = match (*total, pearson(column, target)) {
                (Some(sum), Some(corr)) => Some(sum + corr),
                (sum, None) => sum,
                (None, corr) => corr,
            };
        }
    }

    let Some(scores) = scores else {
        return Vec::new();
    };

    let excluded: HashSet<&str> = selected.iter().map(String::as_str).collect();
    let mut ranked: Vec<ScoredTitle> = matrix
        .titles()
        .iter()
        .zip(scores)
        .filter(|(title, _)| !excluded.contains(title.as_str()))
        .map(|(title, score)| ScoredTitle {
            title: title.clone(),
            score,
        })
        .collect();

    ranked.sort_by(|a, b| compare_scores(a.score, b.score).then_with(|| a.title.cmp(&b.title)));
    ranked.truncate(n);
    ranked
}

/// Descending, with missing scores last
fn compare_scores(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
