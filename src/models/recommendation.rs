use serde::Serialize;

/// A title ranked by its average rating
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RatedTitle {
    pub title: String,
    pub rating_count: usize,
    pub mean_rating: f64,
}

/// A title ranked by its summed correlation with the selected titles
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredTitle {
    pub title: String,
    /// `None` when the title could not be correlated with any selection
    pub score: Option<f64>,
}

/// Outcome of a recommendation request
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "mode", content = "movies", rename_all = "snake_case")]
pub enum Recommendations {
    /// Nothing was selected, so the most popular titles are shown
    TopRated(Vec<RatedTitle>),
    /// Titles most similar to the selection
    Similar(Vec<ScoredTitle>),
}

impl Recommendations {
    /// Titles in ranking order
    pub fn titles(&self) -> Vec<&str> {
        match self {
            Recommendations::TopRated(items) => items.iter().map(|t| t.title.as_str()).collect(),
            Recommendations::Similar(items) => items.iter().map(|t| t.title.as_str()).collect(),
        }
    }

    /// Heading shown above the list
    pub fn heading(&self, limit: usize) -> String {
        match self {
            Recommendations::TopRated(_) => {
                "No movies selected, showing top-rated movies".to_string()
            }
            Recommendations::Similar(_) => format!("Top {} recommended movies", limit),
        }
    }
}
