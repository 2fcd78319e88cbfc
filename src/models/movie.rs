use serde::{Deserialize, Deserializer, Serialize};

/// One row of the movie metadata file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// Movie id, kept as a string join key
    pub movie_id: String,
    /// Display title; also the grouping key for rankings
    #[serde(rename = "movie_title")]
    pub title: String,
}

/// One row of the ratings file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "movieId")]
    pub movie_id: String,
    /// `None` when the raw value is empty or not a finite number
    #[serde(default, deserialize_with = "coerce_rating")]
    pub rating: Option<f64>,
}

impl Movie {
    pub fn new(movie_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            movie_id: movie_id.into(),
            title: title.into(),
        }
    }
}

impl Rating {
    pub fn new(user_id: impl Into<String>, movie_id: impl Into<String>, rating: Option<f64>) -> Self {
        Self {
            user_id: user_id.into(),
            movie_id: movie_id.into(),
            rating,
        }
    }
}

fn coerce_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite()))
}
