use serde::Deserialize;

use crate::services::RecommendationSettings;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Pipe-separated movie metadata file
    #[serde(default = "default_movies_path")]
    pub movies_path: String,

    /// Comma-separated ratings file
    #[serde(default = "default_ratings_path")]
    pub ratings_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// A title needs strictly more ratings than this to be ranked as top-rated
    #[serde(default = "default_min_rating_count")]
    pub min_rating_count: usize,

    /// Number of titles shown on the result page
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
}

fn default_movies_path() -> String {
    "movies_100k.csv".to_string()
}

fn default_ratings_path() -> String {
    "ratings_100k.csv".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_min_rating_count() -> usize {
    10
}

fn default_result_limit() -> usize {
    5
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn settings(&self) -> RecommendationSettings {
        RecommendationSettings {
            min_rating_count: self.min_rating_count,
            limit: self.result_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.movies_path, "movies_100k.csv");
        assert_eq!(config.ratings_path, "ratings_100k.csv");
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert_eq!(config.settings(), RecommendationSettings::default());
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("MIN_RATING_COUNT".to_string(), "50".to_string()),
            ("RESULT_LIMIT".to_string(), "10".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.settings().min_rating_count, 50);
        assert_eq!(config.settings().limit, 10);
    }
}
