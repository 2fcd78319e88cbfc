use std::fs;
use std::path::Path;

use encoding_rs::SHIFT_JIS;
use serde::de::DeserializeOwned;

use crate::error::DataError;
use crate::models::{Movie, Rating};

/// Reads the pipe-separated movie metadata file
pub fn load_movies(path: impl AsRef<Path>) -> Result<Vec<Movie>, DataError> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let movies: Vec<Movie> = parse_rows(path, &text, b'|')?;

    let total = movies.len();
    let movies: Vec<Movie> = movies
        .into_iter()
        .map(|movie| Movie {
            movie_id: movie.movie_id.trim().to_string(),
            title: movie.title,
        })
        .filter(|movie| !movie.movie_id.is_empty() && !movie.title.is_empty())
        .collect();

    if movies.len() < total {
        tracing::debug!(
            path = %path.display(),
            skipped = total - movies.len(),
            "Skipped movie rows without id or title"
        );
    }

    Ok(movies)
}

/// Reads the comma-separated ratings file
pub fn load_ratings(path: impl AsRef<Path>) -> Result<Vec<Rating>, DataError> {
    let path = path.as_ref();
    let text = read_text(path)?;
    let ratings: Vec<Rating> = parse_rows(path, &text, b',')?;

    let total = ratings.len();
    let ratings: Vec<Rating> = ratings
        .into_iter()
        .filter(|rating| !rating.user_id.is_empty() && !rating.movie_id.is_empty())
        .collect();

    if ratings.len() < total {
        tracing::debug!(
            path = %path.display(),
            skipped = total - ratings.len(),
            "Skipped rating rows without user or movie id"
        );
    }

    let missing = ratings.iter().filter(|r| r.rating.is_none()).count();
    if missing > 0 {
        tracing::warn!(path = %path.display(), missing, "Ratings that are not numbers are treated as missing");
    }

    Ok(ratings)
}

fn parse_rows<T: DeserializeOwned>(path: &Path, text: &str, delimiter: u8) -> Result<Vec<T>, DataError> {
    let trim = if delimiter == b'|' {
        csv::Trim::Headers
    } else {
        csv::Trim::All
    };

    csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(trim)
        .from_reader(text.as_bytes())
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

/// Reads a file as UTF-8, falling back to Shift_JIS (CP932)
fn read_text(path: &Path) -> Result<String, DataError> {
    let bytes = fs::read(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            let (decoded, _, had_errors) = SHIFT_JIS.decode(&bytes);
            if had_errors {
                return Err(DataError::Encoding {
                    path: path.to_path_buf(),
                });
            }
            tracing::info!(path = %path.display(), "Decoded file as Shift_JIS");
            decoded.into_owned()
        }
    };

    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_load_movies() {
        let file = write_file(
            b"movie_id|movie_title|release_date\n1|Toy Story (1995)|01-Jan-1995\n2|GoldenEye (1995)|01-Jan-1995\n",
        );
        let movies = load_movies(file.path()).unwrap();
        assert_eq!(
            movies,
            vec![
                Movie::new("1", "Toy Story (1995)"),
                Movie::new("2", "GoldenEye (1995)"),
            ]
        );
    }

    #[test]
    fn test_titles_may_contain_commas() {
        let file = write_file(b"movie_id|movie_title\n7|Good, the Bad and the Ugly, The (1966)\n");
        let movies = load_movies(file.path()).unwrap();
        assert_eq!(movies[0].title, "Good, the Bad and the Ugly, The (1966)");
    }

    #[test]
    fn test_load_movies_strips_bom_and_skips_blank_rows() {
        let file = write_file("\u{feff}movie_id|movie_title\n 3 |Heat (1995)\n4|\n".as_bytes());
        let movies = load_movies(file.path()).unwrap();
        assert_eq!(movies, vec![Movie::new("3", "Heat (1995)")]);
    }

    #[test]
    fn test_load_movies_shift_jis_fallback() {
        let (encoded, _, _) = SHIFT_JIS.encode("movie_id|movie_title\n1|七人の侍 (1954)\n");
        let file = write_file(&encoded);
        let movies = load_movies(file.path()).unwrap();
        assert_eq!(movies[0].title, "七人の侍 (1954)");
    }

    #[test]
    fn test_load_movies_undecodable_bytes() {
        let file = write_file(b"movie_id|movie_title\n1|\xff\xfe\n");
        let err = load_movies(file.path()).unwrap_err();
        assert!(matches!(err, DataError::Encoding { .. }));
    }

    #[test]
    fn test_load_movies_missing_column() {
        let file = write_file(b"id|name\n1|Toy Story (1995)\n");
        let err = load_movies(file.path()).unwrap_err();
        assert!(matches!(err, DataError::Csv { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_ratings("/nonexistent/ratings_100k.csv").unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn test_load_ratings() {
        let file = write_file(b"userId,movieId,rating,timestamp\n196, 242 ,3,881250949\n186,302,bad,891717742\n");
        let ratings = load_ratings(file.path()).unwrap();
        assert_eq!(
            ratings,
            vec![
                Rating::new("196", "242", Some(3.0)),
                Rating::new("186", "302", None),
            ]
        );
    }
}
