//! Small dataset shared by unit tests.
//!
//! Users 1..=12 rate Alpha `u % 5 + 1`, Bravo identically and Charlie
//! inversely. Delta has three ratings, Foxtrot one, Echo none. User 13 has a
//! rating that is not a number.

use crate::data::MovieData;
use crate::models::{Movie, Rating};

pub fn movies() -> Vec<Movie> {
    vec![
        Movie::new("1", "Alpha"),
        Movie::new("2", "Bravo"),
        Movie::new("3", "Charlie"),
        Movie::new("4", "Delta"),
        Movie::new("5", "Echo"),
        Movie::new("6", "Foxtrot"),
    ]
}

pub fn ratings() -> Vec<Rating> {
    let mut ratings = Vec::new();
    for user in 1..=12u32 {
        let alpha = f64::from(user % 5 + 1);
        let id = user.to_string();
        ratings.push(Rating::new(id.clone(), "1", Some(alpha)));
        ratings.push(Rating::new(id.clone(), "2", Some(alpha)));
        ratings.push(Rating::new(id, "3", Some(6.0 - alpha)));
    }
    for (user, value) in [("1", 1.0), ("2", 2.0), ("3", 4.0)] {
        ratings.push(Rating::new(user, "4", Some(value)));
    }
    ratings.push(Rating::new("1", "6", Some(5.0)));
    ratings.push(Rating::new("13", "1", None));
    ratings
}

pub fn movie_data() -> MovieData {
    MovieData::from_tables(movies(), ratings())
}
