mod movie;
mod recommendation;

pub use movie::{Movie, Rating};
pub use recommendation::{RatedTitle, Recommendations, ScoredTitle};
