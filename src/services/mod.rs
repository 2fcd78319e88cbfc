pub mod popularity;
pub mod recommendations;
pub mod similarity;

pub use recommendations::{recommend, RecommendationSettings};
