mod dataset;
pub mod loader;
mod matrix;

#[cfg(test)]
pub(crate) mod fixtures;

pub use dataset::{DatasetSummary, MovieData, RatingStats};
pub use matrix::RatingMatrix;
