//! All data types for the movie catalog library.

pub mod error;
pub mod movie;

pub use error::{CatalogError, CatalogResult};
pub use movie::{Movie, MovieBuilder, MovieId};

/// Dataset shipped with the crate (12 movies).
pub const BUNDLED_DATASET: &str = include_str!("../../data/movies.json");

/// Number of movies in the bundled dataset.
pub const BUNDLED_MOVIE_COUNT: usize = 12;

/// Environment variable overriding the dataset path.
pub const DATASET_ENV_VAR: &str = "MOVIE_CATALOG_DATASET";

/// Returns the current time as Unix epoch microseconds.
pub fn now_micros() -> u64 {
    chrono::Utc::now().timestamp_micros() as u64
}
