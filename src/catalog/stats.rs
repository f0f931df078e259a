//! Summary statistics over a catalog.

use std::collections::BTreeMap;

use serde::Serialize;

use super::Catalog;

/// Aggregate figures reported by `mcat info`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub movie_count: usize,
    pub distinct_ids: usize,
    pub duplicate_ids: Vec<i64>,
    /// Genre tag -> number of movies carrying it.
    pub genre_counts: BTreeMap<String, usize>,
    pub earliest_year: Option<i32>,
    pub latest_year: Option<i32>,
    pub average_rating: Option<f64>,
    pub loaded_at: u64,
}

impl CatalogStats {
    pub(crate) fn compute(catalog: &Catalog) -> Self {
        let movies = catalog.get_all();

        let mut genre_counts: BTreeMap<String, usize> = BTreeMap::new();
        for movie in movies {
            for tag in movie.genre_tags() {
                *genre_counts.entry(tag.to_string()).or_default() += 1;
            }
        }

        let average_rating = if movies.is_empty() {
            None
        } else {
            Some(movies.iter().map(|m| m.rating).sum::<f64>() / movies.len() as f64)
        };

        Self {
            movie_count: movies.len(),
            distinct_ids: catalog.id_index().len(),
            duplicate_ids: catalog.id_index().duplicate_ids().to_vec(),
            genre_counts,
            earliest_year: movies.iter().map(|m| m.year).min(),
            latest_year: movies.iter().map(|m| m.year).max(),
            average_rating,
            loaded_at: catalog.loaded_at(),
        }
    }
}
