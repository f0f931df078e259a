//! Capability interface the surrounding layers depend on.
//!
//! The CLI, and any routing or view layer built on top of this crate, talk
//! to a `MovieLookup` rather than to a concrete catalog. Tests supply their
//! own implementation instead of patching a live instance.

use crate::catalog::{Catalog, SharedCatalog};
use crate::engine::{is_valid_request, SearchEngine};
use crate::types::{Movie, MovieId};

/// Read-only movie queries.
pub trait MovieLookup {
    /// All movies in catalog order.
    fn get_all_movies(&self) -> Vec<Movie>;

    /// One movie by ID. Absent or non-positive IDs are not found.
    fn get_movie_by_id(&self, id: Option<MovieId>) -> Option<Movie>;

    /// Movies satisfying every present criterion, in catalog order.
    fn search_movies(
        &self,
        name: Option<&str>,
        id: Option<MovieId>,
        genre: Option<&str>,
    ) -> Vec<Movie>;

    /// Whether a search carries at least one usable criterion.
    fn is_valid_search_request(
        &self,
        name: Option<&str>,
        id: Option<MovieId>,
        genre: Option<&str>,
    ) -> bool {
        is_valid_request(name, id, genre)
    }
}

impl MovieLookup for Catalog {
    fn get_all_movies(&self) -> Vec<Movie> {
        self.get_all().to_vec()
    }

    fn get_movie_by_id(&self, id: Option<MovieId>) -> Option<Movie> {
        self.get_by_id(id).cloned()
    }

    fn search_movies(
        &self,
        name: Option<&str>,
        id: Option<MovieId>,
        genre: Option<&str>,
    ) -> Vec<Movie> {
        SearchEngine::new()
            .search_by(self, name, id, genre)
            .into_iter()
            .cloned()
            .collect()
    }
}

impl MovieLookup for SharedCatalog {
    fn get_all_movies(&self) -> Vec<Movie> {
        self.snapshot().get_all_movies()
    }

    fn get_movie_by_id(&self, id: Option<MovieId>) -> Option<Movie> {
        self.snapshot().get_movie_by_id(id)
    }

    fn search_movies(
        &self,
        name: Option<&str>,
        id: Option<MovieId>,
        genre: Option<&str>,
    ) -> Vec<Movie> {
        self.snapshot().search_movies(name, id, genre)
    }
}
