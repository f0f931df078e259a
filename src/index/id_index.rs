//! Index by movie ID — maps each ID to its position in the catalog sequence.

use std::collections::HashMap;

use crate::types::{Movie, MovieId};

/// Maps each movie ID to the position of its record in the catalog.
///
/// Built from the sequence only, so it can never disagree with it. When a
/// dataset repeats an ID, the later record wins.
pub struct IdIndex {
    index: HashMap<MovieId, usize>,
    shadowed: Vec<MovieId>,
}

impl IdIndex {
    /// Build the index from a slice of movies in one pass.
    pub fn build(movies: &[Movie]) -> Self {
        let mut index = HashMap::with_capacity(movies.len());
        let mut shadowed = Vec::new();
        for (pos, movie) in movies.iter().enumerate() {
            if let Some(prev) = index.insert(movie.id, pos) {
                log::warn!(
                    "Duplicate movie ID {} at positions {} and {}; keeping the later record",
                    movie.id,
                    prev,
                    pos
                );
                if !shadowed.contains(&movie.id) {
                    shadowed.push(movie.id);
                }
            }
        }
        Self { index, shadowed }
    }

    /// Position of the record with this ID.
    pub fn get(&self, id: MovieId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// IDs that appeared more than once, each listed once, in the order their
    /// first repeat was seen.
    pub fn duplicate_ids(&self) -> &[MovieId] {
        &self.shadowed
    }

    /// Number of distinct IDs.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
