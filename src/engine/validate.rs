//! Search request validation.
//!
//! Callers check a request here before running it, so that a request with
//! nothing to filter on is rejected instead of returning the whole catalog.

use crate::types::MovieId;

/// True iff at least one criterion is usable: a non-blank name, a positive
/// ID, or a non-blank genre.
pub fn is_valid_request(name: Option<&str>, id: Option<MovieId>, genre: Option<&str>) -> bool {
    let has_name = name.is_some_and(|n| !n.trim().is_empty());
    let has_id = id.is_some_and(|id| id > 0);
    let has_genre = genre.is_some_and(|g| !g.trim().is_empty());
    has_name || has_id || has_genre
}
