//! JSON response bodies for catalog queries.
//!
//! Every body carries a `status` of "success" or "error"; errors also carry
//! a machine-readable `errorCode`.

use serde_json::{json, Map, Value};

use crate::engine::SearchParams;
use crate::types::{Movie, MovieId};

/// Error code for an unknown or invalid movie ID.
pub const MOVIE_NOT_FOUND: &str = "MOVIE_NOT_FOUND";

/// Error code for a movie ID that is not a number.
pub const INVALID_MOVIE_ID_FORMAT: &str = "INVALID_MOVIE_ID_FORMAT";

/// Error code for a search with no usable criterion.
pub const INVALID_SEARCH_PARAMETERS: &str = "INVALID_SEARCH_PARAMETERS";

/// Names of the accepted search parameters.
pub const VALID_SEARCH_PARAMETERS: [&str; 3] = ["name", "id", "genre"];

/// Body for the full movie list.
pub fn all_movies_response(movies: &[Movie]) -> Value {
    json!({
        "status": "success",
        "message": "Here are all the movies in the collection.",
        "movies": movies,
        "count": movies.len(),
    })
}

/// Body for a single movie.
pub fn movie_response(movie: &Movie) -> Value {
    json!({
        "status": "success",
        "message": "Found your movie.",
        "movie": movie,
    })
}

/// Body for a lookup that found nothing.
pub fn not_found_response(id: MovieId) -> Value {
    json!({
        "status": "error",
        "errorCode": MOVIE_NOT_FOUND,
        "message": format!("The movie with ID {} could not be found.", id),
    })
}

/// Body for a movie ID argument that does not parse as a number.
pub fn invalid_id_format_response() -> Value {
    json!({
        "status": "error",
        "errorCode": INVALID_MOVIE_ID_FORMAT,
        "message": "That is not a valid movie ID. Use numbers only.",
    })
}

/// Body for search results. `searchCriteria` echoes only the criteria the
/// caller actually supplied.
pub fn search_response(params: &SearchParams, movies: &[Movie]) -> Value {
    let message = if movies.is_empty() {
        "No movies found matching your search criteria. Try different search terms.".to_string()
    } else {
        format!("Found {} movies matching your search.", movies.len())
    };
    json!({
        "status": "success",
        "message": message,
        "searchCriteria": search_criteria(params),
        "movies": movies,
        "count": movies.len(),
    })
}

/// Body for a search rejected by validation.
pub fn invalid_search_response() -> Value {
    json!({
        "status": "error",
        "errorCode": INVALID_SEARCH_PARAMETERS,
        "message": "Provide at least one search parameter.",
        "validParameters": VALID_SEARCH_PARAMETERS,
    })
}

fn search_criteria(params: &SearchParams) -> Map<String, Value> {
    let mut criteria = Map::new();
    if let Some(name) = params.name.as_deref().filter(|n| !n.trim().is_empty()) {
        criteria.insert("name".to_string(), json!(name));
    }
    if let Some(id) = params.id {
        criteria.insert("id".to_string(), json!(id));
    }
    if let Some(genre) = params.genre.as_deref().filter(|g| !g.trim().is_empty()) {
        criteria.insert("genre".to_string(), json!(genre));
    }
    criteria
}
