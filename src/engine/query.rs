//! Search executor — name/id/genre filtering over a catalog.

use crate::catalog::Catalog;
use crate::types::{Movie, MovieId};

/// Raw search input as a caller supplies it. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
    /// Name fragment to look for.
    pub name: Option<String>,
    /// Exact movie ID.
    pub id: Option<MovieId>,
    /// Genre fragment to look for.
    pub genre: Option<String>,
}

impl SearchParams {
    /// Create params from borrowed inputs.
    pub fn new(name: Option<&str>, id: Option<MovieId>, genre: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            id,
            genre: genre.map(str::to_string),
        }
    }

    /// Set the name fragment.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the exact ID.
    pub fn id(mut self, id: MovieId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the genre fragment.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    /// The criteria that actually take part in matching.
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria::from_params(self)
    }
}

/// Normalized criteria: blank text is dropped, text is trimmed and
/// lower-cased once up front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    name: Option<String>,
    id: Option<MovieId>,
    genre: Option<String>,
}

impl SearchCriteria {
    /// Normalize raw params.
    pub fn from_params(params: &SearchParams) -> Self {
        Self {
            name: normalize_text(params.name.as_deref()),
            id: params.id,
            genre: normalize_text(params.genre.as_deref()),
        }
    }

    /// True when no criterion is present, i.e. everything matches.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.id.is_none() && self.genre.is_none()
    }

    /// Whether a movie satisfies every present criterion.
    pub fn matches(&self, movie: &Movie) -> bool {
        if let Some(id) = self.id {
            if movie.id != id {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if !movie.name.to_lowercase().contains(name.as_str()) {
                return false;
            }
        }
        if let Some(genre) = &self.genre {
            if !movie.genre.to_lowercase().contains(genre.as_str()) {
                return false;
            }
        }
        true
    }
}

/// Trim and lower-case, treating empty or whitespace-only text as absent.
fn normalize_text(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// The search engine. Stateless; all state lives in the catalog.
pub struct SearchEngine;

impl SearchEngine {
    /// Create a new search engine.
    pub fn new() -> Self {
        Self
    }

    /// Return every movie satisfying all present criteria, in catalog order.
    /// With no criterion present, the whole catalog matches.
    pub fn search<'a>(&self, catalog: &'a Catalog, params: &SearchParams) -> Vec<&'a Movie> {
        log::info!(
            "Searching movies with name: {:?}, id: {:?}, genre: {:?}",
            params.name,
            params.id,
            params.genre
        );

        let criteria = params.criteria();
        let results: Vec<&Movie> = if criteria.is_empty() {
            catalog.get_all().iter().collect()
        } else {
            match (criteria.id, catalog.id_index().duplicate_ids().is_empty()) {
                // IDs are unique, so at most one candidate.
                (Some(id), true) => catalog
                    .id_index()
                    .get(id)
                    .map(|pos| &catalog.get_all()[pos])
                    .filter(|m| criteria.matches(m))
                    .into_iter()
                    .collect(),
                _ => catalog
                    .get_all()
                    .iter()
                    .filter(|m| criteria.matches(m))
                    .collect(),
            }
        };

        log::info!("Found {} movies matching search criteria", results.len());
        results
    }

    /// Convenience form taking the three criteria directly.
    pub fn search_by<'a>(
        &self,
        catalog: &'a Catalog,
        name: Option<&str>,
        id: Option<MovieId>,
        genre: Option<&str>,
    ) -> Vec<&'a Movie> {
        self.search(catalog, &SearchParams::new(name, id, genre))
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
