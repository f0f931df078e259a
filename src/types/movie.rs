//! The movie record and its builder.

use serde::{Deserialize, Serialize};

/// Identifier type for movies. Signed so that callers can pass through
/// untrusted (possibly non-positive) lookup keys; valid IDs are always > 0.
pub type MovieId = i64;

/// A single catalog entry.
///
/// Field names on the wire follow the dataset format (`movieName`,
/// `duration`, `imdbRating`); the Rust names describe what the values are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique, positive identifier.
    pub id: MovieId,
    /// Display title.
    #[serde(rename = "movieName")]
    pub name: String,
    /// Director name.
    pub director: String,
    /// Release year.
    pub year: i32,
    /// Free-text genre, possibly several tags like "Crime/Drama".
    pub genre: String,
    /// Synopsis. May be empty.
    pub description: String,
    /// Running time in minutes. Not range-checked; the dataset may carry
    /// placeholders like -1.
    #[serde(rename = "duration")]
    pub duration_minutes: i32,
    /// Rating, observed range 0.0-10.0.
    #[serde(rename = "imdbRating")]
    pub rating: f64,
}

/// Title keywords mapped to display glyphs, checked in order.
const TITLE_ICONS: &[(&str, &str)] = &[
    ("space", "🚀"),
    ("star", "🚀"),
    ("ring", "💍"),
    ("hero", "🦸"),
    ("dream", "💭"),
    ("virtual", "💻"),
    ("prison", "🔒"),
    ("family", "👪"),
    ("lake", "🌊"),
    ("office", "🏢"),
    ("journey", "🧭"),
    ("quest", "🗺"),
    ("city", "🏙"),
    ("urban", "🏙"),
];

impl Movie {
    /// Display glyph for this movie, picked from the first recognised
    /// keyword in its title. Falls back to a film glyph.
    pub fn icon(&self) -> &'static str {
        let title = self.name.to_lowercase();
        TITLE_ICONS
            .iter()
            .find(|(keyword, _)| title.contains(keyword))
            .map(|(_, icon)| *icon)
            .unwrap_or("🎬")
    }

    /// Genre tags split on commas and slashes, trimmed, empty tags dropped.
    pub fn genre_tags(&self) -> impl Iterator<Item = &str> {
        self.genre
            .split([',', '/'])
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.year)
    }
}

/// Builder for constructing Movie instances ergonomically.
pub struct MovieBuilder {
    id: MovieId,
    name: String,
    director: String,
    year: i32,
    genre: String,
    description: String,
    duration_minutes: i32,
    rating: f64,
}

impl MovieBuilder {
    /// Create a new builder with the required fields.
    pub fn new(id: MovieId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            director: String::new(),
            year: 0,
            genre: String::new(),
            description: String::new(),
            duration_minutes: 0,
            rating: 0.0,
        }
    }

    /// Set the director.
    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    /// Set the release year.
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Set the genre text.
    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the running time in minutes.
    pub fn duration_minutes(mut self, minutes: i32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    /// Set the rating.
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Build the Movie.
    pub fn build(self) -> Movie {
        Movie {
            id: self.id,
            name: self.name,
            director: self.director,
            year: self.year,
            genre: self.genre,
            description: self.description,
            duration_minutes: self.duration_minutes,
            rating: self.rating,
        }
    }
}
