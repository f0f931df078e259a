//! CLI command implementations.

use std::fmt::Write as _;

use crate::catalog::Catalog;
use crate::contracts::MovieLookup;
use crate::engine::SearchParams;
use crate::types::{CatalogError, CatalogResult, Movie, MovieId};

use super::responses;

/// List every movie.
pub fn cmd_list(lookup: &impl MovieLookup, json: bool) -> CatalogResult<()> {
    let movies = lookup.get_all_movies();
    if json {
        print_json(&responses::all_movies_response(&movies));
    } else {
        print!("{}", render_movie_list(&movies));
    }
    Ok(())
}

/// Parse a movie ID argument. Surrounding whitespace is ignored.
pub fn parse_movie_id(raw: &str) -> CatalogResult<MovieId> {
    raw.trim()
        .parse::<MovieId>()
        .map_err(|_| CatalogError::InvalidIdFormat(raw.to_string()))
}

/// Show one movie by ID.
pub fn cmd_get(lookup: &impl MovieLookup, raw_id: &str, json: bool) -> CatalogResult<()> {
    let id = parse_id_or_report(raw_id, json)?;
    let movie = match lookup.get_movie_by_id(Some(id)) {
        Some(movie) => movie,
        None => {
            log::warn!("Movie with ID {} not found", id);
            if json {
                print_json(&responses::not_found_response(id));
            }
            return Err(CatalogError::MovieNotFound(id));
        }
    };

    if json {
        print_json(&responses::movie_response(&movie));
    } else {
        print!("{}", render_movie_details(&movie));
    }
    Ok(())
}

/// Validate and run a search. The ID criterion arrives as raw text.
pub fn cmd_search(
    lookup: &impl MovieLookup,
    name: Option<&str>,
    raw_id: Option<&str>,
    genre: Option<&str>,
    json: bool,
) -> CatalogResult<()> {
    let id = raw_id.map(|raw| parse_id_or_report(raw, json)).transpose()?;
    let params = SearchParams::new(name, id, genre);

    if !lookup.is_valid_search_request(name, id, genre) {
        log::warn!("Rejected search with no usable criteria");
        if json {
            print_json(&responses::invalid_search_response());
        }
        return Err(CatalogError::InvalidSearch);
    }

    let movies = lookup.search_movies(name, id, genre);
    if json {
        print_json(&responses::search_response(&params, &movies));
    } else if movies.is_empty() {
        println!("No movies found matching your search criteria.");
    } else {
        println!("Found {} movies:", movies.len());
        print!("{}", render_movie_list(&movies));
    }
    Ok(())
}

/// Display catalog statistics.
pub fn cmd_info(catalog: &Catalog, json: bool) -> CatalogResult<()> {
    let stats = catalog.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Movies: {}", stats.movie_count);
    println!("Distinct IDs: {}", stats.distinct_ids);
    if !stats.duplicate_ids.is_empty() {
        println!("Duplicate IDs: {:?}", stats.duplicate_ids);
    }
    if let (Some(first), Some(last)) = (stats.earliest_year, stats.latest_year) {
        println!("Years: {}-{}", first, last);
    }
    if let Some(avg) = stats.average_rating {
        println!("Average rating: {:.2}", avg);
    }
    println!("Loaded: {}", format_timestamp(stats.loaded_at));
    println!("Genres:");
    for (genre, count) in &stats.genre_counts {
        println!("  {}: {}", genre, count);
    }
    Ok(())
}

/// One line per movie: id, title, year, genre, rating.
pub fn render_movie_list(movies: &[Movie]) -> String {
    let mut out = String::new();
    for movie in movies {
        let _ = writeln!(
            out,
            "{:>4}  {}  [{}]  {:.1}",
            movie.id, movie, movie.genre, movie.rating
        );
    }
    out
}

/// Multi-line details for a single movie.
pub fn render_movie_details(movie: &Movie) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", movie.icon(), movie.name);
    let _ = writeln!(out, "  ID: {}", movie.id);
    let _ = writeln!(out, "  Director: {}", movie.director);
    let _ = writeln!(out, "  Year: {}", movie.year);
    let _ = writeln!(out, "  Genre: {}", movie.genre);
    let _ = writeln!(out, "  Duration: {} min", movie.duration_minutes);
    let _ = writeln!(out, "  Rating: {:.1}", movie.rating);
    if !movie.description.is_empty() {
        let _ = writeln!(out, "  Description: {}", movie.description);
    }
    out
}

fn parse_id_or_report(raw: &str, json: bool) -> CatalogResult<MovieId> {
    parse_movie_id(raw).map_err(|e| {
        log::warn!("Invalid movie ID format provided: {:?}", raw);
        if json {
            print_json(&responses::invalid_id_format_response());
        }
        e
    })
}

fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_default()
    );
}

fn format_timestamp(micros: u64) -> String {
    let secs = (micros / 1_000_000) as i64;
    let dt = chrono::DateTime::from_timestamp(secs, 0);
    match dt {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{} us", micros),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movie_id() {
        assert_eq!(parse_movie_id("42").unwrap(), 42);
        assert_eq!(parse_movie_id(" 7 ").unwrap(), 7);
        assert_eq!(parse_movie_id("-1").unwrap(), -1);
        assert!(matches!(
            parse_movie_id("abc"),
            Err(CatalogError::InvalidIdFormat(raw)) if raw == "abc"
        ));
        assert!(parse_movie_id("1.5").is_err());
        assert!(parse_movie_id("").is_err());
    }

    #[test]
    fn test_bad_id_rejected_before_lookup() {
        let catalog = Catalog::bundled();
        assert!(matches!(
            cmd_get(&catalog, "twelve", false),
            Err(CatalogError::InvalidIdFormat(_))
        ));
        assert!(matches!(
            cmd_search(&catalog, Some("prison"), Some("x1"), None, false),
            Err(CatalogError::InvalidIdFormat(_))
        ));
    }
}
