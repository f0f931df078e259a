//! Reads JSON movie datasets into ordered Movie records.
//!
//! Two flavours are offered. The strict `read_*` functions return the first
//! failure as a [`CatalogError`]. The lenient `load_*` functions never fail:
//! they log the failure and return whatever prefix of records decoded
//! cleanly (empty when the source is missing or unparseable).

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::types::error::{CatalogError, CatalogResult};
use crate::types::Movie;

/// Records decoded from a dataset, plus the failure that stopped decoding.
#[derive(Debug, Default)]
pub struct DecodeReport {
    /// Records decoded before the first failure, in dataset order.
    pub movies: Vec<Movie>,
    /// The failure that stopped decoding, if any.
    pub error: Option<CatalogError>,
}

impl DecodeReport {
    fn failed(error: CatalogError) -> Self {
        Self {
            movies: Vec::new(),
            error: Some(error),
        }
    }

    /// Convert into a strict result, dropping the partial prefix on failure.
    pub fn into_result(self) -> CatalogResult<Vec<Movie>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.movies),
        }
    }
}

/// Reader for JSON movie datasets.
pub struct DatasetReader;

impl DatasetReader {
    /// Read a dataset file, failing on the first error.
    pub fn read_from_file(path: &Path) -> CatalogResult<Vec<Movie>> {
        let data = std::fs::read_to_string(path)?;
        Self::read_from_str(&data)
    }

    /// Read from any reader, failing on the first error.
    pub fn read_from(reader: &mut impl Read) -> CatalogResult<Vec<Movie>> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::read_from_str(&data)
    }

    /// Read from a JSON string, failing on the first error.
    pub fn read_from_str(data: &str) -> CatalogResult<Vec<Movie>> {
        Self::decode(data).into_result()
    }

    /// Decode a JSON string record by record, stopping at the first bad one.
    pub fn decode(data: &str) -> DecodeReport {
        let root: Value = match serde_json::from_str(data) {
            Ok(v) => v,
            Err(e) => return DecodeReport::failed(CatalogError::Json(e)),
        };
        let entries = match root {
            Value::Array(entries) => entries,
            _ => return DecodeReport::failed(CatalogError::NotAnArray),
        };

        let mut report = DecodeReport {
            movies: Vec::with_capacity(entries.len()),
            error: None,
        };
        for (index, entry) in entries.iter().enumerate() {
            match decode_record(index, entry) {
                Ok(movie) => report.movies.push(movie),
                Err(e) => {
                    report.error = Some(e);
                    break;
                }
            }
        }
        report
    }

    /// Load a dataset file. A missing file yields an empty list; a decode
    /// failure yields the records decoded before it. Failures are logged.
    pub fn load_from_file(path: &Path) -> Vec<Movie> {
        match std::fs::read_to_string(path) {
            Ok(data) => Self::load_from_str(&data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::error!("Movie dataset not found at {}", path.display());
                Vec::new()
            }
            Err(e) => {
                log::error!(
                    "Failed to read movie dataset {}: {}",
                    path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Load from any reader with the same failure policy as `load_from_file`.
    pub fn load_from(reader: &mut impl Read) -> Vec<Movie> {
        let mut data = String::new();
        if let Err(e) = reader.read_to_string(&mut data) {
            log::error!("Failed to read movie dataset: {}", e);
            return Vec::new();
        }
        Self::load_from_str(&data)
    }

    /// Load from a JSON string, keeping the clean prefix on failure.
    pub fn load_from_str(data: &str) -> Vec<Movie> {
        let report = Self::decode(data);
        if let Some(e) = &report.error {
            log::error!(
                "Failed to load movies from JSON: {} ({} records kept)",
                e,
                report.movies.len()
            );
        } else {
            log::debug!("Decoded {} movies", report.movies.len());
        }
        report.movies
    }
}

/// Decode one dataset entry, rejecting non-positive identifiers.
fn decode_record(index: usize, entry: &Value) -> CatalogResult<Movie> {
    let movie = Movie::deserialize(entry).map_err(|e| CatalogError::InvalidRecord {
        index,
        reason: e.to_string(),
    })?;
    if movie.id <= 0 {
        return Err(CatalogError::InvalidId {
            index,
            id: movie.id,
        });
    }
    Ok(movie)
}
