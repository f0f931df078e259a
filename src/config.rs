//! Catalog configuration with TOML persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::{CatalogError, CatalogResult, DATASET_ENV_VAR};

/// Settings for building a catalog and running the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Dataset file. `None` means the bundled dataset.
    pub dataset_path: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset: error, warn, info, debug, trace.
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            log_level: "warn".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Load from a TOML file. A missing file gives the defaults.
    pub fn load(path: &Path) -> CatalogResult<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse from TOML text.
    pub fn from_toml(content: &str) -> CatalogResult<Self> {
        toml::from_str(content).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Serialize to TOML text.
    pub fn to_toml(&self) -> CatalogResult<String> {
        toml::to_string_pretty(self).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Save to a TOML file.
    pub fn save(&self, path: &Path) -> CatalogResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Apply the `MOVIE_CATALOG_DATASET` environment override.
    pub fn with_env_overrides(self) -> Self {
        self.with_dataset_override(std::env::var_os(DATASET_ENV_VAR).map(PathBuf::from))
    }

    /// Replace the dataset path when an override is given.
    pub fn with_dataset_override(mut self, dataset: Option<PathBuf>) -> Self {
        if let Some(path) = dataset {
            self.dataset_path = Some(path);
        }
        self
    }

    /// Build the catalog this config describes, loading leniently.
    pub fn build_catalog(&self) -> Catalog {
        match &self.dataset_path {
            Some(path) => Catalog::from_path(path),
            None => Catalog::bundled(),
        }
    }
}
