use super::types::{CatalogConfig, CategoryKind, EntryConfig};
use crate::{CatalogError, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Name of the per-entry configuration record
pub const ENTRY_CONFIG_FILE: &str = "config.json";

/// Loader for generator configuration, entry records and ordering lists
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load generator configuration from a YAML file
    ///
    /// A relative `root` is resolved against the directory holding the file.
    pub fn load_catalog_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
        let path = path.as_ref();
        info!("Loading catalog configuration from: {:?}", path);

        let contents = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to read configuration {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config: CatalogConfig = serde_yaml_ng::from_str(&contents).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to parse configuration {}: {}",
                path.display(),
                e
            ))
        })?;

        if config.root.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            config.root = base.join(&config.root);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults rooted at the current
    /// directory when the file does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_catalog_config(path)
        } else {
            info!("No configuration at {:?}, using defaults", path);
            let config = CatalogConfig::default();
            Self::validate(&config)?;
            Ok(config)
        }
    }

    /// Validate configuration structure
    pub fn validate(config: &CatalogConfig) -> Result<()> {
        if config.page_size == 0 {
            return Err(CatalogError::Config("page_size must be at least 1".to_string()));
        }
        if config.columns == 0 {
            return Err(CatalogError::Config("columns must be at least 1".to_string()));
        }
        if config.max_recents == 0 {
            return Err(CatalogError::Config("max_recents must be at least 1".to_string()));
        }

        let mut seen = HashSet::new();
        for (index, category) in config.categories.iter().enumerate() {
            if category.id.is_empty() {
                return Err(CatalogError::Config(format!(
                    "Category at index {} has empty id",
                    index
                )));
            }
            if !seen.insert(category.id.as_str()) {
                return Err(CatalogError::Config(format!(
                    "Duplicate category id '{}'",
                    category.id
                )));
            }
            if category.kind == CategoryKind::Themes && category.list.is_none() {
                return Err(CatalogError::Config(format!(
                    "Category '{}' lists themes but names no ordering list",
                    category.id
                )));
            }
        }

        Ok(())
    }

    /// Read the configuration record of a self-contained entry
    ///
    /// The record must exist and parse; entries without one cannot be rendered.
    pub fn load_entry_config(dir: &Path) -> Result<EntryConfig> {
        let path = dir.join(ENTRY_CONFIG_FILE);

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            CatalogError::Entry(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            CatalogError::Entry(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Read an ordering list: one entry name per line, `#` comments and
    /// blank lines skipped
    pub fn load_ordering_list(path: &Path) -> Result<Vec<String>> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CatalogError::Config(format!(
                "Failed to read ordering list {}: {}",
                path.display(),
                e
            ))
        })?;

        let names: Vec<String> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect();

        debug!("Loaded {} names from {:?}", names.len(), path);
        Ok(names)
    }
}
