pub mod check;
pub mod generate;
pub mod page_name;

use crate::config::{CatalogConfig, ConfigLoader};
use crate::{CatalogError, Result};
use std::path::Path;

/// Configuration file looked up when none is given
pub const DEFAULT_CONFIG: &str = "catalog.yaml";

/// Common trait for all command handlers
pub trait CommandHandler {
    /// Execute the command
    fn execute(&self) -> Result<()>;

    /// Get command name for logging
    fn name(&self) -> &'static str;
}

/// Load the catalog configuration for a command
///
/// Only the default path may be missing, in which case defaults apply.
pub fn load_config(path: &Path) -> Result<CatalogConfig> {
    if path.exists() || path == Path::new(DEFAULT_CONFIG) {
        ConfigLoader::load_or_default(path)
    } else {
        Err(CatalogError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )))
    }
}
