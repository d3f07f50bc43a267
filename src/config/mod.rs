pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, ENTRY_CONFIG_FILE};
pub use types::{CatalogConfig, CategoryConfig, CategoryKind, EntryConfig, IconConfig, LinkConfig};
