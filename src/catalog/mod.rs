//! Catalog entries: validation, metadata and run-scoped aggregates

pub mod entry;
pub mod icons;
pub mod recents;
pub mod resolver;
pub mod validator;

pub use entry::{split_entry_name, CatalogEntry, EntryVariant, RenderedItem};
pub use icons::{Completeness, IconPackCollector, IconPackEntry, ReferenceIcons};
pub use recents::{RecencyClass, RecencyRecord, RecencyTracker};
pub use resolver::{Aggregates, MetadataResolver, ResolvedEntry};
pub use validator::{EntryStatus, EntryValidator};
