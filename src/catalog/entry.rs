//! Catalog entry data model

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

/// Separator between an entry's name and its author
pub const AUTHOR_SEPARATOR: &str = " by ";

/// Background music asset, relative to a variant
pub const BGM_ASSET: &str = "sound/bgm.mp3";

/// Icon subdirectory, relative to a variant
pub const ICONS_DIR: &str = "icons";

/// Preview image, relative to an entry or variant
pub const PREVIEW_ASSET: &str = "preview.png";

/// Documentation files probed in order on every variant
pub const README_CANDIDATES: [&str; 4] = ["readme.md", "README.md", "readme.txt", "README.txt"];

/// Split `"<name> by <author>"` on the first separator
///
/// Names without an author suffix get an empty author.
pub fn split_entry_name(entry_name: &str) -> (String, String) {
    match entry_name.split_once(AUTHOR_SEPARATOR) {
        Some((name, author)) => (name.to_string(), author.to_string()),
        None => (entry_name.to_string(), String::new()),
    }
}

/// One concrete renderable directory of an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryVariant {
    pub path: PathBuf,
    pub has_bgm: bool,
    pub has_icons: bool,
    /// First documentation candidate present in this variant
    pub readme: Option<PathBuf>,
}

impl EntryVariant {
    /// Probe a variant directory for its optional assets
    pub fn probe(path: &Path) -> Self {
        let readme = README_CANDIDATES
            .iter()
            .map(|candidate| path.join(candidate))
            .find(|candidate| candidate.is_file());

        Self {
            path: path.to_path_buf(),
            has_bgm: path.join(BGM_ASSET).is_file(),
            has_icons: path.join(ICONS_DIR).is_dir(),
            readme,
        }
    }

    /// Directory name of the variant
    pub fn dir_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn preview_path(&self) -> PathBuf {
        self.path.join(PREVIEW_ASSET)
    }

    pub fn icons_path(&self) -> PathBuf {
        self.path.join(ICONS_DIR)
    }
}

/// A validated catalog item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Full entry name as listed, e.g. `Aurora by Aemiii91`
    pub id: String,
    pub name: String,
    pub author: String,
    pub description: String,
    pub dir: PathBuf,
    pub is_container: bool,
    /// Never empty; exactly one element unless `is_container`
    pub variants: Vec<EntryVariant>,
}

impl CatalogEntry {
    pub fn first_variant(&self) -> &EntryVariant {
        &self.variants[0]
    }
}

/// Output of resolving one entry for one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub entry_name: String,
    pub category: String,
    /// Fully substituted grid cell
    pub fragment: String,
    pub has_icon_pack: bool,
    pub last_changed: Option<DateTime<Utc>>,
}

impl RenderedItem {
    /// Placeholder for an entry that failed validation
    pub fn empty(entry_name: &str, category: &str) -> Self {
        Self {
            entry_name: entry_name.to_string(),
            category: category.to_string(),
            fragment: String::new(),
            has_icon_pack: false,
            last_changed: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragment.is_empty()
    }
}
