//! Typed configuration for the generator and for individual catalog entries

use serde::Deserialize;
use std::path::PathBuf;

/// Generator configuration (catalog.yaml)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Heading of the index document
    pub title: String,

    /// Catalog root; relative paths below are resolved against it
    pub root: PathBuf,

    /// Directory holding one subdirectory per entry
    pub themes_dir: PathBuf,

    /// Release manifest directory (`<entry name>.zip` per released entry)
    pub release_dir: PathBuf,

    /// Directory holding the ordering lists
    pub lists_dir: PathBuf,

    /// Where generated documents are written
    pub output_dir: PathBuf,

    /// Optional directory of `<template>.hbs` overrides
    pub templates_dir: Option<PathBuf>,

    /// Items per page
    pub page_size: usize,

    /// Grid cells per row
    pub columns: usize,

    /// Cap on each recency grid of the index page
    pub max_recents: usize,

    /// URL prefixes used to build locators
    pub links: LinkConfig,

    /// Files a directory must hold to count as a renderable entry
    pub required_assets: Vec<String>,

    /// Icon-pack policy
    pub icons: IconConfig,

    /// Categories, in navigation order
    pub categories: Vec<CategoryConfig>,
}

/// URL prefixes for generated links
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Prefix for raw repository assets (previews, readmes)
    pub assets: String,
    /// Prefix for release archives
    pub release: String,
    /// Prefix for the per-directory commit history view
    pub history: String,
    /// Prefix for an author search query
    pub author_search: String,
}

/// Icon-pack policy tables
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Variant directory names whose icons are never listed as packs
    pub blacklist: Vec<String>,
    /// Reference pack used to measure completeness
    pub reference: Option<PathBuf>,
}

/// What a category lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Entries named by an ordering list
    #[default]
    Themes,
    /// Icon packs collected while resolving themes
    IconPacks,
}

/// One curated grouping rendered to its own paginated document set
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    /// Output subdirectory name and link target
    pub id: String,

    /// Display title
    pub title: String,

    /// Ordering list file, relative to `lists_dir`
    #[serde(default)]
    pub list: Option<PathBuf>,

    /// Show each page newest first
    #[serde(default)]
    pub reverse: bool,

    /// Entries of this list carry the featured tag everywhere
    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub kind: CategoryKind,
}

impl CategoryConfig {
    pub fn themes(id: &str, title: &str, list: &str, reverse: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            list: Some(PathBuf::from(list)),
            reverse,
            featured: false,
            kind: CategoryKind::Themes,
        }
    }

    pub fn icon_packs(id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            list: None,
            reverse: false,
            featured: false,
            kind: CategoryKind::IconPacks,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let mut featured = CategoryConfig::themes("featured", "Featured", "featured.txt", false);
        featured.featured = true;

        Self {
            title: "Themes".to_string(),
            root: PathBuf::from("."),
            themes_dir: PathBuf::from("themes"),
            release_dir: PathBuf::from("release"),
            lists_dir: PathBuf::from("lists"),
            output_dir: PathBuf::from("docs"),
            templates_dir: None,
            page_size: 12,
            columns: 3,
            max_recents: 6,
            links: LinkConfig::default(),
            required_assets: vec!["config.json".to_string()],
            icons: IconConfig::default(),
            categories: vec![
                featured,
                CategoryConfig::themes("custom", "Custom Themes", "custom.txt", true),
                CategoryConfig::themes("remixed", "Remixed Themes", "remixed.txt", true),
                CategoryConfig::icon_packs("icons", "Icon Packs"),
            ],
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            assets: "https://raw.githubusercontent.com/OnionUI/Themes/main/".to_string(),
            release: "https://github.com/OnionUI/Themes/raw/main/release/".to_string(),
            history: "https://github.com/OnionUI/Themes/commits/main/".to_string(),
            author_search: "https://github.com/search?type=code&q=".to_string(),
        }
    }
}

impl CatalogConfig {
    pub fn themes_path(&self) -> PathBuf {
        self.root.join(&self.themes_dir)
    }

    pub fn release_path(&self) -> PathBuf {
        self.root.join(&self.release_dir)
    }

    pub fn lists_path(&self) -> PathBuf {
        self.root.join(&self.lists_dir)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }
}

/// Optional overrides read from an entry's `config.json`
///
/// Any other fields in the file belong to the theme itself and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntryConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}
