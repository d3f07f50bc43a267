//! Derives display metadata for one entry and renders its grid cell

use super::entry::{split_entry_name, CatalogEntry, EntryVariant, RenderedItem, PREVIEW_ASSET};
use super::icons::{IconPackCollector, IconPackEntry};
use super::recents::{RecencyClass, RecencyTracker};
use super::validator::EntryStatus;
use crate::config::{ConfigLoader, LinkConfig};
use crate::history::{RevisionHistory, RevisionInfo};
use crate::io::PathUtils;
use crate::render::{TemplateRenderer, Vars};
use crate::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Marker ending each tooltip line
pub const LINE_BREAK: &str = "&#10;";

/// Last line of every tooltip
pub const CALL_TO_ACTION: &str = "Click to download";

pub const FEATURED_TAG: &str = "★ Featured";

/// Run-scoped accumulators fed while resolving entries
#[derive(Debug, Clone)]
pub struct Aggregates {
    pub recents: RecencyTracker,
    pub icon_packs: IconPackCollector,
}

impl Aggregates {
    pub fn new(max_recents: usize) -> Self {
        Self {
            recents: RecencyTracker::new(max_recents),
            icon_packs: IconPackCollector::new(),
        }
    }

    /// Fold a worker's aggregates into this one
    pub fn merge(&mut self, other: Aggregates) {
        self.recents.merge(other.recents);
        self.icon_packs.merge(other.icon_packs);
    }
}

/// Escape a value for use inside a double-quoted HTML attribute or text
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Tooltip text: each non-empty field on its own line, then the call to action
pub fn build_title(
    name: &str,
    author: &str,
    updated: &str,
    description: &str,
    featured: bool,
) -> String {
    let author = if author.is_empty() {
        String::new()
    } else {
        format!("by {}", author)
    };
    let updated = if updated.is_empty() {
        String::new()
    } else {
        format!("Updated {}", updated)
    };
    let featured = if featured { FEATURED_TAG } else { "" };

    let mut title = String::new();
    for field in [name, &author, &updated, description, featured] {
        if !field.is_empty() {
            title.push_str(&escape_html(field));
            title.push_str(LINE_BREAK);
        }
    }
    title.push_str(CALL_TO_ACTION);
    title
}

/// Everything derived for one entry before rendering
#[derive(Debug, Clone)]
pub struct ResolvedEntry {
    pub entry: CatalogEntry,
    pub preview_url: String,
    pub release_url: String,
    pub history_url: String,
    pub readme_url: Option<String>,
    pub revision: RevisionInfo,
    pub has_bgm: bool,
    pub has_icon_pack: bool,
    pub featured: bool,
}

impl ResolvedEntry {
    /// Last change as `YYYY-MM-DD`, empty when unknown
    pub fn updated(&self) -> String {
        self.revision
            .last_changed
            .map(|ts| ts.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    pub fn title(&self) -> String {
        build_title(
            &self.entry.name,
            &self.entry.author,
            &self.updated(),
            &self.entry.description,
            self.featured,
        )
    }
}

/// Resolves entries against the catalog's links, history and templates
pub struct MetadataResolver<'a> {
    pub root: &'a Path,
    pub links: &'a LinkConfig,
    pub icon_blacklist: &'a [String],
    pub featured: &'a HashSet<String>,
    pub history: &'a dyn RevisionHistory,
    pub templates: &'a TemplateRenderer,
    /// Width attribute of a grid cell, e.g. `33%`
    pub cell_width: String,
}

impl<'a> MetadataResolver<'a> {
    /// Build the entry model from a validated directory
    ///
    /// Self-contained entries must carry a readable configuration record.
    pub fn load_entry(
        &self,
        entry_name: &str,
        dir: &Path,
        status: &EntryStatus,
    ) -> Result<Option<CatalogEntry>> {
        let variant_paths: Vec<PathBuf> = match status {
            EntryStatus::Invalid => return Ok(None),
            EntryStatus::Single => vec![dir.to_path_buf()],
            EntryStatus::Container(variants) => variants.clone(),
        };

        let (mut name, mut author) = split_entry_name(entry_name);
        let mut description = String::new();

        if !status.is_container() {
            let config = ConfigLoader::load_entry_config(dir)?;
            if let Some(value) = config.name.filter(|v| !v.trim().is_empty()) {
                name = value;
            }
            if let Some(value) = config.author.filter(|v| !v.trim().is_empty()) {
                author = value;
            }
            if let Some(value) = config.description.filter(|v| !v.trim().is_empty()) {
                description = value;
            }
        }

        Ok(Some(CatalogEntry {
            id: entry_name.to_string(),
            name,
            author,
            description,
            dir: dir.to_path_buf(),
            is_container: status.is_container(),
            variants: variant_paths.iter().map(|p| EntryVariant::probe(p)).collect(),
        }))
    }

    fn asset_url(&self, path: &Path) -> String {
        PathUtils::link(&self.links.assets, &PathUtils::relative_link(self.root, path))
    }

    /// Derive locators, history and asset flags for a loaded entry
    pub fn describe(&self, entry: CatalogEntry) -> Result<ResolvedEntry> {
        let entry_preview = entry.dir.join(PREVIEW_ASSET);
        let preview = if entry_preview.is_file() {
            entry_preview
        } else {
            entry.first_variant().preview_path()
        };

        let release_url = PathUtils::link(&self.links.release, &format!("{}.zip", entry.id));
        let history_url = PathUtils::link(
            &self.links.history,
            &PathUtils::relative_link(self.root, &entry.dir),
        );

        let revision = self.history.query(&entry.dir)?;
        debug!(
            "{}: {} revisions, last changed {:?}",
            entry.id, revision.revision_count, revision.last_changed
        );

        let readme_url = entry
            .variants
            .iter()
            .find_map(|v| v.readme.as_deref())
            .map(|path| self.asset_url(path));

        Ok(ResolvedEntry {
            preview_url: self.asset_url(&preview),
            release_url,
            history_url,
            readme_url,
            revision,
            has_bgm: entry.first_variant().has_bgm,
            has_icon_pack: entry.variants.iter().any(|v| v.has_icons),
            featured: self.featured.contains(&entry.id),
            entry,
        })
    }

    /// Render the grid cell of a resolved entry
    pub fn render(&self, resolved: &ResolvedEntry) -> Result<String> {
        let entry = &resolved.entry;

        let author_link = if entry.author.is_empty() {
            String::new()
        } else {
            format!(
                "<br/><sub>by <a href=\"{}\">{}</a></sub>",
                PathUtils::link(&self.links.author_search, &entry.author),
                escape_html(&entry.author)
            )
        };

        let mut badges = String::new();
        if resolved.has_bgm {
            badges.push_str("🎵 ");
        }
        if resolved.has_icon_pack {
            badges.push_str("🎨 ");
        }

        let readme_link = resolved
            .readme_url
            .as_ref()
            .map(|url| format!(" · <a href=\"{}\">Readme</a>", url))
            .unwrap_or_default();

        let mut vars = Vars::new();
        vars.insert("width", self.cell_width.clone());
        vars.insert("name", escape_html(&entry.name));
        vars.insert("title", resolved.title());
        vars.insert("preview_url", resolved.preview_url.clone());
        vars.insert("release_url", resolved.release_url.clone());
        vars.insert("history_url", resolved.history_url.clone());
        vars.insert("author_link", author_link);
        vars.insert("badges", badges);
        vars.insert("readme_link", readme_link);

        self.templates.render("item", &vars)
    }

    /// Resolve one entry for one category
    ///
    /// With `aggregate` set, the entry also feeds the recency rankings and
    /// the icon-pack catalog; callers set it once per entry per run.
    pub fn resolve(
        &self,
        entry_name: &str,
        dir: &Path,
        status: &EntryStatus,
        category: &str,
        aggregates: &mut Aggregates,
        aggregate: bool,
    ) -> Result<RenderedItem> {
        let entry = match self.load_entry(entry_name, dir, status)? {
            Some(entry) => entry,
            None => {
                warn!("Skipping invalid entry '{}' ({:?})", entry_name, dir);
                return Ok(RenderedItem::empty(entry_name, category));
            }
        };

        let resolved = self.describe(entry)?;
        let fragment = self.render(&resolved)?;

        if aggregate {
            self.feed(&resolved, aggregates);
        }

        Ok(RenderedItem {
            entry_name: entry_name.to_string(),
            category: category.to_string(),
            fragment,
            has_icon_pack: resolved.has_icon_pack,
            last_changed: resolved.revision.last_changed,
        })
    }

    fn feed(&self, resolved: &ResolvedEntry, aggregates: &mut Aggregates) {
        let entry = &resolved.entry;

        if let Some(timestamp) = resolved.revision.last_changed {
            let class = RecencyClass::from_revision_count(resolved.revision.revision_count);
            aggregates.recents.record(class, timestamp, &entry.id);
        }

        for variant in entry.variants.iter().filter(|v| v.has_icons) {
            let pack_name = variant.dir_name();
            if self.icon_blacklist.contains(&pack_name) {
                debug!("Icon pack '{}' is blacklisted", pack_name);
                continue;
            }
            aggregates.icon_packs.push(IconPackEntry {
                pack_name,
                pack_path: variant.icons_path(),
                owner_entry_name: entry.id.clone(),
                release_url: resolved.release_url.clone(),
                owner_variant_path: variant.path.clone(),
            });
        }
    }
}
