//! A generation run: category pages, icon packs and the index document
//!
//! All documents are computed in memory first; nothing is written until the
//! whole run has succeeded.

use super::layout::{cell_width, grid_rows, page_summary, render_header};
use crate::catalog::entry::PREVIEW_ASSET;
use crate::catalog::resolver::{build_title, escape_html};
use crate::catalog::{
    split_entry_name, Aggregates, EntryValidator, IconPackCollector, IconPackEntry,
    MetadataResolver, RecencyRecord, ReferenceIcons,
};
use crate::config::{CatalogConfig, CategoryConfig, CategoryKind, ConfigLoader};
use crate::history::RevisionHistory;
use crate::io::fs::released_entries;
use crate::io::{Document, DocumentWriter, PathUtils};
use crate::render::{render_navigation, Paginator, TemplateRenderer, Vars, INDEX_PAGE};
use crate::{CatalogError, Result};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Item and page counts of one rendered category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: String,
    pub title: String,
    pub items: usize,
    pub pages: usize,
}

/// What a run produced
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub categories: Vec<CategorySummary>,
    /// Released entries that failed validation
    pub skipped: BTreeSet<String>,
    pub icon_packs: usize,
    /// Packs providing every reference icon, when a reference is configured
    pub complete_icon_packs: Option<usize>,
    /// Document paths relative to the output directory
    pub documents: Vec<PathBuf>,
}

/// Every document of a run, ready to be written
#[derive(Debug, Clone)]
pub struct Generation {
    pub documents: Vec<Document>,
    pub report: GenerationReport,
}

/// Orchestrates validation, resolution, pagination and document assembly
pub struct Assembler<'a> {
    config: &'a CatalogConfig,
    history: &'a dyn RevisionHistory,
    templates: TemplateRenderer,
    validator: EntryValidator,
    paginator: Paginator,
}

impl<'a> Assembler<'a> {
    pub fn new(config: &'a CatalogConfig, history: &'a dyn RevisionHistory) -> Result<Self> {
        let templates = match &config.templates_dir {
            Some(dir) => TemplateRenderer::with_overrides(&config.root.join(dir))?,
            None => TemplateRenderer::new()?,
        };

        Ok(Self {
            config,
            history,
            templates,
            validator: EntryValidator::new(config.required_assets.clone()),
            paginator: Paginator::new(config.page_size),
        })
    }

    /// Compute and write every document
    ///
    /// Returns `None` when no entry has been released yet.
    pub fn run(&self, writer: &DocumentWriter) -> Result<Option<GenerationReport>> {
        match self.build()? {
            Some(generation) => {
                writer.write_all(&generation.documents)?;
                Ok(Some(generation.report))
            }
            None => Ok(None),
        }
    }

    /// Compute every document without touching the output directory
    pub fn build(&self) -> Result<Option<Generation>> {
        let release_dir = self.config.release_path();
        if !release_dir.is_dir() {
            return Err(CatalogError::Config(format!(
                "Release directory not found: {}",
                release_dir.display()
            )));
        }

        let released = released_entries(&release_dir)?;
        if released.is_empty() {
            info!("No themes released, nothing to generate");
            return Ok(None);
        }

        let lists = self.load_lists(&released)?;
        let featured: HashSet<String> = self
            .config
            .categories
            .iter()
            .filter(|c| c.featured)
            .filter_map(|c| lists.get(&c.id))
            .flatten()
            .cloned()
            .collect();

        let resolver = MetadataResolver {
            root: &self.config.root,
            links: &self.config.links,
            icon_blacklist: &self.config.icons.blacklist,
            featured: &featured,
            history: self.history,
            templates: &self.templates,
            cell_width: cell_width(self.config.columns),
        };

        let mut aggregates = Aggregates::new(self.config.max_recents);
        let mut report = GenerationReport::default();
        let mut aggregated = HashSet::new();
        let mut fragments: HashMap<String, String> = HashMap::new();
        let mut cells_by_category: HashMap<String, Vec<String>> = HashMap::new();

        let themes_dir = self.config.themes_path();
        for category in &self.config.categories {
            let Some(names) = lists.get(&category.id) else {
                continue;
            };
            info!("Resolving {} entries for '{}'", names.len(), category.id);

            let mut cells = Vec::with_capacity(names.len());
            for name in names {
                let dir = themes_dir.join(name);
                let status = self.validator.validate(&dir)?;
                let aggregate = status.is_valid() && aggregated.insert(name.clone());

                let item = resolver.resolve(
                    name,
                    &dir,
                    &status,
                    &category.id,
                    &mut aggregates,
                    aggregate,
                )?;
                if item.is_empty() {
                    report.skipped.insert(name.clone());
                    continue;
                }
                if aggregate {
                    fragments.insert(name.clone(), item.fragment.clone());
                }
                cells.push(item.fragment);
            }
            cells_by_category.insert(category.id.clone(), cells);
        }

        let icon_cells = self.render_icon_packs(&aggregates.icon_packs, &mut report)?;

        let mut documents = Vec::new();
        for category in &self.config.categories {
            let cells = match category.kind {
                CategoryKind::Themes => cells_by_category.remove(&category.id).unwrap_or_default(),
                CategoryKind::IconPacks => icon_cells.clone(),
            };
            let pages = self.render_category(category, &cells)?;
            report.categories.push(CategorySummary {
                id: category.id.clone(),
                title: category.title.clone(),
                items: cells.len(),
                pages: pages.len(),
            });
            documents.extend(pages);
        }

        documents.push(self.render_index(&report, &aggregates, &fragments)?);
        report.documents = documents.iter().map(|d| d.path.clone()).collect();

        Ok(Some(Generation { documents, report }))
    }

    /// Ordering lists of every theme category, keeping released entries only
    fn load_lists(&self, released: &HashSet<String>) -> Result<HashMap<String, Vec<String>>> {
        let lists_dir = self.config.lists_path();
        let mut lists = HashMap::new();

        for category in &self.config.categories {
            let (CategoryKind::Themes, Some(list)) = (category.kind, &category.list) else {
                continue;
            };

            let names: Vec<String> = ConfigLoader::load_ordering_list(&lists_dir.join(list))?
                .into_iter()
                .filter(|name| {
                    if !PathUtils::is_safe_path(Path::new(name)) {
                        warn!("Ignoring unsafe entry name '{}' in {:?}", name, list);
                        return false;
                    }
                    if !released.contains(name) {
                        debug!("'{}' is not released yet", name);
                        return false;
                    }
                    true
                })
                .collect();

            lists.insert(category.id.clone(), names);
        }

        Ok(lists)
    }

    fn render_grid(&self, cells: &[String]) -> Result<String> {
        let mut vars = Vars::new();
        vars.insert("rows", grid_rows(cells, self.config.columns));
        self.templates.render("grid", &vars)
    }

    /// All pages of one category, page 0 first
    fn render_category(
        &self,
        category: &CategoryConfig,
        cells: &[String],
    ) -> Result<Vec<Document>> {
        let header = render_header(&self.config.categories, Some(category.id.as_str()));
        let pages = self.paginator.paginate(cells);
        let mut documents = Vec::with_capacity(pages.len());

        for page in pages {
            let mut items = page.items.clone();
            if category.reverse {
                items.reverse();
            }

            let paginated = page.num_pages > 1;
            let summary = if paginated {
                format!("{}\n\n", page_summary(page.number(), page.num_pages, cells.len()))
            } else {
                String::new()
            };
            let navigation = if paginated {
                format!("\n{}\n", render_navigation(page.index, page.num_pages))
            } else {
                String::new()
            };

            let mut vars = Vars::new();
            vars.insert("header", header.clone());
            vars.insert("heading", category.title.clone());
            vars.insert("summary", summary);
            vars.insert("grid", self.render_grid(&items)?);
            vars.insert("navigation", navigation);

            let path = PathBuf::from(&category.id).join(page.file_name());
            debug!("Rendered {:?} with {} items", path, items.len());
            documents.push(Document::new(path, self.templates.render("page", &vars)?));
        }

        Ok(documents)
    }

    fn reference_icons(&self) -> Result<Option<ReferenceIcons>> {
        let Some(reference) = &self.config.icons.reference else {
            return Ok(None);
        };
        let dir = self.config.root.join(reference);
        if !dir.is_dir() {
            warn!("Reference icon pack not found: {:?}", dir);
            return Ok(None);
        }
        let icons = ReferenceIcons::load(&dir)?;
        if icons.is_empty() {
            warn!("Reference icon pack {:?} holds no icons, skipping completeness", dir);
            return Ok(None);
        }
        debug!("Measuring icon packs against {} reference icons", icons.len());
        Ok(Some(icons))
    }

    /// Grid cells of every collected icon pack, sorted by pack name
    fn render_icon_packs(
        &self,
        collector: &IconPackCollector,
        report: &mut GenerationReport,
    ) -> Result<Vec<String>> {
        let reference = self.reference_icons()?;
        let packs = collector.sorted();
        let mut complete = 0;
        let mut cells = Vec::with_capacity(packs.len());

        for pack in &packs {
            let completeness = match &reference {
                Some(reference) => Some(reference.measure(&pack.pack_path)?),
                None => None,
            };
            if completeness.map(|c| c.is_complete()).unwrap_or(false) {
                complete += 1;
            }

            let completeness = completeness
                .map(|c| format!(" · {}/{} icons", c.present, c.total))
                .unwrap_or_default();
            cells.push(self.render_icon_pack(pack, completeness)?);
        }

        info!("Collected {} icon packs", packs.len());
        report.icon_packs = packs.len();
        report.complete_icon_packs = reference.map(|_| complete);
        Ok(cells)
    }

    fn render_icon_pack(&self, pack: &IconPackEntry, completeness: String) -> Result<String> {
        let pack_preview = pack.pack_path.join(PREVIEW_ASSET);
        let preview = if pack_preview.is_file() {
            pack_preview
        } else {
            pack.owner_variant_path.join(PREVIEW_ASSET)
        };
        let preview_url = PathUtils::link(
            &self.config.links.assets,
            &PathUtils::relative_link(&self.config.root, &preview),
        );

        let (owner, _) = split_entry_name(&pack.owner_entry_name);
        let description = format!("Icon pack from {}", owner);

        let mut vars = Vars::new();
        vars.insert("width", cell_width(self.config.columns));
        vars.insert("name", escape_html(&pack.pack_name));
        vars.insert("title", build_title(&pack.pack_name, "", "", &description, false));
        vars.insert("preview_url", preview_url);
        vars.insert("release_url", pack.release_url.clone());
        vars.insert("owner", escape_html(&owner));
        vars.insert("completeness", completeness);

        self.templates.render("icon_item", &vars)
    }

    fn recency_grid(
        &self,
        records: &[RecencyRecord],
        fragments: &HashMap<String, String>,
    ) -> Result<String> {
        let cells: Vec<String> = records
            .iter()
            .filter_map(|record| fragments.get(&record.entry_name).cloned())
            .collect();
        self.render_grid(&cells)
    }

    fn render_index(
        &self,
        report: &GenerationReport,
        aggregates: &Aggregates,
        fragments: &HashMap<String, String>,
    ) -> Result<Document> {
        let mut counts: Vec<String> = report
            .categories
            .iter()
            .map(|c| format!("- [{}]({}/{}): {} items", c.title, c.id, INDEX_PAGE, c.items))
            .collect();
        if let Some(complete) = report.complete_icon_packs {
            counts.push(format!(
                "- {} of {} icon packs are complete",
                complete, report.icon_packs
            ));
        }

        let mut vars = Vars::new();
        vars.insert("header", render_header(&self.config.categories, None));
        vars.insert("title", self.config.title.clone());
        vars.insert("counts", counts.join("\n"));
        vars.insert(
            "recently_added",
            self.recency_grid(&aggregates.recents.added(), fragments)?,
        );
        vars.insert(
            "recently_updated",
            self.recency_grid(&aggregates.recents.updated(), fragments)?,
        );

        Ok(Document::new(INDEX_PAGE, self.templates.render("index", &vars)?))
    }
}
