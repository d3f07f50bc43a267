//! Writing generated documents

use super::fs::list_subdirectories;
use crate::{CatalogError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Banner placed at the top of every generated document
pub const BANNER: &str =
    "<!-- This file is auto-generated by theme-index. Do not edit it by hand. -->\n\n";

/// A fully rendered document, addressed relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    pub content: String,
}

impl Document {
    pub fn new(path: impl Into<PathBuf>, content: String) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    /// Content as written to disk
    pub fn contents_with_banner(&self) -> String {
        format!("{}{}", BANNER, self.content)
    }
}

/// Writes a complete document set under one output directory
pub struct DocumentWriter {
    output_dir: PathBuf,
}

impl DocumentWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Write every document, replacing earlier generated pages
    ///
    /// Generated pages (`index*.md` starting with the banner) are removed
    /// first from the output directory and each directory below it, so a
    /// shrinking page count or a dropped category leaves no orphans behind.
    pub fn write_all(&self, documents: &[Document]) -> Result<usize> {
        let targets: BTreeSet<PathBuf> = documents
            .iter()
            .map(|doc| {
                self.output_dir
                    .join(doc.path.parent().unwrap_or_else(|| Path::new("")))
            })
            .collect();

        let mut sweep = targets.clone();
        sweep.insert(self.output_dir.clone());
        sweep.extend(list_subdirectories(&self.output_dir)?);

        for dir in &sweep {
            self.remove_generated_pages(dir)?;
        }
        for dir in &targets {
            std::fs::create_dir_all(dir)?;
        }

        for doc in documents {
            let path = self.output_dir.join(&doc.path);
            debug!("Writing {:?}", path);
            std::fs::write(&path, doc.contents_with_banner())?;
        }

        info!(
            "Wrote {} documents to {:?}",
            documents.len(),
            self.output_dir
        );
        Ok(documents.len())
    }

    fn remove_generated_pages(&self, dir: &Path) -> Result<()> {
        if !dir.is_dir() {
            return Ok(());
        }

        let pattern = format!("{}/index*.md", glob::Pattern::escape(&dir.to_string_lossy()));
        let paths = glob::glob(&pattern)
            .map_err(|e| CatalogError::Config(format!("Invalid page pattern: {}", e)))?;

        for path in paths {
            let path = path.map_err(|e| CatalogError::Io(e.into_error()))?;
            if !std::fs::read(&path)?.starts_with(BANNER.as_bytes()) {
                debug!("Keeping hand-written page {:?}", path);
                continue;
            }
            debug!("Removing stale page {:?}", path);
            std::fs::remove_file(path)?;
        }
        Ok(())
    }
}
