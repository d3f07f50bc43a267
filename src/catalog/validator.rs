//! Decides whether a catalog directory is a renderable entry

use crate::io::fs::{has_all_files, list_subdirectories};
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of validating an entry directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    /// Absent, or neither self-contained nor holding a qualifying subdirectory
    Invalid,
    /// The directory itself holds every required asset
    Single,
    /// Own assets absent; these subdirectories qualify independently
    Container(Vec<PathBuf>),
}

impl EntryStatus {
    pub fn is_valid(&self) -> bool {
        !matches!(self, EntryStatus::Invalid)
    }

    pub fn is_container(&self) -> bool {
        matches!(self, EntryStatus::Container(_))
    }
}

/// Validates entry directories against the required-asset policy
#[derive(Debug, Clone)]
pub struct EntryValidator {
    required_assets: Vec<String>,
}

impl EntryValidator {
    pub fn new(required_assets: Vec<String>) -> Self {
        Self { required_assets }
    }

    /// A directory qualifies when it holds every required asset itself
    pub fn qualifies(&self, dir: &Path) -> bool {
        dir.is_dir() && has_all_files(dir, &self.required_assets)
    }

    pub fn validate(&self, dir: &Path) -> Result<EntryStatus> {
        if !dir.is_dir() {
            debug!("Entry directory missing: {:?}", dir);
            return Ok(EntryStatus::Invalid);
        }

        if self.qualifies(dir) {
            return Ok(EntryStatus::Single);
        }

        let variants: Vec<PathBuf> = list_subdirectories(dir)?
            .into_iter()
            .filter(|sub| self.qualifies(sub))
            .collect();

        if variants.is_empty() {
            debug!("No qualifying variants in {:?}", dir);
            Ok(EntryStatus::Invalid)
        } else {
            Ok(EntryStatus::Container(variants))
        }
    }
}
