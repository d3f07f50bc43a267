//! Revision history of catalog directories

use crate::io::PathUtils;
use crate::{CatalogError, Result};
use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Last change and number of revisions touching a directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevisionInfo {
    pub last_changed: Option<DateTime<Utc>>,
    pub revision_count: usize,
}

/// Source of revision history for catalog paths
pub trait RevisionHistory {
    fn query(&self, path: &Path) -> Result<RevisionInfo>;
}

/// Revision history read from the git repository holding the catalog
pub struct GitHistory {
    repo_root: PathBuf,
}

impl GitHistory {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    /// Parse `git log --format=%ct` output, newest commit first
    pub fn parse_log(output: &str) -> Result<RevisionInfo> {
        let stamps: Vec<&str> = output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let last_changed = match stamps.first() {
            Some(first) => {
                let secs: i64 = first.parse().map_err(|e| {
                    CatalogError::History(format!("Invalid commit timestamp '{}': {}", first, e))
                })?;
                DateTime::from_timestamp(secs, 0)
            }
            None => None,
        };

        Ok(RevisionInfo {
            last_changed,
            revision_count: stamps.len(),
        })
    }
}

impl RevisionHistory for GitHistory {
    fn query(&self, path: &Path) -> Result<RevisionInfo> {
        let relative = PathUtils::relative_link(&self.repo_root, path);

        let mut git = Command::new("git");
        git.arg("-C")
            .arg(&self.repo_root)
            .args(["log", "--format=%ct", "--"])
            .arg(&relative);
        debug!("git command: {:?}", git);

        let output = match git.output() {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to run git for {}: {}", relative, e);
                return Ok(RevisionInfo::default());
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("git log failed for {}: {}", relative, stderr.trim());
            return Ok(RevisionInfo::default());
        }

        Self::parse_log(&String::from_utf8_lossy(&output.stdout))
    }
}
