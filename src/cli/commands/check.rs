use super::{load_config, CommandHandler};
use crate::catalog::{EntryStatus, EntryValidator};
use crate::config::{CatalogConfig, CategoryKind, ConfigLoader};
use crate::io::fs::released_entries;
use crate::io::PathUtils;
use crate::{CatalogError, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Findings of a catalog check
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub checked: usize,
    /// Listed but without a release archive
    pub unreleased: BTreeSet<String>,
    /// Released but failing validation
    pub invalid: BTreeSet<String>,
    /// Self-contained entries whose configuration record cannot be read
    pub broken: BTreeSet<String>,
    /// Names that would escape the themes directory
    pub unsafe_names: BTreeSet<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.invalid.is_empty() && self.broken.is_empty() && self.unsafe_names.is_empty()
    }
}

/// Handler for the `check` command
pub struct CheckCommand {
    pub config: PathBuf,
}

impl CommandHandler for CheckCommand {
    fn execute(&self) -> Result<()> {
        let config = load_config(&self.config)?;
        let report = check_catalog(&config)?;

        println!("Checked {} listed entries", report.checked);
        for (label, names) in [
            ("Not released", &report.unreleased),
            ("Invalid", &report.invalid),
            ("Unreadable config.json", &report.broken),
            ("Unsafe name", &report.unsafe_names),
        ] {
            for name in names {
                println!("{}: {}", label, name);
            }
        }

        if report.is_ok() {
            println!("Catalog is valid");
            Ok(())
        } else {
            Err(CatalogError::Entry(format!(
                "{} entries failed validation",
                report.invalid.len() + report.broken.len() + report.unsafe_names.len()
            )))
        }
    }

    fn name(&self) -> &'static str {
        "check"
    }
}

impl CheckCommand {
    pub fn new(config: PathBuf) -> Self {
        Self { config }
    }
}

/// Validate every entry named by every ordering list
pub fn check_catalog(config: &CatalogConfig) -> Result<CheckReport> {
    let release_dir = config.release_path();
    if !release_dir.is_dir() {
        return Err(CatalogError::Config(format!(
            "Release directory not found: {}",
            release_dir.display()
        )));
    }

    let released = released_entries(&release_dir)?;
    let validator = EntryValidator::new(config.required_assets.clone());
    let themes_dir = config.themes_path();
    let mut report = CheckReport::default();
    let mut seen = BTreeSet::new();

    for category in &config.categories {
        let (CategoryKind::Themes, Some(list)) = (category.kind, &category.list) else {
            continue;
        };

        for name in ConfigLoader::load_ordering_list(&config.lists_path().join(list))? {
            if !seen.insert(name.clone()) {
                continue;
            }
            report.checked += 1;

            if !PathUtils::is_safe_path(Path::new(&name)) {
                report.unsafe_names.insert(name);
                continue;
            }
            if !released.contains(&name) {
                report.unreleased.insert(name);
                continue;
            }

            let dir = themes_dir.join(&name);
            match validator.validate(&dir)? {
                EntryStatus::Invalid => {
                    warn!("Invalid entry '{}'", name);
                    report.invalid.insert(name);
                }
                EntryStatus::Single => {
                    if let Err(e) = ConfigLoader::load_entry_config(&dir) {
                        warn!("{}", e);
                        report.broken.insert(name);
                    }
                }
                EntryStatus::Container(variants) => {
                    debug!("'{}' has {} variants", name, variants.len());
                }
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn catalog(root: &Path) -> CatalogConfig {
        for dir in ["themes", "release", "lists"] {
            std::fs::create_dir_all(root.join(dir)).unwrap();
        }
        for list in ["featured.txt", "custom.txt", "remixed.txt"] {
            std::fs::write(root.join("lists").join(list), "").unwrap();
        }
        CatalogConfig {
            root: root.to_path_buf(),
            ..CatalogConfig::default()
        }
    }

    fn add_theme(root: &Path, name: &str, config_json: &str) {
        let dir = root.join("themes").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.json"), config_json).unwrap();
        std::fs::write(root.join("release").join(format!("{}.zip", name)), "").unwrap();
    }

    #[test]
    fn test_check_classifies_entries() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let config = catalog(root);

        add_theme(root, "Good by A", "{}");
        add_theme(root, "Broken by B", "{ nope");
        std::fs::write(root.join("release/Missing by C.zip"), "").unwrap();
        std::fs::write(
            root.join("lists/custom.txt"),
            "Good by A\nBroken by B\nMissing by C\nDraft by D\n../escape\n",
        )
        .unwrap();
        std::fs::write(root.join("lists/featured.txt"), "Good by A\n").unwrap();

        let report = check_catalog(&config).unwrap();
        assert_eq!(report.checked, 5);
        assert!(report.unreleased.contains("Draft by D"));
        assert!(report.invalid.contains("Missing by C"));
        assert!(report.broken.contains("Broken by B"));
        assert!(report.unsafe_names.contains("../escape"));
        assert!(!report.is_ok());
    }

    #[test]
    fn test_check_passes_clean_catalog() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let config = catalog(root);
        add_theme(root, "Good by A", "{}");
        std::fs::write(root.join("lists/custom.txt"), "Good by A\n").unwrap();

        let report = check_catalog(&config).unwrap();
        assert_eq!(report.checked, 1);
        assert!(report.is_ok());
    }
}
