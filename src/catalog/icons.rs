//! Icon packs discovered inside theme variants

use crate::io::fs::files_with_extension;
use crate::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// An icon pack shipped inside one theme variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPackEntry {
    /// Directory name of the owning variant
    pub pack_name: String,
    /// The variant's icon directory
    pub pack_path: PathBuf,
    pub owner_entry_name: String,
    /// Release archive of the owning entry
    pub release_url: String,
    pub owner_variant_path: PathBuf,
}

/// Run-scoped collection of icon packs in discovery order
#[derive(Debug, Clone, Default)]
pub struct IconPackCollector {
    entries: Vec<IconPackEntry>,
}

impl IconPackCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: IconPackEntry) {
        self.entries.push(entry);
    }

    /// Append another collector's packs after this one's
    pub fn merge(&mut self, other: IconPackCollector) {
        self.entries.extend(other.entries);
    }

    /// Packs ordered by name (case-insensitive), then by owner
    pub fn sorted(&self) -> Vec<IconPackEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| {
            a.pack_name
                .to_lowercase()
                .cmp(&b.pack_name.to_lowercase())
                .then_with(|| a.owner_entry_name.cmp(&b.owner_entry_name))
        });
        entries
    }
}

/// How many of the reference icons a pack provides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completeness {
    pub present: usize,
    pub total: usize,
}

impl Completeness {
    /// An empty reference completes nothing
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.present == self.total
    }
}

/// The icon set every pack is measured against
#[derive(Debug, Clone, Default)]
pub struct ReferenceIcons {
    icons: Vec<PathBuf>,
}

impl ReferenceIcons {
    /// Collect every `.png` below the reference pack directory
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            icons: files_with_extension(dir, "png")?,
        })
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn measure(&self, pack_path: &Path) -> Result<Completeness> {
        let provided: HashSet<PathBuf> = files_with_extension(pack_path, "png")?
            .into_iter()
            .collect();
        let present = self
            .icons
            .iter()
            .filter(|icon| provided.contains(*icon))
            .count();

        Ok(Completeness {
            present,
            total: self.icons.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn pack(name: &str, owner: &str) -> IconPackEntry {
        IconPackEntry {
            pack_name: name.to_string(),
            pack_path: PathBuf::from(format!("themes/{}/{}/icons", owner, name)),
            owner_entry_name: owner.to_string(),
            release_url: format!("release/{}.zip", owner),
            owner_variant_path: PathBuf::from(format!("themes/{}/{}", owner, name)),
        }
    }

    #[test]
    fn test_sorted_is_case_insensitive() {
        let mut collector = IconPackCollector::new();
        collector.push(pack("zeta", "Z"));
        collector.push(pack("Alpha", "B"));
        collector.push(pack("alpha", "A"));
        let sorted: Vec<_> = collector
            .sorted()
            .into_iter()
            .map(|e| e.owner_entry_name)
            .collect();
        assert_eq!(sorted, vec!["A", "B", "Z"]);
    }

    #[test]
    fn test_merge_appends() {
        let mut left = IconPackCollector::new();
        left.push(pack("one", "A"));
        let mut right = IconPackCollector::new();
        right.push(pack("two", "B"));
        left.merge(right);
        let names: Vec<_> = left.sorted().into_iter().map(|e| e.pack_name).collect();
        assert_eq!(names, vec!["one", "two"]);
    }

    #[test]
    fn test_completeness_against_reference() {
        let temp_dir = TempDir::new().unwrap();
        let reference = temp_dir.path().join("reference");
        let pack_dir = temp_dir.path().join("pack");
        for dir in [&reference, &pack_dir] {
            std::fs::create_dir_all(dir.join("console")).unwrap();
        }
        for icon in ["app.png", "console/gba.png", "console/snes.png"] {
            std::fs::write(reference.join(icon), "").unwrap();
        }
        for icon in ["app.png", "console/gba.png", "extra.png"] {
            std::fs::write(pack_dir.join(icon), "").unwrap();
        }

        let reference = ReferenceIcons::load(&reference).unwrap();
        assert_eq!(reference.len(), 3);
        assert!(!reference.is_empty());

        let completeness = reference.measure(&pack_dir).unwrap();
        assert_eq!(completeness, Completeness { present: 2, total: 3 });
        assert!(!completeness.is_complete());
    }

    #[test]
    fn test_empty_reference_is_never_complete() {
        let temp_dir = TempDir::new().unwrap();
        let reference = ReferenceIcons::load(temp_dir.path()).unwrap();
        assert!(reference.is_empty());

        let completeness = reference.measure(temp_dir.path()).unwrap();
        assert_eq!(completeness, Completeness { present: 0, total: 0 });
        assert!(!completeness.is_complete());
    }
}
