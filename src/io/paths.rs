use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::path::{Component, Path};

/// Bytes left unescaped in generated links
const LINK_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'?')
    .remove(b'&')
    .remove(b'=')
    .remove(b'_')
    .remove(b'-')
    .remove(b'.')
    .remove(b'~');

/// Utilities for working with paths and links
pub struct PathUtils;

impl PathUtils {
    /// Percent-encode a path or query value for embedding in a hyperlink
    pub fn encode_link(value: &str) -> String {
        utf8_percent_encode(value, LINK_SAFE).to_string()
    }

    /// Check if path is safe (no traversal, no absolute components)
    pub fn is_safe_path(path: &Path) -> bool {
        path.components().all(|c| matches!(c, Component::Normal(_)))
    }

    /// Render `path` relative to `root` with forward slashes
    ///
    /// Paths outside `root` are rendered as given.
    pub fn relative_link(root: &Path, path: &Path) -> String {
        let relative = path.strip_prefix(root).unwrap_or(path);
        relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Build a hyperlink from a configured prefix and a repository-relative path
    pub fn link(prefix: &str, relative: &str) -> String {
        format!("{}{}", prefix, Self::encode_link(relative))
    }
}
