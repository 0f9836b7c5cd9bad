//! The list of renderable top-level sections.
//!
//! Derived once at startup by scanning the views directory. The scan sits
//! behind an explicit constructor so the resolver stays testable without
//! disk access.

use std::io;
use std::path::Path;

use crate::render::engine::TEMPLATE_EXT;

/// Renderable top-level page names. The `index` view is normalized to the
/// empty string (root path); names starting with `_` or `.` are internal
/// and excluded.
#[derive(Debug, Clone)]
pub struct SectionList {
    names: Vec<String>,
}

impl SectionList {
    /// Scan a views directory for template files.
    pub fn from_dir(dir: &Path) -> io::Result<Self> {
        let mut raw = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                raw.push(stem.to_string());
            }
        }
        Ok(Self::from_names(raw))
    }

    /// Build from an explicit name list, applying the same normalization
    /// as the directory scan.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names
            .into_iter()
            .map(Into::into)
            .filter(|name| !name.starts_with('_') && !name.starts_with('.'))
            .map(|name| if name == "index" { String::new() } else { name })
            .collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.binary_search_by(|n| n.as_str().cmp(name)).is_ok()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
