//! Document compilation and output reconciliation.
//!
//! - **meta**: Split front matter from the Markdown body
//! - **markdown**: Convert the body to HTML
//! - **pages**: Page model and page layout
//! - **index**: Page summaries, date ordering, index layout
//! - **orphans**: Detect and delete outputs without a source
//!
//! # Build Flow
//!
//! ```text
//! collect_sources() ──► Page::from_document() ──► render_page() ──► write
//!                               │
//!                               ▼
//!                         PageSummary[] ──► sort_summaries() ──► render_index()
//!
//! existing_outputs() − written ──► find_orphans() ──► remove_orphans()
//! ```

pub mod error;
pub mod index;
pub mod markdown;
pub mod meta;
pub mod orphans;
pub mod pages;

use error::BuildError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// ============================================================================
// Public API
// ============================================================================

pub use index::{render_index, sort_summaries};
pub use orphans::{existing_outputs, find_orphans, remove_orphans};
pub use pages::{Page, output_filename, render_page};

// ============================================================================
// Shared utilities
// ============================================================================

/// Files to ignore during directory traversal
const IGNORED_FILES: &[&str] = &[".DS_Store"];

/// Collect source documents with `extension` directly inside `dir`.
///
/// Symlinked documents count as documents. Sorted by file name so that
/// builds, and ties in the index, are deterministic.
pub fn collect_sources(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, BuildError> {
    let extension = extension.trim_start_matches('.');
    let mut sources = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    for entry in walker {
        let entry = entry.map_err(|err| BuildError::InputRead {
            path: dir.to_path_buf(),
            source: err.into(),
        })?;
        let name = entry.file_name().to_str().unwrap_or_default();
        if !entry.file_type().is_file() || IGNORED_FILES.contains(&name) {
            continue;
        }
        if entry.path().extension().is_some_and(|ext| ext == extension) {
            sources.push(entry.into_path());
        }
    }

    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_collect_sources_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        for name in ["b.md", "a.md", "c.txt", "README", "d.markdown", ".DS_Store"] {
            fs::write(root.join(name), "").unwrap();
        }
        fs::create_dir(root.join("drafts")).unwrap();
        fs::write(root.join("drafts").join("e.md"), "").unwrap();

        let sources = collect_sources(root, "md").unwrap();
        let names: Vec<_> = sources
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a.md", "b.md"]);
    }

    #[test]
    fn test_collect_sources_custom_extension() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.md"), "").unwrap();
        fs::write(dir.path().join("b.markdown"), "").unwrap();

        let sources = collect_sources(dir.path(), ".markdown").unwrap();
        assert_eq!(sources, [dir.path().join("b.markdown")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_sources_follows_symlinks() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let content = dir.path().join("md");
        let shared = dir.path().join("shared");
        fs::create_dir(&content).unwrap();
        fs::create_dir(&shared).unwrap();
        fs::write(shared.join("real.md"), "").unwrap();
        symlink(shared.join("real.md"), content.join("linked.md")).unwrap();
        symlink(&shared, content.join("linked-dir.md")).unwrap();

        let sources = collect_sources(&content, "md").unwrap();
        assert_eq!(sources, [content.join("linked.md")]);
    }

    #[test]
    fn test_collect_sources_missing_dir() {
        let dir = TempDir::new().unwrap();
        let err = collect_sources(&dir.path().join("md"), "md").unwrap_err();
        assert!(matches!(err, BuildError::InputRead { .. }));
    }
}
