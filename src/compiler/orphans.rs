//! Stale output detection.
//!
//! The output directory itself records the previous build: every `.html`
//! file in it (except the index) was generated from some document. Files
//! present before the build minus files written during it are orphans.

use super::error::BuildError;
use super::pages::HTML_EXTENSION;
use crate::log;
use rustc_hash::FxHashSet;
use std::{fs, path::Path};
use walkdir::WalkDir;

/// Names of generated pages currently in `dir`, excluding `index`.
///
/// Only top-level `.html` files count; a missing directory yields an empty set.
pub fn existing_outputs(dir: &Path, index: &str) -> Result<FxHashSet<String>, BuildError> {
    if !dir.exists() {
        return Ok(FxHashSet::default());
    }

    let mut outputs = FxHashSet::default();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| BuildError::OutputRead {
            path: dir.to_path_buf(),
            source: err.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        let is_html = Path::new(name)
            .extension()
            .is_some_and(|ext| ext == HTML_EXTENSION);
        if is_html && name != index {
            outputs.insert(name.to_owned());
        }
    }
    Ok(outputs)
}

/// Outputs from the previous build that were not written by this one, sorted.
pub fn find_orphans(previous: &FxHashSet<String>, written: &FxHashSet<String>) -> Vec<String> {
    let mut orphans: Vec<String> = previous.difference(written).cloned().collect();
    orphans.sort_unstable();
    orphans
}

/// Delete each orphan from `dir`.
pub fn remove_orphans(dir: &Path, orphans: &[String]) -> Result<(), BuildError> {
    for name in orphans {
        let path = dir.join(name);
        fs::remove_file(&path).map_err(|source| BuildError::OutputRemove { path, source })?;
        log!("orphan"; "removed {name}");
    }
    Ok(())
}
