//! Site building orchestration.
//!
//! One sequential pass over the content directory:
//!
//! ```text
//! build_site()
//!     │
//!     ├── collect_sources()     reject a page that would replace the index
//!     ├── prepare_output()      create dir, optional clean
//!     ├── existing_outputs()    pages left by the previous build
//!     │
//!     ├── for each source ──► compile ──► write page
//!     │
//!     ├── remove_orphans()      previous − written
//!     └── render_index()        newest first ──► index.html
//! ```
//!
//! Fails fast: the first error stops the build. Files already written or
//! removed at that point stay as they are.

use crate::{
    compiler::{
        Page, collect_sources,
        error::BuildError,
        existing_outputs, find_orphans, output_filename, remove_orphans, render_index,
        render_page, sort_summaries,
    },
    config::SiteConfig,
    log,
    utils::minify::minify_html,
};
use rustc_hash::FxHashSet;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// What a build did.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Pages written, in index order
    pub pages: Vec<String>,
    /// Stale pages deleted
    pub orphans: Vec<String>,
}

/// Build the site: write every page, delete orphans, write the index.
pub fn build_site(config: &SiteConfig) -> Result<BuildReport, BuildError> {
    let output = &config.build.output;
    let sources = collect_sources(&config.build.content, &config.build.extension)?;
    check_index_conflict(&sources, &config.build.index)?;

    prepare_output(output, config)?;
    let previous = existing_outputs(output, &config.build.index)?;
    if sources.is_empty() {
        log!(
            "warn";
            "no .{} files in {}",
            config.build.extension.trim_start_matches('.'),
            config.build.content.display()
        );
    }

    let mut written = FxHashSet::default();
    let mut summaries = Vec::with_capacity(sources.len());

    for source in &sources {
        let page = compile_page(source)?;
        write_output(&output.join(&page.filename), &render_page(&page, config), config)?;

        if config.build.verbose {
            match &page.author {
                Some(author) => log!("content"; "{} by {author}", page.filename),
                None => log!("content"; "{}", page.filename),
            }
        }

        summaries.push(page.summary());
        written.insert(page.filename);
    }

    let orphans = find_orphans(&previous, &written);
    remove_orphans(output, &orphans)?;

    sort_summaries(&mut summaries);
    write_output(&config.index_path(), &render_index(&summaries, config), config)?;
    log!("index"; "{} entries", summaries.len());

    Ok(BuildReport {
        pages: summaries.into_iter().map(|s| s.filename).collect(),
        orphans,
    })
}

/// Fail if a source would be written over the index page.
fn check_index_conflict(sources: &[PathBuf], index: &str) -> Result<(), BuildError> {
    match sources
        .iter()
        .find(|source| output_filename(source).is_some_and(|name| name == index))
    {
        Some(source) => Err(BuildError::OutputConflict {
            path: source.clone(),
            name: index.to_owned(),
        }),
        None => Ok(()),
    }
}

/// Read and render one source document.
fn compile_page(source: &Path) -> Result<Page, BuildError> {
    let text = fs::read_to_string(source).map_err(|source_err| BuildError::InputRead {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    let filename = output_filename(source).ok_or_else(|| BuildError::InputRead {
        path: source.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "file name is not UTF-8"),
    })?;

    Page::from_document(filename, &text).map_err(|err| BuildError::MetadataFormat {
        path: source.to_path_buf(),
        source: err,
    })
}

/// Ensure the output directory exists.
///
/// When `[build].clean` is set, every generated page and the index are
/// removed first; other files (stylesheets, images) are left alone.
fn prepare_output(output: &Path, config: &SiteConfig) -> Result<(), BuildError> {
    fs::create_dir_all(output).map_err(|source| BuildError::OutputWrite {
        path: output.to_path_buf(),
        source,
    })?;

    if config.build.clean {
        let mut generated: Vec<String> = existing_outputs(output, &config.build.index)?
            .into_iter()
            .collect();
        generated.sort_unstable();

        let index = config.index_path();
        if index.exists() {
            fs::remove_file(&index).map_err(|source| BuildError::OutputRemove {
                path: index.clone(),
                source,
            })?;
        }
        for name in &generated {
            let path = output.join(name);
            fs::remove_file(&path).map_err(|source| BuildError::OutputRemove { path, source })?;
        }
        log!("clean"; "removed {} pages", generated.len());
    }

    Ok(())
}

/// Write a page, minified if enabled.
fn write_output(path: &Path, html: &str, config: &SiteConfig) -> Result<(), BuildError> {
    fs::write(path, &*minify_html(html, config)).map_err(|source| BuildError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

// ============================================================================
// Tests
// ============================================================================
