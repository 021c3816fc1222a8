//! Page model and page layout.
//!
//! # Flow
//!
//! ```text
//! md/hello.md ──► parse_metadata() ──► render_markdown() ──► Page
//!                                                              │
//!                                          render_page() ◄─────┘
//!                                                │
//!                                                ▼
//!                                         build/hello.html
//! ```

use super::error::MetadataError;
use super::index::PageSummary;
use super::markdown::render_markdown;
use super::meta::parse_metadata;
use crate::config::SiteConfig;
use chrono::NaiveDate;
use quick_xml::escape::escape;
use std::path::Path;

/// Extension of every generated page.
pub const HTML_EXTENSION: &str = "html";

/// A rendered document, held in memory until it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Output file name, e.g. `hello.html`
    pub filename: String,
    pub title: String,
    /// Date exactly as written in the front matter
    pub date: String,
    pub parsed_date: NaiveDate,
    pub author: Option<String>,
    /// Body converted to HTML
    pub content: String,
}

impl Page {
    /// Build a page from a document's text.
    ///
    /// Fails when the front matter is malformed or lacks a valid `date`.
    pub fn from_document(filename: String, text: &str) -> Result<Self, MetadataError> {
        let (meta, body) = parse_metadata(text)?;
        let (date, parsed_date) = meta.date()?;

        Ok(Self {
            filename,
            title: meta.title().to_owned(),
            date: date.to_owned(),
            parsed_date,
            author: meta.author().map(str::to_owned),
            content: render_markdown(body),
        })
    }

    /// Index entry for this page.
    pub fn summary(&self) -> PageSummary {
        PageSummary {
            title: self.title.clone(),
            date: self.date.clone(),
            filename: self.filename.clone(),
            parsed_date: self.parsed_date,
        }
    }
}

/// Output file name for a source document: the stem with an `.html` extension.
///
/// Returns `None` for paths without a UTF-8 file stem.
pub fn output_filename(source: &Path) -> Option<String> {
    let stem = source.file_stem()?.to_str()?;
    Some(format!("{stem}.{HTML_EXTENSION}"))
}

/// Fill the page layout.
///
/// Title and date are escaped; the body is embedded as-is.
pub fn render_page(page: &Page, config: &SiteConfig) -> String {
    let title = escape(page.title.as_str());
    let date = escape(page.date.as_str());
    let index = escape(config.build.index.as_str());

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <link rel="stylesheet" href="{stylesheet}">
    <title>{title}</title>
</head>
<body>
    <header>
        <a href="{index}">Back to index</a>
        <h1>{title}</h1>
        <p><strong>Date:</strong> {date}</p>
    </header>
    <article>
{content}    </article>
    <footer>
        <a href="{index}"><em>finis</em></a>
    </footer>
</body>
</html>
"#,
        lang = escape(config.base.language.as_str()),
        stylesheet = escape(config.build.stylesheet.as_str()),
        content = page.content,
    )
}
