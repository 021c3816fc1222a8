//! Front-matter extraction.
//!
//! A document may open with a block of `key: value` lines fenced by `---`:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-03-01
//! author: Ada
//! ---
//! # Body starts here
//! ```
//!
//! Keys are case-folded to lowercase, values are kept verbatim. A document
//! whose first line is not exactly `---` has no metadata and its whole text
//! is the body.

use super::error::MetadataError;
use chrono::NaiveDate;
use std::collections::BTreeMap;

// ============================================================================
// Constants
// ============================================================================

/// Line that opens and closes the metadata block.
pub const FENCE: &str = "---";

/// Separator between key and value inside the block.
const SEPARATOR: &str = ": ";

/// Title used when a document has no `title` key.
pub const UNTITLED: &str = "Untitled";

/// Format of the required `date` key.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Metadata
// ============================================================================

/// Key/value pairs from a document's front-matter block.
///
/// Unknown keys are retained; only `title`, `date` and `author` have accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    fields: BTreeMap<String, String>,
}

impl Metadata {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Page title, `Untitled` when absent.
    pub fn title(&self) -> &str {
        self.get("title").unwrap_or(UNTITLED)
    }

    pub fn author(&self) -> Option<&str> {
        self.get("author")
    }

    /// The required `date` key, both as written and parsed.
    pub fn date(&self) -> Result<(&str, NaiveDate), MetadataError> {
        let raw = self.get("date").ok_or(MetadataError::MissingKey("date"))?;
        let parsed = NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| MetadataError::InvalidDate(raw.to_owned()))?;
        Ok((raw, parsed))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Split a document into its metadata and body.
///
/// The body is the text following the closing fence line, borrowed from
/// `text`. Without a leading fence the body is `text` itself.
pub fn parse_metadata(text: &str) -> Result<(Metadata, &str), MetadataError> {
    let mut lines = text.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return Ok((Metadata::default(), text));
    };
    if trim_eol(first) != FENCE {
        return Ok((Metadata::default(), text));
    }

    let mut offset = first.len();
    let mut fields = BTreeMap::new();

    // Line numbers are 1-based and the fence is line 1
    for (line_no, raw) in (2..).zip(lines) {
        offset += raw.len();
        let line = trim_eol(raw);

        if line == FENCE {
            return Ok((Metadata { fields }, &text[offset..]));
        }

        let (key, value) =
            line.split_once(SEPARATOR)
                .ok_or_else(|| MetadataError::MissingSeparator {
                    line: line_no,
                    text: line.to_owned(),
                })?;
        fields.insert(key.to_lowercase(), value.to_owned());
    }

    Err(MetadataError::UnclosedFence)
}

/// Strip a trailing `\n` or `\r\n`.
#[inline]
fn trim_eol(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

// ============================================================================
// Tests
// ============================================================================
