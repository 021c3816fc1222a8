//! Build error types.
//!
//! Every step of the pipeline returns one of these; the driver stops at the
//! first one.

use std::path::PathBuf;
use thiserror::Error;

/// Front-matter problems found while reading a single document.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataError {
    #[error("metadata block opened with `---` is never closed")]
    UnclosedFence,

    #[error("metadata line {line} has no `: ` separator: `{text}`")]
    MissingSeparator { line: usize, text: String },

    #[error("required metadata key `{0}` is missing")]
    MissingKey(&'static str),

    #[error("`date: {0}` is not a YYYY-MM-DD date")]
    InvalidDate(String),
}

/// Errors that abort a build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read `{}`", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed metadata in `{}`", path.display())]
    MetadataFormat {
        path: PathBuf,
        #[source]
        source: MetadataError,
    },

    #[error("failed to list output directory `{}`", path.display())]
    OutputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`{}` would be written to `{name}`, which is reserved for the index", path.display())]
    OutputConflict { path: PathBuf, name: String },

    #[error("failed to write `{}`", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove `{}`", path.display())]
    OutputRemove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_metadata_error_display() {
        let err = MetadataError::MissingSeparator {
            line: 3,
            text: "title - oops".into(),
        };
        assert_eq!(
            err.to_string(),
            "metadata line 3 has no `: ` separator: `title - oops`"
        );
        assert!(MetadataError::MissingKey("date").to_string().contains("`date`"));
    }

    #[test]
    fn test_build_error_keeps_source() {
        let err = BuildError::MetadataFormat {
            path: PathBuf::from("md/post.md"),
            source: MetadataError::UnclosedFence,
        };
        assert!(err.to_string().contains("md/post.md"));
        assert!(err.source().unwrap().to_string().contains("never closed"));

        let err = BuildError::OutputWrite {
            path: PathBuf::from("build/post.html"),
            source: Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("failed to write"));

        let err = BuildError::OutputRead {
            path: PathBuf::from("build"),
            source: Error::new(ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to list output directory `build`");

        let err = BuildError::OutputConflict {
            path: PathBuf::from("md/index.md"),
            name: "index.html".into(),
        };
        assert_eq!(
            err.to_string(),
            "`md/index.md` would be written to `index.html`, which is reserved for the index"
        );
    }
}
