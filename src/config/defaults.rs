//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// Common Defaults
// ============================================================================

pub fn r#false() -> bool {
    false
}

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    use crate::config::Link;

    pub fn title() -> String {
        "78 BPM".into()
    }

    pub fn language() -> String {
        "en".into()
    }

    pub fn links() -> Vec<Link> {
        vec![Link {
            text: "Wiki".into(),
            href: "https://wiki.78bpm.com".into(),
        }]
    }
}

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn content() -> PathBuf {
        "md".into()
    }

    pub fn output() -> PathBuf {
        "build".into()
    }

    pub fn extension() -> String {
        "md".into()
    }

    pub fn index() -> String {
        "index.html".into()
    }

    pub fn stylesheet() -> String {
        "../styles.css".into()
    }
}
