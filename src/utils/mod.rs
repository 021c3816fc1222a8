//! Utility modules for the blog builder.

pub mod log;
pub mod minify;
