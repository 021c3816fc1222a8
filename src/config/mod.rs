//! Site configuration management for `mdblog.toml`.
//!
//! The file is optional; every field has a default matching the stock
//! layout (`md/` → `build/`).
//!
//! # Sections
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[base]`    | Index heading, language, static links          |
//! | `[build]`   | Paths, source extension, stylesheet, minify    |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "78 BPM"
//!
//! [[base.links]]
//! text = "Wiki"
//! href = "https://wiki.78bpm.com"
//!
//! [build]
//! content = "md"
//! output = "build"
//! ```
//!
//! The loaded config is leaked to `&'static` in `main` and never mutated
//! afterwards; every layout reads from it.

mod base;
mod build;
pub mod defaults;
mod error;

pub use base::Link;
pub use error::ConfigError;

use base::BaseConfig;
use build::BuildConfig;

use crate::cli::Cli;
use anyhow::{Result, bail};
use educe::Educe;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing mdblog.toml
#[derive(Debug, Clone, Educe, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Absolute path of the generated index page.
    pub fn index_path(&self) -> PathBuf {
        self.build.output.join(&self.build.index)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());

        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.update_path_with_root(&root, &cli.config);

        let args = cli.build_args();
        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        self.build.clean |= args.clean;
        self.build.verbose |= cli.verbose;
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve all paths relative to root and normalize to absolute paths
    fn update_path_with_root(&mut self, root: &Path, config_name: &Path) {
        let root = Self::normalize_path(&Self::expand_tilde(root));
        self.set_root(&root);

        self.config_path = Self::normalize_path(&root.join(config_name));
        self.build.content = Self::normalize_path(&root.join(Self::expand_tilde(&self.build.content)));
        self.build.output = Self::normalize_path(&root.join(Self::expand_tilde(&self.build.output)));
    }

    /// Expand a leading `~` to the home directory.
    fn expand_tilde(path: &Path) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before building
    pub fn validate(&self) -> Result<()> {
        let build = &self.build;

        if !build.content.is_dir() {
            bail!(ConfigError::Validation(format!(
                "[build.content] `{}` is not a directory",
                build.content.display()
            )));
        }

        if build.content == build.output {
            bail!(ConfigError::Validation(
                "[build.content] and [build.output] must differ".into()
            ));
        }

        let extension = build.extension.trim_start_matches('.');
        if extension.is_empty() || extension.eq_ignore_ascii_case("html") {
            bail!(ConfigError::Validation(
                "[build.extension] must be non-empty and not `html`".into()
            ));
        }

        if !build.index.ends_with(".html") || build.index.contains(['/', '\\']) {
            bail!(ConfigError::Validation(
                "[build.index] must be a plain file name ending with .html".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
