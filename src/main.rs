//! mdblog - Builds a static blog from a directory of Markdown files.

mod build;
mod cli;
mod compiler;
mod config;
mod utils;

use anyhow::{Context, Result};
use build::build_site;
use clap::Parser;
use cli::Cli;
use config::SiteConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config: &'static SiteConfig = Box::leak(Box::new(load_config(&cli)?));

    let report = build_site(config).context("Build failed")?;
    log!(
        "build";
        "done: {} pages written, {} orphans removed",
        report.pages.len(),
        report.orphans.len()
    );
    Ok(())
}

/// Load and validate configuration from CLI arguments.
///
/// A missing config file is not an error; defaults apply.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    let mut config = if config_path.exists() {
        SiteConfig::from_path(&config_path)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
