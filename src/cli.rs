//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Markdown blog builder CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Output directory path (relative to project root)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Config file name (default: mdblog.toml)
    #[arg(short = 'C', long, default_value = "mdblog.toml")]
    pub config: PathBuf,

    /// Log every page as it is written
    #[arg(short, long)]
    pub verbose: bool,

    /// subcommands (defaults to `build`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Build arguments
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Remove every generated page and the index before building
    #[arg(long)]
    pub clean: bool,

    /// Minify the html content
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Render every document, rebuild the index and delete orphaned pages
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },
}

impl Cli {
    /// Build arguments of the selected command; a bare invocation builds with defaults.
    pub fn build_args(&self) -> BuildArgs {
        match &self.command {
            Some(Commands::Build { build_args }) => build_args.clone(),
            None => BuildArgs::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_builds() {
        let cli = Cli::try_parse_from(["mdblog"]).unwrap();
        assert!(cli.command.is_none());
        let args = cli.build_args();
        assert!(!args.clean);
        assert_eq!(args.minify, None);
        assert_eq!(cli.config, PathBuf::from("mdblog.toml"));
    }

    #[test]
    fn test_build_flags() {
        let cli = Cli::try_parse_from(["mdblog", "-o", "site", "build", "--clean", "--minify"]).unwrap();
        let args = cli.build_args();
        assert!(args.clean);
        assert_eq!(args.minify, Some(true));
        assert_eq!(cli.output, Some(PathBuf::from("site")));
    }

    #[test]
    fn test_minify_explicit_false() {
        let cli = Cli::try_parse_from(["mdblog", "build", "--minify", "false"]).unwrap();
        assert_eq!(cli.build_args().minify, Some(false));
    }
}
