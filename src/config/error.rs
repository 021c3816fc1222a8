//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading `mdblog.toml`
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("cannot read config `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    /// Syntax error, wrong type or unknown field
    #[error("invalid config file")]
    Toml(#[from] toml::de::Error),

    /// Parsed fine but the values cannot be used for a build
    #[error("invalid config: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("mdblog.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        let display = format!("{io_err}");
        assert!(display.starts_with("cannot read config"));
        assert!(display.contains("mdblog.toml"));

        let validation_err = ConfigError::Validation("[build.index] must end with .html".into());
        assert_eq!(
            format!("{validation_err}"),
            "invalid config: [build.index] must end with .html"
        );
    }
}
