//! core::config
//!
//! Repository configuration.
//!
//! # Loading
//!
//! Configuration lives at `<base>/repilot/config.toml` and is optional: an
//! absent file yields [`Config::default`]. A file that exists but does not
//! parse is an error - the same corrupt-state reasoning applied to the plan
//! sidecar. All fields are defaulted so partial files stay valid; unknown
//! keys are rejected.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file exists but is not valid.
    #[error("malformed config file {path}: {message}")]
    Malformed {
        /// Path of the config file.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}

/// Repository configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// Treat a progress marker that disagrees with the plan as fatal instead
    /// of declining silently. Off by default: a desync means the live rebase
    /// and the plan have parted ways, and the rebase itself is still Git's
    /// responsibility.
    pub strict_progress: bool,
}

impl Config {
    /// Load configuration from `path`.
    ///
    /// An absent file yields the defaults.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Io`] if an existing file cannot be read
    /// - [`ConfigError::Malformed`] if the contents fail parsing
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&text).map_err(|err| ConfigError::Malformed {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.strict_progress);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn strict_progress_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "strict_progress = true\n").unwrap();
        assert!(Config::load(&path).unwrap().strict_progress);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "strict_progress = \"yes\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "strict = true\n").unwrap();

        assert!(Config::load(&path).is_err());
    }
}
