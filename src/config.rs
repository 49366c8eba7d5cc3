//! Deployment configuration.
//!
//! Loaded from `--config <path>` when given, else from
//! `~/.sealog-import/config.toml` when that exists. Falls back to the
//! shoreside server's layout otherwise.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{key} is empty in {}", .path.display())]
    Empty { path: PathBuf, key: &'static str },
}

pub type Result<T> = core::result::Result<T, ConfigError>;

/// Where copied camera images come from and go to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Directory the copy script runs against, relative to the script.
    pub source_dir: String,

    /// Root of the shoreside image tree. Lowerings are filed beneath it.
    pub dest_dir_root: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: "../SuliusCam".to_string(),
            dest_dir_root: "/home/sealog/sealog-files-jason/images".to_string(),
        }
    }
}

impl Config {
    /// Resolve configuration for this run.
    ///
    /// An explicit path must exist. The default path is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from a TOML file. Keys left out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        for (key, value) in [
            ("source-dir", &config.source_dir),
            ("dest-dir-root", &config.dest_dir_root),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Empty {
                    path: path.to_path_buf(),
                    key,
                });
            }
        }

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply command-line overrides on top of loaded values.
    #[must_use]
    pub fn with_overrides(
        mut self,
        source_dir: Option<String>,
        dest_dir_root: Option<String>,
    ) -> Self {
        if let Some(dir) = source_dir {
            self.source_dir = dir;
        }
        if let Some(dir) = dest_dir_root {
            self.dest_dir_root = dir;
        }
        self
    }

    /// The default config file path: `~/.sealog-import/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".sealog-import").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_match_shoreside_layout() {
        let config = Config::default();
        assert_eq!(config.source_dir, "../SuliusCam");
        assert_eq!(config.dest_dir_root, "/home/sealog/sealog-files-jason/images");
    }

    #[test]
    fn load_full_config() {
        let (_dir, path) = write_config(
            "source-dir = \"/mnt/usb/SuliusCam\"\n\
             dest-dir-root = \"/data/sealog/images\"\n",
        );
        let config = Config::load(&path).unwrap();

        assert_eq!(config.source_dir, "/mnt/usb/SuliusCam");
        assert_eq!(config.dest_dir_root, "/data/sealog/images");
    }

    #[test]
    fn load_partial_config_keeps_defaults() {
        let (_dir, path) = write_config("dest-dir-root = \"/data/images\"\n");
        let config = Config::load(&path).unwrap();

        assert_eq!(config.source_dir, "../SuliusCam");
        assert_eq!(config.dest_dir_root, "/data/images");
    }

    #[test]
    fn load_empty_value_fails() {
        let (_dir, path) = write_config("source-dir = \"\"\n");
        let err = Config::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Empty { key: "source-dir", .. }));
    }

    #[test]
    fn load_invalid_toml_fails() {
        let (_dir, path) = write_config("source-dir = \n");
        let err = Config::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn resolve_explicit_missing_path_fails() {
        let dir = TempDir::new().unwrap();
        let err = Config::resolve(Some(&dir.path().join("missing.toml"))).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn overrides_replace_loaded_values() {
        let config = Config::default().with_overrides(Some("/src".into()), None);

        assert_eq!(config.source_dir, "/src");
        assert_eq!(config.dest_dir_root, "/home/sealog/sealog-files-jason/images");
    }
}
