use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use session_config::SessionConfig;
use storage_config::StorageConfig;

use crate::consts::{APP_DIRECTORY_NAME, CONFIG_FILE_NAME};

pub mod session_config;
pub mod storage_config;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Loads the configuration and writes it back with every default filled
    /// in, so that the available settings are discoverable in the file.
    pub fn read_or_create(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            info!("Loading configuration from '{}'", path.display());
            Self::load_from_file(path)?
        } else {
            Self::default()
        };

        config.write(path)?;
        info!("Updated configuration at '{}'", path.display());

        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!(
                "Cannot load configuration from disk from {}",
                path.display()
            )
        })?;

        let config = serde_yaml::from_str(&contents).context("Failed to parse configuration")?;

        Ok(config)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let contents = serde_yaml::to_string(&self).context("Failed to serialize configuration")?;

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create configuration directory {}", parent.display())
            })?;
        }

        fs::write(path, contents).context("Failed to write configuration to disk")
    }
}

/// `$HOME/.powerEdit`, or `.powerEdit` in the working directory when there is
/// no home to speak of.
pub fn app_directory() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || {
            warn!("HOME is not set, keeping {APP_DIRECTORY_NAME} in the working directory");
            PathBuf::from(APP_DIRECTORY_NAME)
        },
        |home| PathBuf::from(home).join(APP_DIRECTORY_NAME),
    )
}

pub fn default_config_path() -> PathBuf { app_directory().join(CONFIG_FILE_NAME) }

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use word_align::BuiltinNormalizer;

    use super::*;

    #[test]
    fn missing_configuration_is_created_with_defaults() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join("nested").join(CONFIG_FILE_NAME);

        let config = Config::read_or_create(&path).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(Config::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn partial_configuration_is_completed() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "session:\n  normalizer: exact\n").unwrap();

        let config = Config::read_or_create(&path).unwrap();

        assert_eq!(config.session.normalizer, BuiltinNormalizer::Exact);
        assert_eq!(config.session.context_radius, SessionConfig::default().context_radius);
        assert_eq!(config.storage, StorageConfig::default());

        let rewritten = fs::read_to_string(&path).unwrap();
        assert!(rewritten.contains("context_radius"));
        assert!(rewritten.contains("jobs_directory"));
    }

    #[test]
    fn unknown_normalizer_is_rejected() {
        let directory = tempfile::tempdir().unwrap();
        let path = directory.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "session:\n  normalizer: shouting\n").unwrap();

        assert!(Config::read_or_create(&path).is_err());
    }
}
