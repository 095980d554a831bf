use std::path::PathBuf;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    config::app_directory,
    consts::{JOBS_DIRECTORY_NAME, TEXTS_DIRECTORY_NAME},
};

/// Where job records and the successive editions of their texts are kept.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    #[serde(default = "default_jobs_directory")]
    pub jobs_directory: PathBuf,

    #[serde(default = "default_texts_directory")]
    pub texts_directory: PathBuf,
}

fn default_jobs_directory() -> PathBuf {
    let path = app_directory().join(JOBS_DIRECTORY_NAME);
    debug!("Using default jobs directory: {}", path.display());
    path
}

fn default_texts_directory() -> PathBuf {
    let path = app_directory().join(TEXTS_DIRECTORY_NAME);
    debug!("Using default texts directory: {}", path.display());
    path
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            jobs_directory: default_jobs_directory(),
            texts_directory: default_texts_directory(),
        }
    }
}
