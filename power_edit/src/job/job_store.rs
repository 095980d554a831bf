use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};
use log::{debug, error, info};

use super::{
    editing_job::{EditingJob, edition_file_name},
    side::Side,
};
use crate::{
    config::storage_config::StorageConfig,
    consts::JOB_FILE_EXTENSION,
    errors::{FailedWrite, PersistenceError},
};

/// Keeps job records under the jobs directory and every edition of their
/// texts under `<texts directory>/<job name>/`.
#[derive(Debug, Clone)]
pub struct JobStore {
    config: StorageConfig,
}

impl JobStore {
    pub fn new(config: StorageConfig) -> Self { Self { config } }

    /// Like [`JobStore::new`] but makes sure the directories exist.
    pub fn open(config: StorageConfig) -> Result<Self> {
        for directory in [&config.jobs_directory, &config.texts_directory] {
            fs::create_dir_all(directory).with_context(|| {
                format!("Failed to create storage directory {}", directory.display())
            })?;
        }

        Ok(Self::new(config))
    }

    /// Starts a job reconciling `editing_file` against `source_file`, copying
    /// both as edition 0. The originals are never written to.
    pub fn create(&self, editing_file: &Path, source_file: &Path) -> Result<EditingJob> {
        let editing_file = fs::canonicalize(editing_file)
            .with_context(|| format!("Cannot find the file to edit {}", editing_file.display()))?;
        let source_file = fs::canonicalize(source_file)
            .with_context(|| format!("Cannot find the source file {}", source_file.display()))?;

        let name = EditingJob::name_for(&editing_file, &source_file);
        if self.exists(&name) {
            bail!("Job '{name}' already exists, continue it with `power-edit resume {name}`");
        }

        let texts_directory = self.texts_directory(&name);
        fs::create_dir_all(&texts_directory).with_context(|| {
            format!("Failed to create texts directory {}", texts_directory.display())
        })?;

        let copies = Side::BOTH.map(|side| {
            texts_directory.join(edition_file_name(&editing_file, &source_file, side, 0))
        });
        for (original, copy) in [&editing_file, &source_file].into_iter().zip(&copies) {
            fs::copy(original, copy).with_context(|| {
                format!("Failed to copy {} to {}", original.display(), copy.display())
            })?;
        }

        let [latest_edit_file, latest_source_file] = copies;
        let job = EditingJob::new(editing_file, source_file, latest_edit_file, latest_source_file);
        self.save(&job)?;

        info!("Created job '{}'", job.name);
        Ok(job)
    }

    /// Loads a job by name, or from the path of its record when given one
    /// ending in `.yml`.
    pub fn load(&self, name_or_path: &str) -> Result<EditingJob> {
        let path = Path::new(name_or_path);
        let path = if path.extension().is_some_and(|extension| extension == JOB_FILE_EXTENSION)
            && path.exists()
        {
            path.to_path_buf()
        } else {
            self.job_path(name_or_path)
        };

        debug!("Loading job from '{}'", path.display());
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Couldn't locate job '{name_or_path}'"))?;

        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse job record {}", path.display()))
    }

    pub fn exists(&self, name: &str) -> bool { self.job_path(name).is_file() }

    /// Names of every stored job, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.config.jobs_directory).with_context(|| {
            format!(
                "Failed to read jobs directory {}",
                self.config.jobs_directory.display()
            )
        })?;

        let mut names = vec![];
        for entry in entries {
            let path = entry.context("Failed to read jobs directory entry")?.path();
            if path.extension().is_some_and(|extension| extension == JOB_FILE_EXTENSION) {
                if let Some(name) = path.file_stem() {
                    names.push(name.to_string_lossy().into_owned());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    pub fn save(&self, job: &EditingJob) -> Result<()> {
        let path = self.job_path(&job.name);
        let contents = serde_yaml::to_string(job).context("Failed to serialize job")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write job record {}", path.display()))
    }

    /// Writes both texts as the next edition and records where the session
    /// stopped.
    ///
    /// Best effort: a side that fails to be written doesn't stop the other
    /// from being written, and only sides that made it to disk have their
    /// latest file advanced. The job record is updated unless neither side
    /// could be written.
    pub fn save_edition(
        &self,
        job: &mut EditingJob,
        edit_text: &str,
        source_text: &str,
        edit_index: usize,
        source_index: usize,
    ) -> Result<(), PersistenceError> {
        let edition = job.latest_edition + 1;
        let texts_directory = self.texts_directory(&job.name);

        let mut failures = vec![];
        for (side, text) in Side::BOTH.into_iter().zip([edit_text, source_text]) {
            let path = texts_directory.join(job.edition_file_name(side, edition));

            match fs::write(&path, text) {
                Ok(()) => {
                    info!("Saved the {side} document to '{}'", path.display());
                    job.set_latest_file(side, path);
                }
                Err(source) => {
                    error!("Failed to save the {side} document to '{}': {source}", path.display());
                    failures.push(FailedWrite { side, path, source });
                }
            }
        }

        if failures.len() < Side::BOTH.len() {
            job.latest_edition = edition;
            job.last_editing_index = edit_index;
            job.last_source_index = source_index;

            if let Err(source) = self.save(job) {
                return Err(PersistenceError::JobRecord {
                    path: self.job_path(&job.name),
                    source,
                    documents: failures,
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(PersistenceError::Documents(failures))
        }
    }

    fn job_path(&self, name: &str) -> PathBuf {
        self.config
            .jobs_directory
            .join(format!("{name}.{JOB_FILE_EXTENSION}"))
    }

    fn texts_directory(&self, name: &str) -> PathBuf { self.config.texts_directory.join(name) }
}
