use std::{io, path::PathBuf};

use log::error;
use thiserror::Error;

use crate::job::side::Side;

#[derive(Error, Debug)]
pub enum PowerEditError {
    #[error("Initialisation error: {0:#}")]
    InitError(#[source] anyhow::Error),

    #[error("Job error: {0:#}")]
    JobError(#[source] anyhow::Error),

    #[error("Session error: {0:#}")]
    SessionError(#[source] anyhow::Error),

    #[error(transparent)]
    PersistenceError(#[from] PersistenceError),

    #[error("Filter error: {0:#}")]
    FilterError(#[source] anyhow::Error),
}

/// Saving an edition is best effort: whatever could be written stays written
/// and the failures are reported together.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Failed to save {}", describe_failed_writes(.0))]
    Documents(Vec<FailedWrite>),

    #[error(
        "Failed to update the job record at {}: {source:#}{}",
        .path.display(),
        describe_also_failed(.documents)
    )]
    JobRecord {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
        documents: Vec<FailedWrite>,
    },
}

#[derive(Error, Debug)]
#[error("the {side} document to '{}': {source}", .path.display())]
pub struct FailedWrite {
    pub side: Side,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

fn describe_failed_writes(failures: &[FailedWrite]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" and ")
}

fn describe_also_failed(failures: &[FailedWrite]) -> String {
    if failures.is_empty() {
        String::new()
    } else {
        format!("; also failed to save {}", describe_failed_writes(failures))
    }
}

pub const fn init_error(error: anyhow::Error) -> PowerEditError {
    PowerEditError::InitError(error)
}

pub fn job_error(error: anyhow::Error) -> PowerEditError {
    error!("Job error: {error:?}");
    PowerEditError::JobError(error)
}

pub fn session_error(error: anyhow::Error) -> PowerEditError {
    error!("Session error: {error:?}");
    PowerEditError::SessionError(error)
}

pub fn filter_error(error: anyhow::Error) -> PowerEditError {
    error!("Filter error: {error:?}");
    PowerEditError::FilterError(error)
}
