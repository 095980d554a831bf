use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised by documents and alignment sessions.
#[derive(Error, Debug)]
pub enum WordAlignError {
    /// A word index outside of `[0, len)` was passed to a document accessor.
    #[error("Word index {index} is out of range for a document of {len} words")]
    IndexOutOfRange { index: usize, len: usize },

    /// The text behind a document could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The operator typed something that is not part of the command
    /// vocabulary. Recovered by prompting again.
    #[error("Not a valid command: {0}")]
    MalformedCommand(String),

    #[error("Unknown normalizer '{0}', expected one of: exact, plain-quotes, letters-only")]
    UnknownNormalizer(String),

    /// The operator could not be asked for a resolution, e.g. stdin closed.
    #[error("Failed to read the operator's choice: {0}")]
    Operator(#[from] io::Error),
}

pub type Result<T, E = WordAlignError> = std::result::Result<T, E>;
