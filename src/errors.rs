use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a bootstrap run.
///
/// Only shell rc file access can fail the run. A subprocess that exits non-zero
/// is logged and the sequence carries on.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("could not determine the home directory")]
    HomeDirNotFound,

    #[error("failed to read {path}: {source}")]
    RcFileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to append to {path}: {source}")]
    RcFileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to lock {path}: {source}")]
    RcFileLock {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, BootstrapError>;
