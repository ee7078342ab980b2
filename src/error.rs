//! Definition of quiver's error and result.

use std::io;
use std::path::PathBuf;
use std::sync::PoisonError;

use thiserror::Error;

/// The library's error enum.
#[derive(Debug, Error)]
pub enum QuiverError {
    /// An IO error occurred, with the offending path when it is known.
    #[error("an io error occurred on path {filepath:?}: '{io_error}'")]
    IoError {
        /// The underlying error.
        io_error: io::Error,
        /// File path of the problem, if known.
        filepath: Option<PathBuf>,
    },
    /// A query description could not be turned into a scorer tree.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    /// A thread holding a lock panicked and poisoned it.
    #[error("a thread holding a lock panicked and poisoned the lock")]
    Poisoned,
}

impl QuiverError {
    pub(crate) fn io_with_path(filepath: PathBuf, io_error: io::Error) -> QuiverError {
        QuiverError::IoError {
            io_error,
            filepath: Some(filepath),
        }
    }
}

impl From<io::Error> for QuiverError {
    fn from(io_error: io::Error) -> QuiverError {
        QuiverError::IoError {
            io_error,
            filepath: None,
        }
    }
}

impl<Guard> From<PoisonError<Guard>> for QuiverError {
    fn from(_: PoisonError<Guard>) -> QuiverError {
        QuiverError::Poisoned
    }
}
