use std::path::PathBuf;

use thiserror::Error;

/// Comparator errors.
///
/// A frame mismatch is not an error; it is reported through
/// [`FrameComparison`](crate::FrameComparison).
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: tiadiff_log::ParseError,
    },
    #[error("register lookup failed: {0}")]
    Register(#[from] tiadiff_tia::RegisterError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
