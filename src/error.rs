use std::io;

use thiserror::Error;

/// Everything that can go wrong while reading a text file. Errors don't carry the path; the
/// caller passed it in and failures get logged together with it.
#[derive(Debug, Error)]
pub enum Error {
    /// The file does not exist
    #[error("file not found ({0})")]
    NotFound(#[source] io::Error),
    /// The process is not allowed to open the file
    #[error("permission denied ({0})")]
    PermissionDenied(#[source] io::Error),
    /// A line is not valid UTF-8. `line` is 1-indexed.
    #[error("line {line} is not valid UTF-8")]
    Utf8 { line: usize },
    /// Any other I/O failure
    #[error("{0}")]
    Io(#[source] io::Error),
    /// The delimiter passed to a split operation is not a valid pattern
    #[error("invalid delimiter pattern: {0}")]
    InvalidDelimiter(#[from] regex::Error),
}

impl Error {
    /// Returns `true` if the file did not exist.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => Self::NotFound(e),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(e),
            _ => Self::Io(e),
        }
    }
}
