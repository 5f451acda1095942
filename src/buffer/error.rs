use std::{error::Error, fmt, io};

/// Failures raised by byte sources.
#[derive(Debug)]
pub enum SourceError {
    /// The resolved start of a read lies outside the source.
    OutOfBounds { offset: i64, len: u64 },
    Io(io::Error),
}

impl From<io::Error> for SourceError {
    fn from(err: io::Error) -> Self {
        SourceError::Io(err)
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::OutOfBounds { offset, len } => {
                write!(f, "offset {offset} is outside a {len}-byte source")
            }
            SourceError::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SourceError::Io(err) => Some(err),
            SourceError::OutOfBounds { .. } => None,
        }
    }
}
