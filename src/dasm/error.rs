use std::{error::Error, fmt};

use crate::buffer::SourceError;

/// Failures that abort a decode run. An unrecognized instruction is not
/// among them: it decodes to an [`Insn`](super::Insn) without a template
/// and the cursor moves on.
#[derive(Debug)]
pub enum DecodeError {
    /// The byte source rejected a read.
    Source(SourceError),
    /// Fewer bytes remain at `offset` than the classified instruction
    /// length needs.
    Truncated {
        offset: u64,
        expect: usize,
        have: usize,
    },
}

impl From<SourceError> for DecodeError {
    fn from(err: SourceError) -> Self {
        DecodeError::Source(err)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Source(err) => write!(f, "byte source error: {err}"),
            DecodeError::Truncated { offset, expect, have } => write!(
                f,
                "truncated instruction at offset 0x{offset:08x}: classified as {expect} byte(s) but only {have} remain"
            ),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DecodeError::Source(err) => Some(err),
            DecodeError::Truncated { .. } => None,
        }
    }
}
