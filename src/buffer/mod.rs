//! Random-access byte sources feeding the decoder.

mod error;
mod file;

pub use error::SourceError;
pub use file::FileBuffer;

/// Random access over a finite run of bytes. Non-negative offsets address
/// from the start of the source; negative offsets address from its end, so
/// `-4` names the last four bytes.
pub trait ByteSource {
    /// Total length of the source in bytes.
    fn len(&mut self) -> Result<u64, SourceError>;

    /// Reads up to `buf.len()` bytes at `offset` and returns how many were
    /// read. A read whose resolved start lies outside the source is an
    /// error, never clamped; a read that starts in bounds but runs off the
    /// end returns the available prefix.
    fn read_at(&mut self, offset: i64, buf: &mut [u8]) -> Result<usize, SourceError>;
}

/// Resolves a possibly end-relative offset against a source of `len` bytes.
pub(crate) fn resolve_offset(offset: i64, len: u64) -> Result<u64, SourceError> {
    let resolved = if offset >= 0 {
        offset as u64
    } else {
        let back = offset.unsigned_abs();
        if back > len {
            return Err(SourceError::OutOfBounds { offset, len });
        }
        len - back
    };
    if resolved > len {
        return Err(SourceError::OutOfBounds { offset, len });
    }
    Ok(resolved)
}

impl ByteSource for &[u8] {
    fn len(&mut self) -> Result<u64, SourceError> {
        Ok(<[u8]>::len(*self) as u64)
    }

    fn read_at(&mut self, offset: i64, buf: &mut [u8]) -> Result<usize, SourceError> {
        let data: &[u8] = *self;
        let start = resolve_offset(offset, data.len() as u64)? as usize;
        let count = buf.len().min(data.len() - start);
        buf[..count].copy_from_slice(&data[start..start + count]);
        Ok(count)
    }
}
